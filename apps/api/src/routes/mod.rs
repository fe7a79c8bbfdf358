pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::resumes::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/resumes",
            get(handlers::handle_list).post(handlers::handle_upload),
        )
        .route("/api/v1/resumes/filter", post(handlers::handle_filter))
        .route("/api/v1/resumes/:filename", delete(handlers::handle_delete))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::store::MemoryStore;

    fn test_state() -> AppState {
        AppState {
            store: Arc::new(MemoryStore::default()),
            config: Config {
                upload_dir: "uploads".to_string(),
                port: 0,
                rust_log: "info".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let app = build_router(test_state());
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_filter_with_empty_keywords_is_rejected() {
        let app = build_router(test_state());
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/resumes/filter")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"keywords": []}"#))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_of_missing_resume_is_not_found() {
        let app = build_router(test_state());
        let request = Request::builder()
            .method("DELETE")
            .uri("/api/v1/resumes/ghost.pdf")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_on_empty_store_returns_ok() {
        let app = build_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/resumes")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
