//! Axum route handlers for the Resume API: upload, list, filter, delete.

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::resumes::extract::{extract_text, DocumentFormat};
use crate::resumes::scoring::search_keywords;
use crate::state::AppState;
use crate::store::ResumeStore;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct FilterRequest {
    pub keywords: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub files: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub resumes: Vec<String>,
    pub count: usize,
}

/// One stored document that matched at least one keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeMatch {
    pub filename: String,
    pub matched_keywords: Vec<String>,
    pub score: usize,
}

#[derive(Debug, Serialize)]
pub struct FilterResponse {
    pub message: String,
    pub matched_resumes: Vec<ResumeMatch>,
    pub total_resumes: usize,
    pub keywords_searched: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes
///
/// Multipart upload of one or more resume files. The whole batch is validated
/// before any write: one disallowed extension rejects everything.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut files: Vec<(String, Bytes)> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart request: {e}")))?
    {
        // Fields without a filename are not file uploads; skip them.
        let Some(filename) = field.file_name().map(str::to_owned) else {
            continue;
        };
        let bytes = field.bytes().await.map_err(|e| {
            AppError::Validation(format!("Failed to read uploaded file {filename}: {e}"))
        })?;
        files.push((filename, bytes));
    }

    let names: Vec<String> = files.iter().map(|(name, _)| name.clone()).collect();
    validate_batch(&names)?;

    for (name, bytes) in &files {
        state
            .store
            .write(name, bytes)
            .await
            .map_err(|e| AppError::Storage {
                filename: name.clone(),
                source: e,
            })?;
    }

    info!("Stored {} resume(s)", files.len());

    Ok(Json(UploadResponse {
        message: "Resumes uploaded successfully".to_string(),
        count: names.len(),
        files: names,
    }))
}

/// GET /api/v1/resumes
pub async fn handle_list(State(state): State<AppState>) -> Result<Json<ListResponse>, AppError> {
    let resumes = list_resumes(state.store.as_ref()).await?;
    Ok(Json(ListResponse {
        count: resumes.len(),
        resumes,
    }))
}

/// POST /api/v1/resumes/filter
///
/// Scores every stored resume against the keyword list and returns the
/// matches sorted by score, highest first.
pub async fn handle_filter(
    State(state): State<AppState>,
    Json(request): Json<FilterRequest>,
) -> Result<Json<FilterResponse>, AppError> {
    if request.keywords.is_empty() {
        return Err(AppError::Validation("No keywords provided".to_string()));
    }

    let outcome = filter_resumes(state.store.as_ref(), &request.keywords).await?;

    let message = if outcome.total_resumes == 0 {
        "No resumes found".to_string()
    } else {
        format!("Found {} matching resumes", outcome.matched.len())
    };

    Ok(Json(FilterResponse {
        message,
        matched_resumes: outcome.matched,
        total_resumes: outcome.total_resumes,
        keywords_searched: request.keywords,
    }))
}

/// DELETE /api/v1/resumes/:filename
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let removed = state
        .store
        .delete(&filename)
        .await
        .map_err(|e| AppError::Storage {
            filename: filename.clone(),
            source: e,
        })?;

    if !removed {
        return Err(AppError::NotFound("Resume not found".to_string()));
    }

    info!("Deleted resume {filename}");
    Ok(Json(DeleteResponse {
        message: format!("Resume {filename} deleted successfully"),
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Core pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Result of a filter pass over the whole store.
pub struct FilterOutcome {
    pub matched: Vec<ResumeMatch>,
    pub total_resumes: usize,
}

/// Rejects the batch unless it is non-empty and every filename carries an
/// allowed extension. Runs before anything is persisted.
fn validate_batch(names: &[String]) -> Result<(), AppError> {
    if names.is_empty() {
        return Err(AppError::Validation("No files provided".to_string()));
    }
    for name in names {
        if DocumentFormat::from_filename(name).is_none() {
            return Err(AppError::Validation(format!(
                "File {name} has invalid extension. Only PDF and DOCX allowed."
            )));
        }
    }
    Ok(())
}

/// Stored filenames with an allowed extension, in the store's listing order.
async fn list_resumes(store: &dyn ResumeStore) -> Result<Vec<String>, AppError> {
    let names = store.list().await?;
    Ok(names
        .into_iter()
        .filter(|name| DocumentFormat::from_filename(name).is_some())
        .collect())
}

/// Extracts and scores every stored resume, keeping only documents with at
/// least one keyword match. A document whose bytes cannot be read or parsed
/// contributes no match; the failure is logged and the pass continues.
pub async fn filter_resumes(
    store: &dyn ResumeStore,
    keywords: &[String],
) -> Result<FilterOutcome, AppError> {
    let resumes = list_resumes(store).await?;

    let mut matched = Vec::new();
    for filename in &resumes {
        let Some(format) = DocumentFormat::from_filename(filename) else {
            continue;
        };
        let bytes = match store.read(filename).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Skipping unreadable resume {filename}: {e:#}");
                continue;
            }
        };
        let Some(text) = extract_text(&bytes, format) else {
            warn!("Skipping resume {filename}: text extraction failed");
            continue;
        };

        let result = search_keywords(&text, keywords);
        if result.score > 0 {
            matched.push(ResumeMatch {
                filename: filename.clone(),
                matched_keywords: result.matched_keywords,
                score: result.score,
            });
        }
    }

    // Stable sort: equal scores keep the store's filename-ordered listing.
    matched.sort_by(|a, b| b.score.cmp(&a.score));

    Ok(FilterOutcome {
        matched,
        total_resumes: resumes.len(),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
