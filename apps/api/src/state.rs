use std::sync::Arc;

use crate::config::Config;
use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable resume store. Production: `FsStore`. Tests: `MemoryStore`.
    pub store: Arc<dyn ResumeStore>,
    /// Full configuration; kept on state for handlers that grow to need it.
    #[allow(dead_code)]
    pub config: Config,
}
