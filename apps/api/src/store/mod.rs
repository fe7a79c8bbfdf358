//! Resume storage. A flat namespace of uploaded documents keyed by filename,
//! behind a trait so the filter pipeline can run against any backend.

pub mod fs;
pub mod memory;

pub use fs::FsStore;
pub use memory::MemoryStore;

use anyhow::Result;
use async_trait::async_trait;

/// Storage capability for uploaded resumes.
///
/// Carried in `AppState` as `Arc<dyn ResumeStore>`. Implementations are not
/// required to guard against concurrent access to the same filename; the last
/// writer wins on upload and a second delete observes not-found.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// Names of all stored documents, sorted by filename.
    async fn list(&self) -> Result<Vec<String>>;

    /// Raw bytes of the named document. Errors if the name is unknown.
    async fn read(&self, name: &str) -> Result<Vec<u8>>;

    /// Persists bytes under the given name, overwriting any existing document.
    async fn write(&self, name: &str, bytes: &[u8]) -> Result<()>;

    /// Removes the named document. Returns `false` if it was not present.
    async fn delete(&self, name: &str) -> Result<bool>;
}
