use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use tracing::info;

use crate::store::ResumeStore;

/// Filesystem-backed resume store: one flat directory, filename is the key.
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Creates the store, making the root directory if it does not exist.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&root)
            .await
            .with_context(|| format!("failed to create upload directory {}", root.display()))?;
        info!("Upload directory ready at {}", root.display());
        Ok(Self { root })
    }

    /// Resolves a filename inside the root. The namespace is flat: names
    /// carrying path separators or directory references are rejected.
    fn path_for(&self, name: &str) -> Result<PathBuf> {
        if name.is_empty() || name.contains('/') || name.contains('\\') || name == "." || name == ".."
        {
            bail!("invalid filename {name:?}");
        }
        Ok(self.root.join(name))
    }
}

#[async_trait]
impl ResumeStore for FsStore {
    async fn list(&self) -> Result<Vec<String>> {
        let mut dir = tokio::fs::read_dir(&self.root)
            .await
            .with_context(|| format!("failed to list {}", self.root.display()))?;

        let mut names = Vec::new();
        while let Some(entry) = dir.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }

        // read_dir order is platform-defined; sort so every caller sees the
        // same view and score ties come back in filename order.
        names.sort();
        Ok(names)
    }

    async fn read(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.path_for(name)?;
        tokio::fs::read(&path)
            .await
            .with_context(|| format!("failed to read {name}"))
    }

    async fn write(&self, name: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path_for(name)?;
        tokio::fs::write(&path, bytes)
            .await
            .with_context(|| format!("failed to write {name}"))
    }

    async fn delete(&self, name: &str) -> Result<bool> {
        let path = self.path_for(name)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e).with_context(|| format!("failed to delete {name}")),
        }
    }
}
