use std::collections::BTreeMap;

use anyhow::{bail, Result};
use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::store::ResumeStore;

/// In-memory resume store. Used by tests; the `BTreeMap` gives the same
/// filename-sorted listing as `FsStore`.
#[derive(Default)]
pub struct MemoryStore {
    files: Mutex<BTreeMap<String, Vec<u8>>>,
}

#[async_trait]
impl ResumeStore for MemoryStore {
    async fn list(&self) -> Result<Vec<String>> {
        Ok(self.files.lock().await.keys().cloned().collect())
    }

    async fn read(&self, name: &str) -> Result<Vec<u8>> {
        match self.files.lock().await.get(name) {
            Some(bytes) => Ok(bytes.clone()),
            None => bail!("no such file {name:?}"),
        }
    }

    async fn write(&self, name: &str, bytes: &[u8]) -> Result<()> {
        self.files
            .lock()
            .await
            .insert(name.to_string(), bytes.to_vec());
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<bool> {
        Ok(self.files.lock().await.remove(name).is_some())
    }
}
