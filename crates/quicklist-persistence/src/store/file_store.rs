use crate::store::atomic_writer::AtomicWriter;
use crate::traits::KeyValueStore;
use async_trait::async_trait;
use quicklist_core::{QuicklistError, QuicklistResult};
use std::path::{Path, PathBuf};

/// Key-value store keeping one `<key>.json` file per key under a root directory
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File backing `key`. Keys are restricted so they cannot escape the root.
    pub fn path_for(&self, key: &str) -> QuicklistResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(QuicklistError::Validation(format!(
                "Invalid storage key: {:?}",
                key
            )));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> QuicklistResult<Option<Vec<u8>>> {
        let path = self.path_for(key)?;
        AtomicWriter::read_optional(&path).await
    }

    async fn set(&self, key: &str, value: &[u8]) -> QuicklistResult<()> {
        let path = self.path_for(key)?;
        AtomicWriter::write_atomic(&path, value).await?;
        tracing::info!("Saved {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    async fn remove(&self, key: &str) -> QuicklistResult<()> {
        let path = self.path_for(key)?;
        if AtomicWriter::remove_if_exists(&path).await? {
            tracing::info!("Removed {}", path.display());
        }
        Ok(())
    }
}
