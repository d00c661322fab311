use quicklist_core::QuicklistResult;
use std::path::Path;
use tokio::fs;

/// Write-to-temp-file then rename, so readers never see a half-written file
pub struct AtomicWriter;

impl AtomicWriter {
    /// Write `data` to `path`, creating missing parent directories
    pub async fn write_atomic(path: &Path, data: &[u8]) -> QuicklistResult<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).await?;

        // Temp file in the same directory keeps the rename on one filesystem
        let temp_file = tempfile::NamedTempFile::new_in(parent)?;
        fs::write(temp_file.path(), data).await?;
        temp_file.persist(path).map_err(|e| e.error)?;

        tracing::debug!("Atomically wrote {} bytes to {}", data.len(), path.display());
        Ok(())
    }

    /// Read a whole file, `None` when it does not exist
    pub async fn read_optional(path: &Path) -> QuicklistResult<Option<Vec<u8>>> {
        match fs::read(path).await {
            Ok(data) => {
                tracing::debug!("Read {} bytes from {}", data.len(), path.display());
                Ok(Some(data))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Delete a file, ignoring a file that is already gone
    pub async fn remove_if_exists(path: &Path) -> QuicklistResult<bool> {
        match fs::remove_file(path).await {
            Ok(()) => {
                tracing::debug!("Removed {}", path.display());
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
