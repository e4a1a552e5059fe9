use crate::naming::validate_name;
use crate::traits::{ByteStream, Storage, StorageError, StorageResult};
use async_trait::async_trait;
use futures::StreamExt;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Local filesystem storage implementation
#[derive(Clone, Debug)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage instance, creating the storage root (and its parents)
    /// if it does not exist yet.
    ///
    /// # Arguments
    /// * `base_path` - Root directory for file storage (e.g., "/railway/data/uploads")
    pub async fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage { base_path })
    }

    /// Convert a stored name to its filesystem path.
    fn name_to_path(&self, name: &str) -> StorageResult<PathBuf> {
        validate_name(name)?;
        Ok(self.base_path.join(name))
    }

    /// Best-effort removal of a partially written upload.
    async fn discard_partial(&self, path: &Path) {
        if let Err(e) = fs::remove_file(path).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to remove partial upload"
                );
            }
        }
    }
}

/// Copy `body` into `file`, refusing to write past `max_bytes`.
async fn copy_limited(
    file: &mut fs::File,
    body: &mut ByteStream<'_>,
    max_bytes: u64,
    path: &Path,
) -> StorageResult<u64> {
    let mut written: u64 = 0;

    while let Some(chunk) = body.next().await {
        let chunk = chunk?;
        written = written.saturating_add(chunk.len() as u64);
        if written > max_bytes {
            return Err(StorageError::SizeLimitExceeded { limit: max_bytes });
        }
        file.write_all(&chunk).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;
    }

    file.flush().await.map_err(|e| {
        StorageError::UploadFailed(format!("Failed to flush file {}: {}", path.display(), e))
    })?;

    Ok(written)
}

#[async_trait]
impl Storage for LocalStorage {
    async fn upload_stream<'a>(
        &self,
        name: &str,
        max_bytes: u64,
        mut body: ByteStream<'a>,
    ) -> StorageResult<u64> {
        let path = self.name_to_path(name)?;
        let start = std::time::Instant::now();

        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        let bytes_copied = match copy_limited(&mut file, &mut body, max_bytes, &path).await {
            Ok(n) => n,
            Err(e) => {
                drop(file);
                self.discard_partial(&path).await;
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "Local storage stream upload aborted"
                );
                return Err(e);
            }
        };

        file.sync_all().await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        tracing::info!(
            path = %path.display(),
            name = %name,
            size_bytes = bytes_copied,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage stream upload successful"
        );

        Ok(bytes_copied)
    }

    async fn list(&self) -> StorageResult<Vec<String>> {
        let mut entries = fs::read_dir(&self.base_path).await.map_err(|e| {
            StorageError::ListFailed(format!(
                "Failed to read directory {}: {}",
                self.base_path.display(),
                e
            ))
        })?;

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| {
            StorageError::ListFailed(format!(
                "Failed to read entry in {}: {}",
                self.base_path.display(),
                e
            ))
        })? {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }

        tracing::debug!(
            path = %self.base_path.display(),
            count = names.len(),
            "Local storage listing successful"
        );

        Ok(names)
    }

    async fn delete(&self, name: &str) -> StorageResult<()> {
        let path = self.name_to_path(name)?;
        let start = std::time::Instant::now();

        fs::remove_file(&path).await.map_err(|e| {
            StorageError::DeleteFailed(format!("Failed to delete file {}: {}", path.display(), e))
        })?;

        tracing::info!(
            path = %path.display(),
            name = %name,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage delete successful"
        );

        Ok(())
    }

    fn file_path(&self, name: &str) -> StorageResult<PathBuf> {
        self.name_to_path(name)
    }

    fn root(&self) -> &Path {
        &self.base_path
    }
}
