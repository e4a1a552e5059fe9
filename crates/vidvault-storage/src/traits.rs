//! Storage abstraction trait
//!
//! This module defines the Storage trait the gateway talks to. Handlers only ever see
//! an `Arc<dyn Storage>`, so the storage root is injected rather than hard-coded.

use bytes::Bytes;
use futures::stream::BoxStream;
use std::path::{Path, PathBuf};
use thiserror::Error;

use async_trait::async_trait;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Upload exceeds limit of {limit} bytes")]
    SizeLimitExceeded { limit: u64 },

    #[error("Upload body could not be read: {0}")]
    InvalidBody(String),

    #[error("Listing failed: {0}")]
    ListFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Incoming upload body, chunk by chunk.
pub type ByteStream<'a> = BoxStream<'a, Result<Bytes, StorageError>>;

/// Storage abstraction trait
///
/// Files are addressed by their stored name only. Callers are expected to pass names
/// produced by [`crate::derive_stored_name`] or checked with [`crate::validate_name`];
/// implementations validate again before touching the filesystem.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Write `body` to `name`, replacing any existing file of that name.
    ///
    /// Returns the number of bytes written. If the body yields more than `max_bytes`
    /// the transfer stops with [`StorageError::SizeLimitExceeded`]; on any failure the
    /// partially written file is removed.
    async fn upload_stream<'a>(
        &self,
        name: &str,
        max_bytes: u64,
        body: ByteStream<'a>,
    ) -> StorageResult<u64>;

    /// Names of every entry under the storage root, in directory order.
    async fn list(&self) -> StorageResult<Vec<String>>;

    /// Remove `name`. Missing files are an error.
    async fn delete(&self, name: &str) -> StorageResult<()>;

    /// Filesystem path backing `name`, for static serving.
    fn file_path(&self, name: &str) -> StorageResult<PathBuf>;

    /// The storage root.
    fn root(&self) -> &Path;
}
