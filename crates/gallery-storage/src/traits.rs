//! Storage abstraction trait

use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Object already exists: {0}")]
    AlreadyExists(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Object store client used by the image service.
///
/// Implementations must be safe for concurrent use; a single instance is
/// shared by every request.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Store `data` under `storage_key` and return the blob's public URL.
    ///
    /// The write is a single request: on error no object is left behind that a
    /// caller could later reference.
    async fn upload(&self, storage_key: &str, data: Bytes, content_type: &str)
        -> StorageResult<String>;

    /// Fetch a blob by its storage key
    async fn download(&self, storage_key: &str) -> StorageResult<Bytes>;

    /// Delete a blob by its storage key.
    ///
    /// Deleting a key that does not exist succeeds unless the backend reports
    /// an error.
    async fn delete(&self, storage_key: &str) -> StorageResult<()>;

    /// Check if a blob exists
    async fn exists(&self, storage_key: &str) -> StorageResult<bool>;

    /// Public URL for a storage key, derived from the bucket and key only
    fn public_url(&self, storage_key: &str) -> String;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
