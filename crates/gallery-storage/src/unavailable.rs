use crate::traits::{Storage, StorageError, StorageResult};
use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;

/// Placeholder used when the bucket is not configured.
///
/// The server still starts so listing and login keep working; every blob
/// operation fails with [`StorageError::ConfigError`].
#[derive(Clone, Debug)]
pub struct UnavailableStorage {
    reason: String,
}

impl UnavailableStorage {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn error(&self) -> StorageError {
        StorageError::ConfigError(self.reason.clone())
    }
}

#[async_trait]
impl Storage for UnavailableStorage {
    async fn upload(&self, _storage_key: &str, _data: Bytes, _content_type: &str)
        -> StorageResult<String> {
        Err(self.error())
    }

    async fn download(&self, _storage_key: &str) -> StorageResult<Bytes> {
        Err(self.error())
    }

    async fn delete(&self, _storage_key: &str) -> StorageResult<()> {
        Err(self.error())
    }

    async fn exists(&self, _storage_key: &str) -> StorageResult<bool> {
        Err(self.error())
    }

    fn public_url(&self, storage_key: &str) -> String {
        storage_key.to_string()
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }
}
