use crate::{ObjectStorage, Storage, StorageBackend, StorageResult, UnavailableStorage};
use gallery_core::Config;
use std::sync::Arc;

/// Create a storage backend based on configuration.
///
/// A missing S3 bucket is not fatal: the returned backend fails each blob
/// operation instead, so the rest of the API stays up.
pub fn create_storage(config: &Config) -> StorageResult<Arc<dyn Storage>> {
    let settings = &config.storage;

    match settings.backend {
        StorageBackend::S3 => match settings.bucket.clone() {
            Some(bucket) => {
                let storage =
                    ObjectStorage::s3(bucket, settings.region.clone(), settings.endpoint.clone())?;
                Ok(Arc::new(storage))
            }
            None => {
                tracing::warn!("S3_BUCKET_NAME not configured; uploads and deletes will fail");
                Ok(Arc::new(UnavailableStorage::new(
                    "S3_BUCKET_NAME not configured",
                )))
            }
        },
        StorageBackend::Memory => {
            let bucket = settings
                .bucket
                .clone()
                .unwrap_or_else(|| "gallery".to_string());
            tracing::info!(bucket = %bucket, "Using in-memory object storage");
            Ok(Arc::new(ObjectStorage::in_memory(bucket)))
        }
    }
}
