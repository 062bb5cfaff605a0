use crate::keys::validate_key;
use crate::traits::{Storage, StorageError, StorageResult};
use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use object_store::aws::AmazonS3Builder;
use object_store::memory::InMemory;
use object_store::path::Path;
use object_store::Error as ObjectStoreError;
use object_store::{
    Attribute, Attributes, ObjectStore, ObjectStoreExt, PutMode, PutOptions, PutPayload,
    Result as ObjectResult,
};
use std::sync::Arc;
use std::time::Instant;

/// Image blob storage over any `object_store` backend.
///
/// Amazon S3 (or an S3-compatible endpoint) in deployments, an in-process
/// store in tests and local development.
#[derive(Clone)]
pub struct ObjectStorage {
    store: Arc<dyn ObjectStore>,
    bucket: String,
    endpoint_url: Option<String>,
    backend: StorageBackend,
}

impl ObjectStorage {
    /// Create an S3-backed store.
    ///
    /// # Arguments
    /// * `bucket` - S3 bucket name
    /// * `region` - AWS region
    /// * `endpoint_url` - Optional custom endpoint for S3-compatible providers
    ///   (e.g., "http://localhost:9000" for MinIO)
    ///
    /// Credentials come from the standard AWS environment variables.
    pub fn s3(bucket: String, region: String, endpoint_url: Option<String>) -> StorageResult<Self> {
        let mut builder = AmazonS3Builder::from_env()
            .with_region(region)
            .with_bucket_name(bucket.clone());

        if let Some(ref endpoint) = endpoint_url {
            let allow_http = endpoint.starts_with("http://");
            builder = builder
                .with_endpoint(endpoint.clone())
                .with_allow_http(allow_http);
        }

        let store = builder
            .build()
            .map_err(|e| StorageError::ConfigError(e.to_string()))?;

        Ok(ObjectStorage {
            store: Arc::new(store),
            bucket,
            endpoint_url,
            backend: StorageBackend::S3,
        })
    }

    /// Create a store that keeps blobs in process memory.
    pub fn in_memory(bucket: impl Into<String>) -> Self {
        ObjectStorage {
            store: Arc::new(InMemory::new()),
            bucket: bucket.into(),
            endpoint_url: None,
            backend: StorageBackend::Memory,
        }
    }

    /// Object location for a key, taken verbatim so the stored object name
    /// matches the key recorded in the metadata row.
    fn location(storage_key: &str) -> StorageResult<Path> {
        validate_key(storage_key)?;
        Path::parse(storage_key).map_err(|e| StorageError::InvalidKey(e.to_string()))
    }
}

#[async_trait]
impl Storage for ObjectStorage {
    async fn upload(
        &self,
        storage_key: &str,
        data: Bytes,
        content_type: &str,
    ) -> StorageResult<String> {
        let location = Self::location(storage_key)?;
        let size = data.len() as u64;
        let start = Instant::now();

        let mut attributes = Attributes::new();
        attributes.insert(Attribute::ContentType, content_type.to_string().into());
        // Never replace an object another row may already point at.
        let opts = PutOptions {
            mode: PutMode::Create,
            attributes,
            ..Default::default()
        };

        let result: ObjectResult<_> =
            ObjectStore::put_opts(self.store.as_ref(), &location, PutPayload::from(data), opts)
                .await;

        result.map_err(|e| match e {
            ObjectStoreError::AlreadyExists { .. } => {
                tracing::warn!(
                    bucket = %self.bucket,
                    key = %storage_key,
                    "Object upload rejected: key already exists"
                );
                StorageError::AlreadyExists(storage_key.to_string())
            }
            other => {
                tracing::error!(
                    error = %other,
                    bucket = %self.bucket,
                    key = %storage_key,
                    size_bytes = size,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "Object upload failed"
                );
                StorageError::UploadFailed(other.to_string())
            }
        })?;

        let url = self.public_url(storage_key);

        tracing::info!(
            bucket = %self.bucket,
            key = %storage_key,
            content_type = %content_type,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Object upload successful"
        );

        Ok(url)
    }

    async fn download(&self, storage_key: &str) -> StorageResult<Bytes> {
        let location = Self::location(storage_key)?;
        let start = Instant::now();

        let result: ObjectResult<_> = self.store.get(&location).await;

        let result = result.map_err(|e| match e {
            ObjectStoreError::NotFound { .. } => StorageError::NotFound(storage_key.to_string()),
            other => {
                tracing::error!(
                    error = %other,
                    bucket = %self.bucket,
                    key = %storage_key,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "Object download failed"
                );
                StorageError::DownloadFailed(other.to_string())
            }
        })?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| StorageError::DownloadFailed(e.to_string()))?;

        tracing::debug!(
            bucket = %self.bucket,
            key = %storage_key,
            size_bytes = bytes.len() as u64,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Object download successful"
        );

        Ok(bytes)
    }

    async fn delete(&self, storage_key: &str) -> StorageResult<()> {
        let location = Self::location(storage_key)?;
        let start = Instant::now();

        let result: ObjectResult<_> = self.store.delete(&location).await;

        match result {
            Ok(()) | Err(ObjectStoreError::NotFound { .. }) => {}
            Err(e) => {
                tracing::error!(
                    error = %e,
                    bucket = %self.bucket,
                    key = %storage_key,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "Object delete failed"
                );
                return Err(StorageError::DeleteFailed(e.to_string()));
            }
        }

        tracing::info!(
            bucket = %self.bucket,
            key = %storage_key,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Object delete successful"
        );

        Ok(())
    }

    async fn exists(&self, storage_key: &str) -> StorageResult<bool> {
        let location = Self::location(storage_key)?;
        match self.store.head(&location).await {
            Ok(_) => Ok(true),
            Err(ObjectStoreError::NotFound { .. }) => Ok(false),
            Err(e) => Err(StorageError::BackendError(e.to_string())),
        }
    }

    /// `https://{bucket}.s3.amazonaws.com/{key}` for AWS, path-style
    /// `{endpoint}/{bucket}/{key}` for custom endpoints.
    fn public_url(&self, storage_key: &str) -> String {
        match self.backend {
            StorageBackend::Memory => format!("memory://{}/{}", self.bucket, storage_key),
            StorageBackend::S3 => match self.endpoint_url {
                Some(ref endpoint) => format!(
                    "{}/{}/{}",
                    endpoint.trim_end_matches('/'),
                    self.bucket,
                    storage_key
                ),
                None => format!("https://{}.s3.amazonaws.com/{}", self.bucket, storage_key),
            },
        }
    }

    fn backend_type(&self) -> StorageBackend {
        self.backend
    }
}
