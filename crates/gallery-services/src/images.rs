//! Image list, upload and delete workflows.
//!
//! Upload writes the blob before the row; delete removes the blob before the
//! row. A failure between the two steps can leave an orphaned blob (logged)
//! but never a row without its blob.

use crate::upload::{
    generate_filename, storage_key_for, validate_category, validate_extension, validate_file_size,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use gallery_core::models::{Image, MessageResponse, NewImage, UploadImageResponse};
use gallery_core::AppError;
use gallery_db::ImageStore;
use gallery_storage::{content_type_for_extension, Storage, StorageError};
use std::sync::Arc;

pub const UPLOAD_SUCCESS_MESSAGE: &str = "Image uploaded successfully";
pub const DELETE_SUCCESS_MESSAGE: &str = "Image deleted successfully";

/// Orchestrates the object store and the metadata store.
#[derive(Clone)]
pub struct ImageService {
    images: Arc<dyn ImageStore>,
    storage: Arc<dyn Storage>,
}

impl ImageService {
    pub fn new(images: Arc<dyn ImageStore>, storage: Arc<dyn Storage>) -> Self {
        Self { images, storage }
    }

    /// Active images, newest first. An empty category means no filter.
    pub async fn list(&self, category: Option<&str>) -> Result<Vec<Image>, AppError> {
        let category = category.filter(|c| !c.is_empty());
        self.images.list_active(category).await
    }

    pub async fn upload(
        &self,
        data: Bytes,
        original_filename: &str,
        category: &str,
    ) -> Result<UploadImageResponse, AppError> {
        self.upload_at(data, original_filename, category, Utc::now())
            .await
    }

    /// Upload with an explicit upload-start time, used for the generated filename.
    #[tracing::instrument(
        skip(self, data),
        fields(size_bytes = data.len(), operation = "upload_image")
    )]
    pub async fn upload_at(
        &self,
        data: Bytes,
        original_filename: &str,
        category: &str,
        uploaded_at: DateTime<Utc>,
    ) -> Result<UploadImageResponse, AppError> {
        validate_category(category)?;
        let extension = validate_extension(original_filename)?;
        validate_file_size(data.len())?;

        let filename = generate_filename(uploaded_at, category, extension);
        let s3_key = storage_key_for(&filename);
        let content_type = content_type_for_extension(extension);

        let s3_url = self
            .storage
            .upload(&s3_key, data, content_type)
            .await
            .map_err(storage_error)?;

        let new_image = NewImage {
            filename,
            s3_key: s3_key.clone(),
            s3_url,
            category: category.to_string(),
        };

        let image = match self.images.insert(new_image).await {
            Ok(image) => image,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    s3_key = %s3_key,
                    "Image row insert failed after blob upload; blob is orphaned"
                );
                return Err(e);
            }
        };

        tracing::info!(
            image_id = image.id,
            s3_key = %image.s3_key,
            category = %image.category,
            "Image uploaded"
        );

        Ok(UploadImageResponse {
            message: UPLOAD_SUCCESS_MESSAGE.to_string(),
            image,
        })
    }

    #[tracing::instrument(skip(self), fields(operation = "delete_image"))]
    pub async fn delete(&self, id: i64) -> Result<MessageResponse, AppError> {
        let image = self
            .images
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Image not found".to_string()))?;

        self.storage
            .delete(&image.s3_key)
            .await
            .map_err(storage_error)?;

        let removed = match self.images.delete_by_id(id).await {
            Ok(removed) => removed,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    image_id = id,
                    s3_key = %image.s3_key,
                    "Image row delete failed after blob removal"
                );
                return Err(e);
            }
        };

        if !removed {
            return Err(AppError::NotFound("Image not found".to_string()));
        }

        tracing::info!(image_id = id, s3_key = %image.s3_key, "Image deleted");

        Ok(MessageResponse::new(DELETE_SUCCESS_MESSAGE))
    }

    /// Metadata store connectivity
    pub async fn ping(&self) -> Result<(), AppError> {
        self.images.ping().await
    }
}

/// Map object store failures onto the application taxonomy.
pub fn storage_error(err: StorageError) -> AppError {
    match err {
        StorageError::ConfigError(msg) => AppError::ServerMisconfigured(msg),
        other => AppError::Storage(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::TimeZone;
    use gallery_db::InMemoryImageRepository;
    use gallery_storage::{ObjectStorage, StorageBackend, StorageResult};
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// In-memory storage that counts calls and can be told to fail.
    #[derive(Default)]
    struct RecordingStorage {
        inner: Option<ObjectStorage>,
        uploads: AtomicUsize,
        deletes: AtomicUsize,
        fail_uploads: AtomicBool,
        fail_deletes: AtomicBool,
    }

    impl RecordingStorage {
        fn new() -> Self {
            Self {
                inner: Some(ObjectStorage::in_memory("gallery")),
                ..Default::default()
            }
        }

        fn inner(&self) -> &ObjectStorage {
            self.inner.as_ref().unwrap()
        }
    }

    #[async_trait]
    impl Storage for RecordingStorage {
        async fn upload(
            &self,
            storage_key: &str,
            data: Bytes,
            content_type: &str,
        ) -> StorageResult<String> {
            self.uploads.fetch_add(1, Ordering::SeqCst);
            if self.fail_uploads.load(Ordering::SeqCst) {
                return Err(StorageError::UploadFailed("connection reset".to_string()));
            }
            self.inner().upload(storage_key, data, content_type).await
        }

        async fn download(&self, storage_key: &str) -> StorageResult<Bytes> {
            self.inner().download(storage_key).await
        }

        async fn delete(&self, storage_key: &str) -> StorageResult<()> {
            self.deletes.fetch_add(1, Ordering::SeqCst);
            if self.fail_deletes.load(Ordering::SeqCst) {
                return Err(StorageError::DeleteFailed("access denied".to_string()));
            }
            self.inner().delete(storage_key).await
        }

        async fn exists(&self, storage_key: &str) -> StorageResult<bool> {
            self.inner().exists(storage_key).await
        }

        fn public_url(&self, storage_key: &str) -> String {
            self.inner().public_url(storage_key)
        }

        fn backend_type(&self) -> StorageBackend {
            StorageBackend::Memory
        }
    }

    fn service() -> (ImageService, Arc<InMemoryImageRepository>, Arc<RecordingStorage>) {
        let repo = Arc::new(InMemoryImageRepository::new());
        let storage = Arc::new(RecordingStorage::new());
        let service = ImageService::new(repo.clone(), storage.clone());
        (service, repo, storage)
    }

    fn png() -> Bytes {
        Bytes::from_static(b"\x89PNG\r\n\x1a\nfake")
    }

    #[tokio::test]
    async fn test_upload_then_list_round_trip() {
        let (service, _repo, storage) = service();
        let at = Utc.timestamp_opt(1_700_000_000, 0).unwrap();

        let response = service.upload_at(png(), "a.png", "veils", at).await.unwrap();
        assert_eq!(response.message, "Image uploaded successfully");
        assert_eq!(response.image.filename, "1700000000_veils.png");
        assert_eq!(response.image.s3_key, "images/1700000000_veils.png");
        assert_eq!(
            response.image.s3_url,
            "memory://gallery/images/1700000000_veils.png"
        );
        assert!(response.image.is_active);

        let listed = service.list(None).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].category, "veils");
        assert_eq!(storage.download(&listed[0].s3_key).await.unwrap(), png());
    }

    #[tokio::test]
    async fn test_list_filters_by_category_and_ignores_empty_filter() {
        let (service, _repo, _storage) = service();
        let at = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        service.upload_at(png(), "a.png", "veils", at).await.unwrap();
        service.upload_at(png(), "b.jpg", "gowns", at).await.unwrap();

        assert_eq!(service.list(None).await.unwrap().len(), 2);
        assert_eq!(service.list(Some("")).await.unwrap().len(), 2);

        let veils = service.list(Some("veils")).await.unwrap();
        assert_eq!(veils.len(), 1);
        assert_eq!(veils[0].category, "veils");
    }

    #[tokio::test]
    async fn test_invalid_extension_touches_nothing() {
        let (service, repo, storage) = service();
        let err = service.upload(png(), "a.gif", "veils").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert_eq!(storage.uploads.load(Ordering::SeqCst), 0);
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_empty_category_is_rejected() {
        let (service, _repo, storage) = service();
        let err = service.upload(png(), "a.png", "").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(ref m) if m == "Category is required"));
        assert_eq!(storage.uploads.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_oversized_payload_is_rejected() {
        let (service, _repo, storage) = service();
        let data = Bytes::from(vec![0u8; gallery_core::constants::MAX_UPLOAD_SIZE_BYTES + 1]);
        let err = service.upload(data, "a.png", "veils").await.unwrap_err();
        assert!(matches!(err, AppError::PayloadTooLarge(_)));
        assert_eq!(storage.uploads.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_storage_failure_creates_no_row() {
        let (service, repo, storage) = service();
        storage.fail_uploads.store(true, Ordering::SeqCst);
        let err = service.upload(png(), "a.png", "veils").await.unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_same_second_collision_keeps_existing_blob() {
        let (service, repo, storage) = service();
        let at = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let first = Bytes::from_static(b"\x89PNG\r\n\x1a\nfirst");
        let second = Bytes::from_static(b"\x89PNG\r\n\x1a\nsecond");
        let image = service
            .upload_at(first.clone(), "a.png", "veils", at)
            .await
            .unwrap()
            .image;

        // Same second and category: identical key.
        let err = service
            .upload_at(second, "b.png", "veils", at)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
        assert_eq!(repo.len().await, 1);
        assert_eq!(storage.download(&image.s3_key).await.unwrap(), first);
    }

    #[tokio::test]
    async fn test_insert_failure_leaves_orphaned_blob() {
        let (service, repo, storage) = service();
        let at = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let key = "images/1700000000_veils.png";

        // A row already claims the key but its blob is gone.
        repo.insert(NewImage {
            filename: "1700000000_veils.png".to_string(),
            s3_key: key.to_string(),
            s3_url: storage.public_url(key),
            category: "veils".to_string(),
        })
        .await
        .unwrap();

        let err = service.upload_at(png(), "a.png", "veils", at).await.unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
        assert_eq!(repo.len().await, 1);
        assert_eq!(storage.download(key).await.unwrap(), png());
    }

    #[tokio::test]
    async fn test_delete_removes_blob_and_row() {
        let (service, repo, storage) = service();
        let image = service.upload(png(), "a.png", "veils").await.unwrap().image;

        let response = service.delete(image.id).await.unwrap();
        assert_eq!(response.message, "Image deleted successfully");
        assert!(repo.is_empty().await);
        assert!(!storage.exists(&image.s3_key).await.unwrap());

        let err = service.delete(image.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_unknown_id_skips_storage() {
        let (service, _repo, storage) = service();
        let err = service.delete(999).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref m) if m == "Image not found"));
        assert_eq!(storage.deletes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_blob_delete_failure_keeps_row() {
        let (service, repo, storage) = service();
        let image = service.upload(png(), "a.png", "veils").await.unwrap().image;
        storage.fail_deletes.store(true, Ordering::SeqCst);

        let err = service.delete(image.id).await.unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
        assert!(repo.get_by_id(image.id).await.unwrap().is_some());
    }

    #[test]
    fn test_storage_config_error_maps_to_misconfigured() {
        let err = storage_error(StorageError::ConfigError("S3_BUCKET_NAME".to_string()));
        assert!(matches!(err, AppError::ServerMisconfigured(_)));
        let err = storage_error(StorageError::UploadFailed("boom".to_string()));
        assert!(matches!(err, AppError::Storage(_)));
    }
}
