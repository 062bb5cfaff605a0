use crate::image::ImageStore;
use chrono::Utc;
use gallery_core::{
    models::{Image, NewImage},
    AppError,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct Rows {
    next_id: i64,
    images: BTreeMap<i64, Image>,
}

/// In-memory image metadata store.
///
/// Mirrors the Postgres table: sequence ids that are never reused and a
/// unique `s3_key`.
#[derive(Clone, Default)]
pub struct InMemoryImageRepository {
    rows: Arc<RwLock<Rows>>,
}

impl InMemoryImageRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows, active or not
    pub async fn len(&self) -> usize {
        self.rows.read().await.images.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait::async_trait]
impl ImageStore for InMemoryImageRepository {
    async fn list_active(&self, category: Option<&str>) -> Result<Vec<Image>, AppError> {
        let rows = self.rows.read().await;
        let mut images: Vec<Image> = rows
            .images
            .values()
            .filter(|image| image.is_active)
            .filter(|image| category.map_or(true, |c| image.category == c))
            .cloned()
            .collect();
        images.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(images)
    }

    async fn insert(&self, image: NewImage) -> Result<Image, AppError> {
        let mut rows = self.rows.write().await;
        if rows.images.values().any(|row| row.s3_key == image.s3_key) {
            return Err(AppError::Database(sqlx::Error::Protocol(format!(
                "duplicate key value violates unique constraint \"images_s3_key_key\": {}",
                image.s3_key
            ))));
        }

        rows.next_id += 1;
        let row = Image {
            id: rows.next_id,
            filename: image.filename,
            s3_key: image.s3_key,
            s3_url: image.s3_url,
            category: image.category,
            created_at: Utc::now(),
            is_active: true,
        };
        rows.images.insert(row.id, row.clone());
        Ok(row)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Image>, AppError> {
        Ok(self.rows.read().await.images.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.rows.write().await.images.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
