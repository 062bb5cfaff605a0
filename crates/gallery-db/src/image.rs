use gallery_core::{
    models::{Image, NewImage},
    AppError,
};
use sqlx::{PgPool, Postgres};

const LIST_ACTIVE: &str = r#"
    SELECT id, filename, s3_key, s3_url, category, created_at, is_active
    FROM images
    WHERE is_active = TRUE
    ORDER BY created_at DESC, id DESC
"#;

const LIST_ACTIVE_BY_CATEGORY: &str = r#"
    SELECT id, filename, s3_key, s3_url, category, created_at, is_active
    FROM images
    WHERE is_active = TRUE AND category = $1
    ORDER BY created_at DESC, id DESC
"#;

/// Trait for image metadata operations
/// This abstracts the database implementation (PostgreSQL or in-memory)
#[async_trait::async_trait]
pub trait ImageStore: Send + Sync {
    /// Active images, newest first. `None` lists every category.
    async fn list_active(&self, category: Option<&str>) -> Result<Vec<Image>, AppError>;

    /// Insert a new active row and return it with its generated id and timestamp.
    async fn insert(&self, image: NewImage) -> Result<Image, AppError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Image>, AppError>;

    /// Returns whether a row was removed.
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Connectivity probe
    async fn ping(&self) -> Result<(), AppError>;
}

/// Repository for the `images` table
#[derive(Clone)]
pub struct ImageRepository {
    pool: PgPool,
}

impl ImageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ImageStore for ImageRepository {
    #[tracing::instrument(skip(self), fields(db.table = "images", db.operation = "select"))]
    async fn list_active(&self, category: Option<&str>) -> Result<Vec<Image>, AppError> {
        let images = match category {
            Some(category) => {
                sqlx::query_as::<Postgres, Image>(LIST_ACTIVE_BY_CATEGORY)
                    .bind(category)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                sqlx::query_as::<Postgres, Image>(LIST_ACTIVE)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(images)
    }

    #[tracing::instrument(
        skip(self, image),
        fields(db.table = "images", db.operation = "insert", s3_key = %image.s3_key)
    )]
    async fn insert(&self, image: NewImage) -> Result<Image, AppError> {
        let image = sqlx::query_as::<Postgres, Image>(
            r#"
            INSERT INTO images (filename, s3_key, s3_url, category)
            VALUES ($1, $2, $3, $4)
            RETURNING id, filename, s3_key, s3_url, category, created_at, is_active
            "#,
        )
        .bind(&image.filename)
        .bind(&image.s3_key)
        .bind(&image.s3_url)
        .bind(&image.category)
        .fetch_one(&self.pool)
        .await?;

        Ok(image)
    }

    #[tracing::instrument(skip(self), fields(db.table = "images", db.operation = "select", db.record_id = %id))]
    async fn get_by_id(&self, id: i64) -> Result<Option<Image>, AppError> {
        let image = sqlx::query_as::<Postgres, Image>(
            "SELECT id, filename, s3_key, s3_url, category, created_at, is_active FROM images WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(image)
    }

    #[tracing::instrument(skip(self), fields(db.table = "images", db.operation = "delete", db.record_id = %id))]
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM images WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
