use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Gallery image record.
///
/// `s3_key` locates the blob in the object store and `s3_url` is the public URL
/// derived from the bucket and key at upload time. Both are immutable once the
/// row exists. `is_active` is always `true` for rows created by this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Image {
    pub id: i64,
    pub filename: String,
    pub s3_key: String,
    pub s3_url: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

/// Fields supplied when inserting a new image row. The id, creation time and
/// active flag are assigned by the metadata store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewImage {
    pub filename: String,
    pub s3_key: String,
    pub s3_url: String,
    pub category: String,
}

/// Response body for a successful upload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadImageResponse {
    pub message: String,
    pub image: Image,
}

/// Plain acknowledgement body (`{"message": "..."}`)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
