use std::sync::Arc;

use axum::{
    extract::multipart::MultipartRejection,
    extract::rejection::PathRejection,
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use gallery_core::models::{Image, MessageResponse, UploadImageResponse};
use gallery_core::AppError;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::auth::AdminContext;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::extract_upload_form;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListImagesQuery {
    /// Only return images in this category
    pub category: Option<String>,
}

/// List active images, newest first
#[utoipa::path(
    get,
    path = "/api/images",
    tag = "images",
    params(ListImagesQuery),
    responses(
        (status = 200, description = "Active images", body = Vec<Image>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_images(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListImagesQuery>,
) -> Result<Json<Vec<Image>>, HttpAppError> {
    let images = state.images.list(query.category.as_deref()).await?;
    Ok(Json(images))
}

/// Upload image handler
///
/// Accepts a multipart form with a `file` field (jpg, jpeg, png or webp, at
/// most 10 MB) and a non-empty `category` field.
#[utoipa::path(
    post,
    path = "/api/admin/images",
    tag = "images",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Image uploaded successfully", body = UploadImageResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(
    skip(state, multipart),
    fields(admin = %admin.username, operation = "upload_image")
)]
pub async fn upload_image(
    State(state): State<Arc<AppState>>,
    admin: AdminContext,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<UploadImageResponse>), HttpAppError> {
    let form = extract_upload_form(multipart?).await?;

    let response = state
        .images
        .upload(form.data, &form.filename, &form.category)
        .await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Delete an image and its stored file
#[utoipa::path(
    delete,
    path = "/api/admin/images/{id}",
    tag = "images",
    params(
        ("id" = i64, Path, description = "Image ID")
    ),
    responses(
        (status = 200, description = "Image deleted successfully", body = MessageResponse),
        (status = 400, description = "Invalid image ID", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Image not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip(state, id), fields(admin = %admin.username, operation = "delete_image"))]
pub async fn delete_image(
    State(state): State<Arc<AppState>>,
    admin: AdminContext,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, HttpAppError> {
    let Path(id) = id.map_err(|_| AppError::InvalidInput("Invalid image ID".to_string()))?;
    let response = state.images.delete(id).await?;
    Ok(Json(response))
}
