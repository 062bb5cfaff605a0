//! Multipart form parsing for image uploads

use crate::error::HttpAppError;
use axum::extract::Multipart;
use bytes::Bytes;
use gallery_core::AppError;

/// Fields of the admin upload form.
#[derive(Debug)]
pub struct UploadForm {
    pub data: Bytes,
    pub filename: String,
    pub category: String,
}

/// Extract the `file` and `category` fields from a multipart form.
/// Only one field named "file" is accepted; multiple file fields are rejected.
pub async fn extract_upload_form(mut multipart: Multipart) -> Result<UploadForm, HttpAppError> {
    let mut file: Option<(Bytes, String)> = None;
    let mut category = String::new();

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        match field_name.as_str() {
            "file" => {
                if file.is_some() {
                    return Err(AppError::BadRequest(
                        "Multiple file fields are not allowed; send exactly one field named 'file'"
                            .to_string(),
                    )
                    .into());
                }
                let filename = field.file_name().map(|s| s.to_string()).unwrap_or_default();
                let data = field.bytes().await?;
                file = Some((data, filename));
            }
            "category" => {
                category = field.text().await?;
            }
            _ => {}
        }
    }

    let (data, filename) =
        file.ok_or_else(|| AppError::BadRequest("No file provided".to_string()))?;

    Ok(UploadForm {
        data,
        filename,
        category,
    })
}
