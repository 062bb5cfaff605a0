//! Upload validation and blob naming rules

use chrono::{DateTime, Utc};
use gallery_core::constants::{ALLOWED_IMAGE_EXTENSIONS, IMAGE_KEY_PREFIX, MAX_UPLOAD_SIZE_BYTES};
use gallery_core::AppError;

/// Extension of `filename` including the leading dot, as sent by the client.
///
/// Empty when the name has no `.`.
pub fn extension_of(filename: &str) -> &str {
    filename.rfind('.').map_or("", |idx| &filename[idx..])
}

pub fn validate_category(category: &str) -> Result<(), AppError> {
    if category.is_empty() {
        return Err(AppError::InvalidInput("Category is required".to_string()));
    }
    Ok(())
}

/// Validate the file extension (case-insensitive) and return it with its original casing.
pub fn validate_extension(filename: &str) -> Result<&str, AppError> {
    let extension = extension_of(filename);
    let lowered = extension.to_lowercase();

    if !ALLOWED_IMAGE_EXTENSIONS.contains(&lowered.as_str()) {
        return Err(AppError::InvalidInput(
            "Invalid file type. Only JPG, JPEG, PNG, and WEBP are allowed".to_string(),
        ));
    }

    Ok(extension)
}

pub fn validate_file_size(file_size: usize) -> Result<(), AppError> {
    if file_size > MAX_UPLOAD_SIZE_BYTES {
        return Err(AppError::PayloadTooLarge(format!(
            "File size exceeds maximum allowed size of {} MB",
            MAX_UPLOAD_SIZE_BYTES / 1024 / 1024
        )));
    }
    Ok(())
}

/// `{unix seconds}_{category}{extension}`, with `/` in the category replaced by `-`.
pub fn generate_filename(uploaded_at: DateTime<Utc>, category: &str, extension: &str) -> String {
    format!(
        "{}_{}{}",
        uploaded_at.timestamp(),
        category.replace('/', "-"),
        extension
    )
}

pub fn storage_key_for(filename: &str) -> String {
    format!("{}{}", IMAGE_KEY_PREFIX, filename)
}
