//! Gallery Services Layer
//!
//! Business logic for the image gallery: the upload and delete workflows that
//! coordinate the object store with the metadata store, and the naming and
//! validation rules for uploaded files. HTTP handling stays in `gallery-api`.

pub mod images;
pub mod upload;

pub use images::{storage_error, ImageService, DELETE_SUCCESS_MESSAGE, UPLOAD_SUCCESS_MESSAGE};
pub use upload::{
    extension_of, generate_filename, storage_key_for, validate_category, validate_extension,
    validate_file_size,
};
