//! Gallery Storage Library
//!
//! Object store client for image blobs. The [`Storage`] trait is the seam the
//! image service depends on; [`ObjectStorage`] implements it on top of the
//! `object_store` crate (Amazon S3 or in-memory), and [`UnavailableStorage`]
//! stands in when the bucket is not configured.
//!
//! # Storage key format
//!
//! Image blobs live under `images/{filename}`. Keys must not be empty, start
//! with `/`, or contain `.`/`..` segments.

pub mod content_type;
pub mod factory;
pub(crate) mod keys;
pub mod object;
pub mod traits;
pub mod unavailable;

// Re-export commonly used types
pub use content_type::content_type_for_extension;
pub use factory::create_storage;
pub use gallery_core::StorageBackend;
pub use object::ObjectStorage;
pub use traits::{Storage, StorageError, StorageResult};
pub use unavailable::UnavailableStorage;
