//! Database repositories for image metadata
//!
//! [`ImageStore`] is the contract the image service depends on.
//! [`ImageRepository`] implements it on PostgreSQL; [`InMemoryImageRepository`]
//! keeps rows in process memory for tests and local runs without a database.

pub mod image;
pub mod memory;

pub use image::{ImageRepository, ImageStore};
pub use memory::InMemoryImageRepository;
