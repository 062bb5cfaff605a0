//! Gallery Core Library
//!
//! Domain model, error types, configuration and shared constants used by every
//! gallery crate.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod storage_types;

// Re-export commonly used types
pub use config::{AuthConfig, BaseConfig, Config, LogFormat, StorageConfig};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use storage_types::StorageBackend;
