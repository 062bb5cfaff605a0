//! Storage key checks shared by every backend.

use crate::traits::{StorageError, StorageResult};

/// Reject keys that could escape the image prefix or name no object.
pub fn validate_key(storage_key: &str) -> StorageResult<()> {
    if storage_key.is_empty() {
        return Err(StorageError::InvalidKey("Storage key is empty".to_string()));
    }
    if storage_key.starts_with('/') {
        return Err(StorageError::InvalidKey(
            "Storage key must not start with '/'".to_string(),
        ));
    }
    if storage_key
        .split('/')
        .any(|segment| segment.is_empty() || segment == "." || segment == "..")
    {
        return Err(StorageError::InvalidKey(format!(
            "Storage key has an empty or relative segment: {}",
            storage_key
        )));
    }
    Ok(())
}
