//! Object storage setup

use anyhow::{Context, Result};
use gallery_core::Config;
use gallery_storage::{create_storage, Storage};
use std::sync::Arc;

pub fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    let storage = create_storage(config).context("Failed to initialize object storage")?;

    tracing::info!(
        backend = %storage.backend_type(),
        bucket = ?config.storage.bucket,
        region = %config.storage.region,
        endpoint = ?config.storage.endpoint,
        "Object storage initialized"
    );

    Ok(storage)
}
