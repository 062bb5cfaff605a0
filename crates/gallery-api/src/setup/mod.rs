//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from main.rs
//! for better organization and testability.

pub mod database;
pub mod routes;
pub mod server;
pub mod storage;

use crate::auth::AuthService;
use crate::state::AppState;
use anyhow::Result;
use gallery_core::Config;
use gallery_db::{ImageRepository, ImageStore};
use gallery_services::ImageService;
use gallery_storage::Storage;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Initialize telemetry first
    crate::telemetry::init_telemetry(config.log_format())
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    tracing::info!(
        environment = %config.environment(),
        storage_backend = %config.storage.backend,
        "Configuration loaded and validated successfully"
    );
    for setting in config.missing_settings() {
        tracing::warn!(setting, "Setting not configured; dependent requests will fail");
    }

    // Setup database
    let pool = database::setup_database(&config).await?;

    // Setup storage
    let storage = storage::setup_storage(&config)?;

    let state = build_state(config.clone(), Arc::new(ImageRepository::new(pool)), storage);

    // Setup routes
    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}

/// Wire the services over the given metadata store and object store.
pub fn build_state(
    config: Config,
    images: Arc<dyn ImageStore>,
    storage: Arc<dyn Storage>,
) -> Arc<AppState> {
    let auth = Arc::new(AuthService::new(&config.auth));
    Arc::new(AppState {
        images: ImageService::new(images, storage),
        auth,
        config,
    })
}
