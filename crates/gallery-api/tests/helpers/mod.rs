//! Test helpers: build AppState and router for integration tests.
//!
//! The router is the production one; the metadata store and object store are
//! in-memory, so no database or bucket is needed.
//! Run with: `cargo test -p gallery-api`.

#![allow(dead_code)]

pub mod auth;
pub mod fixtures;

use axum_test::TestServer;
use gallery_api::setup::{build_state, routes};
use gallery_core::Config;
use gallery_db::InMemoryImageRepository;
use gallery_storage::{ObjectStorage, Storage};
use std::collections::HashMap;
use std::sync::Arc;

pub const TEST_BUCKET: &str = "gallery-test";

/// Test application: server plus handles on the backing stores.
pub struct TestApp {
    pub server: TestServer,
    pub images: Arc<InMemoryImageRepository>,
    pub storage: Arc<ObjectStorage>,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

/// Configuration with admin credentials, signing secret and in-memory storage.
pub fn test_config(overrides: &[(&str, &str)]) -> Config {
    let mut vars: HashMap<String, String> = [
        ("ADMIN_USERNAME", auth::TEST_USERNAME),
        ("ADMIN_PASSWORD", auth::TEST_PASSWORD),
        ("JWT_SECRET", auth::TEST_JWT_SECRET),
        ("STORAGE_BACKEND", "memory"),
        ("S3_BUCKET_NAME", TEST_BUCKET),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    for (key, value) in overrides {
        vars.insert(key.to_string(), value.to_string());
    }
    Config::from_vars(|key| vars.get(key).cloned()).expect("Invalid test configuration")
}

/// Setup test app with the default test configuration.
pub fn setup_test_app() -> TestApp {
    setup_test_app_with(test_config(&[]))
}

pub fn setup_test_app_with(config: Config) -> TestApp {
    let images = Arc::new(InMemoryImageRepository::new());
    let storage = Arc::new(ObjectStorage::in_memory(TEST_BUCKET));
    setup_test_app_with_storage(config, images, storage.clone(), storage)
}

/// Setup with a custom `Storage` used by the service (e.g. an unavailable backend).
pub fn setup_test_app_with_storage(
    config: Config,
    images: Arc<InMemoryImageRepository>,
    storage: Arc<ObjectStorage>,
    service_storage: Arc<dyn Storage>,
) -> TestApp {
    let state = build_state(config.clone(), images.clone(), service_storage);
    let app = routes::setup_routes(&config, state).expect("Failed to build routes");
    let server = TestServer::new(app).expect("Failed to create test server");

    TestApp {
        server,
        images,
        storage,
    }
}
