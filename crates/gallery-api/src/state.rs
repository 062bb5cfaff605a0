//! Application state shared by every handler.

use crate::auth::AuthService;
use gallery_core::Config;
use gallery_services::ImageService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub images: ImageService,
    pub auth: Arc<AuthService>,
}
