//! Admin authentication: credential check, HS256 tokens and the request gate.

pub mod jwt;
pub mod middleware;
pub mod models;
pub mod service;

pub use jwt::JwtService;
pub use models::{AdminClaims, AdminContext};
pub use service::AuthService;
