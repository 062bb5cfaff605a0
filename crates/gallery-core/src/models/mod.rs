pub mod auth;
pub mod image;

pub use auth::{LoginRequest, LoginResponse};
pub use image::{Image, MessageResponse, NewImage, UploadImageResponse};
