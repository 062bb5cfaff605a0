//! OpenAPI documentation.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::error;
use crate::handlers;
use gallery_core::models;

/// Returns the OpenAPI spec served at `/api/openapi.json`.
pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gallery API",
        version = "0.1.0",
        description = "Image gallery administration API. Public listing of active images; uploads and deletes require an admin bearer token obtained from /api/auth/login."
    ),
    paths(
        handlers::auth::login,
        handlers::images::list_images,
        handlers::images::upload_image,
        handlers::images::delete_image,
    ),
    components(schemas(
        models::Image,
        models::UploadImageResponse,
        models::MessageResponse,
        models::LoginRequest,
        models::LoginResponse,
        error::ErrorResponse,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = "auth", description = "Admin authentication"),
        (name = "images", description = "Gallery images")
    )
)]
pub struct ApiDoc;
