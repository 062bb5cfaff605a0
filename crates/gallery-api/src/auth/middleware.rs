use crate::auth::models::AdminContext;
use crate::auth::service::AuthService;
use crate::error::HttpAppError;
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};
use gallery_core::AppError;
use std::sync::Arc;

/// Admin gate: requires `Authorization: Bearer <token>` with a valid, unexpired token.
pub async fn auth_middleware(
    State(auth): State<Arc<AuthService>>,
    mut request: Request,
    next: Next,
) -> Response {
    let auth_header = match request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
    {
        Some(h) => h,
        None => {
            return HttpAppError(AppError::Unauthorized(
                "Missing authorization header".to_string(),
            ))
            .into_response();
        }
    };

    let Some(token) = auth_header.strip_prefix("Bearer ") else {
        return HttpAppError(AppError::Unauthorized(
            "Invalid authorization header format".to_string(),
        ))
        .into_response();
    };

    let claims = match auth.validate(token) {
        Ok(claims) => claims,
        Err(AppError::Unauthorized(reason)) => {
            tracing::debug!(reason = %reason, "Rejected admin token");
            return HttpAppError(AppError::Unauthorized(
                "Invalid or expired token".to_string(),
            ))
            .into_response();
        }
        Err(e) => return HttpAppError(e).into_response(),
    };

    let context = AdminContext::from(claims);
    tracing::debug!(username = %context.username, "Admin request authenticated");
    request.extensions_mut().insert(context);

    next.run(request).await
}
