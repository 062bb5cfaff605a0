//! Health check handlers.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use std::time::Duration;

const READINESS_TIMEOUT: Duration = Duration::from_secs(5);

/// Liveness probe - process is running.
pub async fn liveness_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "status": "alive" })),
    )
}

/// Basic health summary; does not touch external services.
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "healthy",
            "environment": state.config.environment(),
            "storage_backend": state.config.storage.backend.to_string(),
        })),
    )
}

/// Readiness probe - metadata store reachable.
pub async fn readiness_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut response = serde_json::json!({
        "status": "ready",
        "database": "unknown"
    });

    let status_code = match tokio::time::timeout(READINESS_TIMEOUT, state.images.ping()).await {
        Ok(Ok(())) => {
            response["database"] = serde_json::json!("ready");
            StatusCode::OK
        }
        Ok(Err(e)) => {
            tracing::error!(error = %e, "Database readiness check failed");
            response["status"] = serde_json::json!("not_ready");
            response["database"] = serde_json::json!("not_ready");
            StatusCode::SERVICE_UNAVAILABLE
        }
        Err(_) => {
            tracing::error!("Database readiness check timed out");
            response["status"] = serde_json::json!("not_ready");
            response["database"] = serde_json::json!("timeout");
            StatusCode::SERVICE_UNAVAILABLE
        }
    };

    (status_code, Json(response))
}
