//! Liveness endpoint.

use axum::Json;
use serde_json::{json, Value};

/// Health check. Always returns 200 while the process is serving.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy")
    )
)]
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
