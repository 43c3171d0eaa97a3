//! Liveness endpoint.

use axum::Json;

/// GET /health — liveness probe.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "oc-chat-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
