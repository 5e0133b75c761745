//! Liveness endpoints.

use axum::Json;
use serde_json::{Value, json};

/// GET /api/hello
pub async fn hello() -> Json<Value> {
    Json(json!({ "message": "Hello, Activity Tracker!" }))
}

/// GET /health - Simple health check endpoint.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
