use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Returns service identification and an index of available endpoints.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Welcome to Resume Diff AI API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/health"
        }
    }))
}
