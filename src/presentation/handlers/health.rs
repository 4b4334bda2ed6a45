use axum::Json;
use serde_json::{Value, json};

/// Liveness only; the model provider is not probed.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
