use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Fixed liveness indicator; never touches the upstream.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
