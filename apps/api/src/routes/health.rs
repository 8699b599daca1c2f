use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status plus which store and generation backends are active.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "organizer-api",
        "store": if state.config.redis_url.is_some() { "redis" } else { "memory" },
        "generation": state.llm.is_some(),
    }))
}
