use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, model state, and uptime in seconds.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let uptime_secs = (Utc::now() - state.started_at).num_seconds();

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "outreach-api",
        "model": state.llm.model_name(),
        "model_loaded": state.llm.is_loaded(),
        "uptime_secs": uptime_secs,
    }))
}
