use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service version, whether candidate storage is backed by a medium,
/// and the configured storage caps.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "talent-scout",
        "storage": if state.store.is_available() { "available" } else { "disabled" },
        "limits": {
            "max_campaigns": state.config.max_campaigns,
            "max_candidates_per_campaign": state.config.max_candidates_per_campaign
        }
    }))
}
