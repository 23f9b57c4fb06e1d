pub mod health;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/campaigns", get(handlers::handle_list_campaigns))
        .route(
            "/api/v1/campaigns/:id/candidates",
            get(handlers::handle_get_candidates).post(handlers::handle_generate),
        )
        .route(
            "/api/v1/campaigns/:id/candidates/:candidate_id/status",
            patch(handlers::handle_update_status),
        )
        .with_state(state)
}
