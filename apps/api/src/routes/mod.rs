pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::outreach::handlers as outreach_handlers;
use crate::profiles::handlers as profile_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profiles API
        .route(
            "/api/v1/profiles/analyze",
            post(profile_handlers::handle_analyze),
        )
        .route(
            "/api/v1/profiles/search",
            get(profile_handlers::handle_search),
        )
        .route(
            "/api/v1/profiles/industry/:industry",
            get(profile_handlers::handle_by_industry),
        )
        .route(
            "/api/v1/profiles/export",
            post(profile_handlers::handle_export),
        )
        .route(
            "/api/v1/profiles/:id",
            get(profile_handlers::handle_get_profile),
        )
        // Outreach API
        .route(
            "/api/v1/outreach/generate",
            post(outreach_handlers::handle_generate_outreach),
        )
        // Stats
        .route("/api/v1/stats", get(profile_handlers::handle_stats))
        .with_state(state)
}
