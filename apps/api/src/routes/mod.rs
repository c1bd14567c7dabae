pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers as matching;
use crate::profile::handlers as profile;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Postings & ranking
        .route("/api/v1/jobs", get(matching::handle_list_jobs))
        .route(
            "/api/v1/jobs/:id/candidates",
            get(matching::handle_rank_candidates),
        )
        .route("/api/v1/matches", post(matching::handle_match))
        // Seekers
        .route(
            "/api/v1/seekers/:id/profile",
            get(profile::handle_get_profile).put(profile::handle_put_profile),
        )
        .route(
            "/api/v1/seekers/:id/matches",
            get(matching::handle_seeker_matches),
        )
        .route(
            "/api/v1/seekers/:id/analytics",
            get(matching::handle_seeker_analytics),
        )
        .with_state(state)
}
