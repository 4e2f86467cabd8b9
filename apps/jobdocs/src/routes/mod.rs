pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Trigger sources
        .route("/api/v1/submissions", post(handlers::handle_submission))
        .route("/api/v1/selections", post(handlers::handle_selection))
        .with_state(state)
}
