pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::intake::handlers;
use crate::recommendation::handlers::handle_recommend;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Intake page
        .route("/", get(handlers::handle_index))
        .route("/analyze", post(handlers::handle_analyze))
        .route("/reset", post(handlers::handle_reset))
        // JSON API
        .route("/api/v1/recommendations", post(handle_recommend))
        .route("/api/v1/session", get(handlers::handle_get_session))
        .with_state(state)
}
