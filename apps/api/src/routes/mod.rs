pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::screening::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Screening API
        .route("/api/v1/skills", get(handlers::handle_skills))
        .route("/api/v1/normalize", post(handlers::handle_normalize))
        .route("/api/v1/screen", post(handlers::handle_screen))
        .route("/api/v1/screen/text", post(handlers::handle_screen_text))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
