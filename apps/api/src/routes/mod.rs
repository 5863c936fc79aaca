pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::feedback::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/keywords/extract",
            post(handlers::handle_extract_keywords),
        )
        .route("/api/v1/feedback/analyze", post(handlers::handle_analyze))
        .route(
            "/api/v1/feedback/severity-score",
            post(handlers::handle_severity_score),
        )
        .route(
            "/api/v1/resumes/:id/feedback",
            post(handlers::handle_stored_resume_feedback),
        )
        .with_state(state)
}
