pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::keywords::handlers::handle_parse_keywords;
use crate::optimisation::handlers::{handle_analyze, handle_recommendations};
use crate::session::handlers::{handle_create_session, handle_delete_session, handle_get_session};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Session lifecycle
        .route("/api/v1/sessions", post(handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(handle_get_session).delete(handle_delete_session),
        )
        // Operator actions
        .route("/api/v1/sessions/:id/analyze", post(handle_analyze))
        .route("/api/v1/sessions/:id/keywords", post(handle_parse_keywords))
        .route(
            "/api/v1/sessions/:id/recommendations",
            post(handle_recommendations),
        )
        .with_state(state)
}
