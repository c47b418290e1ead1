//! API route definitions
//!
//! Pipeline endpoints for the strategy service:
//! - POST /analyze - market analysis + compiled research summaries
//! - POST /strategic-analysis - strategy composition (runs the analysis stage internally)
//! - POST /content-creation - creative brief + finished artifact
//! - GET /health - liveness probe

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{self, AppState};

/// Create all API routes for the service.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/analyze", post(handlers::analyze))
        .route("/strategic-analysis", post(handlers::strategic_analysis))
        .route("/content-creation", post(handlers::content_creation))
        .route("/health", get(handlers::health))
        .with_state(state)
}
