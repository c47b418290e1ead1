//! REST API module using Axum
//!
//! Thin HTTP adapter over the generation seam:
//! - typed request/response records from the shared schema module
//! - field-level validation errors through a uniform error envelope
//! - CORS restricted to configured origins (same-origin only by default)
//!
//! Handlers are stateless and side-effect-free; the only cross-endpoint
//! coupling is `/strategic-analysis` running the same analysis stage as
//! `/analyze` before composing its response.

pub mod error;
pub mod handlers;
mod routes;

pub use handlers::AppState;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build a CORS layer that is restrictive by default (same-origin only).
///
/// `origins` comes from the service configuration; set it during development
/// to allow a local frontend (e.g. `http://localhost:5173`).
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if origins.is_empty() {
        // No cross-origin allowed
        return layer;
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| o.trim().parse().ok())
        .collect();
    tracing::info!(origins = origins.join(","), "CORS: allowing configured origins");
    layer.allow_origin(allowed)
}

/// Create the complete application router.
pub fn create_app(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .merge(routes::api_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(cors_origins))
}
