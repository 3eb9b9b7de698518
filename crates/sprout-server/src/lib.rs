//! sprout-server
//!
//! Stateless HTTP endpoint for screening analysis. Validates required
//! fields, builds a prompt, calls the generative model when one is
//! configured, and guarantees a structurally valid recommendation plan via
//! the heuristic fallback on any upstream failure.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod validation;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Assemble the service router. Exported so tests can drive it directly.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::health::health_check))
        .route("/analyze", post(routes::analyze::analyze))
        .layer(cors)
        .with_state(state)
}
