//! API route configuration.

use crate::api::handlers::{health_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Shortening proxy routes. Rate limited in [`crate::routes::app_router`].
///
/// # Endpoints
///
/// - `POST /shorten` - Forward a URL to the external shortening API
pub fn shorten_routes() -> Router<AppState> {
    Router::new().route("/shorten", post(shorten_handler))
}

/// Unthrottled API routes.
///
/// # Endpoints
///
/// - `GET /health` - Service health
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}
