//! Page route configuration.

use crate::api::middleware::rate_limit::RateLimitLayer;
use crate::state::AppState;
use crate::web::handlers::{home_handler, shortener_page, shortener_submit};
use axum::{
    Router,
    routing::{get, post},
};

/// Public page routes.
///
/// Form submissions reach the external shortening API, so `POST` shares
/// the shortening proxy's rate limiter.
///
/// # Endpoints
///
/// - `GET  /`             - Redirect to the shortening page
/// - `GET  /url-shortner` - Empty shortening form
/// - `POST /url-shortner` - Submit the form (rate limited)
pub fn public_routes(submit_limit: RateLimitLayer) -> Router<AppState> {
    Router::new().route("/", get(home_handler)).route(
        "/url-shortner",
        get(shortener_page).merge(post(shortener_submit).layer(submit_limit)),
    )
}
