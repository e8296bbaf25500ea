//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`               - Redirect to the shortening form
//! - `GET  /url-shortner`   - Shortening form (public)
//! - `POST /url-shortner`   - Form submission (rate limited)
//! - `POST /api/shorten`    - JSON shortening proxy (rate limited)
//! - `GET  /api/health`     - Health check (public)
//! - `/static/*`            - Static assets
//! - anything else          - Not-found page
//!
//! # Middleware
//!
//! Outermost first:
//!
//! - **Path normalization** - Trailing slash handling
//! - **Tracing** - Structured request/response logging
//! - **Short-link filter** - Redirects `/{code}` before routing, fallback included
//! - **Rate limiting** - Per-IP token bucket shared by the shortening proxy
//!   and form submissions

use crate::api;
use crate::api::middleware::{rate_limit, short_link_filter, tracing};
use crate::state::AppState;
use crate::web;
use crate::web::handlers::not_found_handler;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let shorten_limit = rate_limit::layer(behind_proxy);

    let api_router = api::routes::shorten_routes()
        .layer(shorten_limit.clone())
        .merge(api::routes::public_routes());

    let router = Router::new()
        .merge(web::routes::public_routes(shorten_limit))
        .nest("/api", api_router)
        .nest_service("/static", ServeDir::new("static"))
        .fallback(not_found_handler)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            short_link_filter::layer,
        ))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
