//! Short-link interception middleware.

use axum::{
    extract::{Request, State},
    http::{HeaderValue, header::LOCATION},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::domain::redirect::FilterDecision;
use crate::state::AppState;

/// Redirects short-code paths before routing.
///
/// Runs on every request, fallback included. The decision comes from
/// [`crate::application::services::RedirectService::resolve`]:
///
/// - `Redirect` → respond with the upstream's 301/302 and its `Location`
/// - `Forward` → hand the untouched request to the router
///
/// Upstream trouble never reaches the client; the router answers instead
/// (usually with the not-found page).
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/url-shortner", get(shortener_page))
///     .layer(middleware::from_fn_with_state(state.clone(), short_link_filter::layer));
/// ```
pub async fn layer(State(st): State<AppState>, req: Request, next: Next) -> Response {
    match st.redirect_service.resolve(req.uri().path()).await {
        FilterDecision::Redirect { location, status } => match HeaderValue::from_str(&location) {
            Ok(value) => (status.status_code(), [(LOCATION, value)]).into_response(),
            Err(_) => {
                warn!("Cannot encode redirect target as a header: {}", location);
                next.run(req).await
            }
        },
        FilterDecision::Forward => next.run(req).await,
    }
}
