//! Site root handler.

use axum::response::Redirect;

/// Sends visitors at the root to the shortening page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler() -> Redirect {
    Redirect::to("/url-shortner")
}
