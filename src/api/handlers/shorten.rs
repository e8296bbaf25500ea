//! Handler for the shortening proxy endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::debug;
use validator::Validate;

use crate::api::dto::shorten::ShortenRequest;
use crate::domain::shortened_link::ShortenedLink;
use crate::error::AppError;
use crate::state::AppState;

pub const MSG_INVALID_BODY: &str = "Invalid request body";

/// Forwards a URL to the external shortening API.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// The upstream JSON object, relayed as-is:
///
/// ```json
/// { "shortCode": "abc123" }
/// ```
///
/// # Errors
///
/// - `400 {"error": "Invalid request body"}` if the body is not JSON
/// - `400 {"error": "URL is required"}` if `url` is missing or empty
/// - `502 {"error": "Failed to shorten URL"}` on any upstream failure
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenedLink>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        debug!("Rejected shorten request body: {}", rejection);
        AppError::validation(MSG_INVALID_BODY)
    })?;

    payload.validate()?;

    let url = payload.url.unwrap_or_default();
    let link = state.shorten_service.shorten(&url).await?;

    Ok(Json(link))
}
