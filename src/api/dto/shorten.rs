//! DTOs for the shortening proxy endpoint.

use serde::Deserialize;
use validator::Validate;

/// Request body for `POST /api/shorten`.
///
/// `url` is kept optional so a missing field reports the same
/// "URL is required" message as an empty one.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[serde(default)]
    #[validate(
        required(message = "URL is required"),
        length(min = 1, message = "URL is required")
    )]
    pub url: Option<String>,
}
