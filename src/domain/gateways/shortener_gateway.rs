//! Gateway trait for creating short links.

use async_trait::async_trait;

use crate::domain::shortened_link::ShortenedLink;
use crate::error::AppError;

/// Creates short links for long URLs.
///
/// Both the external shortening API and this service's own `/api/shorten`
/// proxy speak the same protocol, so one implementation serves both.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortenerGateway: Send + Sync {
    /// Submits `url` for shortening.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] when the service answers with a
    /// non-success status or a body without `shortCode`.
    ///
    /// Returns [`AppError::Network`] when the service cannot be reached.
    async fn shorten(&self, url: &str) -> Result<ShortenedLink, AppError>;
}
