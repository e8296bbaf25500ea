//! Shortening proxy and form submission service.

use std::sync::Arc;

use tracing::error;

use crate::domain::form::ShortenForm;
use crate::domain::gateways::ShortenerGateway;
use crate::domain::shortened_link::ShortenedLink;
use crate::error::{AppError, SHORTEN_FAILED};

pub const MSG_URL_REQUIRED: &str = "URL is required";

/// Forwards shortening requests to the external API.
///
/// Upstream failures of any kind are logged and collapsed into a single
/// generic message; upstream error details never reach the user.
pub struct ShortenService<G: ShortenerGateway + ?Sized> {
    gateway: Arc<G>,
}

impl<G: ShortenerGateway + ?Sized> ShortenService<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Shortens one URL through the external API.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `url` is empty.
    ///
    /// Returns [`AppError::Upstream`] with a generic message on any upstream
    /// or network failure.
    pub async fn shorten(&self, url: &str) -> Result<ShortenedLink, AppError> {
        if url.trim().is_empty() {
            return Err(AppError::validation(MSG_URL_REQUIRED));
        }

        self.gateway.shorten(url).await.map_err(|e| {
            error!("Shorten URL error: {}", e);
            let status = match &e {
                AppError::Upstream { status, .. } => *status,
                _ => None,
            };
            AppError::upstream(SHORTEN_FAILED, status)
        })
    }

    /// Runs one form submission: local validation, then the proxy call.
    ///
    /// A form that fails validation is left in its error state; neither
    /// `origin` nor the upstream is consulted.
    ///
    /// # Errors
    ///
    /// Returns the error from `origin` when the short link's origin cannot
    /// be resolved. No upstream call is made in that case.
    pub async fn submit_form<F>(&self, form: &mut ShortenForm, origin: F) -> Result<(), AppError>
    where
        F: FnOnce() -> Result<String, AppError>,
    {
        if form.submit().is_err() {
            return Ok(());
        }

        let origin = origin()?;
        let result = self.shorten(form.url()).await;
        form.apply(&origin, result);
        Ok(())
    }
}
