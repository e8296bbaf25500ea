//! State machine behind the shortening form.
//!
//! ```text
//! Idle ──submit()──▶ Submitting ──complete()──▶ Success
//!   │                     └────────fail()─────▶ Error
//!   └──submit() with invalid URL──────────────▶ Error
//! ```
//!
//! The "copied" indicator lives in the browser; the page renders
//! [`COPIED_FLASH`] so the label resets after the same duration everywhere.

use std::time::Duration;

use crate::domain::shortened_link::ShortenedLink;
use crate::error::AppError;

/// How long the "Copied!" indicator stays on.
pub const COPIED_FLASH: Duration = Duration::from_secs(2);

pub const MSG_EMPTY_URL: &str = "Please enter a URL";
pub const MSG_BAD_SCHEME: &str = "URL must start with http:// or https://";
pub const MSG_FALLBACK: &str = "Something went wrong";
pub const MSG_UNREACHABLE: &str = "Failed to connect to server";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Submitting,
    Success {
        short_url: String,
        short_code: String,
    },
    Error {
        message: String,
    },
}

#[derive(Debug, Clone)]
pub struct ShortenForm {
    url: String,
    phase: FormPhase,
}

/// Checks a URL the way the form does before any network call.
pub fn validate_submission(url: &str) -> Result<(), AppError> {
    if url.trim().is_empty() {
        return Err(AppError::validation(MSG_EMPTY_URL));
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(AppError::validation(MSG_BAD_SCHEME));
    }

    Ok(())
}

impl ShortenForm {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            phase: FormPhase::Idle,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn short_url(&self) -> Option<&str> {
        match &self.phase {
            FormPhase::Success { short_url, .. } => Some(short_url),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            FormPhase::Error { message } => Some(message),
            _ => None,
        }
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    /// Validates the URL and moves to `Submitting`.
    ///
    /// On a validation failure the form moves to `Error` and the caller must
    /// not make a network call.
    pub fn submit(&mut self) -> Result<(), AppError> {
        if let Err(e) = validate_submission(&self.url) {
            self.phase = FormPhase::Error {
                message: e.message().to_string(),
            };
            return Err(e);
        }

        self.phase = FormPhase::Submitting;
        Ok(())
    }

    pub fn complete(&mut self, origin: &str, link: &ShortenedLink) {
        self.phase = FormPhase::Success {
            short_url: link.short_url(origin),
            short_code: link.short_code.clone(),
        };
    }

    pub fn fail(&mut self, message: Option<&str>) {
        let message = message
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(MSG_FALLBACK);

        self.phase = FormPhase::Error {
            message: message.to_string(),
        };
    }

    /// Finishes a submission with the proxy's answer.
    pub fn apply(&mut self, origin: &str, result: Result<ShortenedLink, AppError>) {
        match result {
            Ok(link) => self.complete(origin, &link),
            Err(AppError::Network { .. }) => self.fail(Some(MSG_UNREACHABLE)),
            Err(e) => self.fail(Some(e.message())),
        }
    }

    /// Resets the input and any result, ready for the next URL.
    pub fn clear(&mut self) {
        self.url.clear();
        self.phase = FormPhase::Idle;
    }
}

impl Default for ShortenForm {
    fn default() -> Self {
        Self::new("")
    }
}
