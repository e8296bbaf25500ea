//! Application error type and its HTTP representation.
//!
//! Every error renders as `{"error": "<message>"}`, the shape the shortening
//! form and the upstream API both speak.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidationErrors;

/// Generic message shown whenever the shortening upstream fails.
pub const SHORTEN_FAILED: &str = "Failed to shorten URL";

/// JSON error body returned to clients.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Input rejected before any network call.
    #[error("{message}")]
    Validation { message: String },

    /// An upstream API answered with a non-success status or an unusable body.
    #[error("{message}")]
    Upstream {
        message: String,
        status: Option<StatusCode>,
    },

    /// The upstream API could not be reached.
    #[error("{message}")]
    Network { message: String },
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn upstream(message: impl Into<String>, status: Option<StatusCode>) -> Self {
        Self::Upstream {
            message: message.into(),
            status,
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// The user-facing message carried by this error.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message }
            | Self::Upstream { message, .. }
            | Self::Network { message } => message,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Upstream { .. } | Self::Network { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.message().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid request".to_string());

        Self::validation(message)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::upstream(format!("Malformed upstream response: {}", e), e.status())
        } else if let Some(status) = e.status() {
            Self::upstream(format!("Upstream returned {}", status), Some(status))
        } else {
            Self::network(format!("Upstream unreachable: {}", e))
        }
    }
}
