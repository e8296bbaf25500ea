//! Redirect lookup results and filter decisions.

use axum::http::StatusCode;

/// Redirect statuses relayed from the external redirect API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectStatus {
    /// 301
    MovedPermanently,
    /// 302
    Found,
}

impl RedirectStatus {
    pub fn from_status(status: StatusCode) -> Option<Self> {
        match status {
            StatusCode::MOVED_PERMANENTLY => Some(Self::MovedPermanently),
            StatusCode::FOUND => Some(Self::Found),
            _ => None,
        }
    }

    pub fn status_code(self) -> StatusCode {
        match self {
            Self::MovedPermanently => StatusCode::MOVED_PERMANENTLY,
            Self::Found => StatusCode::FOUND,
        }
    }
}

/// Result of asking the external redirect API about one short code.
///
/// Lives for a single request and is never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectLookup {
    Found {
        location: String,
        status: RedirectStatus,
    },
    NotFound,
    /// Transport failure, unexpected status, or malformed `Location`.
    Error(String),
}

impl RedirectLookup {
    /// Label used for logs and metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            Self::Found { .. } => "found",
            Self::NotFound => "not_found",
            Self::Error(_) => "error",
        }
    }
}

/// What the filter does with the inbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterDecision {
    /// Pass the request downstream unmodified.
    Forward,
    Redirect {
        location: String,
        status: RedirectStatus,
    },
}
