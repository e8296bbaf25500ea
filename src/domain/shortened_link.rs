//! Shortening result returned by the upstream API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A freshly shortened link.
///
/// Only `shortCode` is required. Any other fields the upstream sends are kept
/// so the local proxy can relay the response as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortenedLink {
    #[serde(rename = "shortCode")]
    pub short_code: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ShortenedLink {
    pub fn new(short_code: impl Into<String>) -> Self {
        Self {
            short_code: short_code.into(),
            extra: Map::new(),
        }
    }

    /// Full short URL under the given origin, e.g. `https://site.dev/abc123`.
    pub fn short_url(&self, origin: &str) -> String {
        format!("{}/{}", origin.trim_end_matches('/'), self.short_code)
    }
}
