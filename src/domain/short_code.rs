//! Short code shape.

use std::fmt;

/// A path segment shaped like a short code: exactly six characters of `[a-z0-9]`.
///
/// Holding a `ShortCode` only proves the shape. Whether the code exists is
/// decided by the external redirect API.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShortCode(String);

impl ShortCode {
    /// Number of characters in every short code.
    pub const LENGTH: usize = 6;

    /// Parses a bare code (no leading slash).
    pub fn parse(code: &str) -> Option<Self> {
        let shaped = code.len() == Self::LENGTH
            && code
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit());

        shaped.then(|| Self(code.to_string()))
    }

    /// Parses a request path of the form `/<code>`.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::parse(path.strip_prefix('/')?)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShortCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
