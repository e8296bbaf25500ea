//! Gateway trait for redirect lookups.

use async_trait::async_trait;

use crate::domain::redirect::RedirectLookup;
use crate::domain::short_code::ShortCode;

/// Looks up where a short code points.
///
/// # Implementations
///
/// - [`crate::infrastructure::upstream::HttpRedirectGateway`] - external redirect API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RedirectGateway: Send + Sync {
    /// Resolves one short code.
    ///
    /// Infallible by contract: transport failures and unexpected answers are
    /// reported as [`RedirectLookup::Error`] so the filter can pass through.
    async fn lookup(&self, code: &ShortCode) -> RedirectLookup;
}
