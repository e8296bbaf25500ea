//! Short-link resolution for the request filter.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::gateways::RedirectGateway;
use crate::domain::path_rules::{PathClass, PathRules};
use crate::domain::redirect::{FilterDecision, RedirectLookup};

/// Decides, per request path, whether to redirect or pass through.
///
/// The external API is best-effort: every failure degrades to
/// [`FilterDecision::Forward`].
pub struct RedirectService<G: RedirectGateway + ?Sized> {
    rules: PathRules,
    gateway: Arc<G>,
}

impl<G: RedirectGateway + ?Sized> RedirectService<G> {
    pub fn new(rules: PathRules, gateway: Arc<G>) -> Self {
        Self { rules, gateway }
    }

    pub fn rules(&self) -> &PathRules {
        &self.rules
    }

    /// Resolves a request path.
    ///
    /// # Flow
    ///
    /// 1. Classify the path against the skip table and the short code shape
    /// 2. Skipped and non-candidate paths forward without a network call
    /// 3. Candidates get exactly one gateway lookup
    /// 4. `Found` redirects with the upstream status; everything else forwards
    pub async fn resolve(&self, path: &str) -> FilterDecision {
        let code = match self.rules.classify(path) {
            PathClass::Candidate(code) => code,
            PathClass::Skip | PathClass::NotShortCode => return FilterDecision::Forward,
        };

        debug!("Attempting redirect for short code: {}", code);

        let lookup = self.gateway.lookup(&code).await;
        metrics::counter!("short_link_lookups_total", "outcome" => lookup.outcome()).increment(1);

        match lookup {
            RedirectLookup::Found { location, status } => {
                info!(
                    "Redirecting {} to {} ({})",
                    code,
                    location,
                    status.status_code().as_u16()
                );
                FilterDecision::Redirect { location, status }
            }
            RedirectLookup::NotFound => {
                info!("Short code not found: {}", code);
                FilterDecision::Forward
            }
            RedirectLookup::Error(reason) => {
                warn!("Redirect lookup for {} failed: {}", code, reason);
                FilterDecision::Forward
            }
        }
    }
}
