//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower::util::Either;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

type ProxiedLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;
type DirectLayer = GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Rate limiter for the shortening entry points. Clones share one bucket per client.
pub type RateLimitLayer = Either<ProxiedLayer, DirectLayer>;

/// Creates the rate limiter for the shortening entry points.
///
/// # Limits
///
/// - **Rate**: 1 request per second
/// - **Burst**: 10 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// - `behind_proxy = false`: socket peer address (requires `ConnectInfo`)
/// - `behind_proxy = true`: `X-Forwarded-For` / `X-Real-IP` / `Forwarded`,
///   falling back to the peer address
///
/// # Example
///
/// ```rust,ignore
/// let shorten = Router::new()
///     .route("/shorten", post(shorten_handler))
///     .layer(rate_limit::layer(config.behind_proxy));
/// ```
pub fn layer(behind_proxy: bool) -> RateLimitLayer {
    if behind_proxy {
        let governor_conf = Arc::new(
            GovernorConfigBuilder::default()
                .per_second(1)
                .burst_size(10)
                .key_extractor(SmartIpKeyExtractor)
                .finish()
                .expect("non-zero rate limit quota"),
        );

        Either::Left(GovernorLayer::new(governor_conf))
    } else {
        let governor_conf = Arc::new(
            GovernorConfigBuilder::default()
                .per_second(1)
                .burst_size(10)
                .finish()
                .expect("non-zero rate limit quota"),
        );

        Either::Right(GovernorLayer::new(governor_conf))
    }
}
