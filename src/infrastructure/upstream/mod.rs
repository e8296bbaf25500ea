//! HTTP clients for the external shortening service.
//!
//! # Gateways
//!
//! - [`HttpRedirectGateway`] - `GET {base}/{code}`, redirects not followed
//! - [`HttpShortenerGateway`] - `POST {endpoint}` with `{"url": ...}`

mod http_redirect_gateway;
mod http_shortener_gateway;

pub use http_redirect_gateway::{HttpRedirectGateway, interpret_lookup_response};
pub use http_shortener_gateway::HttpShortenerGateway;

/// Builds the shared upstream client.
///
/// Automatic redirect following is disabled: a 301/302 from the redirect API
/// is the answer, not something to chase.
///
/// # Errors
///
/// Returns an error if the TLS backend fails to initialize.
pub fn build_http_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}
