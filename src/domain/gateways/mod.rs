//! Gateway trait definitions for the external shortening service.
//!
//! The shortening and redirect APIs are collaborators reached over HTTP.
//! These traits are the seam between the services in
//! [`crate::application::services`] and the HTTP clients in
//! [`crate::infrastructure::upstream`].
//!
//! # Available Gateways
//!
//! - [`RedirectGateway`] - Short code to redirect target lookup
//! - [`ShortenerGateway`] - Long URL to short code creation
//!
//! Mock implementations are auto-generated via `mockall` for unit tests.

pub mod redirect_gateway;
pub mod shortener_gateway;

pub use redirect_gateway::RedirectGateway;
pub use shortener_gateway::ShortenerGateway;

#[cfg(test)]
pub use redirect_gateway::MockRedirectGateway;
#[cfg(test)]
pub use shortener_gateway::MockShortenerGateway;
