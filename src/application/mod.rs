//! Application layer services.
//!
//! Services orchestrate domain rules and gateway calls and give HTTP handlers
//! and middleware a small API to call.
//!
//! # Available Services
//!
//! - [`services::redirect_service::RedirectService`] - Path classification and redirect lookup
//! - [`services::shorten_service::ShortenService`] - Shortening proxy and form submission

pub mod services;
