//! # Shortlink Edge
//!
//! Edge filter and shortening front-end for a URL shortener whose storage
//! lives behind an external HTTP API.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Path rules, short codes, form state and gateway traits
//! - **Application Layer** ([`application`]) - Redirect resolution and shortening
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP clients for the external API
//! - **API Layer** ([`api`]) - JSON proxy, health check and middleware
//! - **Web Layer** ([`web`]) - Shortening form and not-found page
//!
//! ## Features
//!
//! - Short-code redirects resolved before routing, with upstream 301/302 preserved
//! - Best-effort lookups: any upstream failure falls through to the site
//! - Same-origin `POST /api/shorten` proxy with rate limiting
//! - Server-rendered shortening form
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIRECT_API_URL="https://api.example.com/prod"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{RedirectService, ShortenService};
    pub use crate::domain::gateways::{RedirectGateway, ShortenerGateway};
    pub use crate::domain::path_rules::{PathClass, PathRules};
    pub use crate::domain::redirect::{FilterDecision, RedirectLookup, RedirectStatus};
    pub use crate::domain::short_code::ShortCode;
    pub use crate::domain::shortened_link::ShortenedLink;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
