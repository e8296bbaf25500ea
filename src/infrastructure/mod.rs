//! Infrastructure layer for external integrations.
//!
//! Implements the gateway traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`upstream`] - reqwest-based clients for the external shortening and redirect APIs

pub mod upstream;
