//! Helper functions used across the HTTP layers.
//!
//! - [`request_origin`] - Client-facing origin from the request

pub mod request_origin;
