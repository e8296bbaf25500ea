//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. The shortening response is the domain's
//! [`crate::domain::shortened_link::ShortenedLink`], relayed as-is.

pub mod health;
pub mod shorten;
