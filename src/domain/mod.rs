//! Domain layer: the shapes and rules the edge service works with.
//!
//! Nothing here performs I/O. Gateway traits describe the external
//! shortening service; their HTTP implementations live in
//! [`crate::infrastructure::upstream`].
//!
//! # Modules
//!
//! - [`short_code`] - Short code shape (`[a-z0-9]{6}`)
//! - [`path_rules`] - Ordered skip table and path classification
//! - [`redirect`] - Lookup results and filter decisions
//! - [`shortened_link`] - Shortening API response
//! - [`form`] - Shortening form state machine
//! - [`gateways`] - Traits for the external APIs
//!
//! # Filter Flow
//!
//! 1. [`path_rules::PathRules::classify`] sorts the path into skip, candidate, or neither
//! 2. Candidates go to [`gateways::RedirectGateway::lookup`]
//! 3. The [`redirect::RedirectLookup`] becomes a [`redirect::FilterDecision`]

pub mod form;
pub mod gateways;
pub mod path_rules;
pub mod redirect;
pub mod short_code;
pub mod shortened_link;
