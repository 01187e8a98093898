//! Wire models shared by the HTTP layer.
//!
//! Everything in here is serialized to or deserialized from JSON request and response
//! bodies. Field names are camelCase on the wire.

pub mod api;
pub mod audit;
pub mod auth;
pub mod friendship;
pub mod organization;
pub mod user;
pub mod vacation;

use thiserror::Error;

/// Returned when a stored status or operation tag does not name a known variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}
