//! Request guards and session helpers.
//!
//! - `auth` - `AuthGuard`, which loads the caller's `Principal` from the session
//! - `scope` - the scope authorization resolver and per-resource scope pairs
//! - `session` - type-safe wrappers around the tower-sessions `Session`

pub mod auth;
pub mod scope;
pub mod session;
