//! Scope authorization resolver.
//!
//! Every resource is guarded by a pair of scopes: `<resource>:<action>` grants
//! access to the caller's own records and `<resource>:all:<action>` to every record.
//! The functions here are pure and decide which repository call a service makes.

use std::collections::BTreeSet;

/// Prefix the transport authorization layer puts in front of scope names.
pub const SCOPE_PREFIX: &str = "SCOPE_";

/// The "own" and "all" scope guarding one action on one resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopePair {
    pub own: &'static str,
    pub all: &'static str,
}

impl ScopePair {
    pub const fn new(own: &'static str, all: &'static str) -> Self {
        Self { own, all }
    }
}

pub const VACATIONS_READ: ScopePair = ScopePair::new("vacations:read", "vacations:all:read");
pub const VACATIONS_WRITE: ScopePair = ScopePair::new("vacations:write", "vacations:all:write");
pub const ORGANIZATIONS_READ: ScopePair =
    ScopePair::new("organizations:read", "organizations:all:read");
pub const ORGANIZATIONS_WRITE: ScopePair =
    ScopePair::new("organizations:write", "organizations:all:write");
pub const FRIENDSHIPS_READ: ScopePair = ScopePair::new("friendships:read", "friendships:all:read");
pub const FRIENDSHIPS_WRITE: ScopePair =
    ScopePair::new("friendships:write", "friendships:all:write");
pub const USERS_READ: ScopePair = ScopePair::new("users:read", "users:all:read");
pub const USERS_WRITE: ScopePair = ScopePair::new("users:write", "users:all:write");
pub const AUDITS_READ: ScopePair = ScopePair::new("audits:read", "audits:all:read");

/// Strips the transport prefix from a granted scope.
pub fn normalize(scope: &str) -> &str {
    let scope = scope.trim();
    scope.strip_prefix(SCOPE_PREFIX).unwrap_or(scope)
}

/// Returns `true` when `all_scope` is among the caller's scopes.
pub fn can_act_on_all(caller_scopes: &BTreeSet<String>, all_scope: &str) -> bool {
    caller_scopes.contains(all_scope)
}

/// Chooses between an "all records" and an "owner-scoped" repository call.
///
/// # Arguments
/// - `caller_scopes` - Scopes granted to the caller
/// - `all_scope` - The "all" scope of the resource and action
/// - `subject` - Subject of the caller
///
/// # Returns
/// - `None` - No filter, the caller may act on every record
/// - `Some(subject)` - Mandatory owner filter
pub fn owner_filter(
    caller_scopes: &BTreeSet<String>,
    all_scope: &str,
    subject: &str,
) -> Option<String> {
    if can_act_on_all(caller_scopes, all_scope) {
        None
    } else {
        Some(subject.to_string())
    }
}

/// Resolves an explicit `owner` query filter against the caller's scopes.
///
/// The requested owner is honoured only when the caller holds `all_scope`.
/// Otherwise it is silently replaced by the caller's own subject.
///
/// # Arguments
/// - `caller_scopes` - Scopes granted to the caller
/// - `all_scope` - The "all" scope of the resource and action
/// - `subject` - Subject of the caller
/// - `requested` - Owner filter supplied by the client, if any
///
/// # Returns
/// The owner filter to apply, `None` meaning every record
pub fn resolve_owner_query(
    caller_scopes: &BTreeSet<String>,
    all_scope: &str,
    subject: &str,
    requested: Option<String>,
) -> Option<String> {
    if can_act_on_all(caller_scopes, all_scope) {
        requested.filter(|owner| !owner.is_empty())
    } else {
        Some(subject.to_string())
    }
}
