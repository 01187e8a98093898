//! The authenticated caller.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::{
    model::auth::PrincipalDto,
    server::{
        error::auth::AuthError,
        middleware::scope::{self, ScopePair},
    },
};

/// Subject and granted scopes of the caller, stored in the session after login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Identity provider subject, used as owner of created records.
    pub subject: String,
    /// Granted scopes with any `SCOPE_` prefix removed.
    pub scopes: BTreeSet<String>,
}

impl Principal {
    /// Creates a principal, normalizing scope names and dropping empty ones.
    ///
    /// # Arguments
    /// - `subject` - Identity provider subject of the caller
    /// - `scopes` - Granted scope strings, with or without the `SCOPE_` prefix
    ///
    /// # Returns
    /// A new `Principal`
    pub fn new<I, S>(subject: impl Into<String>, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            subject: subject.into(),
            scopes: scopes
                .into_iter()
                .map(|s| scope::normalize(s.as_ref()).to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    pub fn has_scope(&self, scope: &str) -> bool {
        self.scopes.contains(scope)
    }

    pub fn can_act_on_all(&self, pair: ScopePair) -> bool {
        scope::can_act_on_all(&self.scopes, pair.all)
    }

    /// Ensures the caller holds either scope of `pair`.
    ///
    /// # Arguments
    /// - `pair` - Own/all scope pair guarding the operation
    ///
    /// # Returns
    /// - `Ok(None)` - Caller holds the "all" scope and may act on every record
    /// - `Ok(Some(owner))` - Caller may only act on records owned by `owner`
    /// - `Err(AuthError::MissingScope)` - Caller holds neither scope
    pub fn require(&self, pair: ScopePair) -> Result<Option<String>, AuthError> {
        if !self.has_scope(pair.own) && !self.has_scope(pair.all) {
            return Err(AuthError::MissingScope {
                subject: self.subject.clone(),
                scope: pair.own.to_string(),
            });
        }

        Ok(scope::owner_filter(&self.scopes, pair.all, &self.subject))
    }

    /// Resolves the effective owner filter for a list request.
    ///
    /// See [`scope::resolve_owner_query`].
    pub fn resolve_owner_query(&self, pair: ScopePair, requested: Option<String>) -> Option<String> {
        scope::resolve_owner_query(&self.scopes, pair.all, &self.subject, requested)
    }

    pub fn into_dto(self) -> PrincipalDto {
        PrincipalDto {
            subject: self.subject,
            scopes: self.scopes.into_iter().collect(),
        }
    }
}
