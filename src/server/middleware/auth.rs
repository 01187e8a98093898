use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::auth::Principal,
};

/// Loads the authenticated caller from the session.
///
/// Only authenticates. Scope checks happen in the services through
/// [`Principal::require`].
pub struct AuthGuard<'a> {
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Returns the caller's principal.
    ///
    /// # Returns
    /// - `Ok(Principal)` - Caller is logged in
    /// - `Err(AppError::AuthErr(AuthError::NotAuthenticated))` - No principal in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn require(&self) -> Result<Principal, AppError> {
        let Some(principal) = AuthSession::new(self.session).get_principal().await? else {
            return Err(AuthError::NotAuthenticated.into());
        };

        Ok(principal)
    }
}
