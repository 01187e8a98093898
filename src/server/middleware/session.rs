//! Type-safe session management wrappers.
//!
//! Session management is split into focused concerns:
//! - `AuthSession` - The authenticated `Principal`
//! - `CsrfSession` - CSRF token management for the OAuth flow
//!
//! Each struct wraps the same underlying `Session` but exposes only the methods
//! relevant to its concern.

use tower_sessions::Session;

use crate::server::{error::AppError, model::auth::Principal};

// Session key constants
const SESSION_AUTH_PRINCIPAL: &str = "auth:principal";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";

/// Authentication session management.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the principal in the session.
    ///
    /// Called after a successful OAuth callback to establish a logged-in session.
    ///
    /// # Arguments
    /// - `principal` - Subject and scopes of the caller
    ///
    /// # Returns
    /// - `Ok(())` - Principal successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_principal(&self, principal: &Principal) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_PRINCIPAL, principal)
            .await?;
        Ok(())
    }

    /// Retrieves the principal from the session.
    ///
    /// # Returns
    /// - `Ok(Some(principal))` - Caller is logged in
    /// - `Ok(None)` - No principal in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_principal(&self) -> Result<Option<Principal>, AppError> {
        let principal = self.session.get(SESSION_AUTH_PRINCIPAL).await?;
        Ok(principal)
    }

    /// Clears all data from the session.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

/// CSRF protection session management.
///
/// Tokens are stored during login initiation and validated during the OAuth callback.
pub struct CsrfSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores a CSRF token in the session.
    ///
    /// # Returns
    /// - `Ok(())` - Token successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token from the session.
    ///
    /// Each token can only be used once.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - CSRF token was found and removed
    /// - `Ok(None)` - No CSRF token in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}
