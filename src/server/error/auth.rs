use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{error_response, BAD_REQUEST_EXCEPTION, OAUTH_EXCEPTION},
};

#[derive(Error, Debug)]
pub enum AuthError {
    /// No principal is stored in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Full authentication is required to access this resource")]
    NotAuthenticated,

    /// The caller holds neither the "own" nor the "all" scope of an operation.
    ///
    /// Results in a 403 Forbidden response naming the missing scope.
    #[error("Subject '{subject}' is missing required scope '{scope}'")]
    MissingScope {
        /// Subject of the rejected caller
        subject: String,
        /// The "own" scope of the required pair
        scope: String,
    },

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session. Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// The authorization server rejected the code exchange.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchange(String),

    /// The userinfo response did not contain a subject.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Userinfo response did not contain a subject")]
    MissingSubject,
}

/// Converts authentication errors into HTTP responses.
///
/// Token exchange details are logged at debug level and replaced by a generic
/// message for the client.
///
/// # Returns
/// - 400 Bad Request - For CSRF failures
/// - 401 Unauthorized - For missing sessions and failed logins
/// - 403 Forbidden - For missing scopes
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotAuthenticated => error_response(ErrorDto::new(
                OAUTH_EXCEPTION,
                self.to_string(),
                StatusCode::UNAUTHORIZED,
            )),
            Self::MissingScope { ref scope, .. } => error_response(
                ErrorDto::new(
                    OAUTH_EXCEPTION,
                    "Insufficient scope for this resource",
                    StatusCode::FORBIDDEN,
                )
                .with_cause(format!("missing scope '{}'", scope)),
            ),
            Self::CsrfValidationFailed => error_response(ErrorDto::new(
                BAD_REQUEST_EXCEPTION,
                "There was an issue logging you in, please try again.",
                StatusCode::BAD_REQUEST,
            )),
            Self::TokenExchange(_) | Self::MissingSubject => error_response(ErrorDto::new(
                OAUTH_EXCEPTION,
                "There was an issue logging you in, please try again.",
                StatusCode::UNAUTHORIZED,
            )),
        }
    }
}
