//! OAuth2 authorization-code login.

use oauth2::{url::Url, AuthorizationCode, CsrfToken, Scope, TokenResponse};
use serde::Deserialize;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::auth::Principal,
    state::OAuth2Client,
};

/// Claims read from the userinfo endpoint.
#[derive(Debug, Deserialize)]
struct UserInfo {
    sub: Option<String>,
}

pub struct AuthService<'a> {
    http_client: &'a reqwest::Client,
    oauth_client: &'a OAuth2Client,
    userinfo_url: &'a str,
    scopes: &'a [String],
}

impl<'a> AuthService<'a> {
    pub fn new(
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        userinfo_url: &'a str,
        scopes: &'a [String],
    ) -> Self {
        Self {
            http_client,
            oauth_client,
            userinfo_url,
            scopes,
        }
    }

    /// Builds the authorization URL requesting the configured scopes.
    ///
    /// # Returns
    /// The URL to redirect to and the CSRF token to store in the session
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scopes(self.scopes.iter().cloned().map(Scope::new))
            .url()
    }

    /// Exchanges an authorization code and resolves the caller.
    ///
    /// Granted scopes come from the token response. When the authorization server
    /// omits them, the requested scopes are assumed granted.
    ///
    /// # Arguments
    /// - `code` - Authorization code from the callback query
    ///
    /// # Returns
    /// - `Ok(Principal)` - Subject and granted scopes
    /// - `Err(AppError::AuthErr(AuthError::TokenExchange))` - Code exchange rejected
    /// - `Err(AppError::AuthErr(AuthError::MissingSubject))` - Userinfo has no `sub`
    /// - `Err(AppError::ReqwestErr)` - Userinfo request failed
    pub async fn callback(&self, code: String) -> Result<Principal, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let scopes: Vec<String> = match token.scopes() {
            Some(granted) => granted.iter().map(|s| (**s).clone()).collect(),
            None => self.scopes.to_vec(),
        };

        let subject = self.fetch_subject(token.access_token().secret()).await?;

        tracing::info!("Logged in '{}' with {} scopes", subject, scopes.len());

        Ok(Principal::new(subject, scopes))
    }

    async fn fetch_subject(&self, access_token: &str) -> Result<String, AppError> {
        let user_info = self
            .http_client
            .get(self.userinfo_url)
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<UserInfo>()
            .await?;

        user_info
            .sub
            .filter(|sub| !sub.is_empty())
            .ok_or_else(|| AuthError::MissingSubject.into())
    }
}
