//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned into every handler
//! through axum's state extraction. Every field is cheap to clone.

use oauth2::{basic::BasicClient, EndpointNotSet, EndpointSet};
use sea_orm::DatabaseConnection;

/// OAuth2 client with the authorization and token endpoints configured.
pub(crate) type OAuth2Client =
    BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// HTTP client for the userinfo request and the token exchange.
    ///
    /// Configured without redirects.
    pub http_client: reqwest::Client,

    pub oauth_client: OAuth2Client,

    /// Endpoint returning the `sub` claim of an access token.
    pub userinfo_url: String,

    /// Scopes requested at login.
    pub oauth_scopes: Vec<String>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        userinfo_url: String,
        oauth_scopes: Vec<String>,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            userinfo_url,
            oauth_scopes,
        }
    }
}
