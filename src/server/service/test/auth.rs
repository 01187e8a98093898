use crate::server::{
    config::Config, service::auth::AuthService, startup::setup_oauth_client,
};

fn config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        oauth_client_id: "planner".to_string(),
        oauth_client_secret: "secret".to_string(),
        oauth_redirect_url: "http://localhost:8080/api/auth/callback".to_string(),
        oauth_auth_url: "https://auth.example.com/oauth2/authorize".to_string(),
        oauth_token_url: "https://auth.example.com/oauth2/token".to_string(),
        oauth_userinfo_url: "https://auth.example.com/userinfo".to_string(),
        oauth_scopes: vec!["openid".to_string(), "vacations:read".to_string()],
        bind_address: "127.0.0.1:0".to_string(),
        log_level: "info".to_string(),
    }
}

/// Tests the authorization URL built for login.
///
/// Expected: URL on the authorization endpoint carrying client id, scopes and CSRF state
#[test]
fn login_url_requests_configured_scopes() {
    let config = config();
    let oauth_client = setup_oauth_client(&config).unwrap();
    let http_client = reqwest::Client::new();

    let service = AuthService::new(
        &http_client,
        &oauth_client,
        &config.oauth_userinfo_url,
        &config.oauth_scopes,
    );
    let (url, csrf_token) = service.login_url();

    assert_eq!(url.host_str(), Some("auth.example.com"));
    assert_eq!(url.path(), "/oauth2/authorize");

    let query: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    let value = |key: &str| {
        query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    };

    assert_eq!(value("client_id").as_deref(), Some("planner"));
    assert_eq!(value("scope").as_deref(), Some("openid vacations:read"));
    assert_eq!(value("state").as_deref(), Some(csrf_token.secret().as_str()));
}

/// Tests a malformed endpoint URL in configuration.
///
/// Expected: Err(ConfigErr)
#[test]
fn setup_rejects_invalid_url() {
    let mut config = config();
    config.oauth_token_url = "not a url".to_string();

    assert!(matches!(
        setup_oauth_client(&config),
        Err(crate::server::error::AppError::ConfigErr(_))
    ));
}
