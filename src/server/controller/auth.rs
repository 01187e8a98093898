use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, Empty},
        auth::PrincipalDto,
    },
    server::{
        controller::extract::Query,
        error::{auth::AuthError, AppError},
        middleware::{
            auth::AuthGuard,
            session::{AuthSession, CsrfSession},
        },
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Query parameters for the OAuth callback endpoint.
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code to exchange for an access token.
    pub code: String,
}

/// Start the OAuth2 login.
///
/// Stores a CSRF token in the session and redirects to the authorization server.
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to the authorization server")
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(
        &state.http_client,
        &state.oauth_client,
        &state.userinfo_url,
        &state.oauth_scopes,
    );

    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Complete the OAuth2 login.
///
/// Validates the CSRF state, exchanges the code and stores the caller's
/// principal in the session.
///
/// # Returns
/// - `200 OK` - The logged in principal
/// - `400 Bad Request` - CSRF state mismatch
/// - `401 Unauthorized` - Code exchange or userinfo lookup failed
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(
        ("state" = String, Query, description = "CSRF state returned by the authorization server"),
        ("code" = String, Query, description = "Authorization code")
    ),
    responses(
        (status = 200, description = "Logged in", body = ApiResponse<PrincipalDto>),
        (status = 400, description = "CSRF state mismatch", body = ApiResponse<Empty>),
        (status = 401, description = "Login failed", body = ApiResponse<Empty>)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    validate_csrf(&session, &params.state).await?;

    let auth_service = AuthService::new(
        &state.http_client,
        &state.oauth_client,
        &state.userinfo_url,
        &state.oauth_scopes,
    );

    let principal = auth_service.callback(params.code).await?;

    // Drop any previous login before storing the new principal
    session.cycle_id().await?;
    AuthSession::new(&session).set_principal(&principal).await?;

    Ok(ApiResponse::ok(principal.into_dto()))
}

/// Log out by clearing the session.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = ApiResponse<Empty>)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(ApiResponse::<Empty>::builder(StatusCode::OK)
        .message("Logged out")
        .build())
}

/// Get the logged in principal.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The logged in principal", body = ApiResponse<PrincipalDto>),
        (status = 401, description = "Not logged in", body = ApiResponse<Empty>)
    ),
)]
pub async fn me(session: Session) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&session).require().await?;

    Ok(ApiResponse::ok(principal.into_dto()))
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    match stored_state {
        Some(state) if state == csrf_state => Ok(()),
        _ => Err(AuthError::CsrfValidationFailed.into()),
    }
}
