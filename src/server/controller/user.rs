use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    model::{
        api::{ApiResponse, Empty},
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        controller::{extract::{Json, Path, Query}, PaginationParams},
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::{CreateUserParams, UpdateUserParams, User},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = USER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, zero-based (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("owner" = Option<String>, Query, description = "Owner filter, requires users:all:read")
    ),
    responses(
        (status = 200, description = "Page of user profiles", body = ApiResponse<Vec<UserDto>>),
        (status = 401, description = "Not logged in", body = ApiResponse<Empty>),
        (status = 403, description = "Missing read scope", body = ApiResponse<Empty>)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&session).require().await?;

    let page = UserService::new(&state.db, &principal)
        .get_paginated(params.page_request(), params.owner)
        .await?;

    Ok(ApiResponse::from_page(StatusCode::OK, page.map(User::into_dto)))
}

/// Get the caller's own profile.
///
/// # Returns
/// - `200 OK` - The oldest profile owned by the caller
/// - `404 Not Found` - The caller has not created a profile yet
#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "The caller's profile", body = ApiResponse<UserDto>),
        (status = 401, description = "Not logged in", body = ApiResponse<Empty>),
        (status = 404, description = "No profile yet", body = ApiResponse<Empty>)
    ),
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&session).require().await?;

    let user = UserService::new(&state.db, &principal)
        .get_current()
        .await?;

    Ok(ApiResponse::ok(user.into_dto()))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "The user profile", body = ApiResponse<UserDto>),
        (status = 401, description = "Not logged in", body = ApiResponse<Empty>),
        (status = 404, description = "User not found", body = ApiResponse<Empty>)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&session).require().await?;

    let user = UserService::new(&state.db, &principal)
        .get_by_id(id)
        .await?;

    Ok(ApiResponse::ok(user.into_dto()))
}

/// Create a user profile.
///
/// The profile belongs to the caller. Callers holding `users:all:write` may pass
/// `subject` to create a profile for someone else.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Profile created", body = ApiResponse<UserDto>),
        (status = 400, description = "Username already taken", body = ApiResponse<Empty>),
        (status = 401, description = "Not logged in", body = ApiResponse<Empty>),
        (status = 403, description = "Missing write scope", body = ApiResponse<Empty>)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&session).require().await?;

    let user = UserService::new(&state.db, &principal)
        .create(CreateUserParams::from_dto(payload))
        .await?;

    Ok(ApiResponse::created(user.into_dto()))
}

#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(("id" = Uuid, Path, description = "User id")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Profile updated", body = ApiResponse<UserDto>),
        (status = 400, description = "Username already taken", body = ApiResponse<Empty>),
        (status = 401, description = "Not logged in", body = ApiResponse<Empty>),
        (status = 404, description = "User not found", body = ApiResponse<Empty>)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&session).require().await?;

    let user = UserService::new(&state.db, &principal)
        .update(id, UpdateUserParams::from_dto(payload))
        .await?;

    Ok(ApiResponse::ok(user.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "Profile deleted", body = ApiResponse<Empty>),
        (status = 401, description = "Not logged in", body = ApiResponse<Empty>),
        (status = 404, description = "User not found", body = ApiResponse<Empty>)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&session).require().await?;

    UserService::new(&state.db, &principal).delete(id).await?;

    Ok(ApiResponse::<Empty>::builder(StatusCode::OK)
        .message(format!("User with uuid {} deleted", id))
        .build())
}
