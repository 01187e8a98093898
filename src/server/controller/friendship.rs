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
        friendship::{CreateFriendshipDto, FriendshipDto, UpdateFriendshipDto},
    },
    server::{
        controller::{extract::{Json, Path, Query}, PaginationParams},
        error::AppError,
        middleware::auth::AuthGuard,
        model::friendship::{CreateFriendshipParams, Friendship},
        service::friendship::FriendshipService,
        state::AppState,
    },
};

/// Tag for grouping friendship endpoints in OpenAPI documentation
pub static FRIENDSHIP_TAG: &str = "friendship";

#[utoipa::path(
    get,
    path = "/api/v1/friendships",
    tag = FRIENDSHIP_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, zero-based (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("owner" = Option<String>, Query, description = "Owner filter, requires friendships:all:read")
    ),
    responses(
        (status = 200, description = "Page of friendships", body = ApiResponse<Vec<FriendshipDto>>),
        (status = 401, description = "Not logged in", body = ApiResponse<Empty>),
        (status = 403, description = "Missing read scope", body = ApiResponse<Empty>)
    ),
)]
pub async fn get_friendships(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&session).require().await?;

    let page = FriendshipService::new(&state.db, &principal)
        .get_paginated(params.page_request(), params.owner)
        .await?;

    Ok(ApiResponse::from_page(
        StatusCode::OK,
        page.map(Friendship::into_dto),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/friendships/{id}",
    tag = FRIENDSHIP_TAG,
    params(("id" = Uuid, Path, description = "Friendship id")),
    responses(
        (status = 200, description = "The friendship", body = ApiResponse<FriendshipDto>),
        (status = 401, description = "Not logged in", body = ApiResponse<Empty>),
        (status = 404, description = "Friendship not found", body = ApiResponse<Empty>)
    ),
)]
pub async fn get_friendship(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&session).require().await?;

    let friendship = FriendshipService::new(&state.db, &principal)
        .get_by_id(id)
        .await?;

    Ok(ApiResponse::ok(friendship.into_dto()))
}

/// Send a friendship request from the caller.
///
/// # Returns
/// - `201 Created` - The created friendship
/// - `400 Bad Request` - Empty friend or the caller themselves
/// - `409 Conflict` - The caller already has a relation with this friend
#[utoipa::path(
    post,
    path = "/api/v1/friendships",
    tag = FRIENDSHIP_TAG,
    request_body = CreateFriendshipDto,
    responses(
        (status = 201, description = "Friendship created", body = ApiResponse<FriendshipDto>),
        (status = 400, description = "Invalid friend", body = ApiResponse<Empty>),
        (status = 401, description = "Not logged in", body = ApiResponse<Empty>),
        (status = 409, description = "Friendship already exists", body = ApiResponse<Empty>)
    ),
)]
pub async fn create_friendship(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateFriendshipDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&session).require().await?;

    let params = CreateFriendshipParams::from_dto(principal.subject.clone(), payload);

    let friendship = FriendshipService::new(&state.db, &principal)
        .create(params)
        .await?;

    Ok(ApiResponse::created(friendship.into_dto()))
}

#[utoipa::path(
    put,
    path = "/api/v1/friendships/{id}",
    tag = FRIENDSHIP_TAG,
    params(("id" = Uuid, Path, description = "Friendship id")),
    request_body = UpdateFriendshipDto,
    responses(
        (status = 200, description = "Friendship updated", body = ApiResponse<FriendshipDto>),
        (status = 401, description = "Not logged in", body = ApiResponse<Empty>),
        (status = 404, description = "Friendship not found", body = ApiResponse<Empty>)
    ),
)]
pub async fn update_friendship(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateFriendshipDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&session).require().await?;

    let friendship = FriendshipService::new(&state.db, &principal)
        .update_status(id, payload.status)
        .await?;

    Ok(ApiResponse::ok(friendship.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/friendships/{id}",
    tag = FRIENDSHIP_TAG,
    params(("id" = Uuid, Path, description = "Friendship id")),
    responses(
        (status = 200, description = "Friendship deleted", body = ApiResponse<Empty>),
        (status = 401, description = "Not logged in", body = ApiResponse<Empty>),
        (status = 404, description = "Friendship not found", body = ApiResponse<Empty>)
    ),
)]
pub async fn delete_friendship(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&session).require().await?;

    FriendshipService::new(&state.db, &principal)
        .delete(id)
        .await?;

    Ok(ApiResponse::<Empty>::builder(StatusCode::OK)
        .message(format!("Friendship with uuid {} deleted", id))
        .build())
}
