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
        vacation::{CreateVacationDto, UpdateVacationDto, VacationDto},
    },
    server::{
        controller::{extract::{Json, Path, Query}, PaginationParams},
        error::AppError,
        middleware::auth::AuthGuard,
        model::vacation::{CreateVacationParams, UpdateVacationParams, Vacation},
        service::vacation::VacationService,
        state::AppState,
    },
};

/// Tag for grouping vacation endpoints in OpenAPI documentation
pub static VACATION_TAG: &str = "vacation";

/// List vacations.
///
/// Callers holding `vacations:read` see their own vacations; callers holding
/// `vacations:all:read` see every vacation and may filter by `owner`.
///
/// # Returns
/// - `200 OK` - Page of vacations with pagination metadata
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Missing read scope
#[utoipa::path(
    get,
    path = "/api/v1/vacations",
    tag = VACATION_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, zero-based (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("owner" = Option<String>, Query, description = "Owner filter, requires vacations:all:read")
    ),
    responses(
        (status = 200, description = "Page of vacations", body = ApiResponse<Vec<VacationDto>>),
        (status = 401, description = "Not logged in", body = ApiResponse<Empty>),
        (status = 403, description = "Missing read scope", body = ApiResponse<Empty>)
    ),
)]
pub async fn get_vacations(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&session).require().await?;

    let page = VacationService::new(&state.db, &principal)
        .get_paginated(params.page_request(), params.owner)
        .await?;

    Ok(ApiResponse::from_page(
        StatusCode::OK,
        page.map(Vacation::into_dto),
    ))
}

/// Get a single vacation.
///
/// # Returns
/// - `200 OK` - The vacation
/// - `404 Not Found` - Vacation absent or not visible to the caller
#[utoipa::path(
    get,
    path = "/api/v1/vacations/{id}",
    tag = VACATION_TAG,
    params(("id" = Uuid, Path, description = "Vacation id")),
    responses(
        (status = 200, description = "The vacation", body = ApiResponse<VacationDto>),
        (status = 401, description = "Not logged in", body = ApiResponse<Empty>),
        (status = 403, description = "Missing read scope", body = ApiResponse<Empty>),
        (status = 404, description = "Vacation not found", body = ApiResponse<Empty>)
    ),
)]
pub async fn get_vacation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&session).require().await?;

    let vacation = VacationService::new(&state.db, &principal)
        .get_by_id(id)
        .await?;

    Ok(ApiResponse::ok(vacation.into_dto()))
}

/// Create a vacation owned by the caller.
///
/// # Returns
/// - `201 Created` - The created vacation
/// - `400 Bad Request` - Inverted date range or unknown organization
#[utoipa::path(
    post,
    path = "/api/v1/vacations",
    tag = VACATION_TAG,
    request_body = CreateVacationDto,
    responses(
        (status = 201, description = "Vacation created", body = ApiResponse<VacationDto>),
        (status = 400, description = "Invalid vacation data", body = ApiResponse<Empty>),
        (status = 401, description = "Not logged in", body = ApiResponse<Empty>),
        (status = 403, description = "Missing write scope", body = ApiResponse<Empty>)
    ),
)]
pub async fn create_vacation(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateVacationDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&session).require().await?;

    let params = CreateVacationParams::from_dto(principal.subject.clone(), payload);

    let vacation = VacationService::new(&state.db, &principal)
        .create(params)
        .await?;

    Ok(ApiResponse::created(vacation.into_dto()))
}

/// Replace the mutable fields of a vacation.
///
/// # Returns
/// - `200 OK` - The updated vacation
/// - `400 Bad Request` - Inverted date range or unknown organization
/// - `404 Not Found` - Vacation absent or not visible to the caller
#[utoipa::path(
    put,
    path = "/api/v1/vacations/{id}",
    tag = VACATION_TAG,
    params(("id" = Uuid, Path, description = "Vacation id")),
    request_body = UpdateVacationDto,
    responses(
        (status = 200, description = "Vacation updated", body = ApiResponse<VacationDto>),
        (status = 400, description = "Invalid vacation data", body = ApiResponse<Empty>),
        (status = 401, description = "Not logged in", body = ApiResponse<Empty>),
        (status = 403, description = "Missing write scope", body = ApiResponse<Empty>),
        (status = 404, description = "Vacation not found", body = ApiResponse<Empty>)
    ),
)]
pub async fn update_vacation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateVacationDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&session).require().await?;

    let vacation = VacationService::new(&state.db, &principal)
        .update(id, UpdateVacationParams::from_dto(payload))
        .await?;

    Ok(ApiResponse::ok(vacation.into_dto()))
}

/// Delete a vacation.
///
/// # Returns
/// - `200 OK` - Vacation deleted, no data
/// - `404 Not Found` - Vacation absent or not visible to the caller
#[utoipa::path(
    delete,
    path = "/api/v1/vacations/{id}",
    tag = VACATION_TAG,
    params(("id" = Uuid, Path, description = "Vacation id")),
    responses(
        (status = 200, description = "Vacation deleted", body = ApiResponse<Empty>),
        (status = 401, description = "Not logged in", body = ApiResponse<Empty>),
        (status = 403, description = "Missing write scope", body = ApiResponse<Empty>),
        (status = 404, description = "Vacation not found", body = ApiResponse<Empty>)
    ),
)]
pub async fn delete_vacation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&session).require().await?;

    VacationService::new(&state.db, &principal)
        .delete(id)
        .await?;

    Ok(ApiResponse::<Empty>::builder(StatusCode::OK)
        .message(format!("Vacation with uuid {} deleted", id))
        .build())
}
