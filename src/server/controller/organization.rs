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
        organization::{CreateOrganizationDto, OrganizationDto, UpdateOrganizationDto},
    },
    server::{
        controller::{extract::{Json, Path, Query}, PaginationParams},
        error::AppError,
        middleware::auth::AuthGuard,
        model::organization::{CreateOrganizationParams, Organization, UpdateOrganizationParams},
        service::organization::OrganizationService,
        state::AppState,
    },
};

/// Tag for grouping organization endpoints in OpenAPI documentation
pub static ORGANIZATION_TAG: &str = "organization";

/// List organizations, ordered by name.
#[utoipa::path(
    get,
    path = "/api/v1/organizations",
    tag = ORGANIZATION_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, zero-based (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("owner" = Option<String>, Query, description = "Owner filter, requires organizations:all:read")
    ),
    responses(
        (status = 200, description = "Page of organizations", body = ApiResponse<Vec<OrganizationDto>>),
        (status = 401, description = "Not logged in", body = ApiResponse<Empty>),
        (status = 403, description = "Missing read scope", body = ApiResponse<Empty>)
    ),
)]
pub async fn get_organizations(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&session).require().await?;

    let page = OrganizationService::new(&state.db, &principal)
        .get_paginated(params.page_request(), params.owner)
        .await?;

    Ok(ApiResponse::from_page(
        StatusCode::OK,
        page.map(Organization::into_dto),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/organizations/{id}",
    tag = ORGANIZATION_TAG,
    params(("id" = Uuid, Path, description = "Organization id")),
    responses(
        (status = 200, description = "The organization", body = ApiResponse<OrganizationDto>),
        (status = 401, description = "Not logged in", body = ApiResponse<Empty>),
        (status = 404, description = "Organization not found", body = ApiResponse<Empty>)
    ),
)]
pub async fn get_organization(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&session).require().await?;

    let organization = OrganizationService::new(&state.db, &principal)
        .get_by_id(id)
        .await?;

    Ok(ApiResponse::ok(organization.into_dto()))
}

/// Create an organization owned by the caller.
///
/// # Returns
/// - `201 Created` - The created organization
/// - `400 Bad Request` - The name is already taken
#[utoipa::path(
    post,
    path = "/api/v1/organizations",
    tag = ORGANIZATION_TAG,
    request_body = CreateOrganizationDto,
    responses(
        (status = 201, description = "Organization created", body = ApiResponse<OrganizationDto>),
        (status = 400, description = "Name already taken", body = ApiResponse<Empty>),
        (status = 401, description = "Not logged in", body = ApiResponse<Empty>),
        (status = 403, description = "Missing write scope", body = ApiResponse<Empty>)
    ),
)]
pub async fn create_organization(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateOrganizationDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&session).require().await?;

    let params = CreateOrganizationParams::from_dto(principal.subject.clone(), payload);

    let organization = OrganizationService::new(&state.db, &principal)
        .create(params)
        .await?;

    Ok(ApiResponse::created(organization.into_dto()))
}

#[utoipa::path(
    put,
    path = "/api/v1/organizations/{id}",
    tag = ORGANIZATION_TAG,
    params(("id" = Uuid, Path, description = "Organization id")),
    request_body = UpdateOrganizationDto,
    responses(
        (status = 200, description = "Organization updated", body = ApiResponse<OrganizationDto>),
        (status = 400, description = "Name already taken", body = ApiResponse<Empty>),
        (status = 401, description = "Not logged in", body = ApiResponse<Empty>),
        (status = 404, description = "Organization not found", body = ApiResponse<Empty>)
    ),
)]
pub async fn update_organization(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateOrganizationDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&session).require().await?;

    let organization = OrganizationService::new(&state.db, &principal)
        .update(id, UpdateOrganizationParams::from_dto(payload))
        .await?;

    Ok(ApiResponse::ok(organization.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/organizations/{id}",
    tag = ORGANIZATION_TAG,
    params(("id" = Uuid, Path, description = "Organization id")),
    responses(
        (status = 200, description = "Organization deleted", body = ApiResponse<Empty>),
        (status = 401, description = "Not logged in", body = ApiResponse<Empty>),
        (status = 404, description = "Organization not found", body = ApiResponse<Empty>)
    ),
)]
pub async fn delete_organization(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&session).require().await?;

    OrganizationService::new(&state.db, &principal)
        .delete(id)
        .await?;

    Ok(ApiResponse::<Empty>::builder(StatusCode::OK)
        .message(format!("Organization with uuid {} deleted", id))
        .build())
}
