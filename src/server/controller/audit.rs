use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    model::{
        api::{ApiResponse, Empty},
        audit::AuditDto,
    },
    server::{
        controller::extract::{Path, Query},
        error::AppError,
        middleware::auth::AuthGuard,
        model::{audit::AuditRecord, page::PageRequest},
        service::audit::AuditService,
        state::AppState,
    },
};

/// Tag for grouping audit endpoints in OpenAPI documentation
pub static AUDIT_TAG: &str = "audit";

#[derive(Debug, Deserialize)]
pub struct AuditQueryParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    /// Actor filter, honoured only for callers holding `audits:all:read`.
    pub actor: Option<String>,
}

fn default_per_page() -> u64 {
    PageRequest::DEFAULT_PER_PAGE
}

/// List audit records, newest first.
///
/// Callers holding `audits:read` see records of their own actions; callers
/// holding `audits:all:read` see every record and may filter by `actor`.
#[utoipa::path(
    get,
    path = "/api/v1/audits",
    tag = AUDIT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, zero-based (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("actor" = Option<String>, Query, description = "Actor filter, requires audits:all:read")
    ),
    responses(
        (status = 200, description = "Page of audit records", body = ApiResponse<Vec<AuditDto>>),
        (status = 401, description = "Not logged in", body = ApiResponse<Empty>),
        (status = 403, description = "Missing audit scope", body = ApiResponse<Empty>)
    ),
)]
pub async fn get_audits(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<AuditQueryParams>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&session).require().await?;

    let page = AuditService::new(&state.db, &principal)
        .get_paginated(PageRequest::new(params.page, params.per_page), params.actor)
        .await?;

    Ok(ApiResponse::from_page(
        StatusCode::OK,
        page.map(AuditRecord::into_dto),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/audits/{id}",
    tag = AUDIT_TAG,
    params(("id" = Uuid, Path, description = "Audit record id")),
    responses(
        (status = 200, description = "The audit record", body = ApiResponse<AuditDto>),
        (status = 401, description = "Not logged in", body = ApiResponse<Empty>),
        (status = 404, description = "Audit record not found", body = ApiResponse<Empty>)
    ),
)]
pub async fn get_audit(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&session).require().await?;

    let record = AuditService::new(&state.db, &principal)
        .get_by_id(id)
        .await?;

    Ok(ApiResponse::ok(record.into_dto()))
}

/// History of one entity, oldest first.
#[utoipa::path(
    get,
    path = "/api/v1/audits/entity/{entity_id}",
    tag = AUDIT_TAG,
    params(("entity_id" = Uuid, Path, description = "Id of the audited entity")),
    responses(
        (status = 200, description = "Audit records of the entity", body = ApiResponse<Vec<AuditDto>>),
        (status = 401, description = "Not logged in", body = ApiResponse<Empty>),
        (status = 403, description = "Missing audit scope", body = ApiResponse<Empty>)
    ),
)]
pub async fn get_entity_audits(
    State(state): State<AppState>,
    session: Session,
    Path(entity_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&session).require().await?;

    let records = AuditService::new(&state.db, &principal)
        .get_by_entity_id(entity_id)
        .await?;

    let dtos: Vec<AuditDto> = records.into_iter().map(AuditRecord::into_dto).collect();

    Ok(ApiResponse::ok(dtos))
}
