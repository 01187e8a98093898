//! Audit recording and the read-only audit query service.

pub mod diff;
pub mod recorder;

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::audit::AuditRepository,
    error::AppError,
    middleware::scope::AUDITS_READ,
    model::{
        audit::AuditRecord,
        auth::Principal,
        page::{Page, PageRequest},
    },
};

/// Read access to the audit log.
///
/// Callers holding `audits:all:read` see every record; callers holding
/// `audits:read` see the records of their own actions.
pub struct AuditService<'a> {
    db: &'a DatabaseConnection,
    principal: &'a Principal,
}

impl<'a> AuditService<'a> {
    pub fn new(db: &'a DatabaseConnection, principal: &'a Principal) -> Self {
        Self { db, principal }
    }

    /// Gets a page of audit records, newest first.
    ///
    /// # Arguments
    /// - `request` - Page and page size
    /// - `actor` - Requested actor filter, honoured only with `audits:all:read`
    ///
    /// # Returns
    /// - `Ok(Page<AuditRecord>)` - Requested page
    /// - `Err(AppError::AuthErr)` - Caller holds neither audit scope
    pub async fn get_paginated(
        &self,
        request: PageRequest,
        actor: Option<String>,
    ) -> Result<Page<AuditRecord>, AppError> {
        self.principal.require(AUDITS_READ)?;
        let actor = self.principal.resolve_owner_query(AUDITS_READ, actor);

        let repo = AuditRepository::new(self.db);

        let page = match actor {
            Some(actor) => repo
                .find_all_by_actor_paged(request, &actor)
                .await?
                .with_query(format!("actor={}", actor)),
            None => repo.find_all_paged(request).await?,
        };

        Ok(page.try_map(AuditRecord::from_entity)?)
    }

    /// Gets a single audit record.
    ///
    /// # Returns
    /// - `Ok(AuditRecord)` - The record
    /// - `Err(AppError::NotFound)` - No such record visible to the caller
    pub async fn get_by_id(&self, id: Uuid) -> Result<AuditRecord, AppError> {
        let actor = self.principal.require(AUDITS_READ)?;

        let repo = AuditRepository::new(self.db);

        let record = match actor {
            Some(actor) => repo.find_by_id_and_actor(id, &actor).await?,
            None => repo.find_by_id(id).await?,
        }
        .ok_or_else(|| AppError::NotFound(format!("Audit record with uuid {} not found", id)))?;

        Ok(AuditRecord::from_entity(record)?)
    }

    /// Gets the history of one entity, oldest first.
    ///
    /// Callers without `audits:all:read` only see their own actions.
    pub async fn get_by_entity_id(&self, entity_id: Uuid) -> Result<Vec<AuditRecord>, AppError> {
        let actor = self.principal.require(AUDITS_READ)?;

        let records = AuditRepository::new(self.db)
            .find_by_entity_id(entity_id)
            .await?;

        records
            .into_iter()
            .filter(|record| actor.as_deref().is_none_or(|actor| record.actor == actor))
            .map(|record| AuditRecord::from_entity(record).map_err(Into::into))
            .collect()
    }
}
