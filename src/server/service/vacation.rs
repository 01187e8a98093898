use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::audit::AuditOperation,
    server::{
        data::{organization::OrganizationRepository, vacation::VacationRepository},
        error::AppError,
        middleware::scope::{VACATIONS_READ, VACATIONS_WRITE},
        model::{
            auth::Principal,
            page::{Page, PageRequest},
            vacation::{CreateVacationParams, UpdateVacationParams, Vacation},
        },
        service::audit::recorder::AuditRecorder,
    },
};

pub struct VacationService<'a> {
    db: &'a DatabaseConnection,
    principal: &'a Principal,
}

impl<'a> VacationService<'a> {
    pub fn new(db: &'a DatabaseConnection, principal: &'a Principal) -> Self {
        Self { db, principal }
    }

    /// Gets a page of vacations visible to the caller.
    ///
    /// # Arguments
    /// - `request` - Page and page size
    /// - `owner` - Requested owner filter, honoured only with `vacations:all:read`
    ///
    /// # Returns
    /// - `Ok(Page<Vacation>)` - Requested page, tagged with the applied owner filter
    /// - `Err(AppError::AuthErr)` - Caller holds neither read scope
    pub async fn get_paginated(
        &self,
        request: PageRequest,
        owner: Option<String>,
    ) -> Result<Page<Vacation>, AppError> {
        self.principal.require(VACATIONS_READ)?;
        let owner = self.principal.resolve_owner_query(VACATIONS_READ, owner);

        let repo = VacationRepository::new(self.db);

        let page = match owner {
            Some(owner) => repo
                .find_all_by_owner_paged(request, &owner)
                .await?
                .with_query(format!("owner={}", owner)),
            None => repo.find_all_paged(request).await?,
        };

        Ok(page.try_map(Vacation::from_entity)?)
    }

    /// Gets a vacation by id.
    ///
    /// # Returns
    /// - `Ok(Vacation)` - The vacation
    /// - `Err(AppError::NotFound)` - Vacation absent or owned by someone else
    pub async fn get_by_id(&self, id: Uuid) -> Result<Vacation, AppError> {
        let owner = self.principal.require(VACATIONS_READ)?;

        let entity = self.find_visible(id, owner.as_deref()).await?;

        Ok(Vacation::from_entity(entity)?)
    }

    /// Creates a vacation owned by the caller and records the creation.
    ///
    /// # Returns
    /// - `Ok(Vacation)` - The created vacation
    /// - `Err(AppError::Validation)` - Date range inverted or organization unknown
    /// - `Err(AppError::AuthErr)` - Caller holds neither write scope
    pub async fn create(&self, params: CreateVacationParams) -> Result<Vacation, AppError> {
        self.principal.require(VACATIONS_WRITE)?;

        validate_dates(&params.from_date, &params.to_date)?;
        self.validate_organization(params.organization_id).await?;

        let entity = VacationRepository::new(self.db).create(params).await?;
        let vacation = Vacation::from_entity(entity)?;

        AuditRecorder::new(self.db, &self.principal.subject)
            .record(AuditOperation::Create, None, &vacation)
            .await;

        Ok(vacation)
    }

    /// Replaces the mutable fields of a vacation and records the diff.
    ///
    /// # Returns
    /// - `Ok(Vacation)` - The updated vacation
    /// - `Err(AppError::NotFound)` - Vacation absent or owned by someone else
    /// - `Err(AppError::Validation)` - Date range inverted or organization unknown
    pub async fn update(
        &self,
        id: Uuid,
        params: UpdateVacationParams,
    ) -> Result<Vacation, AppError> {
        let owner = self.principal.require(VACATIONS_WRITE)?;

        let existing = self.find_visible(id, owner.as_deref()).await?;

        validate_dates(&params.from_date, &params.to_date)?;
        self.validate_organization(params.organization_id).await?;

        let before = Vacation::from_entity(existing.clone())?;
        let entity = VacationRepository::new(self.db)
            .update(existing, params)
            .await?;
        let after = Vacation::from_entity(entity)?;

        AuditRecorder::new(self.db, &self.principal.subject)
            .record(AuditOperation::Update, Some(&before), &after)
            .await;

        Ok(after)
    }

    /// Deletes a vacation and records the deletion.
    ///
    /// # Returns
    /// - `Ok(())` - Vacation deleted
    /// - `Err(AppError::NotFound)` - Vacation absent or owned by someone else
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let owner = self.principal.require(VACATIONS_WRITE)?;

        let existing = self.find_visible(id, owner.as_deref()).await?;
        let vacation = Vacation::from_entity(existing)?;

        let repo = VacationRepository::new(self.db);
        let deleted = match owner {
            Some(owner) => repo.delete_by_id_and_owner(id, &owner).await?,
            None => repo.delete_by_id(id).await?,
        };

        if deleted == 0 {
            return Err(not_found(id));
        }

        AuditRecorder::new(self.db, &self.principal.subject)
            .record(AuditOperation::Delete, None, &vacation)
            .await;

        Ok(())
    }

    async fn find_visible(
        &self,
        id: Uuid,
        owner: Option<&str>,
    ) -> Result<entity::vacation::Model, AppError> {
        let repo = VacationRepository::new(self.db);

        let entity = match owner {
            Some(owner) => repo.find_by_id_and_owner(id, owner).await?,
            None => repo.find_by_id(id).await?,
        };

        entity.ok_or_else(|| not_found(id))
    }

    async fn validate_organization(&self, organization_id: Option<Uuid>) -> Result<(), AppError> {
        let Some(organization_id) = organization_id else {
            return Ok(());
        };

        if !OrganizationRepository::new(self.db)
            .exists(organization_id)
            .await?
        {
            return Err(AppError::Validation {
                field: "organizationId".to_string(),
                message: format!("Organization with uuid {} does not exist", organization_id),
            });
        }

        Ok(())
    }
}

fn validate_dates(from_date: &chrono::NaiveDate, to_date: &chrono::NaiveDate) -> Result<(), AppError> {
    if to_date < from_date {
        return Err(AppError::Validation {
            field: "toDate".to_string(),
            message: "toDate must not be before fromDate".to_string(),
        });
    }
    Ok(())
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Vacation with uuid {} not found", id))
}
