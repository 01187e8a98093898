use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::audit::AuditOperation,
    server::{
        data::{organization::OrganizationRepository, vacation::VacationRepository},
        error::AppError,
        middleware::scope::{ORGANIZATIONS_READ, ORGANIZATIONS_WRITE},
        model::{
            auth::Principal,
            organization::{CreateOrganizationParams, Organization, UpdateOrganizationParams},
            page::{Page, PageRequest},
            vacation::Vacation,
        },
        service::audit::recorder::AuditRecorder,
    },
};

pub struct OrganizationService<'a> {
    db: &'a DatabaseConnection,
    principal: &'a Principal,
}

impl<'a> OrganizationService<'a> {
    pub fn new(db: &'a DatabaseConnection, principal: &'a Principal) -> Self {
        Self { db, principal }
    }

    /// Gets a page of organizations visible to the caller, ordered by name.
    pub async fn get_paginated(
        &self,
        request: PageRequest,
        owner: Option<String>,
    ) -> Result<Page<Organization>, AppError> {
        self.principal.require(ORGANIZATIONS_READ)?;
        let owner = self.principal.resolve_owner_query(ORGANIZATIONS_READ, owner);

        let repo = OrganizationRepository::new(self.db);

        let page = match owner {
            Some(owner) => repo
                .find_all_by_owner_paged(request, &owner)
                .await?
                .with_query(format!("owner={}", owner)),
            None => repo.find_all_paged(request).await?,
        };

        Ok(page.map(Organization::from_entity))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Organization, AppError> {
        let owner = self.principal.require(ORGANIZATIONS_READ)?;

        let entity = self.find_visible(id, owner.as_deref()).await?;

        Ok(Organization::from_entity(entity))
    }

    /// Creates an organization owned by the caller.
    ///
    /// # Returns
    /// - `Ok(Organization)` - The created organization
    /// - `Err(AppError::BadRequest)` - The name is already taken
    pub async fn create(&self, params: CreateOrganizationParams) -> Result<Organization, AppError> {
        self.principal.require(ORGANIZATIONS_WRITE)?;

        let repo = OrganizationRepository::new(self.db);

        if repo.find_by_name(&params.name).await?.is_some() {
            return Err(name_taken(&params.name));
        }

        let organization = Organization::from_entity(repo.create(params).await?);

        AuditRecorder::new(self.db, &self.principal.subject)
            .record(AuditOperation::Create, None, &organization)
            .await;

        Ok(organization)
    }

    /// Updates an organization, keeping its name unique.
    ///
    /// # Returns
    /// - `Ok(Organization)` - The updated organization
    /// - `Err(AppError::NotFound)` - Organization absent or owned by someone else
    /// - `Err(AppError::BadRequest)` - The new name belongs to another organization
    pub async fn update(
        &self,
        id: Uuid,
        params: UpdateOrganizationParams,
    ) -> Result<Organization, AppError> {
        let owner = self.principal.require(ORGANIZATIONS_WRITE)?;

        let existing = self.find_visible(id, owner.as_deref()).await?;

        let repo = OrganizationRepository::new(self.db);

        if let Some(other) = repo.find_by_name(&params.name).await? {
            if other.id != id {
                return Err(name_taken(&params.name));
            }
        }

        let before = Organization::from_entity(existing.clone());
        let after = Organization::from_entity(repo.update(existing, params).await?);

        AuditRecorder::new(self.db, &self.principal.subject)
            .record(AuditOperation::Update, Some(&before), &after)
            .await;

        Ok(after)
    }

    /// Deletes an organization.
    ///
    /// Vacations linked to it lose the link first; each unlink is recorded as an
    /// update of the vacation.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let owner = self.principal.require(ORGANIZATIONS_WRITE)?;

        let organization = Organization::from_entity(self.find_visible(id, owner.as_deref()).await?);

        self.unlink_vacations(id).await?;

        let repo = OrganizationRepository::new(self.db);
        let deleted = match owner {
            Some(owner) => repo.delete_by_id_and_owner(id, &owner).await?,
            None => repo.delete_by_id(id).await?,
        };

        if deleted == 0 {
            return Err(not_found(id));
        }

        AuditRecorder::new(self.db, &self.principal.subject)
            .record(AuditOperation::Delete, None, &organization)
            .await;

        Ok(())
    }

    async fn unlink_vacations(&self, organization_id: Uuid) -> Result<(), AppError> {
        let repo = VacationRepository::new(self.db);
        let recorder = AuditRecorder::new(self.db, &self.principal.subject);

        for linked in repo.find_all_by_organization_id(organization_id).await? {
            let before = Vacation::from_entity(linked.clone())?;
            let after = Vacation::from_entity(repo.clear_organization(linked).await?)?;

            recorder
                .record(AuditOperation::Update, Some(&before), &after)
                .await;
        }

        Ok(())
    }

    async fn find_visible(
        &self,
        id: Uuid,
        owner: Option<&str>,
    ) -> Result<entity::organization::Model, AppError> {
        let repo = OrganizationRepository::new(self.db);

        let entity = match owner {
            Some(owner) => repo.find_by_id_and_owner(id, owner).await?,
            None => repo.find_by_id(id).await?,
        };

        entity.ok_or_else(|| not_found(id))
    }
}

fn name_taken(name: &str) -> AppError {
    AppError::BadRequest(format!("Organization with name '{}' already exists", name))
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Organization with uuid {} not found", id))
}
