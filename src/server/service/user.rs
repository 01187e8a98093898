use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::audit::AuditOperation,
    server::{
        data::user::UserRepository,
        error::AppError,
        middleware::scope::{USERS_READ, USERS_WRITE},
        model::{
            auth::Principal,
            page::{Page, PageRequest},
            user::{CreateUserParams, UpdateUserParams, User},
        },
        service::audit::recorder::AuditRecorder,
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    principal: &'a Principal,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection, principal: &'a Principal) -> Self {
        Self { db, principal }
    }

    pub async fn get_paginated(
        &self,
        request: PageRequest,
        owner: Option<String>,
    ) -> Result<Page<User>, AppError> {
        self.principal.require(USERS_READ)?;
        let owner = self.principal.resolve_owner_query(USERS_READ, owner);

        let repo = UserRepository::new(self.db);

        let page = match owner {
            Some(owner) => repo
                .find_all_by_owner_paged(request, &owner)
                .await?
                .with_query(format!("owner={}", owner)),
            None => repo.find_all_paged(request).await?,
        };

        Ok(page.map(User::from_entity))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<User, AppError> {
        let owner = self.principal.require(USERS_READ)?;

        let entity = self.find_visible(id, owner.as_deref()).await?;

        Ok(User::from_entity(entity))
    }

    /// Gets the caller's own profile.
    ///
    /// # Returns
    /// - `Ok(User)` - The oldest profile owned by the caller
    /// - `Err(AppError::NotFound)` - The caller has no profile yet
    pub async fn get_current(&self) -> Result<User, AppError> {
        self.principal.require(USERS_READ)?;

        let entity = UserRepository::new(self.db)
            .find_first_by_owner(&self.principal.subject)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "No user profile for subject '{}'",
                    self.principal.subject
                ))
            })?;

        Ok(User::from_entity(entity))
    }

    /// Creates a profile.
    ///
    /// The profile belongs to the caller unless the caller holds `users:all:write`
    /// and names another subject.
    ///
    /// # Returns
    /// - `Ok(User)` - The created profile
    /// - `Err(AppError::BadRequest)` - The username is already taken
    pub async fn create(&self, mut params: CreateUserParams) -> Result<User, AppError> {
        self.principal.require(USERS_WRITE)?;

        let requested = params.subject.take().filter(|s| !s.is_empty());
        let owner = match requested {
            Some(subject) if self.principal.can_act_on_all(USERS_WRITE) => subject,
            _ => self.principal.subject.clone(),
        };

        let repo = UserRepository::new(self.db);

        if repo.find_by_username(&params.username).await?.is_some() {
            return Err(username_taken(&params.username));
        }

        let user = User::from_entity(repo.create(owner, params).await?);

        AuditRecorder::new(self.db, &self.principal.subject)
            .record(AuditOperation::Create, None, &user)
            .await;

        Ok(user)
    }

    pub async fn update(&self, id: Uuid, params: UpdateUserParams) -> Result<User, AppError> {
        let owner = self.principal.require(USERS_WRITE)?;

        let existing = self.find_visible(id, owner.as_deref()).await?;

        let repo = UserRepository::new(self.db);

        if let Some(other) = repo.find_by_username(&params.username).await? {
            if other.id != id {
                return Err(username_taken(&params.username));
            }
        }

        let before = User::from_entity(existing.clone());
        let after = User::from_entity(repo.update(existing, params).await?);

        AuditRecorder::new(self.db, &self.principal.subject)
            .record(AuditOperation::Update, Some(&before), &after)
            .await;

        Ok(after)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let owner = self.principal.require(USERS_WRITE)?;

        let user = User::from_entity(self.find_visible(id, owner.as_deref()).await?);

        let repo = UserRepository::new(self.db);
        let deleted = match owner {
            Some(owner) => repo.delete_by_id_and_owner(id, &owner).await?,
            None => repo.delete_by_id(id).await?,
        };

        if deleted == 0 {
            return Err(not_found(id));
        }

        AuditRecorder::new(self.db, &self.principal.subject)
            .record(AuditOperation::Delete, None, &user)
            .await;

        Ok(())
    }

    async fn find_visible(
        &self,
        id: Uuid,
        owner: Option<&str>,
    ) -> Result<entity::user::Model, AppError> {
        let repo = UserRepository::new(self.db);

        let entity = match owner {
            Some(owner) => repo.find_by_id_and_owner(id, owner).await?,
            None => repo.find_by_id(id).await?,
        };

        entity.ok_or_else(|| not_found(id))
    }
}

fn username_taken(username: &str) -> AppError {
    AppError::BadRequest(format!("User with username '{}' already exists", username))
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("User with uuid {} not found", id))
}
