use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::{audit::AuditOperation, friendship::FriendshipStatus},
    server::{
        data::friendship::FriendshipRepository,
        error::AppError,
        middleware::scope::{FRIENDSHIPS_READ, FRIENDSHIPS_WRITE},
        model::{
            auth::Principal,
            friendship::{CreateFriendshipParams, Friendship},
            page::{Page, PageRequest},
        },
        service::audit::recorder::AuditRecorder,
    },
};

pub struct FriendshipService<'a> {
    db: &'a DatabaseConnection,
    principal: &'a Principal,
}

impl<'a> FriendshipService<'a> {
    pub fn new(db: &'a DatabaseConnection, principal: &'a Principal) -> Self {
        Self { db, principal }
    }

    pub async fn get_paginated(
        &self,
        request: PageRequest,
        owner: Option<String>,
    ) -> Result<Page<Friendship>, AppError> {
        self.principal.require(FRIENDSHIPS_READ)?;
        let owner = self.principal.resolve_owner_query(FRIENDSHIPS_READ, owner);

        let repo = FriendshipRepository::new(self.db);

        let page = match owner {
            Some(owner) => repo
                .find_all_by_owner_paged(request, &owner)
                .await?
                .with_query(format!("owner={}", owner)),
            None => repo.find_all_paged(request).await?,
        };

        Ok(page.try_map(Friendship::from_entity)?)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Friendship, AppError> {
        let owner = self.principal.require(FRIENDSHIPS_READ)?;

        let entity = self.find_visible(id, owner.as_deref()).await?;

        Ok(Friendship::from_entity(entity)?)
    }

    /// Creates a friendship from the caller to `params.friend`.
    ///
    /// # Returns
    /// - `Ok(Friendship)` - The created friendship
    /// - `Err(AppError::Validation)` - Friend is empty or the caller themselves
    /// - `Err(AppError::Conflict)` - The relation already exists
    pub async fn create(&self, params: CreateFriendshipParams) -> Result<Friendship, AppError> {
        self.principal.require(FRIENDSHIPS_WRITE)?;

        if params.friend.trim().is_empty() {
            return Err(AppError::Validation {
                field: "friend".to_string(),
                message: "friend must not be empty".to_string(),
            });
        }

        if params.friend == params.owner {
            return Err(AppError::Validation {
                field: "friend".to_string(),
                message: "You cannot befriend yourself".to_string(),
            });
        }

        let repo = FriendshipRepository::new(self.db);

        if repo
            .find_by_owner_and_friend(&params.owner, &params.friend)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(format!(
                "Friendship with '{}' already exists",
                params.friend
            )));
        }

        let friendship = Friendship::from_entity(repo.create(params).await?)?;

        AuditRecorder::new(self.db, &self.principal.subject)
            .record(AuditOperation::Create, None, &friendship)
            .await;

        Ok(friendship)
    }

    /// Changes the status of a friendship.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: FriendshipStatus,
    ) -> Result<Friendship, AppError> {
        let owner = self.principal.require(FRIENDSHIPS_WRITE)?;

        let existing = self.find_visible(id, owner.as_deref()).await?;

        let before = Friendship::from_entity(existing.clone())?;
        let after = Friendship::from_entity(
            FriendshipRepository::new(self.db)
                .update_status(existing, status)
                .await?,
        )?;

        AuditRecorder::new(self.db, &self.principal.subject)
            .record(AuditOperation::Update, Some(&before), &after)
            .await;

        Ok(after)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let owner = self.principal.require(FRIENDSHIPS_WRITE)?;

        let friendship = Friendship::from_entity(self.find_visible(id, owner.as_deref()).await?)?;

        let repo = FriendshipRepository::new(self.db);
        let deleted = match owner {
            Some(owner) => repo.delete_by_id_and_owner(id, &owner).await?,
            None => repo.delete_by_id(id).await?,
        };

        if deleted == 0 {
            return Err(not_found(id));
        }

        AuditRecorder::new(self.db, &self.principal.subject)
            .record(AuditOperation::Delete, None, &friendship)
            .await;

        Ok(())
    }

    async fn find_visible(
        &self,
        id: Uuid,
        owner: Option<&str>,
    ) -> Result<entity::friendship::Model, AppError> {
        let repo = FriendshipRepository::new(self.db);

        let entity = match owner {
            Some(owner) => repo.find_by_id_and_owner(id, owner).await?,
            None => repo.find_by_id(id).await?,
        };

        entity.ok_or_else(|| not_found(id))
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Friendship with uuid {} not found", id))
}
