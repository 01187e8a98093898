//! Friendship factory for creating test friendship entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test friendships with customizable fields.
pub struct FriendshipFactory<'a> {
    db: &'a DatabaseConnection,
    owner: String,
    friend: String,
    status: String,
}

impl<'a> FriendshipFactory<'a> {
    /// Creates a new FriendshipFactory in `REQUESTED` state.
    pub fn new(
        db: &'a DatabaseConnection,
        owner: impl Into<String>,
        friend: impl Into<String>,
    ) -> Self {
        Self {
            db,
            owner: owner.into(),
            friend: friend.into(),
            status: "REQUESTED".to_string(),
        }
    }

    /// Sets the raw status tag.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the friendship entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::friendship::Model)` - Created friendship entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::friendship::Model, DbErr> {
        let now = Utc::now();
        entity::friendship::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            owner: ActiveValue::Set(self.owner),
            friend: ActiveValue::Set(self.friend),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a requested friendship between `owner` and `friend`.
pub async fn create_friendship(
    db: &DatabaseConnection,
    owner: impl Into<String>,
    friend: impl Into<String>,
) -> Result<entity::friendship::Model, DbErr> {
    FriendshipFactory::new(db, owner, friend).build().await
}
