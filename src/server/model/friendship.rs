//! Friendship domain model and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::friendship::{CreateFriendshipDto, FriendshipDto, FriendshipStatus},
    server::{error::internal::InternalError, model::audit::Auditable},
};

/// A directed relation from `owner` to `friend`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Friendship {
    pub id: Uuid,
    pub owner: String,
    pub friend: String,
    pub status: FriendshipStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Friendship {
    pub fn from_entity(entity: entity::friendship::Model) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            owner: entity.owner,
            friend: entity.friend,
            status: entity.status.parse()?,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> FriendshipDto {
        FriendshipDto {
            id: self.id,
            owner: self.owner,
            friend: self.friend,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl Auditable for Friendship {
    const ENTITY_TYPE: &'static str = concat!(module_path!(), "::Friendship");
    const TYPE_NAME: &'static str = "Friendship";

    fn audit_id(&self) -> Uuid {
        self.id
    }

    fn audit_fields(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("owner", Some(self.owner.clone())),
            ("friend", Some(self.friend.clone())),
            ("status", Some(self.status.to_string())),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct CreateFriendshipParams {
    pub owner: String,
    pub friend: String,
    pub status: FriendshipStatus,
}

impl CreateFriendshipParams {
    pub fn from_dto(owner: String, dto: CreateFriendshipDto) -> Self {
        Self {
            owner,
            friend: dto.friend,
            status: dto.status.unwrap_or_default(),
        }
    }
}
