//! User profile domain model and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserDto},
    server::model::audit::Auditable,
};

/// Profile attached to an identity provider subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub owner: String,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            owner: entity.owner,
            username: entity.username,
            email: entity.email,
            first_name: entity.first_name,
            last_name: entity.last_name,
            enabled: entity.enabled,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            owner: self.owner,
            username: self.username,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            enabled: self.enabled,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl Auditable for User {
    const ENTITY_TYPE: &'static str = concat!(module_path!(), "::User");
    const TYPE_NAME: &'static str = "User";

    fn audit_id(&self) -> Uuid {
        self.id
    }

    fn audit_fields(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("owner", Some(self.owner.clone())),
            ("username", Some(self.username.clone())),
            ("email", Some(self.email.clone())),
            ("first_name", self.first_name.clone()),
            ("last_name", self.last_name.clone()),
            ("enabled", Some(self.enabled.to_string())),
        ]
    }
}

/// Parameters for creating a profile.
///
/// The owner is resolved by the service from the caller and `subject`.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    /// Requested owner, honoured only for callers holding `users:all:write`.
    pub subject: Option<String>,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl CreateUserParams {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            subject: dto.subject,
            username: dto.username,
            email: dto.email,
            first_name: dto.first_name,
            last_name: dto.last_name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateUserParams {
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub enabled: bool,
}

impl UpdateUserParams {
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            username: dto.username,
            email: dto.email,
            first_name: dto.first_name,
            last_name: dto.last_name,
            enabled: dto.enabled,
        }
    }
}
