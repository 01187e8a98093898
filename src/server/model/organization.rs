//! Organization domain model and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::organization::{CreateOrganizationDto, OrganizationDto, UpdateOrganizationDto},
    server::model::audit::Auditable,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organization {
    pub id: Uuid,
    pub owner: String,
    pub name: String,
    pub description: Option<String>,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Organization {
    pub fn from_entity(entity: entity::organization::Model) -> Self {
        Self {
            id: entity.id,
            owner: entity.owner,
            name: entity.name,
            description: entity.description,
            enabled: entity.enabled,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> OrganizationDto {
        OrganizationDto {
            id: self.id,
            owner: self.owner,
            name: self.name,
            description: self.description,
            enabled: self.enabled,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl Auditable for Organization {
    const ENTITY_TYPE: &'static str = concat!(module_path!(), "::Organization");
    const TYPE_NAME: &'static str = "Organization";

    fn audit_id(&self) -> Uuid {
        self.id
    }

    fn audit_fields(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("owner", Some(self.owner.clone())),
            ("name", Some(self.name.clone())),
            ("description", self.description.clone()),
            ("enabled", Some(self.enabled.to_string())),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct CreateOrganizationParams {
    pub owner: String,
    pub name: String,
    pub description: Option<String>,
    pub enabled: bool,
}

impl CreateOrganizationParams {
    pub fn from_dto(owner: String, dto: CreateOrganizationDto) -> Self {
        Self {
            owner,
            name: dto.name,
            description: dto.description,
            enabled: dto.enabled,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateOrganizationParams {
    pub name: String,
    pub description: Option<String>,
    pub enabled: bool,
}

impl UpdateOrganizationParams {
    pub fn from_dto(dto: UpdateOrganizationDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            enabled: dto.enabled,
        }
    }
}
