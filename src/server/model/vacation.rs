//! Vacation domain model and parameters.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::{
    model::vacation::{CreateVacationDto, UpdateVacationDto, VacationDto, VacationStatus},
    server::{error::internal::InternalError, model::audit::Auditable},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vacation {
    pub id: Uuid,
    pub owner: String,
    pub name: String,
    pub description: Option<String>,
    pub status: VacationStatus,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub organization_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vacation {
    /// Converts an entity model to the domain model.
    ///
    /// # Returns
    /// - `Ok(Vacation)` - Converted vacation
    /// - `Err(InternalError::UnknownVariant)` - Stored status is not recognised
    pub fn from_entity(entity: entity::vacation::Model) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            owner: entity.owner,
            name: entity.name,
            description: entity.description,
            status: entity.status.parse()?,
            from_date: entity.from_date,
            to_date: entity.to_date,
            organization_id: entity.organization_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> VacationDto {
        VacationDto {
            id: self.id,
            owner: self.owner,
            name: self.name,
            description: self.description,
            status: self.status,
            from_date: self.from_date,
            to_date: self.to_date,
            organization_id: self.organization_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl Auditable for Vacation {
    const ENTITY_TYPE: &'static str = concat!(module_path!(), "::Vacation");
    const TYPE_NAME: &'static str = "Vacation";

    fn audit_id(&self) -> Uuid {
        self.id
    }

    fn audit_fields(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("owner", Some(self.owner.clone())),
            ("name", Some(self.name.clone())),
            ("description", self.description.clone()),
            ("status", Some(self.status.to_string())),
            ("from_date", Some(self.from_date.to_string())),
            ("to_date", Some(self.to_date.to_string())),
            (
                "organization_id",
                self.organization_id.map(|id| id.to_string()),
            ),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct CreateVacationParams {
    pub owner: String,
    pub name: String,
    pub description: Option<String>,
    pub status: VacationStatus,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub organization_id: Option<Uuid>,
}

impl CreateVacationParams {
    /// Builds parameters from a request body on behalf of `owner`.
    pub fn from_dto(owner: String, dto: CreateVacationDto) -> Self {
        Self {
            owner,
            name: dto.name,
            description: dto.description,
            status: dto.status.unwrap_or_default(),
            from_date: dto.from_date,
            to_date: dto.to_date,
            organization_id: dto.organization_id,
        }
    }
}

/// Replacement values for every mutable field of a vacation.
#[derive(Debug, Clone)]
pub struct UpdateVacationParams {
    pub name: String,
    pub description: Option<String>,
    pub status: VacationStatus,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub organization_id: Option<Uuid>,
}

impl UpdateVacationParams {
    pub fn from_dto(dto: UpdateVacationDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            status: dto.status,
            from_date: dto.from_date,
            to_date: dto.to_date,
            organization_id: dto.organization_id,
        }
    }
}
