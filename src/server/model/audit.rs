//! Audit domain types.
//!
//! Entities opt into auditing by implementing [`Auditable`], which exposes an
//! explicit list of scalar fields used for diffing. Audit records are append-only.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::{
    model::audit::{AuditDto, AuditOperation, FieldChange},
    server::error::internal::InternalError,
};

/// Changed fields keyed by lowercase field name.
pub type Diff = BTreeMap<String, FieldChange>;

/// A snapshot that can be described by an audit record.
pub trait Auditable {
    /// Fully-qualified type name stored as the record's entity type.
    const ENTITY_TYPE: &'static str;

    /// Short type name used in descriptions, e.g. `Vacation`.
    const TYPE_NAME: &'static str;

    fn audit_id(&self) -> Uuid;

    /// Scalar fields compared between snapshots, as `(name, value)`.
    ///
    /// `None` marks a null value. Identifiers and timestamps are not listed.
    fn audit_fields(&self) -> Vec<(&'static str, Option<String>)>;
}

/// A persisted audit record.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditRecord {
    pub id: Uuid,
    pub entity_type: String,
    pub entity_id: Uuid,
    pub operation: AuditOperation,
    pub diff: Option<Diff>,
    pub description: String,
    pub actor: String,
    pub created_at: DateTime<Utc>,
}

impl AuditRecord {
    /// Converts an entity model to the domain model.
    ///
    /// # Arguments
    /// - `entity` - Audit entity loaded from the database
    ///
    /// # Returns
    /// - `Ok(AuditRecord)` - Converted record
    /// - `Err(InternalError)` - Stored operation tag or diff could not be decoded
    pub fn from_entity(entity: entity::audit::Model) -> Result<Self, InternalError> {
        let diff = entity
            .diff
            .map(|value| {
                serde_json::from_value::<Diff>(value).map_err(|source| {
                    InternalError::MalformedDiff {
                        id: entity.id,
                        source,
                    }
                })
            })
            .transpose()?;

        Ok(Self {
            id: entity.id,
            entity_type: entity.entity_type,
            entity_id: entity.entity_id,
            operation: entity.operation.parse()?,
            diff,
            description: entity.description,
            actor: entity.actor,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> AuditDto {
        AuditDto {
            id: self.id,
            entity_type: self.entity_type,
            entity_id: self.entity_id,
            operation: self.operation,
            diff: self.diff,
            description: self.description,
            actor: self.actor,
            created_at: self.created_at,
        }
    }
}

/// Parameters for inserting an audit record.
#[derive(Debug, Clone)]
pub struct CreateAuditParams {
    pub entity_type: String,
    pub entity_id: Uuid,
    pub operation: AuditOperation,
    pub diff: Option<serde_json::Value>,
    pub description: String,
    pub actor: String,
}
