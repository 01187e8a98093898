//! Organization factory for creating test organization entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test organizations with customizable fields.
pub struct OrganizationFactory<'a> {
    db: &'a DatabaseConnection,
    owner: String,
    name: String,
    description: Option<String>,
    enabled: bool,
}

impl<'a> OrganizationFactory<'a> {
    /// Creates a new OrganizationFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Organization {id}"`
    /// - description: `None`
    /// - enabled: `true`
    pub fn new(db: &'a DatabaseConnection, owner: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            owner: owner.into(),
            name: format!("Organization {}", id),
            description: None,
            enabled: true,
        }
    }

    /// Sets the organization name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the organization description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets whether the organization is enabled.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Builds and inserts the organization entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::organization::Model)` - Created organization entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::organization::Model, DbErr> {
        let now = Utc::now();
        entity::organization::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            owner: ActiveValue::Set(self.owner),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            enabled: ActiveValue::Set(self.enabled),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an organization with default values for the given owner.
pub async fn create_organization(
    db: &DatabaseConnection,
    owner: impl Into<String>,
) -> Result<entity::organization::Model, DbErr> {
    OrganizationFactory::new(db, owner).build().await
}
