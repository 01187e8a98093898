//! Vacation factory for creating test vacation entities.

use crate::factory::helpers::next_id;
use chrono::{Days, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test vacations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::vacation::VacationFactory;
///
/// let vacation = VacationFactory::new(&db, "bob")
///     .name("Ski Trip")
///     .status("ACCEPTED")
///     .build()
///     .await?;
/// ```
pub struct VacationFactory<'a> {
    db: &'a DatabaseConnection,
    owner: String,
    name: String,
    description: Option<String>,
    status: String,
    from_date: NaiveDate,
    to_date: NaiveDate,
    organization_id: Option<Uuid>,
}

impl<'a> VacationFactory<'a> {
    /// Creates a new VacationFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Vacation {id}"`
    /// - description: `None`
    /// - status: `"REQUESTED"`
    /// - from_date: today, to_date: one week later
    /// - organization_id: `None`
    pub fn new(db: &'a DatabaseConnection, owner: impl Into<String>) -> Self {
        let id = next_id();
        let today = Utc::now().date_naive();
        Self {
            db,
            owner: owner.into(),
            name: format!("Vacation {}", id),
            description: None,
            status: "REQUESTED".to_string(),
            from_date: today,
            to_date: today.checked_add_days(Days::new(7)).unwrap_or(today),
            organization_id: None,
        }
    }

    /// Sets the vacation name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the vacation description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the raw status tag.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the date range of the vacation.
    pub fn dates(mut self, from_date: NaiveDate, to_date: NaiveDate) -> Self {
        self.from_date = from_date;
        self.to_date = to_date;
        self
    }

    /// Links the vacation to an organization.
    pub fn organization_id(mut self, organization_id: Uuid) -> Self {
        self.organization_id = Some(organization_id);
        self
    }

    /// Builds and inserts the vacation entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::vacation::Model)` - Created vacation entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::vacation::Model, DbErr> {
        let now = Utc::now();
        entity::vacation::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            owner: ActiveValue::Set(self.owner),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            status: ActiveValue::Set(self.status),
            from_date: ActiveValue::Set(self.from_date),
            to_date: ActiveValue::Set(self.to_date),
            organization_id: ActiveValue::Set(self.organization_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a vacation with default values for the given owner.
///
/// Shorthand for `VacationFactory::new(db, owner).build().await`.
pub async fn create_vacation(
    db: &DatabaseConnection,
    owner: impl Into<String>,
) -> Result<entity::vacation::Model, DbErr> {
    VacationFactory::new(db, owner).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_vacation_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_vacation_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let vacation = create_vacation(db, "alice").await?;

        assert_eq!(vacation.owner, "alice");
        assert_eq!(vacation.status, "REQUESTED");
        assert!(vacation.from_date <= vacation.to_date);
        assert!(vacation.organization_id.is_none());

        Ok(())
    }
}
