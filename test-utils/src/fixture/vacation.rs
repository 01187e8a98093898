//! Vacation fixtures for creating in-memory test data.

use chrono::{DateTime, NaiveDate, Utc};
use entity::vacation;
use uuid::Uuid;

/// Default vacation id, matching the id used in API examples.
pub const DEFAULT_ID: &str = "67394e83-0e86-4f11-8c3c-2a7e5c1f4d10";

/// Default owner subject.
pub const DEFAULT_OWNER: &str = "bob";

/// Default vacation name.
pub const DEFAULT_NAME: &str = "Ski Trip";

/// Default status tag.
pub const DEFAULT_STATUS: &str = "REQUESTED";

/// Creates a vacation entity model with default values.
///
/// # Default Values
/// - id: `DEFAULT_ID`
/// - owner: `"bob"`
/// - name: `"Ski Trip"`
/// - status: `"REQUESTED"`
/// - from_date / to_date: `2025-01-10` .. `2025-01-17`
pub fn entity() -> vacation::Model {
    entity_builder().build()
}

/// Creates a vacation entity builder for customization.
pub fn entity_builder() -> VacationEntityBuilder {
    VacationEntityBuilder::default()
}

/// Builder for creating customized vacation entity models.
pub struct VacationEntityBuilder {
    id: Uuid,
    owner: String,
    name: String,
    description: Option<String>,
    status: String,
    from_date: NaiveDate,
    to_date: NaiveDate,
    organization_id: Option<Uuid>,
    timestamp: DateTime<Utc>,
}

impl Default for VacationEntityBuilder {
    fn default() -> Self {
        Self {
            id: Uuid::parse_str(DEFAULT_ID).unwrap_or_default(),
            owner: DEFAULT_OWNER.to_string(),
            name: DEFAULT_NAME.to_string(),
            description: None,
            status: DEFAULT_STATUS.to_string(),
            from_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap_or_default(),
            to_date: NaiveDate::from_ymd_opt(2025, 1, 17).unwrap_or_default(),
            organization_id: None,
            timestamp: DateTime::<Utc>::UNIX_EPOCH,
        }
    }
}

impl VacationEntityBuilder {
    /// Sets the vacation id.
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Sets the owner subject.
    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    /// Sets the vacation name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the raw status tag.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the date range.
    pub fn dates(mut self, from_date: NaiveDate, to_date: NaiveDate) -> Self {
        self.from_date = from_date;
        self.to_date = to_date;
        self
    }

    /// Sets the created/updated timestamps.
    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Builds the vacation entity model.
    pub fn build(self) -> vacation::Model {
        vacation::Model {
            id: self.id,
            owner: self.owner,
            name: self.name,
            description: self.description,
            status: self.status,
            from_date: self.from_date,
            to_date: self.to_date,
            organization_id: self.organization_id,
            created_at: self.timestamp,
            updated_at: self.timestamp,
        }
    }
}
