use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Collects the tables a test needs and creates them in a fresh in-memory database.
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new().with_vacation_tables().build().await?;
/// let db = test.db.as_ref().unwrap();
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// CREATE TABLE statements, executed in insertion order.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Queues the table of `entity`.
    ///
    /// Referenced tables must be queued before the tables pointing at them.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Queues `Organization`, `Vacation` and `Audit`.
    ///
    /// Every vacation or organization mutation writes an audit record, so the
    /// audit table comes along.
    pub fn with_vacation_tables(self) -> Self {
        self.with_table(Organization)
            .with_table(Vacation)
            .with_table(Audit)
    }

    /// Queues every table of the schema.
    pub fn with_all_tables(self) -> Self {
        self.with_vacation_tables()
            .with_table(Friendship)
            .with_table(User)
    }

    /// Connects to a new in-memory database and creates the queued tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with the schema in place
    /// - `Err(TestError::Database)` - Connecting or creating a table failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        context.with_tables(self.tables).await?;

        Ok(context)
    }
}
