//! Shared test scaffolding for the vacation planner workspace.
//!
//! - [`builder::TestBuilder`] creates an in-memory SQLite schema
//! - [`context::TestContext`] hands out the connection and a session on the same pool
//! - [`factory`] inserts rows with unique defaults
//! - [`fixture`] builds entity models without touching the database
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_vacations() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_vacation_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     factory::create_vacation(db, "alice").await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
