//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests.
//! Each entity has its own module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let vacation = factory::vacation::create_vacation(&db, "alice").await?;
//!     let org = factory::organization::OrganizationFactory::new(&db, "bob")
//!         .name("Acme")
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `vacation` - Create vacation entities
//! - `organization` - Create organization entities
//! - `friendship` - Create friendship entities
//! - `user` - Create user profile entities
//! - `helpers` - Unique value generation shared by the factories

pub mod friendship;
pub mod helpers;
pub mod organization;
pub mod user;
pub mod vacation;

pub use friendship::create_friendship;
pub use organization::create_organization;
pub use user::create_user;
pub use vacation::create_vacation;
