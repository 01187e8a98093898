//! Domain models and operation parameters.
//!
//! Domain models are converted from SeaORM entities at the service boundary with
//! `from_entity` and into wire DTOs with `into_dto`. Parameter types carry the
//! validated input of create and update operations from controllers to services.

pub mod audit;
pub mod auth;
pub mod friendship;
pub mod organization;
pub mod page;
pub mod user;
pub mod vacation;
