//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Authorization**: Checking the caller's scopes and choosing owner-scoped or
//!   unscoped repository calls
//! - **Business Logic**: Implementing validation and uniqueness rules
//! - **Auditing**: Recording every create, update and delete
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod audit;
pub mod auth;
pub mod friendship;
pub mod organization;
pub mod user;
pub mod vacation;

#[cfg(test)]
mod test;
