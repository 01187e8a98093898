//! SeaORM entity models for the vacation planner schema.

pub mod prelude;

pub mod audit;
pub mod friendship;
pub mod organization;
pub mod user;
pub mod vacation;
