//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for
//! unit tests of pure logic such as audit diffing and DTO conversion.
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let vacation = fixture::vacation::entity();
//! let renamed = fixture::vacation::entity_builder().name("Ski Trip 2").build();
//! ```

pub mod vacation;
