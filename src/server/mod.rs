//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Scope checks, validation, auditing and orchestration
//! - **Data Layer** (`data/`) - Database operations on SeaORM entities
//! - **Model Layer** (`model/`) - Domain models, operation parameters, pagination and the principal
//! - **Error Layer** (`error/`) - Application error types and envelope-shaped responses
//! - **Middleware** (`middleware/`) - Session wrappers, the authentication guard and scope resolution
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, HTTP and OAuth clients)
//! - **Startup** (`startup`) - Initialization of database, sessions and clients
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Logging** (`logging`) - Tracing subscriber setup
//!
//! # Request Flow
//!
//! 1. **Router** receives the request and routes it to a controller
//! 2. **Controller** loads the caller's principal through `AuthGuard`
//! 3. **Service** checks scopes, applies the owner filter and runs the operation
//! 4. **Data** queries the database
//! 5. **Service** records an audit entry for every mutation
//! 6. **Controller** converts the domain model to a DTO inside the response envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
