//! HTTP handlers.
//!
//! Handlers authenticate the caller through [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! convert DTOs into operation params, call the matching service and wrap the
//! result in the response envelope. Scope checks live in the services.

pub mod audit;
pub mod auth;
pub mod extract;
pub mod friendship;
pub mod organization;
pub mod user;
pub mod vacation;

use serde::Deserialize;

use crate::server::model::page::PageRequest;

/// Query parameters shared by every list endpoint.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    /// Zero-based page number.
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    /// Owner filter, honoured only for callers holding the "all" scope.
    pub owner: Option<String>,
}

fn default_per_page() -> u64 {
    PageRequest::DEFAULT_PER_PAGE
}

impl PaginationParams {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.per_page)
    }
}
