//! Response envelope shared by every API endpoint.
//!
//! Every handler answers with an [`ApiResponse`], whether it succeeds or fails. The
//! envelope carries the HTTP status, a human readable message, the API version, a
//! timestamp, the payload, optional pagination [`Metadata`] and a list of
//! [`ErrorDto`] entries.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::server::model::page::Page;

/// Version reported in every envelope.
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Placeholder payload for envelopes that carry no data, such as error responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Empty {}

/// A single error entry of the envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDto {
    /// Exception type name, e.g. `NotFoundException`.
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub cause: Option<String>,
    /// Name of the offending request field for validation failures.
    pub field: Option<String>,
    pub code: u16,
}

impl ErrorDto {
    pub fn new(kind: impl Into<String>, message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            cause: None,
            field: None,
            code: status.as_u16(),
        }
    }

    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

/// Pagination metadata derived from a [`Page`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub total_elements: u64,
    pub total_pages: u64,
    /// One-based page number.
    pub page: u64,
    pub per_page: u64,
    /// Free-text descriptor of the filter that produced the page.
    pub query: Option<String>,
    pub first_page: bool,
    pub last_page: bool,
}

impl Metadata {
    /// Builds metadata from a page.
    ///
    /// Pages are zero-based internally; the reported `page` is one-based.
    ///
    /// # Arguments
    /// - `page` - The page the metadata describes
    ///
    /// # Returns
    /// Metadata with totals, position flags and the page's query descriptor
    pub fn from_page<T>(page: &Page<T>) -> Self {
        Self {
            total_elements: page.total_elements,
            total_pages: page.total_pages(),
            page: page.number.saturating_add(1),
            per_page: page.size,
            query: page.query.clone(),
            first_page: page.is_first(),
            last_page: page.is_last(),
        }
    }
}

/// Uniform response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub status: u16,
    pub message: String,
    pub version: String,
    /// Milliseconds since the Unix epoch at which the response was built.
    pub timestamp: i64,
    pub data: Option<T>,
    pub metadata: Option<Metadata>,
    #[serde(default)]
    pub errors: Vec<ErrorDto>,
}

impl<T> ApiResponse<T> {
    /// Starts a builder for an envelope with the given status.
    pub fn builder(status: StatusCode) -> ApiResponseBuilder<T> {
        ApiResponseBuilder {
            status,
            message: None,
            data: None,
            metadata: None,
            errors: Vec::new(),
        }
    }

    /// Shorthand for a `200 OK` envelope carrying `data`.
    pub fn ok(data: T) -> Self {
        Self::builder(StatusCode::OK).data(data).build()
    }

    /// Shorthand for a `201 Created` envelope carrying `data`.
    pub fn created(data: T) -> Self {
        Self::builder(StatusCode::CREATED).data(data).build()
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Builds an envelope from a page, filling both `data` and `metadata`.
    ///
    /// # Arguments
    /// - `status` - HTTP status of the response
    /// - `page` - Page whose items become the payload
    ///
    /// # Returns
    /// Envelope with the page items as data and metadata derived from the page
    pub fn from_page(status: StatusCode, page: Page<T>) -> Self {
        let metadata = Metadata::from_page(&page);

        Self::builder(status)
            .data(page.items)
            .metadata(metadata)
            .build()
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}

/// Builder for [`ApiResponse`].
///
/// The message defaults to the canonical reason phrase of the status and the
/// timestamp is taken when `build` is called.
#[derive(Debug)]
pub struct ApiResponseBuilder<T> {
    status: StatusCode,
    message: Option<String>,
    data: Option<T>,
    metadata: Option<Metadata>,
    errors: Vec<ErrorDto>,
}

impl<T> ApiResponseBuilder<T> {
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Appends a single error; earlier errors are kept.
    pub fn add_error(mut self, error: ErrorDto) -> Self {
        self.errors.push(error);
        self
    }

    /// Appends every error of `errors`; earlier errors are kept.
    pub fn errors(mut self, errors: impl IntoIterator<Item = ErrorDto>) -> Self {
        self.errors.extend(errors);
        self
    }

    pub fn build(self) -> ApiResponse<T> {
        let message = self.message.unwrap_or_else(|| {
            self.status
                .canonical_reason()
                .unwrap_or_default()
                .to_string()
        });

        ApiResponse {
            status: self.status.as_u16(),
            message,
            version: API_VERSION.to_string(),
            timestamp: Utc::now().timestamp_millis(),
            data: self.data,
            metadata: self.metadata,
            errors: self.errors,
        }
    }
}
