//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum serves as the
//! top-level error type that wraps domain-specific errors and implements
//! `IntoResponse`. Every error is rendered as a full [`ApiResponse`] envelope with
//! `data: null` and a single entry in `errors`.

pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    model::api::{ApiResponse, Empty, ErrorDto},
    server::error::{auth::AuthError, config::ConfigError, internal::InternalError},
};

/// Exception type name for missing records.
pub const NOT_FOUND_EXCEPTION: &str = "NotFoundException";
/// Exception type name for invalid input and domain rule violations.
pub const BAD_REQUEST_EXCEPTION: &str = "BadRequestException";
/// Exception type name for duplicate relations.
pub const CONFLICT_EXCEPTION: &str = "ConflictException";
/// Exception type name for authentication and scope failures.
pub const OAUTH_EXCEPTION: &str = "OAuthException";
/// Exception type name for unexpected failures.
pub const INTERNAL_SERVER_ERROR_EXCEPTION: &str = "InternalServerErrorException";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. `AuthError` handles its own status mapping, while the generic
/// variants map to fixed status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` (401, 403 or 400).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Unexpected state such as an unreadable stored value.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx driver error, raised while preparing the session store.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found, or not visible to the caller.
    ///
    /// Results in 404 Not Found.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request or domain rule violation.
    ///
    /// Results in 400 Bad Request.
    #[error("{0}")]
    BadRequest(String),

    /// Invalid value of a single request field.
    ///
    /// Results in 400 Bad Request with `field` set on the error entry.
    #[error("{message}")]
    Validation {
        /// Wire name of the offending field, e.g. `toDate`.
        field: String,
        message: String,
    },

    /// The request would duplicate an existing relation.
    ///
    /// Results in 409 Conflict.
    #[error("{0}")]
    Conflict(String),
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// Every JSON rejection is a 400, including the 415 and 422 axum would pick.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// Renders a single-error envelope.
///
/// # Arguments
/// - `error` - The error entry; its `code` determines the response status
///
/// # Returns
/// Envelope response with `data: null`
pub(crate) fn error_response(error: ErrorDto) -> Response {
    let status = StatusCode::from_u16(error.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    ApiResponse::<Empty>::builder(status)
        .message(error.message.clone())
        .add_error(error)
        .build()
        .into_response()
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and `Validation`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `Conflict`
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 Internal Server Error - For everything else
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => error_response(ErrorDto::new(
                NOT_FOUND_EXCEPTION,
                msg,
                StatusCode::NOT_FOUND,
            )),
            Self::BadRequest(msg) => error_response(ErrorDto::new(
                BAD_REQUEST_EXCEPTION,
                msg,
                StatusCode::BAD_REQUEST,
            )),
            Self::Validation { field, message } => error_response(
                ErrorDto::new(BAD_REQUEST_EXCEPTION, message, StatusCode::BAD_REQUEST)
                    .with_field(field),
            ),
            Self::Conflict(msg) => error_response(ErrorDto::new(
                CONFLICT_EXCEPTION,
                msg,
                StatusCode::CONFLICT,
            )),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(ErrorDto::new(
            INTERNAL_SERVER_ERROR_EXCEPTION,
            "Internal server error",
            StatusCode::INTERNAL_SERVER_ERROR,
        ))
    }
}
