//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic
//! for transforming errors into HTTP responses. The `AppError` enum is the
//! top-level error type; every variant maps to a status code and a JSON
//! `ErrorDto` carrying a machine-readable kind and a human-readable message.
//!
//! Precondition checks across the services run in a fixed order, so the first
//! violated rule determines the error that reaches the client. No error is
//! retried internally; all of them are terminal for the request.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{dto::api::ErrorDto, error::config::ConfigError};

/// Top-level application error type.
///
/// Aggregates the error taxonomy of the core server. Infrastructure failures
/// (`ConfigErr`, `DbErr`) convert automatically via `#[from]`; domain failures
/// carry the human-readable message reported to the caller.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Requested entity does not exist. Results in 404 Not Found.
    #[error("{0}")]
    NotFound(String),

    /// Acting user is known but not allowed to touch this entity.
    /// Results in 403 Forbidden.
    #[error("{0}")]
    AccessDenied(String),

    /// A third party (neither owner nor booker) tried to approve a booking.
    ///
    /// Kept distinct from `AccessDenied` so callers can tell the booker's
    /// rejected attempt apart from a stranger's. Results in 403 Forbidden.
    #[error("{0}")]
    WrongApprover(String),

    /// Operation is not valid for the entity's current status.
    /// Results in 409 Conflict.
    #[error("{0}")]
    InvalidState(String),

    /// Malformed or semantically invalid request data.
    /// Results in 400 Bad Request.
    #[error("{0}")]
    InvalidInput(String),

    /// Uniqueness violation, currently only user email.
    /// Results in 409 Conflict.
    #[error("{0}")]
    Conflict(String),

    /// Internal server error with custom message.
    ///
    /// The message is logged server-side; the client receives a generic body.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Machine-readable kind reported in the response body.
    fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::AccessDenied(_) | Self::WrongApprover(_) => "access_denied",
            Self::InvalidState(_) => "invalid_state",
            Self::InvalidInput(_) => "invalid_input",
            Self::Conflict(_) => "conflict",
            _ => "internal",
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - `InvalidInput`
/// - 403 Forbidden - `AccessDenied`, `WrongApprover`
/// - 404 Not Found - `NotFound`
/// - 409 Conflict - `InvalidState`, `Conflict`
/// - 500 Internal Server Error - everything else, with details logged
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let status = match &self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::AccessDenied(_) | Self::WrongApprover(_) => StatusCode::FORBIDDEN,
            Self::InvalidState(_) | Self::Conflict(_) => StatusCode::CONFLICT,
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            err => {
                tracing::error!("Internal error: {}", err);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "internal".to_string(),
                        message: "Internal server error".to_string(),
                    }),
                )
                    .into_response();
            }
        };

        (
            status,
            Json(ErrorDto {
                error: kind.to_string(),
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}
