//! Gateway error types and HTTP response mapping.
//!
//! The gateway rejects malformed requests before they reach the core server,
//! so `InvalidInput` is the dominant variant here. Upstream transport
//! failures surface as 502; everything the core server itself rejects is
//! relayed untouched and never passes through this type.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration error during startup or environment variable loading.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// Request failed gateway-side validation. Results in 400 Bad Request.
    #[error("{0}")]
    InvalidInput(String),

    /// The core server could not be reached or the transfer failed.
    /// Results in 502 Bad Gateway.
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Internal gateway error with custom message.
    #[error("{0}")]
    InternalError(String),
}

/// JSON body sent for gateway-originated errors, matching the shape the core
/// server uses so clients see one format.
#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match self {
            Self::InvalidInput(message) => (StatusCode::BAD_REQUEST, "invalid_input", message),
            Self::Upstream(err) => {
                tracing::error!("Upstream request failed: {}", err);
                (
                    StatusCode::BAD_GATEWAY,
                    "bad_gateway",
                    "Upstream server unavailable".to_string(),
                )
            }
            err => {
                tracing::error!("Internal error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal",
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: kind, message })).into_response()
    }
}
