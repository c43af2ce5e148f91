//! Acting-user identity taken from the `X-Sharer-User-Id` header.
//!
//! The gateway checks the header is present and well-formed before doing any
//! validation or forwarding; the same header is propagated to the core
//! server on the outgoing request.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::GatewayError;

/// Header carrying the acting user's id.
pub const SHARER_USER_ID: &str = "X-Sharer-User-Id";

/// Extractor for the acting user's id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharerId(pub i64);

impl<S> FromRequestParts<S> for SharerId
where
    S: Send + Sync,
{
    type Rejection = GatewayError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(SHARER_USER_ID)
            .ok_or_else(|| {
                GatewayError::InvalidInput(format!("Missing {} header", SHARER_USER_ID))
            })?
            .to_str()
            .map_err(|_| GatewayError::InvalidInput(format!("Invalid {} header", SHARER_USER_ID)))?;

        let user_id = value
            .parse::<i64>()
            .map_err(|_| GatewayError::InvalidInput(format!("Invalid {} header", SHARER_USER_ID)))?;

        Ok(Self(user_id))
    }
}
