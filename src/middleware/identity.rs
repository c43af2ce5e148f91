//! Acting-user identity taken from the `X-Sharer-User-Id` header.
//!
//! The gateway authenticates callers and forwards their id in this header;
//! the core server trusts it. Existence of the user is checked per operation
//! in the service layer, not here.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::AppError;

/// Header carrying the acting user's id.
pub const SHARER_USER_ID: &str = "X-Sharer-User-Id";

/// Extractor for the acting user's id.
///
/// Rejects requests where the header is missing or not a valid integer with
/// `AppError::InvalidInput` before the handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharerId(pub i64);

impl<S> FromRequestParts<S> for SharerId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(SHARER_USER_ID)
            .ok_or_else(|| {
                AppError::InvalidInput(format!("Missing {} header", SHARER_USER_ID))
            })?
            .to_str()
            .map_err(|_| AppError::InvalidInput(format!("Invalid {} header", SHARER_USER_ID)))?;

        let user_id = value
            .parse::<i64>()
            .map_err(|_| AppError::InvalidInput(format!("Invalid {} header", SHARER_USER_ID)))?;

        Ok(Self(user_id))
    }
}
