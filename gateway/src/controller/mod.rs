//! HTTP handlers for the gateway.
//!
//! Each handler validates the request, then hands the untouched JSON body
//! and parameters to the matching client for forwarding. Pagination values
//! stay signed here so a negative `from` can be rejected instead of failing
//! deserialization.

pub mod booking;
pub mod item;
pub mod request;
pub mod user;

use serde::Deserialize;

/// Offset-based pagination parameters for list endpoints.
#[derive(Debug, Deserialize)]
pub struct PaginationQuery {
    #[serde(default)]
    pub from: i64,
    #[serde(default = "default_size")]
    pub size: i64,
}

fn default_size() -> i64 {
    10
}
