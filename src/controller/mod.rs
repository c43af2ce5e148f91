//! HTTP request handlers.
//!
//! Controllers deserialize request bodies and query strings, pull the acting
//! user out of the `X-Sharer-User-Id` header, call into the service layer
//! and convert the resulting domain models into DTOs. No business rules live
//! here.

pub mod booking;
pub mod item;
pub mod request;
pub mod user;

use serde::Deserialize;

/// Pagination query (`?from=&size=`) where `from` is the zero-based page
/// index, not a row offset.
#[derive(Deserialize)]
pub struct PaginationQuery {
    #[serde(default)]
    pub from: u64,
    #[serde(default = "default_size")]
    pub size: u64,
}

fn default_size() -> u64 {
    10
}

impl PaginationQuery {
    /// Page index requested by the caller.
    pub fn page(&self) -> u64 {
        self.from
    }
}
