//! In-memory response cache with named regions.
//!
//! Each region caches the responses of one read endpoint, keyed by the
//! request parameters that shape the response. Writes do not patch cached
//! entries; a write to a domain evicts every region that may reflect it.
//! Only 200-status responses are stored, so error responses are always
//! re-fetched from the core server.

use std::{collections::HashMap, sync::Mutex};

use axum::http::StatusCode;

use crate::client::api::UpstreamResponse;

/// Cache region names, one per cached read endpoint.
pub mod region {
    pub const USERS: &str = "users";
    pub const USERS_LIST: &str = "users_list";
    pub const ITEMS: &str = "items";
    pub const ITEMS_LIST: &str = "items_list";
    pub const BOOKINGS: &str = "bookings";
    pub const BOOKINGS_LIST: &str = "bookings_list";
    pub const REQUESTS: &str = "requests";
    pub const ALL_REQUESTS: &str = "all_requests";
    pub const OWNER_REQUESTS: &str = "owner_requests";
}

/// Response cache shared across the gateway's handlers.
#[derive(Default)]
pub struct ResponseCache {
    regions: Mutex<HashMap<&'static str, HashMap<String, UpstreamResponse>>>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached response for `key` in `region`, if any.
    pub fn get(&self, region: &'static str, key: &str) -> Option<UpstreamResponse> {
        let regions = self.regions.lock().unwrap();
        regions.get(region).and_then(|entries| entries.get(key)).cloned()
    }

    /// Stores `response` under `key` in `region`.
    ///
    /// Non-200 responses are silently skipped.
    pub fn store(&self, region: &'static str, key: String, response: &UpstreamResponse) {
        if response.status != StatusCode::OK {
            return;
        }

        let mut regions = self.regions.lock().unwrap();
        regions.entry(region).or_default().insert(key, response.clone());
    }

    /// Drops every entry of each listed region.
    pub fn evict(&self, evicted: &[&'static str]) {
        let mut regions = self.regions.lock().unwrap();
        for region in evicted {
            regions.remove(region);
        }
    }
}
