use serde_json::Value;

use crate::{
    cache::{region, ResponseCache},
    client::api::{ApiClient, UpstreamResponse},
    error::GatewayError,
};

/// Forwards booking requests.
///
/// Booking writes also change the slots shown on item details, so they
/// evict the item regions along with the booking ones.
pub struct BookingClient<'a> {
    api: &'a ApiClient,
    cache: &'a ResponseCache,
}

const WRITE_EVICTIONS: &[&str] = &[
    region::BOOKINGS,
    region::BOOKINGS_LIST,
    region::ITEMS,
    region::ITEMS_LIST,
];

impl<'a> BookingClient<'a> {
    pub fn new(api: &'a ApiClient, cache: &'a ResponseCache) -> Self {
        Self { api, cache }
    }

    pub async fn create_booking(
        &self,
        user_id: i64,
        body: &Value,
    ) -> Result<UpstreamResponse, GatewayError> {
        let response = self.api.post("/bookings", Some(user_id), body).await?;
        self.cache.evict(WRITE_EVICTIONS);
        Ok(response)
    }

    pub async fn approve_booking(
        &self,
        user_id: i64,
        booking_id: i64,
        approved: bool,
    ) -> Result<UpstreamResponse, GatewayError> {
        let query = [("approved", approved.to_string())];
        let response = self
            .api
            .patch(&format!("/bookings/{}", booking_id), Some(user_id), &query, None)
            .await?;
        self.cache.evict(WRITE_EVICTIONS);
        Ok(response)
    }

    pub async fn get_booking(
        &self,
        user_id: i64,
        booking_id: i64,
    ) -> Result<UpstreamResponse, GatewayError> {
        let key = format!("{}:{}", user_id, booking_id);
        if let Some(hit) = self.cache.get(region::BOOKINGS, &key) {
            tracing::debug!("Cache hit for booking {}", booking_id);
            return Ok(hit);
        }

        let response = self
            .api
            .get(&format!("/bookings/{}", booking_id), Some(user_id), &[])
            .await?;
        self.cache.store(region::BOOKINGS, key, &response);
        Ok(response)
    }

    pub async fn get_bookings(
        &self,
        user_id: i64,
        state: Option<&str>,
        owner: bool,
        from: i64,
        size: i64,
    ) -> Result<UpstreamResponse, GatewayError> {
        let state = state.unwrap_or("ALL");
        let key = format!("{}:{}:{}:{}:{}", user_id, state, owner, from, size);
        if let Some(hit) = self.cache.get(region::BOOKINGS_LIST, &key) {
            tracing::debug!("Cache hit for booking list of user {}", user_id);
            return Ok(hit);
        }

        let query = [
            ("state", state.to_string()),
            ("owner", owner.to_string()),
            ("from", from.to_string()),
            ("size", size.to_string()),
        ];
        let response = self.api.get("/bookings", Some(user_id), &query).await?;
        self.cache.store(region::BOOKINGS_LIST, key, &response);
        Ok(response)
    }
}
