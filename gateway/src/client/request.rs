use serde_json::Value;

use crate::{
    cache::{region, ResponseCache},
    client::api::{ApiClient, UpstreamResponse},
    error::GatewayError,
};

/// Forwards item-request requests, caching all three read views.
pub struct RequestClient<'a> {
    api: &'a ApiClient,
    cache: &'a ResponseCache,
}

const WRITE_EVICTIONS: &[&str] = &[
    region::REQUESTS,
    region::ALL_REQUESTS,
    region::OWNER_REQUESTS,
    region::ITEMS,
    region::ITEMS_LIST,
];

impl<'a> RequestClient<'a> {
    pub fn new(api: &'a ApiClient, cache: &'a ResponseCache) -> Self {
        Self { api, cache }
    }

    pub async fn create_request(
        &self,
        user_id: i64,
        body: &Value,
    ) -> Result<UpstreamResponse, GatewayError> {
        let response = self.api.post("/requests", Some(user_id), body).await?;
        self.cache.evict(WRITE_EVICTIONS);
        Ok(response)
    }

    pub async fn get_own_requests(&self, user_id: i64) -> Result<UpstreamResponse, GatewayError> {
        let key = user_id.to_string();
        if let Some(hit) = self.cache.get(region::OWNER_REQUESTS, &key) {
            tracing::debug!("Cache hit for own requests of user {}", user_id);
            return Ok(hit);
        }

        let response = self.api.get("/requests", Some(user_id), &[]).await?;
        self.cache.store(region::OWNER_REQUESTS, key, &response);
        Ok(response)
    }

    pub async fn get_all_requests(
        &self,
        user_id: i64,
        from: i64,
        size: i64,
    ) -> Result<UpstreamResponse, GatewayError> {
        let key = format!("{}:{}:{}", user_id, from, size);
        if let Some(hit) = self.cache.get(region::ALL_REQUESTS, &key) {
            tracing::debug!("Cache hit for request listing of user {}", user_id);
            return Ok(hit);
        }

        let query = [("from", from.to_string()), ("size", size.to_string())];
        let response = self.api.get("/requests/all", Some(user_id), &query).await?;
        self.cache.store(region::ALL_REQUESTS, key, &response);
        Ok(response)
    }

    pub async fn get_request(
        &self,
        user_id: i64,
        request_id: i64,
    ) -> Result<UpstreamResponse, GatewayError> {
        let key = format!("{}:{}", user_id, request_id);
        if let Some(hit) = self.cache.get(region::REQUESTS, &key) {
            tracing::debug!("Cache hit for request {}", request_id);
            return Ok(hit);
        }

        let response = self
            .api
            .get(&format!("/requests/{}", request_id), Some(user_id), &[])
            .await?;
        self.cache.store(region::REQUESTS, key, &response);
        Ok(response)
    }
}
