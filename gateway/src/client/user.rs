use serde_json::Value;

use crate::{
    cache::{region, ResponseCache},
    client::api::{ApiClient, UpstreamResponse},
    error::GatewayError,
};

/// Forwards user requests, caching single-user and list reads.
pub struct UserClient<'a> {
    api: &'a ApiClient,
    cache: &'a ResponseCache,
}

impl<'a> UserClient<'a> {
    pub fn new(api: &'a ApiClient, cache: &'a ResponseCache) -> Self {
        Self { api, cache }
    }

    pub async fn create_user(&self, body: &Value) -> Result<UpstreamResponse, GatewayError> {
        let response = self.api.post("/users", None, body).await?;
        self.cache.evict(&[region::USERS, region::USERS_LIST]);
        Ok(response)
    }

    pub async fn update_user(
        &self,
        user_id: i64,
        body: &Value,
    ) -> Result<UpstreamResponse, GatewayError> {
        let response = self
            .api
            .patch(&format!("/users/{}", user_id), None, &[], Some(body))
            .await?;
        self.cache.evict(&[region::USERS, region::USERS_LIST]);
        Ok(response)
    }

    pub async fn delete_user(&self, user_id: i64) -> Result<UpstreamResponse, GatewayError> {
        let response = self.api.delete(&format!("/users/{}", user_id), None).await?;
        self.cache.evict(&[region::USERS, region::USERS_LIST]);
        Ok(response)
    }

    pub async fn get_user(&self, user_id: i64) -> Result<UpstreamResponse, GatewayError> {
        let key = user_id.to_string();
        if let Some(hit) = self.cache.get(region::USERS, &key) {
            tracing::debug!("Cache hit for user {}", user_id);
            return Ok(hit);
        }

        let response = self.api.get(&format!("/users/{}", user_id), None, &[]).await?;
        self.cache.store(region::USERS, key, &response);
        Ok(response)
    }

    pub async fn get_users(&self) -> Result<UpstreamResponse, GatewayError> {
        if let Some(hit) = self.cache.get(region::USERS_LIST, "all") {
            tracing::debug!("Cache hit for user list");
            return Ok(hit);
        }

        let response = self.api.get("/users", None, &[]).await?;
        self.cache.store(region::USERS_LIST, "all".to_string(), &response);
        Ok(response)
    }
}
