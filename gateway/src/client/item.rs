use serde_json::Value;

use crate::{
    cache::{region, ResponseCache},
    client::api::{ApiClient, UpstreamResponse},
    error::GatewayError,
};

/// Forwards item requests, caching single-item, owner-list and search reads.
///
/// Item detail responses depend on the acting user (only the owner sees
/// booking slots), so cache keys include the user id. Item writes also evict
/// the request regions: an item created or updated against a request changes
/// the request detail payload.
pub struct ItemClient<'a> {
    api: &'a ApiClient,
    cache: &'a ResponseCache,
}

const WRITE_EVICTIONS: &[&str] = &[
    region::ITEMS,
    region::ITEMS_LIST,
    region::REQUESTS,
    region::ALL_REQUESTS,
    region::OWNER_REQUESTS,
];

const COMMENT_EVICTIONS: &[&str] = &[region::ITEMS, region::ITEMS_LIST];

fn list_key(user_id: i64, from: i64, size: i64) -> String {
    format!("{}:{}:{}", user_id, from, size)
}

fn search_key(user_id: i64, text: &str, from: i64, size: i64) -> String {
    format!("search:{}:{}:{}:{}", user_id, text, from, size)
}

impl<'a> ItemClient<'a> {
    pub fn new(api: &'a ApiClient, cache: &'a ResponseCache) -> Self {
        Self { api, cache }
    }

    pub async fn create_item(
        &self,
        user_id: i64,
        body: &Value,
    ) -> Result<UpstreamResponse, GatewayError> {
        let response = self.api.post("/items", Some(user_id), body).await?;
        self.cache.evict(WRITE_EVICTIONS);
        Ok(response)
    }

    pub async fn update_item(
        &self,
        user_id: i64,
        item_id: i64,
        body: &Value,
    ) -> Result<UpstreamResponse, GatewayError> {
        let response = self
            .api
            .patch(&format!("/items/{}", item_id), Some(user_id), &[], Some(body))
            .await?;
        self.cache.evict(WRITE_EVICTIONS);
        Ok(response)
    }

    pub async fn get_item(
        &self,
        user_id: i64,
        item_id: i64,
    ) -> Result<UpstreamResponse, GatewayError> {
        let key = format!("{}:{}", user_id, item_id);
        if let Some(hit) = self.cache.get(region::ITEMS, &key) {
            tracing::debug!("Cache hit for item {}", item_id);
            return Ok(hit);
        }

        let response = self
            .api
            .get(&format!("/items/{}", item_id), Some(user_id), &[])
            .await?;
        self.cache.store(region::ITEMS, key, &response);
        Ok(response)
    }

    pub async fn get_items(
        &self,
        user_id: i64,
        from: i64,
        size: i64,
    ) -> Result<UpstreamResponse, GatewayError> {
        let key = list_key(user_id, from, size);
        if let Some(hit) = self.cache.get(region::ITEMS_LIST, &key) {
            tracing::debug!("Cache hit for item list of user {}", user_id);
            return Ok(hit);
        }

        let query = [("from", from.to_string()), ("size", size.to_string())];
        let response = self.api.get("/items", Some(user_id), &query).await?;
        self.cache.store(region::ITEMS_LIST, key, &response);
        Ok(response)
    }

    pub async fn search_items(
        &self,
        user_id: i64,
        text: &str,
        from: i64,
        size: i64,
    ) -> Result<UpstreamResponse, GatewayError> {
        let key = search_key(user_id, text, from, size);
        if let Some(hit) = self.cache.get(region::ITEMS_LIST, &key) {
            tracing::debug!("Cache hit for item search of user {}", user_id);
            return Ok(hit);
        }

        let query = [
            ("text", text.to_string()),
            ("from", from.to_string()),
            ("size", size.to_string()),
        ];
        let response = self.api.get("/items/search", Some(user_id), &query).await?;
        self.cache.store(region::ITEMS_LIST, key, &response);
        Ok(response)
    }

    pub async fn add_comment(
        &self,
        user_id: i64,
        item_id: i64,
        body: &Value,
    ) -> Result<UpstreamResponse, GatewayError> {
        let response = self
            .api
            .post(&format!("/items/{}/comment", item_id), Some(user_id), body)
            .await?;
        self.cache.evict(COMMENT_EVICTIONS);
        Ok(response)
    }
}
