use std::sync::Arc;

use crate::{cache::ResponseCache, client::api::ApiClient};

/// Shared application state for the gateway's handlers.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<ApiClient>,
    pub cache: Arc<ResponseCache>,
}

impl AppState {
    pub fn new(server_url: &str) -> Self {
        Self {
            api: Arc::new(ApiClient::new(server_url)),
            cache: Arc::new(ResponseCache::new()),
        }
    }
}
