use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    client::{api::UpstreamResponse, item::ItemClient},
    controller::PaginationQuery,
    error::GatewayError,
    identity::SharerId,
    state::AppState,
    validate,
};

/// Query parameters for the item search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    text: String,
    #[serde(default)]
    from: i64,
    #[serde(default = "super::default_size")]
    size: i64,
}

/// POST /items
/// Validates required fields and forwards an item creation.
pub async fn create_item(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Json(body): Json<Value>,
) -> Result<UpstreamResponse, GatewayError> {
    validate::item_create(&body)?;
    ItemClient::new(&state.api, &state.cache)
        .create_item(user_id, &body)
        .await
}

/// PATCH /items/{item_id}
/// Forwards a partial item update.
pub async fn update_item(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Path(item_id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<UpstreamResponse, GatewayError> {
    ItemClient::new(&state.api, &state.cache)
        .update_item(user_id, item_id, &body)
        .await
}

/// GET /items/{item_id}
/// Forwards a single item lookup.
pub async fn get_item(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Path(item_id): Path<i64>,
) -> Result<UpstreamResponse, GatewayError> {
    ItemClient::new(&state.api, &state.cache)
        .get_item(user_id, item_id)
        .await
}

/// GET /items
/// Forwards the acting user's item listing.
pub async fn get_items(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Query(query): Query<PaginationQuery>,
) -> Result<UpstreamResponse, GatewayError> {
    validate::pagination(query.from, query.size)?;
    ItemClient::new(&state.api, &state.cache)
        .get_items(user_id, query.from, query.size)
        .await
}

/// GET /items/search
/// Forwards a text search over available items.
pub async fn search_items(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Query(query): Query<SearchQuery>,
) -> Result<UpstreamResponse, GatewayError> {
    validate::pagination(query.from, query.size)?;
    ItemClient::new(&state.api, &state.cache)
        .search_items(user_id, &query.text, query.from, query.size)
        .await
}

/// POST /items/{item_id}/comment
/// Validates the text and forwards a comment creation.
pub async fn add_comment(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Path(item_id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<UpstreamResponse, GatewayError> {
    validate::comment_create(&body)?;
    ItemClient::new(&state.api, &state.cache)
        .add_comment(user_id, item_id, &body)
        .await
}
