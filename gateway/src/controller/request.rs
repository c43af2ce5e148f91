use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::Value;

use crate::{
    client::{api::UpstreamResponse, request::RequestClient},
    controller::PaginationQuery,
    error::GatewayError,
    identity::SharerId,
    state::AppState,
    validate,
};

/// POST /requests
/// Validates the description and forwards a request creation.
pub async fn create_request(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Json(body): Json<Value>,
) -> Result<UpstreamResponse, GatewayError> {
    validate::request_create(&body)?;
    RequestClient::new(&state.api, &state.cache)
        .create_request(user_id, &body)
        .await
}

/// GET /requests
/// Forwards the acting user's own requests.
pub async fn get_own_requests(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
) -> Result<UpstreamResponse, GatewayError> {
    RequestClient::new(&state.api, &state.cache)
        .get_own_requests(user_id)
        .await
}

/// GET /requests/all
/// Forwards the listing of other users' requests.
pub async fn get_all_requests(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Query(query): Query<PaginationQuery>,
) -> Result<UpstreamResponse, GatewayError> {
    validate::pagination(query.from, query.size)?;
    RequestClient::new(&state.api, &state.cache)
        .get_all_requests(user_id, query.from, query.size)
        .await
}

/// GET /requests/{request_id}
/// Forwards a single request lookup.
pub async fn get_request(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Path(request_id): Path<i64>,
) -> Result<UpstreamResponse, GatewayError> {
    RequestClient::new(&state.api, &state.cache)
        .get_request(user_id, request_id)
        .await
}
