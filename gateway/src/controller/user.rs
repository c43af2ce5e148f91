use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use crate::{
    client::{api::UpstreamResponse, user::UserClient},
    error::GatewayError,
    state::AppState,
    validate,
};

/// POST /users
/// Validates and forwards a user creation.
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<UpstreamResponse, GatewayError> {
    validate::user_create(&body)?;
    UserClient::new(&state.api, &state.cache).create_user(&body).await
}

/// PATCH /users/{user_id}
/// Forwards a partial user update.
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<UpstreamResponse, GatewayError> {
    UserClient::new(&state.api, &state.cache)
        .update_user(user_id, &body)
        .await
}

/// GET /users/{user_id}
/// Forwards a single user lookup.
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<UpstreamResponse, GatewayError> {
    UserClient::new(&state.api, &state.cache).get_user(user_id).await
}

/// GET /users
/// Forwards the full user listing.
pub async fn get_users(State(state): State<AppState>) -> Result<UpstreamResponse, GatewayError> {
    UserClient::new(&state.api, &state.cache).get_users().await
}

/// DELETE /users/{user_id}
/// Forwards a user deletion.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<UpstreamResponse, GatewayError> {
    UserClient::new(&state.api, &state.cache).delete_user(user_id).await
}
