use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    client::{api::UpstreamResponse, booking::BookingClient},
    error::GatewayError,
    identity::SharerId,
    state::AppState,
    validate,
};

/// Query parameter carrying the owner's approval decision.
#[derive(Debug, Deserialize)]
pub struct ApproveQuery {
    approved: bool,
}

/// Query parameters for booking listings.
#[derive(Debug, Deserialize)]
pub struct BookingListQuery {
    state: Option<String>,
    #[serde(default)]
    owner: bool,
    #[serde(default)]
    from: i64,
    #[serde(default = "super::default_size")]
    size: i64,
}

/// POST /bookings
/// Validates the time window and forwards a booking creation.
pub async fn create_booking(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Json(body): Json<Value>,
) -> Result<UpstreamResponse, GatewayError> {
    validate::booking_create(&body, chrono::Utc::now().naive_utc())?;
    BookingClient::new(&state.api, &state.cache)
        .create_booking(user_id, &body)
        .await
}

/// PATCH /bookings/{booking_id}?approved={bool}
/// Forwards the owner's approval decision.
pub async fn approve_booking(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Path(booking_id): Path<i64>,
    Query(query): Query<ApproveQuery>,
) -> Result<UpstreamResponse, GatewayError> {
    BookingClient::new(&state.api, &state.cache)
        .approve_booking(user_id, booking_id, query.approved)
        .await
}

/// GET /bookings/{booking_id}
/// Forwards a single booking lookup.
pub async fn get_booking(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Path(booking_id): Path<i64>,
) -> Result<UpstreamResponse, GatewayError> {
    BookingClient::new(&state.api, &state.cache)
        .get_booking(user_id, booking_id)
        .await
}

/// GET /bookings
/// Validates the state filter and forwards a booking listing.
pub async fn get_bookings(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Query(query): Query<BookingListQuery>,
) -> Result<UpstreamResponse, GatewayError> {
    validate::booking_state(query.state.as_deref())?;
    validate::pagination(query.from, query.size)?;
    BookingClient::new(&state.api, &state.cache)
        .get_bookings(user_id, query.state.as_deref(), query.owner, query.from, query.size)
        .await
}
