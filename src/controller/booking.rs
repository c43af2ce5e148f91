use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    dto::booking::CreateBookingDto,
    error::AppError,
    middleware::identity::SharerId,
    model::booking::{Booking, BookingStateFilter, CreateBookingParams},
    service::booking::BookingService,
    state::AppState,
};

#[derive(Deserialize)]
pub struct ApproveQuery {
    pub approved: bool,
}

#[derive(Deserialize)]
pub struct BookingListQuery {
    pub state: Option<String>,
    /// `true` lists bookings of items the acting user owns instead of
    /// bookings they made.
    #[serde(default)]
    pub owner: bool,
    #[serde(default)]
    pub from: u64,
    #[serde(default = "super::default_size")]
    pub size: u64,
}

/// POST /bookings
/// Book an item for a time window; the booking starts out WAITING
pub async fn create_booking(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Json(body): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let booking = BookingService::new(&state.db)
        .save(
            user_id,
            CreateBookingParams {
                item_id: body.item_id,
                start: body.start,
                end: body.end,
            },
        )
        .await?;

    Ok(Json(booking.into_dto()))
}

/// PATCH /bookings/{booking_id}?approved=
/// Approve or reject a WAITING booking as the item's owner
pub async fn approve_booking(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Path(booking_id): Path<i64>,
    Query(query): Query<ApproveQuery>,
) -> Result<impl IntoResponse, AppError> {
    let booking = BookingService::new(&state.db)
        .approve_booking(user_id, booking_id, query.approved)
        .await?;

    Ok(Json(booking.into_dto()))
}

/// GET /bookings/{booking_id}
/// Fetch a booking, visible to the item's owner or the booker
pub async fn get_booking(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Path(booking_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let booking = BookingService::new(&state.db)
        .get(user_id, booking_id)
        .await?;

    Ok(Json(booking.into_dto()))
}

/// GET /bookings?state=&owner=&from=&size=
/// List bookings for a state filter, newest start first
pub async fn get_bookings(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Query(query): Query<BookingListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let state_filter = match query.state.as_deref() {
        Some(value) => value.parse::<BookingStateFilter>()?,
        None => BookingStateFilter::All,
    };
    let bookings = BookingService::new(&state.db)
        .get_all(user_id, state_filter, query.owner, query.from, query.size)
        .await?;

    Ok(Json(
        bookings
            .into_iter()
            .map(Booking::into_dto)
            .collect::<Vec<_>>(),
    ))
}
