use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::dto::{item::ItemDto, user::UserDto};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: i64,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub status: String,
    pub item: ItemDto,
    pub booker: UserDto,
}

/// Booking creation body.
///
/// `start` and `end` stay optional at the wire level so the service can
/// report "start or end is null" as the first violated time rule instead of
/// rejecting the body during deserialization.
#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingDto {
    pub item_id: i64,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}
