use std::str::FromStr;

use chrono::NaiveDateTime;
use entity::booking::BookingStatus;

use crate::{
    dto::booking::BookingDto,
    error::AppError,
    model::{item::Item, user::User},
};

/// Time-ranged reservation of an item by a user, with its resolved item and
/// booker attached.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i64,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub status: BookingStatus,
    pub item: Item,
    pub booker: User,
}

impl Booking {
    /// Assembles the domain booking from its entity and the already-loaded
    /// item and booker rows.
    pub fn from_parts(
        entity: entity::booking::Model,
        item: entity::item::Model,
        booker: entity::user::Model,
    ) -> Self {
        Self {
            id: entity.id,
            start: entity.start_date,
            end: entity.end_date,
            status: entity.status,
            item: Item::from_entity(item),
            booker: User::from_entity(booker),
        }
    }

    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            start: self.start,
            end: self.end,
            status: self.status.as_str().to_string(),
            item: self.item.into_dto(),
            booker: self.booker.into_dto(),
        }
    }
}

/// Parameters for creating a booking.
///
/// `start` and `end` stay optional so the null check can be reported as the
/// first violated time rule; `validated_window` resolves them.
#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub item_id: i64,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl CreateBookingParams {
    /// Validates the requested time window against `now`.
    ///
    /// The rules run in a fixed order and the first violated one is reported:
    /// null start or end, end in the past, end before start, start equal to
    /// end, start in the past. All violations are `InvalidInput`.
    ///
    /// # Returns
    /// - `Ok((start, end))` - The window passed every rule
    /// - `Err(AppError::InvalidInput)` - Message names the first violated rule
    pub fn validated_window(
        &self,
        now: NaiveDateTime,
    ) -> Result<(NaiveDateTime, NaiveDateTime), AppError> {
        let (start, end) = match (self.start, self.end) {
            (Some(start), Some(end)) => (start, end),
            _ => return Err(AppError::InvalidInput("start or end is null".to_string())),
        };

        if end < now {
            return Err(AppError::InvalidInput("end in past tense".to_string()));
        }
        if end < start {
            return Err(AppError::InvalidInput("end before start".to_string()));
        }
        if start == end {
            return Err(AppError::InvalidInput("start equal end".to_string()));
        }
        if start < now {
            return Err(AppError::InvalidInput("start in past tense".to_string()));
        }

        Ok((start, end))
    }
}

/// Closed set of query filters for booking listings.
///
/// Parsing an unknown value is a distinct failure (`InvalidInput`), not a
/// member of this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStateFilter {
    All,
    Current,
    Past,
    Future,
    Waiting,
    Rejected,
}

impl FromStr for BookingStateFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ALL" => Ok(Self::All),
            "CURRENT" => Ok(Self::Current),
            "PAST" => Ok(Self::Past),
            "FUTURE" => Ok(Self::Future),
            "WAITING" => Ok(Self::Waiting),
            "REJECTED" => Ok(Self::Rejected),
            other => Err(AppError::InvalidInput(format!("Unknown state: {}", other))),
        }
    }
}
