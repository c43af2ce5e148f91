use crate::{
    dto::item::{BookingItemDto, ItemDetailsDto, ItemDto},
    model::comment::Comment,
};

/// Shareable object owned by a user, optionally answering a prior request.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: i64,
    pub request_id: Option<i64>,
}

impl Item {
    pub fn from_entity(entity: entity::item::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            available: entity.available,
            owner_id: entity.owner_id,
            request_id: entity.request_id,
        }
    }

    pub fn into_dto(self) -> ItemDto {
        ItemDto {
            id: self.id,
            name: self.name,
            description: self.description,
            available: self.available,
            owner_id: self.owner_id,
            request_id: self.request_id,
        }
    }
}

/// Item enriched with the closest APPROVED bookings around "now" and the
/// comments left on it. The booking slots are only populated when the
/// requester owns the item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDetails {
    pub item: Item,
    pub last_booking: Option<BookingSlot>,
    pub next_booking: Option<BookingSlot>,
    pub comments: Vec<Comment>,
}

impl ItemDetails {
    pub fn into_dto(self) -> ItemDetailsDto {
        ItemDetailsDto {
            item: self.item.into_dto(),
            last_booking: self.last_booking.map(BookingSlot::into_dto),
            next_booking: self.next_booking.map(BookingSlot::into_dto),
            comments: self.comments.into_iter().map(Comment::into_dto).collect(),
        }
    }
}

/// Short booking view attached to item details.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingSlot {
    pub id: i64,
    pub booker_id: i64,
    pub start: chrono::NaiveDateTime,
    pub end: chrono::NaiveDateTime,
}

impl BookingSlot {
    pub fn from_entity(entity: &entity::booking::Model) -> Self {
        Self {
            id: entity.id,
            booker_id: entity.booker_id,
            start: entity.start_date,
            end: entity.end_date,
        }
    }

    pub fn into_dto(self) -> BookingItemDto {
        BookingItemDto {
            id: self.id,
            booker_id: self.booker_id,
            start: self.start,
            end: self.end,
        }
    }
}

/// Parameters for creating an item.
#[derive(Debug, Clone)]
pub struct CreateItemParams {
    pub name: String,
    pub description: String,
    pub available: bool,
    /// Request the item answers; linked only when the request exists.
    pub request_id: Option<i64>,
}

/// Parameters for a partial item update.
///
/// `None` preserves the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateItemParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}
