//! Booking engine: time-window validation, the status state machine and the
//! state-filtered listing queries.

use std::collections::HashMap;

use entity::booking::BookingStatus;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::{
    data::{
        booking::{BookingRepository, BookingScope},
        user::UserRepository,
    },
    error::AppError,
    model::booking::{Booking, BookingStateFilter, CreateBookingParams},
    service::item::ItemService,
    util::time,
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a booking in status WAITING.
    ///
    /// Preconditions are checked in a fixed order and the first violation is
    /// reported: the requester must exist, the item must exist and be
    /// available, the requester must not own the item, and the time window
    /// must pass `CreateBookingParams::validated_window`. Nothing is written
    /// before every check passes.
    ///
    /// # Arguments
    /// - `user_id` - Requesting (booking) user
    /// - `params` - Candidate item and time window
    ///
    /// # Returns
    /// - `Ok(Booking)` - The persisted WAITING booking with item and booker attached
    /// - `Err(AppError)` - First violated precondition
    pub async fn save(
        &self,
        user_id: i64,
        params: CreateBookingParams,
    ) -> Result<Booking, AppError> {
        let booker = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with ID:{} not found", user_id)))?;

        let item = ItemService::new(self.db)
            .get_available_item(params.item_id)
            .await?;

        if item.owner_id == user_id {
            return Err(AppError::AccessDenied("This is your item".to_string()));
        }

        let (start, end) = params.validated_window(time::now())?;

        let booking = BookingRepository::new(self.db)
            .create(item.id, user_id, start, end)
            .await?;

        tracing::info!("User {} booked item {} as booking {}", user_id, item.id, booking.id);

        Ok(Booking::from_parts(booking, item, booker))
    }

    /// Transitions a WAITING booking to APPROVED or REJECTED.
    ///
    /// The status check runs before any actor check: a booking that is not
    /// WAITING is an invalid-state failure regardless of who asks. Then the
    /// three-way actor check: the item's owner performs the transition, the
    /// booker is refused with an access error, and anyone else with a
    /// distinct wrong-approver error.
    ///
    /// Concurrent transitions of the same booking are not guarded by a
    /// version check; the last write wins.
    ///
    /// # Arguments
    /// - `user_id` - Acting user
    /// - `booking_id` - Booking to transition
    /// - `approved` - `true` approves, `false` rejects
    ///
    /// # Returns
    /// - `Ok(Booking)` - The transitioned booking
    /// - `Err(AppError)` - Not found, invalid state, or the actor check failure
    pub async fn approve_booking(
        &self,
        user_id: i64,
        booking_id: i64,
        approved: bool,
    ) -> Result<Booking, AppError> {
        let repo = BookingRepository::new(self.db);

        let booking = repo.find_by_id(booking_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Booking with ID:{} not found", booking_id))
        })?;

        if booking.status != BookingStatus::Waiting {
            return Err(AppError::InvalidState(format!(
                "Booking is {}",
                booking.status.as_str()
            )));
        }

        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with ID:{} not found", user_id)))?;

        let item = ItemService::new(self.db)
            .get_available_item(booking.item_id)
            .await?;

        if item.owner_id == user_id {
            let status = if approved {
                BookingStatus::Approved
            } else {
                BookingStatus::Rejected
            };

            let updated = repo.update_status(booking.id, status).await?;
            let booker = UserRepository::new(self.db)
                .find_by_id(updated.booker_id)
                .await?
                .ok_or_else(|| {
                    AppError::InternalError(format!("Booker {} missing", updated.booker_id))
                })?;

            tracing::info!("Booking {} set to {}", updated.id, status.as_str());

            Ok(Booking::from_parts(updated, item, booker))
        } else if booking.booker_id == user_id {
            Err(AppError::AccessDenied(
                "Only the owner can change the status".to_string(),
            ))
        } else {
            Err(AppError::WrongApprover(format!(
                "User {} does not have access",
                user_id
            )))
        }
    }

    /// Fetches a booking, visible only to the item's owner or the booker.
    ///
    /// # Returns
    /// - `Ok(Booking)` - Booking with item and booker attached
    /// - `Err(AppError::NotFound)` - Unknown booking or user
    /// - `Err(AppError::AccessDenied)` - Requester is neither owner nor booker
    pub async fn get(&self, user_id: i64, booking_id: i64) -> Result<Booking, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with ID:{} not found", user_id)))?;

        let (booking, item, booker) = BookingRepository::new(self.db)
            .find_with_parts(booking_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Booking with ID:{} not found", booking_id))
            })?;

        if item.owner_id == user_id || booking.booker_id == user_id {
            Ok(Booking::from_parts(booking, item, booker))
        } else {
            Err(AppError::AccessDenied("Access is denied".to_string()))
        }
    }

    /// Lists bookings for a state filter, ordered by start descending.
    ///
    /// `as_owner` scopes the listing to items owned by the requester instead
    /// of bookings made by them. Filter semantics against server "now":
    /// FUTURE start > now, PAST end < now, CURRENT start < now < end,
    /// WAITING/REJECTED exact status, ALL the full scoped set.
    ///
    /// Only the ALL branch clamps pagination: when the requested page index
    /// strictly exceeds the total page count, the query is re-run with the
    /// last valid page index instead of returning an empty page. Filtered
    /// branches return whatever their page holds.
    ///
    /// # Arguments
    /// - `user_id` - Requesting user (must exist)
    /// - `state` - Parsed state filter
    /// - `as_owner` - Scope toggle (item owner vs. booking author)
    /// - `page` / `per_page` - Zero-based page index and page size
    ///
    /// # Returns
    /// - `Ok(Vec<Booking>)` - Bookings with items and bookers attached
    /// - `Err(AppError)` - Unknown user or database error
    pub async fn get_all(
        &self,
        user_id: i64,
        state: BookingStateFilter,
        as_owner: bool,
        page: u64,
        per_page: u64,
    ) -> Result<Vec<Booking>, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with ID:{} not found", user_id)))?;

        let repo = BookingRepository::new(self.db);
        let scope = if as_owner {
            BookingScope::Owner(user_id)
        } else {
            BookingScope::Booker(user_id)
        };
        let now = time::now();

        let bookings = match state {
            BookingStateFilter::Future => {
                repo.find_starting_after(scope, now, page, per_page).await?
            }
            BookingStateFilter::Past => {
                repo.find_ending_before(scope, now, page, per_page).await?
            }
            BookingStateFilter::Current => {
                repo.find_in_progress(scope, now, page, per_page).await?
            }
            BookingStateFilter::Waiting => {
                repo.find_by_status(scope, BookingStatus::Waiting, page, per_page)
                    .await?
            }
            BookingStateFilter::Rejected => {
                repo.find_by_status(scope, BookingStatus::Rejected, page, per_page)
                    .await?
            }
            BookingStateFilter::All => {
                let (bookings, total_pages) = repo.find_page(scope, page, per_page).await?;

                if page > total_pages {
                    // Requested page is past the end: fall back to the last
                    // valid page instead of returning an empty one.
                    let last_page = total_pages.saturating_sub(1);
                    repo.find_page(scope, last_page, per_page).await?.0
                } else {
                    bookings
                }
            }
        };

        self.assemble(bookings).await
    }

    /// Attaches items and bookers to raw booking rows, preserving order.
    async fn assemble(
        &self,
        bookings: Vec<entity::booking::Model>,
    ) -> Result<Vec<Booking>, AppError> {
        let item_ids: Vec<i64> = bookings.iter().map(|b| b.item_id).collect();
        let user_ids: Vec<i64> = bookings.iter().map(|b| b.booker_id).collect();

        let items: HashMap<i64, entity::item::Model> = entity::prelude::Item::find()
            .filter(entity::item::Column::Id.is_in(item_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|i| (i.id, i))
            .collect();
        let users: HashMap<i64, entity::user::Model> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        bookings
            .into_iter()
            .map(|booking| {
                let item = items
                    .get(&booking.item_id)
                    .cloned()
                    .ok_or_else(|| {
                        AppError::InternalError(format!("Item {} missing", booking.item_id))
                    })?;
                let booker = users
                    .get(&booking.booker_id)
                    .cloned()
                    .ok_or_else(|| {
                        AppError::InternalError(format!("User {} missing", booking.booker_id))
                    })?;

                Ok(Booking::from_parts(booking, item, booker))
            })
            .collect()
    }
}
