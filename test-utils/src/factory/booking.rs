//! Booking factory for creating test booking entities.

use chrono::{Duration, NaiveDateTime, Utc};
use entity::booking::BookingStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use entity::booking::BookingStatus;
/// use test_utils::factory::booking::BookingFactory;
///
/// let booking = BookingFactory::new(&db, item.id, booker.id)
///     .window(start, end)
///     .status(BookingStatus::Approved)
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    start: NaiveDateTime,
    end: NaiveDateTime,
    item_id: i64,
    booker_id: i64,
    status: BookingStatus,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - start: one day in the future
    /// - end: two days in the future
    /// - status: `Waiting`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `item_id` - Id of an existing item being booked
    /// - `booker_id` - Id of an existing user making the booking
    pub fn new(db: &'a DatabaseConnection, item_id: i64, booker_id: i64) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            db,
            start: now + Duration::days(1),
            end: now + Duration::days(2),
            item_id,
            booker_id,
            status: BookingStatus::Waiting,
        }
    }

    /// Sets the booked time window.
    pub fn window(mut self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Sets the booking status.
    pub fn status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the booking entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::booking::Model)` - Created booking entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            start_date: ActiveValue::Set(self.start),
            end_date: ActiveValue::Set(self.end),
            item_id: ActiveValue::Set(self.item_id),
            booker_id: ActiveValue::Set(self.booker_id),
            status: ActiveValue::Set(self.status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a WAITING booking one day in the future.
///
/// Shorthand for `BookingFactory::new(db, item_id, booker_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `item_id` - Id of an existing item being booked
/// - `booker_id` - Id of an existing user making the booking
///
/// # Returns
/// - `Ok(entity::booking::Model)` - Created booking entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_booking(
    db: &DatabaseConnection,
    item_id: i64,
    booker_id: i64,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, item_id, booker_id).build().await
}
