//! Booking data repository: the query surface of the booking engine.
//!
//! Listing queries come in two scopes: bookings made by a user, or bookings
//! of items a user owns. The scope decides whether the query joins through
//! the item table. All listings are ordered by start descending.

use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};

use entity::booking::BookingStatus;

/// Perspective of a booking listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingScope {
    /// Bookings made by this user.
    Booker(i64),
    /// Bookings of items owned by this user.
    Owner(i64),
}

/// Repository providing database operations for booking records.
pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new booking in status WAITING.
    ///
    /// # Arguments
    /// - `item_id` - Booked item
    /// - `booker_id` - User making the booking
    /// - `start` / `end` - Validated time window
    ///
    /// # Returns
    /// - `Ok(Model)` - The created booking
    /// - `Err(DbErr)` - Database error
    pub async fn create(
        &self,
        item_id: i64,
        booker_id: i64,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            start_date: ActiveValue::Set(start),
            end_date: ActiveValue::Set(end),
            item_id: ActiveValue::Set(item_id),
            booker_id: ActiveValue::Set(booker_id),
            status: ActiveValue::Set(BookingStatus::Waiting),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Writes a new status for an existing booking.
    ///
    /// No version check guards this write; concurrent transitions on the same
    /// booking are last-write-wins.
    pub async fn update_status(
        &self,
        id: i64,
        status: BookingStatus,
    ) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            id: ActiveValue::Unchanged(id),
            status: ActiveValue::Set(status),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    /// Finds a booking by id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find_by_id(id).one(self.db).await
    }

    /// Finds a booking together with its item and booker rows.
    ///
    /// # Returns
    /// - `Ok(Some((booking, item, booker)))` - Booking and both references resolved
    /// - `Ok(None)` - No booking with that id
    /// - `Err(DbErr)` - Database error, including dangling references
    pub async fn find_with_parts(
        &self,
        id: i64,
    ) -> Result<
        Option<(
            entity::booking::Model,
            entity::item::Model,
            entity::user::Model,
        )>,
        DbErr,
    > {
        let Some(booking) = entity::prelude::Booking::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let item = entity::prelude::Item::find_by_id(booking.item_id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("item {}", booking.item_id)))?;
        let booker = entity::prelude::User::find_by_id(booking.booker_id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("user {}", booking.booker_id)))?;

        Ok(Some((booking, item, booker)))
    }

    /// Returns one page of the full scoped set plus the total page count.
    ///
    /// The page count feeds the clamp-to-last-page behavior of the unfiltered
    /// listing branch. A zero `per_page` is treated as one, as in every
    /// paginated query here.
    ///
    /// # Returns
    /// - `Ok((bookings, total_pages))` - Page content, newest start first
    /// - `Err(DbErr)` - Database error
    pub async fn find_page(
        &self,
        scope: BookingScope,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::booking::Model>, u64), DbErr> {
        let paginator = Self::scoped(scope)
            .order_by_desc(entity::booking::Column::StartDate)
            .paginate(self.db, per_page.max(1));

        let total_pages = paginator.num_pages().await?;
        let bookings = paginator.fetch_page(page).await?;

        Ok((bookings, total_pages))
    }

    /// Scoped bookings with start strictly after `moment` (FUTURE filter).
    pub async fn find_starting_after(
        &self,
        scope: BookingScope,
        moment: NaiveDateTime,
        page: u64,
        per_page: u64,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        Self::scoped(scope)
            .filter(entity::booking::Column::StartDate.gt(moment))
            .order_by_desc(entity::booking::Column::StartDate)
            .paginate(self.db, per_page.max(1))
            .fetch_page(page)
            .await
    }

    /// Scoped bookings with end strictly before `moment` (PAST filter).
    pub async fn find_ending_before(
        &self,
        scope: BookingScope,
        moment: NaiveDateTime,
        page: u64,
        per_page: u64,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        Self::scoped(scope)
            .filter(entity::booking::Column::EndDate.lt(moment))
            .order_by_desc(entity::booking::Column::StartDate)
            .paginate(self.db, per_page.max(1))
            .fetch_page(page)
            .await
    }

    /// Scoped bookings in progress at `moment`: start before it, end after it
    /// (CURRENT filter).
    pub async fn find_in_progress(
        &self,
        scope: BookingScope,
        moment: NaiveDateTime,
        page: u64,
        per_page: u64,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        Self::scoped(scope)
            .filter(entity::booking::Column::StartDate.lt(moment))
            .filter(entity::booking::Column::EndDate.gt(moment))
            .order_by_desc(entity::booking::Column::StartDate)
            .paginate(self.db, per_page.max(1))
            .fetch_page(page)
            .await
    }

    /// Scoped bookings with an exact status match (WAITING/REJECTED filters).
    pub async fn find_by_status(
        &self,
        scope: BookingScope,
        status: BookingStatus,
        page: u64,
        per_page: u64,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        Self::scoped(scope)
            .filter(entity::booking::Column::Status.eq(status))
            .order_by_desc(entity::booking::Column::StartDate)
            .paginate(self.db, per_page.max(1))
            .fetch_page(page)
            .await
    }

    /// Checks whether `booker_id` has an APPROVED booking of `item_id` that
    /// ended before `moment`. Gates comment creation.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one finished approved booking exists
    /// - `Ok(false)` - None found
    /// - `Err(DbErr)` - Database error
    pub async fn has_finished_approved(
        &self,
        booker_id: i64,
        item_id: i64,
        moment: NaiveDateTime,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Booking::find()
            .filter(entity::booking::Column::BookerId.eq(booker_id))
            .filter(entity::booking::Column::ItemId.eq(item_id))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Approved))
            .filter(entity::booking::Column::EndDate.lt(moment))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Returns the APPROVED bookings of an item, but only when `owner_id`
    /// actually owns it; anyone else gets an empty set. Feeds the next/last
    /// booking slots on item details.
    pub async fn find_approved_for_owned_item(
        &self,
        item_id: i64,
        owner_id: i64,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .join(JoinType::InnerJoin, entity::booking::Relation::Item.def())
            .filter(entity::booking::Column::ItemId.eq(item_id))
            .filter(entity::item::Column::OwnerId.eq(owner_id))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Approved))
            .all(self.db)
            .await
    }

    fn scoped(scope: BookingScope) -> Select<entity::booking::Entity> {
        match scope {
            BookingScope::Booker(user_id) => entity::prelude::Booking::find()
                .filter(entity::booking::Column::BookerId.eq(user_id)),
            BookingScope::Owner(user_id) => entity::prelude::Booking::find()
                .join(JoinType::InnerJoin, entity::booking::Relation::Item.def())
                .filter(entity::item::Column::OwnerId.eq(user_id)),
        }
    }
}
