//! Item lifecycle, owner-enriched detail views, search and comments.

use chrono::NaiveDateTime;
use sea_orm::DatabaseConnection;

use crate::{
    data::{
        booking::BookingRepository, comment::CommentRepository, item::ItemRepository,
        request::RequestRepository, user::UserRepository,
    },
    error::AppError,
    model::{
        comment::{Comment, CreateCommentParams},
        item::{BookingSlot, CreateItemParams, Item, ItemDetails, UpdateItemParams},
    },
    util::time,
};

pub struct ItemService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an item owned by `user_id`.
    ///
    /// A `request_id` pointing at a request that does not exist is dropped
    /// silently rather than rejected; the item is then created unlinked.
    ///
    /// # Returns
    /// - `Ok(Item)` - The created item
    /// - `Err(AppError::NotFound)` - Unknown owner
    pub async fn create(&self, user_id: i64, mut params: CreateItemParams) -> Result<Item, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with ID:{} not found", user_id)))?;

        if let Some(request_id) = params.request_id {
            if !RequestRepository::new(self.db).exists_by_id(request_id).await? {
                params.request_id = None;
            }
        }

        let item = ItemRepository::new(self.db).create(user_id, params).await?;

        tracing::info!("User {} created item {}", user_id, item.id);

        Ok(Item::from_entity(item))
    }

    /// Applies a partial update to an item the user owns.
    ///
    /// `None` fields keep their stored values. Updating an item the user does
    /// not own is refused, whether or not the item exists.
    ///
    /// # Returns
    /// - `Ok(Item)` - The updated item
    /// - `Err(AppError)` - Unknown user, or the user does not own the item
    pub async fn update(
        &self,
        user_id: i64,
        item_id: i64,
        params: UpdateItemParams,
    ) -> Result<Item, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with ID:{} not found", user_id)))?;

        let repo = ItemRepository::new(self.db);

        repo.find_by_owner_and_id(user_id, item_id)
            .await?
            .ok_or_else(|| {
                AppError::AccessDenied(format!("The user with ID:{} is not the owner", user_id))
            })?;

        let updated = repo.update(item_id, params).await?;

        Ok(Item::from_entity(updated))
    }

    /// Fetches an item with its comments, plus the closest APPROVED bookings
    /// around "now" when the requester owns the item.
    ///
    /// # Returns
    /// - `Ok(ItemDetails)` - Item, comments, and booking slots for the owner
    /// - `Err(AppError::NotFound)` - Unknown user or item
    pub async fn get(&self, user_id: i64, item_id: i64) -> Result<ItemDetails, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with ID:{} not found", user_id)))?;

        let item = ItemRepository::new(self.db)
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Item with ID:{} not found", item_id)))?;

        let (last_booking, next_booking) = self.booking_slots(item_id, user_id).await?;
        let comments = self.comments_for(item_id).await?;

        Ok(ItemDetails {
            item: Item::from_entity(item),
            last_booking,
            next_booking,
            comments,
        })
    }

    /// Returns one page of the requester's own items, each enriched with its
    /// booking slots and comments. Ordered by item id ascending.
    ///
    /// # Arguments
    /// - `user_id` - Owning user (must exist)
    /// - `page` / `per_page` - Zero-based page index and page size
    pub async fn get_all(
        &self,
        user_id: i64,
        page: u64,
        per_page: u64,
    ) -> Result<Vec<ItemDetails>, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with ID:{} not found", user_id)))?;

        let items = ItemRepository::new(self.db)
            .find_all_by_owner(user_id, page, per_page)
            .await?;

        let mut details = Vec::with_capacity(items.len());
        for item in items {
            let (last_booking, next_booking) = self.booking_slots(item.id, user_id).await?;
            let comments = self.comments_for(item.id).await?;
            details.push(ItemDetails {
                item: Item::from_entity(item),
                last_booking,
                next_booking,
                comments,
            });
        }

        Ok(details)
    }

    /// Searches available items by name or description.
    ///
    /// Blank search text short-circuits to an empty result without touching
    /// the database.
    ///
    /// # Returns
    /// - `Ok(Vec<Item>)` - Matching available items for the requested page
    /// - `Err(AppError::NotFound)` - Unknown user
    pub async fn search(
        &self,
        user_id: i64,
        text: &str,
        page: u64,
        per_page: u64,
    ) -> Result<Vec<Item>, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with ID:{} not found", user_id)))?;

        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let items = ItemRepository::new(self.db)
            .search(text, page, per_page)
            .await?;

        Ok(items.into_iter().map(Item::from_entity).collect())
    }

    /// Adds a comment to an item.
    ///
    /// Only a user with an APPROVED booking of the item that has already
    /// ended may comment.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The created comment with the author's name
    /// - `Err(AppError::NotFound)` - Unknown user or item
    /// - `Err(AppError::InvalidInput)` - No finished approved booking
    pub async fn add_comment(
        &self,
        user_id: i64,
        item_id: i64,
        params: CreateCommentParams,
    ) -> Result<Comment, AppError> {
        let author = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with ID:{} not found", user_id)))?;

        ItemRepository::new(self.db)
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Item with ID:{} not found", item_id)))?;

        let now = time::now();
        let eligible = BookingRepository::new(self.db)
            .has_finished_approved(user_id, item_id, now)
            .await?;
        if !eligible {
            return Err(AppError::InvalidInput(
                "Comment can be added after using the item".to_string(),
            ));
        }

        let comment = CommentRepository::new(self.db)
            .create(item_id, user_id, params.text, now)
            .await?;

        Ok(Comment::from_parts(comment, author.name))
    }

    /// Resolves an item that must exist and be available, for the booking
    /// paths.
    ///
    /// # Returns
    /// - `Ok(Model)` - The available item
    /// - `Err(AppError::NotFound)` - Unknown item
    /// - `Err(AppError::InvalidInput)` - Item exists but is unavailable
    pub async fn get_available_item(&self, item_id: i64) -> Result<entity::item::Model, AppError> {
        let item = ItemRepository::new(self.db)
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Item with ID:{} not found", item_id)))?;

        if !item.available {
            return Err(AppError::InvalidInput(format!(
                "Item with ID:{} not available",
                item_id
            )));
        }

        Ok(item)
    }

    /// Computes the last and next APPROVED booking slots around "now".
    ///
    /// The slots are populated only when `user_id` owns the item; for anyone
    /// else both are `None`. Last is the latest booking already started, next
    /// the earliest one not yet started.
    async fn booking_slots(
        &self,
        item_id: i64,
        user_id: i64,
    ) -> Result<(Option<BookingSlot>, Option<BookingSlot>), AppError> {
        let approved = BookingRepository::new(self.db)
            .find_approved_for_owned_item(item_id, user_id)
            .await?;

        let now = time::now();
        Ok((
            Self::last_slot(&approved, now),
            Self::next_slot(&approved, now),
        ))
    }

    fn last_slot(approved: &[entity::booking::Model], now: NaiveDateTime) -> Option<BookingSlot> {
        approved
            .iter()
            .filter(|b| b.start_date < now)
            .max_by_key(|b| b.end_date)
            .map(BookingSlot::from_entity)
    }

    fn next_slot(approved: &[entity::booking::Model], now: NaiveDateTime) -> Option<BookingSlot> {
        approved
            .iter()
            .filter(|b| b.start_date > now)
            .min_by_key(|b| b.start_date)
            .map(BookingSlot::from_entity)
    }

    async fn comments_for(&self, item_id: i64) -> Result<Vec<Comment>, AppError> {
        let rows = CommentRepository::new(self.db)
            .find_all_by_item(item_id)
            .await?;

        rows.into_iter()
            .map(|(comment, author)| {
                let author = author.ok_or_else(|| {
                    AppError::InternalError(format!("Author of comment {} missing", comment.id))
                })?;
                Ok(Comment::from_parts(comment, author.name))
            })
            .collect()
    }
}
