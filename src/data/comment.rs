//! Comment data repository for database operations.

use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

/// Repository providing database operations for item comments.
pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new comment with the server-assigned creation time.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created comment
    /// - `Err(DbErr)` - Database error
    pub async fn create(
        &self,
        item_id: i64,
        author_id: i64,
        text: String,
        created: NaiveDateTime,
    ) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            text: ActiveValue::Set(text),
            item_id: ActiveValue::Set(item_id),
            author_id: ActiveValue::Set(author_id),
            created: ActiveValue::Set(created),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Returns all comments on an item with their authors, oldest first.
    ///
    /// # Returns
    /// - `Ok(Vec<(comment, Option<author>)>)` - Comments joined with their authors
    /// - `Err(DbErr)` - Database error
    pub async fn find_all_by_item(
        &self,
        item_id: i64,
    ) -> Result<Vec<(entity::comment::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::ItemId.eq(item_id))
            .order_by_asc(entity::comment::Column::Created)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await
    }
}
