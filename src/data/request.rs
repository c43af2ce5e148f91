//! Item-request data repository for database operations.

use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

/// Repository providing database operations for item requests.
pub struct RequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new request with the server-assigned creation time.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created request
    /// - `Err(DbErr)` - Database error
    pub async fn create(
        &self,
        requestor_id: i64,
        description: String,
        created: NaiveDateTime,
    ) -> Result<entity::request::Model, DbErr> {
        entity::request::ActiveModel {
            description: ActiveValue::Set(description),
            requestor_id: ActiveValue::Set(requestor_id),
            created: ActiveValue::Set(created),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a request by id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<entity::request::Model>, DbErr> {
        entity::prelude::Request::find_by_id(id).one(self.db).await
    }

    /// Checks whether a request exists. Used when linking a new item to the
    /// request it answers.
    pub async fn exists_by_id(&self, id: i64) -> Result<bool, DbErr> {
        let count = entity::prelude::Request::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    /// Returns all requests made by `requestor_id`, newest first.
    pub async fn find_all_by_requestor(
        &self,
        requestor_id: i64,
    ) -> Result<Vec<entity::request::Model>, DbErr> {
        entity::prelude::Request::find()
            .filter(entity::request::Column::RequestorId.eq(requestor_id))
            .order_by_desc(entity::request::Column::Created)
            .all(self.db)
            .await
    }

    /// Returns one page of the requests made by everyone except
    /// `requestor_id`, newest first.
    ///
    /// # Arguments
    /// - `requestor_id` - User whose own requests are excluded
    /// - `page` - Zero-based page index
    /// - `per_page` - Page size
    pub async fn find_all_excluding(
        &self,
        requestor_id: i64,
        page: u64,
        per_page: u64,
    ) -> Result<Vec<entity::request::Model>, DbErr> {
        entity::prelude::Request::find()
            .filter(entity::request::Column::RequestorId.ne(requestor_id))
            .order_by_desc(entity::request::Column::Created)
            .paginate(self.db, per_page.max(1))
            .fetch_page(page)
            .await
    }
}
