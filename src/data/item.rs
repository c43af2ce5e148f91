//! Item data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::item::{CreateItemParams, UpdateItemParams};

/// Repository providing database operations for item records.
pub struct ItemRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new item owned by `owner_id`.
    ///
    /// The caller resolves `params.request_id` beforehand; this method stores
    /// whatever link it is given.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created item
    /// - `Err(DbErr)` - Database error
    pub async fn create(
        &self,
        owner_id: i64,
        params: CreateItemParams,
    ) -> Result<entity::item::Model, DbErr> {
        entity::item::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            available: ActiveValue::Set(params.available),
            owner_id: ActiveValue::Set(owner_id),
            request_id: ActiveValue::Set(params.request_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Applies a partial update: only `Some` fields are written, the rest
    /// keep their stored values.
    ///
    /// # Arguments
    /// - `id` - Item to update
    /// - `params` - Optional name, description and availability
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated item
    /// - `Err(DbErr)` - Database error, including updates of missing rows
    pub async fn update(
        &self,
        id: i64,
        params: UpdateItemParams,
    ) -> Result<entity::item::Model, DbErr> {
        let mut active = entity::item::ActiveModel {
            id: ActiveValue::Unchanged(id),
            ..Default::default()
        };

        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(available) = params.available {
            active.available = ActiveValue::Set(available);
        }

        active.update(self.db).await
    }

    /// Finds an item by id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<entity::item::Model>, DbErr> {
        entity::prelude::Item::find_by_id(id).one(self.db).await
    }

    /// Finds an item only when it belongs to `owner_id`. Used for the
    /// owner-gated update path.
    pub async fn find_by_owner_and_id(
        &self,
        owner_id: i64,
        id: i64,
    ) -> Result<Option<entity::item::Model>, DbErr> {
        entity::prelude::Item::find_by_id(id)
            .filter(entity::item::Column::OwnerId.eq(owner_id))
            .one(self.db)
            .await
    }

    /// Returns one page of the items owned by `owner_id`, oldest first.
    ///
    /// # Arguments
    /// - `owner_id` - Owning user
    /// - `page` - Zero-based page index
    /// - `per_page` - Page size
    pub async fn find_all_by_owner(
        &self,
        owner_id: i64,
        page: u64,
        per_page: u64,
    ) -> Result<Vec<entity::item::Model>, DbErr> {
        entity::prelude::Item::find()
            .filter(entity::item::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::item::Column::Id)
            .paginate(self.db, per_page.max(1))
            .fetch_page(page)
            .await
    }

    /// Searches available items whose name or description contains `text`
    /// (case-insensitive), paginated.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Matching available items for the requested page
    /// - `Err(DbErr)` - Database error
    pub async fn search(
        &self,
        text: &str,
        page: u64,
        per_page: u64,
    ) -> Result<Vec<entity::item::Model>, DbErr> {
        entity::prelude::Item::find()
            .filter(entity::item::Column::Available.eq(true))
            .filter(
                Condition::any()
                    .add(entity::item::Column::Name.contains(text))
                    .add(entity::item::Column::Description.contains(text)),
            )
            .order_by_asc(entity::item::Column::Id)
            .paginate(self.db, per_page.max(1))
            .fetch_page(page)
            .await
    }

    /// Returns all items linked to any of the given requests.
    pub async fn find_all_by_request_ids(
        &self,
        request_ids: &[i64],
    ) -> Result<Vec<entity::item::Model>, DbErr> {
        if request_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Item::find()
            .filter(entity::item::Column::RequestId.is_in(request_ids.iter().copied()))
            .all(self.db)
            .await
    }
}
