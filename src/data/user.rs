//! User data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::model::user::CreateUserParams;

/// Repository providing database operations for user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user with a store-assigned id.
    ///
    /// # Arguments
    /// - `params` - Display name and unique email
    ///
    /// # Returns
    /// - `Ok(Model)` - The created user
    /// - `Err(DbErr)` - Database error (including unique-email violations that
    ///   slipped past the service-level check)
    pub async fn create(&self, params: CreateUserParams) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Updates a user's name and email in place. The id never changes.
    pub async fn update(
        &self,
        id: i64,
        name: String,
        email: String,
    ) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(name),
            email: ActiveValue::Set(email),
        }
        .update(self.db)
        .await
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_id(&self, id: i64) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Returns all users.
    pub async fn find_all(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find().all(self.db).await
    }

    /// Deletes a user by id.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No user with that id
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, id: i64) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether an email is already taken by a user other than
    /// `exclude_id` (pass `None` on creation).
    ///
    /// # Returns
    /// - `Ok(true)` - Another user already holds this email
    /// - `Ok(false)` - Email is free
    /// - `Err(DbErr)` - Database error
    pub async fn email_taken(&self, email: &str, exclude_id: Option<i64>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::User::find().filter(entity::user::Column::Email.eq(email));

        if let Some(id) = exclude_id {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        let count = query.count(self.db).await?;

        Ok(count > 0)
    }
}
