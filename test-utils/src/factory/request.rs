//! Item-request factory for creating test request entities.

use crate::factory::helpers::next_id;
use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test item requests with customizable fields.
pub struct RequestFactory<'a> {
    db: &'a DatabaseConnection,
    description: String,
    requestor_id: i64,
    created: NaiveDateTime,
}

impl<'a> RequestFactory<'a> {
    /// Creates a new RequestFactory with default values.
    ///
    /// Defaults:
    /// - description: `"Request {id}"` where id is auto-incremented
    /// - created: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `requestor_id` - Id of an existing user posting the request
    pub fn new(db: &'a DatabaseConnection, requestor_id: i64) -> Self {
        let id = next_id();
        Self {
            db,
            description: format!("Request {}", id),
            requestor_id,
            created: Utc::now().naive_utc(),
        }
    }

    /// Sets the description of the request.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the creation timestamp. Listings order by it, newest first.
    pub fn created(mut self, created: NaiveDateTime) -> Self {
        self.created = created;
        self
    }

    /// Builds and inserts the request entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::request::Model)` - Created request entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::request::Model, DbErr> {
        entity::request::ActiveModel {
            description: ActiveValue::Set(self.description),
            requestor_id: ActiveValue::Set(self.requestor_id),
            created: ActiveValue::Set(self.created),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a request with default values.
///
/// Shorthand for `RequestFactory::new(db, requestor_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `requestor_id` - Id of an existing user posting the request
///
/// # Returns
/// - `Ok(entity::request::Model)` - Created request entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_request(
    db: &DatabaseConnection,
    requestor_id: i64,
) -> Result<entity::request::Model, DbErr> {
    RequestFactory::new(db, requestor_id).build().await
}
