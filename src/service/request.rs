//! Item requests: posting a need and browsing requests with the items that
//! answer them.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    data::{item::ItemRepository, request::RequestRepository, user::UserRepository},
    error::AppError,
    model::request::{CreateRequestParams, Request},
    util::time,
};

pub struct RequestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RequestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a request with a server-assigned creation time.
    ///
    /// # Returns
    /// - `Ok(Request)` - The created request, with no answering items yet
    /// - `Err(AppError::NotFound)` - Unknown requestor
    pub async fn create(
        &self,
        user_id: i64,
        params: CreateRequestParams,
    ) -> Result<Request, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with ID:{} not found", user_id)))?;

        let request = RequestRepository::new(self.db)
            .create(user_id, params.description, time::now())
            .await?;

        tracing::info!("User {} posted request {}", user_id, request.id);

        Ok(Request::from_parts(request, Vec::new()))
    }

    /// Returns the requester's own requests, newest first, each with the
    /// items created against it.
    pub async fn get_own(&self, user_id: i64) -> Result<Vec<Request>, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with ID:{} not found", user_id)))?;

        let requests = RequestRepository::new(self.db)
            .find_all_by_requestor(user_id)
            .await?;

        self.assemble(requests).await
    }

    /// Returns one page of everyone else's requests, newest first, each with
    /// the items created against it.
    ///
    /// # Arguments
    /// - `user_id` - Requesting user, whose own requests are excluded
    /// - `page` / `per_page` - Zero-based page index and page size
    pub async fn get_all(
        &self,
        user_id: i64,
        page: u64,
        per_page: u64,
    ) -> Result<Vec<Request>, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with ID:{} not found", user_id)))?;

        let requests = RequestRepository::new(self.db)
            .find_all_excluding(user_id, page, per_page)
            .await?;

        self.assemble(requests).await
    }

    /// Fetches one request with the items created against it. Visible to any
    /// existing user.
    ///
    /// # Returns
    /// - `Ok(Request)` - The request with its answering items
    /// - `Err(AppError::NotFound)` - Unknown user or request
    pub async fn get(&self, user_id: i64, request_id: i64) -> Result<Request, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with ID:{} not found", user_id)))?;

        let request = RequestRepository::new(self.db)
            .find_by_id(request_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Request with ID:{} not found", request_id))
            })?;

        let items = ItemRepository::new(self.db)
            .find_all_by_request_ids(&[request_id])
            .await?;

        Ok(Request::from_parts(request, items))
    }

    /// Attaches answering items to raw request rows, preserving order.
    async fn assemble(
        &self,
        requests: Vec<entity::request::Model>,
    ) -> Result<Vec<Request>, AppError> {
        let ids: Vec<i64> = requests.iter().map(|r| r.id).collect();

        let mut by_request: HashMap<i64, Vec<entity::item::Model>> = HashMap::new();
        for item in ItemRepository::new(self.db)
            .find_all_by_request_ids(&ids)
            .await?
        {
            if let Some(request_id) = item.request_id {
                by_request.entry(request_id).or_default().push(item);
            }
        }

        Ok(requests
            .into_iter()
            .map(|request| {
                let items = by_request.remove(&request.id).unwrap_or_default();
                Request::from_parts(request, items)
            })
            .collect())
    }
}
