//! User accounts: creation with email uniqueness, partial updates, lookup
//! and deletion.

use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, UpdateUserParams, User},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user, refusing an email another user already holds.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with its assigned id
    /// - `Err(AppError::Conflict)` - Email already taken
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.email_taken(&params.email, None).await? {
            return Err(AppError::Conflict(format!(
                "Email {} is already in use",
                params.email
            )));
        }

        let user = repo.create(params).await?;

        tracing::info!("Created user {}", user.id);

        Ok(User::from_entity(user))
    }

    /// Applies a partial update: `None` fields keep their stored values.
    ///
    /// A changed email must not collide with any other user's; keeping the
    /// same email is always allowed.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - Unknown user
    /// - `Err(AppError::Conflict)` - Email taken by another user
    pub async fn update(&self, id: i64, params: UpdateUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let existing = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with ID:{} not found", id)))?;

        let name = params.name.unwrap_or(existing.name);
        let email = params.email.unwrap_or(existing.email);

        if repo.email_taken(&email, Some(id)).await? {
            return Err(AppError::Conflict(format!(
                "Email {} is already in use",
                email
            )));
        }

        let updated = repo.update(id, name, email).await?;

        Ok(User::from_entity(updated))
    }

    /// Fetches a user by id.
    pub async fn get(&self, id: i64) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with ID:{} not found", id)))?;

        Ok(User::from_entity(user))
    }

    /// Returns all users.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db).find_all().await?;

        Ok(users.into_iter().map(User::from_entity).collect())
    }

    /// Deletes a user by id.
    ///
    /// # Returns
    /// - `Ok(())` - The user was deleted
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let deleted = UserRepository::new(self.db).delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound(format!("User with ID:{} not found", id)));
        }

        tracing::info!("Deleted user {}", id);

        Ok(())
    }
}
