//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned for each request
//! handler through Axum's state extraction. `DatabaseConnection` is a
//! connection pool, so clones share the underlying pool.

use sea_orm::DatabaseConnection;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
