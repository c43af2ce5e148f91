//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations
//! (CRUD) for each domain in the application. Repositories use SeaORM entity
//! models internally and return them to the service layer, which converts to
//! domain models and DTOs. All database queries, inserts, updates, and
//! deletes are performed through these repositories.

pub mod booking;
pub mod comment;
pub mod item;
pub mod request;
pub mod user;

#[cfg(test)]
mod test;
