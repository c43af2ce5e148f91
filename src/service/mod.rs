//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository)
//! layer. They are responsible for:
//!
//! - **Business rules**: precondition checks in a fixed order, status transitions
//! - **Orchestration**: coordinating repositories and collaborating services
//! - **Domain models**: working with domain models rather than DTOs or entities

pub mod booking;
pub mod item;
pub mod request;
pub mod user;
