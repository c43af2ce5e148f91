//! Domain models and operation parameter types.
//!
//! Domain models are converted from entity models at the repository boundary
//! and transformed to DTOs at the controller boundary. Parameter types carry
//! validated operation inputs from the controllers into the services; partial
//! updates use explicit `Option` fields where `None` means "keep the stored
//! value".

pub mod booking;
pub mod comment;
pub mod item;
pub mod request;
pub mod user;
