//! SeaORM entity models for the ShareIt domain.
//!
//! Each module defines one table: users, items, bookings, item requests and
//! comments. Relations mirror the foreign keys created by the `migration`
//! crate. Entity models stay free of business logic; the server converts them
//! to domain models at the repository boundary.

pub mod booking;
pub mod comment;
pub mod item;
pub mod request;
pub mod user;

pub mod prelude {
    pub use super::booking::Entity as Booking;
    pub use super::comment::Entity as Comment;
    pub use super::item::Entity as Item;
    pub use super::request::Entity as Request;
    pub use super::user::Entity as User;
}
