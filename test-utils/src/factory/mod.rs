//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let item = factory::item::create_item(&db, user.id).await?;
//!
//!     // Create with all dependencies
//!     let (owner, booker, item, booking) =
//!         factory::helpers::create_booking_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let item = factory::item::ItemFactory::new(&db, owner.id)
//!     .name("Cordless drill")
//!     .available(false)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `item` - Create item entities
//! - `booking` - Create booking entities
//! - `request` - Create item-request entities
//! - `comment` - Create comment entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod booking;
pub mod comment;
pub mod helpers;
pub mod item;
pub mod request;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use booking::create_booking;
pub use comment::create_comment;
pub use item::create_item;
pub use request::create_request;
pub use user::create_user;
