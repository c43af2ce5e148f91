//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use entity::booking::BookingStatus;
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an item together with its owner.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((owner, item))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_item_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::item::Model), DbErr> {
    let owner = crate::factory::user::create_user(db).await?;
    let item = crate::factory::item::create_item(db, owner.id).await?;

    Ok((owner, item))
}

/// Creates a complete booking hierarchy with all dependencies.
///
/// This is a convenience method that creates:
/// 1. Owner (user)
/// 2. Booker (user)
/// 3. Item owned by the owner
/// 4. WAITING booking of the item by the booker, one day in the future
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((owner, booker, item, booking))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::item::Model,
        entity::booking::Model,
    ),
    DbErr,
> {
    let owner = crate::factory::user::create_user(db).await?;
    let booker = crate::factory::user::create_user(db).await?;
    let item = crate::factory::item::create_item(db, owner.id).await?;
    let booking = crate::factory::booking::create_booking(db, item.id, booker.id).await?;

    Ok((owner, booker, item, booking))
}

/// Creates an already finished APPROVED booking of a fresh item for `booker`.
///
/// The booking's window lies entirely in the past, which makes the booker
/// eligible to comment on the item.
///
/// # Arguments
/// - `db` - Database connection
/// - `booker` - User who used the item
///
/// # Returns
/// - `Ok((owner, item, booking))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_finished_booking_for_user(
    db: &DatabaseConnection,
    booker: &entity::user::Model,
) -> Result<
    (
        entity::user::Model,
        entity::item::Model,
        entity::booking::Model,
    ),
    DbErr,
> {
    let owner = crate::factory::user::create_user(db).await?;
    let item = crate::factory::item::create_item(db, owner.id).await?;

    let now = chrono::Utc::now().naive_utc();
    let booking = crate::factory::booking::BookingFactory::new(db, item.id, booker.id)
        .window(now - chrono::Duration::days(2), now - chrono::Duration::days(1))
        .status(BookingStatus::Approved)
        .build()
        .await?;

    Ok((owner, item, booking))
}
