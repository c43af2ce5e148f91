use super::*;

/// Tests the happy path of booking an item.
///
/// Verifies that the booking starts out WAITING and carries the resolved
/// item and booker.
///
/// Expected: Ok with WAITING booking
#[tokio::test]
async fn creates_waiting_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shareit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, item) = factory::helpers::create_item_with_owner(db).await?;
    let booker = factory::user::create_user(db).await?;

    let booking = BookingService::new(db)
        .save(booker.id, future_params(item.id))
        .await
        .unwrap();

    assert_eq!(booking.status, BookingStatus::Waiting);
    assert_eq!(booking.item.id, item.id);
    assert_eq!(booking.booker.id, booker.id);

    Ok(())
}

/// Tests booking as an unknown user.
///
/// Expected: Err(NotFound) naming the user
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shareit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, item) = factory::helpers::create_item_with_owner(db).await?;

    let err = BookingService::new(db)
        .save(999, future_params(item.id))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "User with ID:999 not found");

    Ok(())
}

/// Tests booking an item that does not exist.
///
/// Expected: Err(NotFound) naming the item
#[tokio::test]
async fn rejects_unknown_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shareit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let booker = factory::user::create_user(db).await?;

    let err = BookingService::new(db)
        .save(booker.id, future_params(999))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Item with ID:999 not found");

    Ok(())
}

/// Tests booking an unavailable item.
///
/// Expected: Err(InvalidInput) naming the item
#[tokio::test]
async fn rejects_unavailable_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shareit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let item = factory::item::ItemFactory::new(db, owner.id)
        .available(false)
        .build()
        .await?;
    let booker = factory::user::create_user(db).await?;

    let err = BookingService::new(db)
        .save(booker.id, future_params(item.id))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), format!("Item with ID:{} not available", item.id));

    Ok(())
}

/// Tests that an owner cannot book their own item.
///
/// Expected: Err(AccessDenied) "This is your item"
#[tokio::test]
async fn rejects_booking_own_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shareit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, item) = factory::helpers::create_item_with_owner(db).await?;

    let err = BookingService::new(db)
        .save(owner.id, future_params(item.id))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::AccessDenied(_)));
    assert_eq!(err.to_string(), "This is your item");

    Ok(())
}

/// Tests that the time window is validated after the existence checks.
///
/// A past window on a real item from a real booker fails on the time rule,
/// and nothing is written.
///
/// Expected: Err(InvalidInput) "end in past tense"
#[tokio::test]
async fn rejects_past_window_without_writing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shareit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, item) = factory::helpers::create_item_with_owner(db).await?;
    let booker = factory::user::create_user(db).await?;

    let now = Utc::now().naive_utc();
    let err = BookingService::new(db)
        .save(
            booker.id,
            CreateBookingParams {
                item_id: item.id,
                start: Some(now - Duration::days(2)),
                end: Some(now - Duration::days(1)),
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "end in past tense");

    let bookings = BookingService::new(db)
        .get_all(owner.id, BookingStateFilter::All, true, 0, 10)
        .await
        .unwrap();
    assert!(bookings.is_empty());

    Ok(())
}
