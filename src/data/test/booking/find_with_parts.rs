use super::*;

/// Tests resolving a booking with its item and booker.
///
/// Expected: Ok(Some((booking, item, booker)))
#[tokio::test]
async fn resolves_item_and_booker() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shareit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, booker, item, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;

    let parts = BookingRepository::new(db)
        .find_with_parts(booking.id)
        .await?
        .unwrap();

    assert_eq!(parts.0.id, booking.id);
    assert_eq!(parts.1.id, item.id);
    assert_eq!(parts.2.id, booker.id);

    Ok(())
}

/// Tests looking up a booking that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shareit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let parts = BookingRepository::new(db).find_with_parts(999).await?;

    assert!(parts.is_none());

    Ok(())
}
