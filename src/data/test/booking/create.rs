use super::*;

/// Tests creating a booking.
///
/// Verifies that the stored booking carries the given window and starts out
/// WAITING.
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

    let now = Utc::now().naive_utc();
    let start = now + Duration::days(1);
    let end = now + Duration::days(2);

    let booking = BookingRepository::new(db)
        .create(item.id, booker.id, start, end)
        .await?;

    assert!(booking.id > 0);
    assert_eq!(booking.item_id, item.id);
    assert_eq!(booking.booker_id, booker.id);
    assert_eq!(booking.start_date, start);
    assert_eq!(booking.end_date, end);
    assert_eq!(booking.status, BookingStatus::Waiting);

    Ok(())
}
