use super::*;

/// Tests transitioning a booking's status.
///
/// Verifies that the write changes only the status and leaves the window
/// untouched.
///
/// Expected: Ok with APPROVED booking
#[tokio::test]
async fn writes_new_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shareit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let updated = BookingRepository::new(db)
        .update_status(booking.id, BookingStatus::Approved)
        .await?;

    assert_eq!(updated.id, booking.id);
    assert_eq!(updated.status, BookingStatus::Approved);
    assert_eq!(updated.start_date, booking.start_date);
    assert_eq!(updated.end_date, booking.end_date);

    Ok(())
}
