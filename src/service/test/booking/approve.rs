use super::*;

/// Tests the owner approving a WAITING booking.
///
/// Expected: Ok with APPROVED booking
#[tokio::test]
async fn owner_approves_waiting_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shareit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let approved = BookingService::new(db)
        .approve_booking(owner.id, booking.id, true)
        .await
        .unwrap();

    assert_eq!(approved.status, BookingStatus::Approved);

    Ok(())
}

/// Tests the owner rejecting a WAITING booking.
///
/// Expected: Ok with REJECTED booking
#[tokio::test]
async fn owner_rejects_waiting_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shareit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let rejected = BookingService::new(db)
        .approve_booking(owner.id, booking.id, false)
        .await
        .unwrap();

    assert_eq!(rejected.status, BookingStatus::Rejected);

    Ok(())
}

/// Tests that only a WAITING booking can be transitioned.
///
/// A second approval attempt fails with the booking's current status in the
/// message, before any actor check.
///
/// Expected: Err(InvalidState) "Booking is APPROVED"
#[tokio::test]
async fn rejects_second_transition() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shareit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let service = BookingService::new(db);
    service.approve_booking(owner.id, booking.id, true).await.unwrap();

    let err = service
        .approve_booking(owner.id, booking.id, true)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidState(_)));
    assert_eq!(err.to_string(), "Booking is APPROVED");

    Ok(())
}

/// Tests that the status check runs before the actor check.
///
/// Even a stranger gets the invalid-state error once the booking is no
/// longer WAITING.
///
/// Expected: Err(InvalidState) for a stranger on an APPROVED booking
#[tokio::test]
async fn status_check_precedes_actor_check() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shareit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;
    let stranger = factory::user::create_user(db).await?;

    let service = BookingService::new(db);
    service.approve_booking(owner.id, booking.id, true).await.unwrap();

    let err = service
        .approve_booking(stranger.id, booking.id, true)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Booking is APPROVED");

    Ok(())
}

/// Tests the booker attempting the transition.
///
/// Expected: Err(AccessDenied) "Only the owner can change the status"
#[tokio::test]
async fn booker_cannot_transition() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shareit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, booker, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let err = BookingService::new(db)
        .approve_booking(booker.id, booking.id, true)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::AccessDenied(_)));
    assert_eq!(err.to_string(), "Only the owner can change the status");

    Ok(())
}

/// Tests a third party attempting the transition.
///
/// Expected: Err(WrongApprover) naming the acting user
#[tokio::test]
async fn stranger_cannot_transition() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shareit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;
    let stranger = factory::user::create_user(db).await?;

    let err = BookingService::new(db)
        .approve_booking(stranger.id, booking.id, true)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::WrongApprover(_)));
    assert_eq!(
        err.to_string(),
        format!("User {} does not have access", stranger.id)
    );

    Ok(())
}

/// Tests the full lifecycle: book, owner approves, booker retries.
///
/// The booker's late attempt hits the status check first and never reaches
/// the actor split.
///
/// Expected: Err(InvalidState) "Booking is APPROVED" for the booker
#[tokio::test]
async fn booker_retry_after_approval_is_invalid_state() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shareit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, item) = factory::helpers::create_item_with_owner(db).await?;
    let booker = factory::user::create_user(db).await?;

    let service = BookingService::new(db);
    let booking = service
        .save(booker.id, future_params(item.id))
        .await
        .unwrap();
    assert_eq!(booking.status, BookingStatus::Waiting);

    service.approve_booking(owner.id, booking.id, true).await.unwrap();

    let err = service
        .approve_booking(booker.id, booking.id, true)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidState(_)));
    assert_eq!(err.to_string(), "Booking is APPROVED");

    Ok(())
}

/// Tests transitioning a booking that does not exist.
///
/// Expected: Err(NotFound) naming the booking
#[tokio::test]
async fn rejects_unknown_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shareit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let err = BookingService::new(db)
        .approve_booking(user.id, 999, true)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Booking with ID:999 not found");

    Ok(())
}
