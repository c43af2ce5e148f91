use super::*;

/// Seeds one past, one current and one future booking for a fresh booker.
///
/// Returns the booker and the booking ids as (past, current, future).
async fn seed_timeline(
    db: &sea_orm::DatabaseConnection,
) -> Result<(entity::user::Model, i64, i64, i64), DbErr> {
    let (_, item) = factory::helpers::create_item_with_owner(db).await?;
    let booker = factory::user::create_user(db).await?;

    let now = Utc::now().naive_utc();
    let past = factory::booking::BookingFactory::new(db, item.id, booker.id)
        .window(now - Duration::days(3), now - Duration::days(2))
        .status(BookingStatus::Approved)
        .build()
        .await?;
    let current = factory::booking::BookingFactory::new(db, item.id, booker.id)
        .window(now - Duration::days(1), now + Duration::days(1))
        .status(BookingStatus::Approved)
        .build()
        .await?;
    let future = factory::booking::BookingFactory::new(db, item.id, booker.id)
        .window(now + Duration::days(2), now + Duration::days(3))
        .build()
        .await?;

    Ok((booker, past.id, current.id, future.id))
}

/// Tests the ALL filter.
///
/// Expected: Ok with every booking, newest start first
#[tokio::test]
async fn all_returns_everything_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shareit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (booker, past, current, future) = seed_timeline(db).await?;

    let bookings = BookingService::new(db)
        .get_all(booker.id, BookingStateFilter::All, false, 0, 10)
        .await
        .unwrap();

    let ids: Vec<i64> = bookings.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![future, current, past]);

    Ok(())
}

/// Tests the FUTURE filter: start strictly after now.
///
/// Expected: Ok with only the future booking
#[tokio::test]
async fn future_returns_not_yet_started() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shareit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (booker, _, _, future) = seed_timeline(db).await?;

    let bookings = BookingService::new(db)
        .get_all(booker.id, BookingStateFilter::Future, false, 0, 10)
        .await
        .unwrap();

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].id, future);

    Ok(())
}

/// Tests the PAST filter: end strictly before now.
///
/// Expected: Ok with only the finished booking
#[tokio::test]
async fn past_returns_finished() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shareit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (booker, past, _, _) = seed_timeline(db).await?;

    let bookings = BookingService::new(db)
        .get_all(booker.id, BookingStateFilter::Past, false, 0, 10)
        .await
        .unwrap();

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].id, past);

    Ok(())
}

/// Tests the CURRENT filter: now inside the window, status irrelevant.
///
/// Expected: Ok with only the in-progress booking
#[tokio::test]
async fn current_returns_in_progress() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shareit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (booker, _, current, _) = seed_timeline(db).await?;

    let bookings = BookingService::new(db)
        .get_all(booker.id, BookingStateFilter::Current, false, 0, 10)
        .await
        .unwrap();

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].id, current);

    Ok(())
}

/// Tests the WAITING and REJECTED status filters.
///
/// Expected: Ok with only bookings in the requested status
#[tokio::test]
async fn status_filters_match_exactly() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shareit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, item) = factory::helpers::create_item_with_owner(db).await?;
    let booker = factory::user::create_user(db).await?;

    let waiting = factory::booking::create_booking(db, item.id, booker.id).await?;
    let rejected = factory::booking::BookingFactory::new(db, item.id, booker.id)
        .status(BookingStatus::Rejected)
        .build()
        .await?;

    let service = BookingService::new(db);

    let found_waiting = service
        .get_all(booker.id, BookingStateFilter::Waiting, false, 0, 10)
        .await
        .unwrap();
    let found_rejected = service
        .get_all(booker.id, BookingStateFilter::Rejected, false, 0, 10)
        .await
        .unwrap();

    assert_eq!(found_waiting.len(), 1);
    assert_eq!(found_waiting[0].id, waiting.id);
    assert_eq!(found_rejected.len(), 1);
    assert_eq!(found_rejected[0].id, rejected.id);

    Ok(())
}

/// Tests the owner scope of the listing.
///
/// The owner of the booked items sees the bookings without having made any;
/// a booker listing as owner sees nothing.
///
/// Expected: Ok with scope-matching bookings only
#[tokio::test]
async fn owner_scope_lists_bookings_of_owned_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shareit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, booker, _, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;

    let service = BookingService::new(db);

    let as_owner = service
        .get_all(owner.id, BookingStateFilter::All, true, 0, 10)
        .await
        .unwrap();
    let booker_as_owner = service
        .get_all(booker.id, BookingStateFilter::All, true, 0, 10)
        .await
        .unwrap();

    assert_eq!(as_owner.len(), 1);
    assert_eq!(as_owner[0].id, booking.id);
    assert!(booker_as_owner.is_empty());

    Ok(())
}

/// Tests the clamp-to-last-page behavior of the ALL filter.
///
/// A page index past the end falls back to the last page with content
/// instead of returning an empty page.
///
/// Expected: Ok with the last page's booking
#[tokio::test]
async fn all_clamps_page_past_the_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shareit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, item) = factory::helpers::create_item_with_owner(db).await?;
    let booker = factory::user::create_user(db).await?;

    let now = Utc::now().naive_utc();
    let mut oldest = 0;
    for days in 1..=3 {
        let booking = factory::booking::BookingFactory::new(db, item.id, booker.id)
            .window(now + Duration::days(days), now + Duration::days(days + 1))
            .build()
            .await?;
        if days == 1 {
            oldest = booking.id;
        }
    }

    // 3 bookings at 2 per page leaves pages 0 and 1; page 5 clamps to 1.
    let bookings = BookingService::new(db)
        .get_all(booker.id, BookingStateFilter::All, false, 5, 2)
        .await
        .unwrap();

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].id, oldest);

    Ok(())
}

/// Tests that filtered branches do not clamp.
///
/// Expected: Ok with empty page
#[tokio::test]
async fn filtered_branches_return_empty_page_past_the_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shareit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, item) = factory::helpers::create_item_with_owner(db).await?;
    let booker = factory::user::create_user(db).await?;
    factory::booking::create_booking(db, item.id, booker.id).await?;

    let bookings = BookingService::new(db)
        .get_all(booker.id, BookingStateFilter::Waiting, false, 5, 2)
        .await
        .unwrap();

    assert!(bookings.is_empty());

    Ok(())
}

/// Tests listing as an unknown user.
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

    let err = BookingService::new(db)
        .get_all(999, BookingStateFilter::All, false, 0, 10)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "User with ID:999 not found");

    Ok(())
}
