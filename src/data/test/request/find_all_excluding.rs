use super::*;

/// Tests the everyone-else listing.
///
/// Verifies that the requestor's own requests are excluded and the rest come
/// back newest first.
///
/// Expected: Ok with other users' requests, newest first
#[tokio::test]
async fn excludes_own_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shareit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let viewer = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    let now = Utc::now().naive_utc();
    factory::request::create_request(db, viewer.id).await?;
    let older = factory::request::RequestFactory::new(db, other.id)
        .created(now - Duration::hours(2))
        .build()
        .await?;
    let newer = factory::request::RequestFactory::new(db, other.id)
        .created(now - Duration::hours(1))
        .build()
        .await?;

    let requests = RequestRepository::new(db)
        .find_all_excluding(viewer.id, 0, 10)
        .await?;

    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].id, newer.id);
    assert_eq!(requests[1].id, older.id);

    Ok(())
}

/// Tests pagination of the everyone-else listing.
///
/// Expected: Ok with one request per page
#[tokio::test]
async fn respects_pagination() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shareit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let viewer = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    let now = Utc::now().naive_utc();
    for hours in 1..=3 {
        factory::request::RequestFactory::new(db, other.id)
            .created(now - Duration::hours(hours))
            .build()
            .await?;
    }

    let repo = RequestRepository::new(db);
    let first_page = repo.find_all_excluding(viewer.id, 0, 2).await?;
    let second_page = repo.find_all_excluding(viewer.id, 1, 2).await?;

    assert_eq!(first_page.len(), 2);
    assert_eq!(second_page.len(), 1);

    Ok(())
}
