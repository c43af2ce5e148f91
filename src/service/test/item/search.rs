use super::*;

/// Tests searching available items.
///
/// Expected: Ok with matching available items only
#[tokio::test]
async fn finds_available_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shareit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let viewer = factory::user::create_user(db).await?;

    let drill = factory::item::ItemFactory::new(db, owner.id)
        .name("Power drill")
        .build()
        .await?;
    factory::item::ItemFactory::new(db, owner.id)
        .name("Broken drill")
        .available(false)
        .build()
        .await?;

    let items = ItemService::new(db)
        .search(viewer.id, "drill", 0, 10)
        .await
        .unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, drill.id);

    Ok(())
}

/// Tests that blank search text short-circuits to an empty result.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn blank_text_returns_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shareit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _item) = factory::helpers::create_item_with_owner(db).await?;
    let viewer = factory::user::create_user(db).await?;

    let service = ItemService::new(db);

    assert!(service.search(viewer.id, "", 0, 10).await.unwrap().is_empty());
    assert!(service.search(viewer.id, "   ", 0, 10).await.unwrap().is_empty());

    Ok(())
}

/// Tests searching as an unknown user.
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

    let err = ItemService::new(db)
        .search(999, "drill", 0, 10)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "User with ID:999 not found");

    Ok(())
}
