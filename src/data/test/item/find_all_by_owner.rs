use super::*;

/// Tests listing an owner's items.
///
/// Verifies that only the owner's items come back, ordered by id ascending.
///
/// Expected: Ok with the owner's items in creation order
#[tokio::test]
async fn returns_only_owner_items_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shareit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    let first = factory::item::create_item(db, owner.id).await?;
    factory::item::create_item(db, other.id).await?;
    let second = factory::item::create_item(db, owner.id).await?;

    let items = ItemRepository::new(db)
        .find_all_by_owner(owner.id, 0, 10)
        .await?;

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, first.id);
    assert_eq!(items[1].id, second.id);

    Ok(())
}

/// Tests pagination of the owner listing.
///
/// Expected: Ok with the second page holding the remaining item
#[tokio::test]
async fn respects_pagination() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shareit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    for _ in 0..3 {
        factory::item::create_item(db, owner.id).await?;
    }

    let repo = ItemRepository::new(db);
    let first_page = repo.find_all_by_owner(owner.id, 0, 2).await?;
    let second_page = repo.find_all_by_owner(owner.id, 1, 2).await?;

    assert_eq!(first_page.len(), 2);
    assert_eq!(second_page.len(), 1);

    Ok(())
}

/// Tests a zero page size coming straight from the query string.
///
/// Expected: Ok with one item on the clamped single-row page
#[tokio::test]
async fn clamps_zero_page_size() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shareit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    factory::item::create_item(db, owner.id).await?;
    factory::item::create_item(db, owner.id).await?;

    let items = ItemRepository::new(db).find_all_by_owner(owner.id, 0, 0).await?;

    assert_eq!(items.len(), 1);

    Ok(())
}
