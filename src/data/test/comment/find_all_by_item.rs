use super::*;

/// Tests listing an item's comments with their authors.
///
/// Verifies ordering by creation time ascending and the author join.
///
/// Expected: Ok with oldest-first comments and resolved authors
#[tokio::test]
async fn returns_comments_with_authors_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shareit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, item) = factory::helpers::create_item_with_owner(db).await?;
    let author = factory::user::create_user(db).await?;

    let now = Utc::now().naive_utc();
    let older = factory::comment::CommentFactory::new(db, item.id, author.id)
        .created(now - Duration::hours(2))
        .build()
        .await?;
    let newer = factory::comment::CommentFactory::new(db, item.id, author.id)
        .created(now - Duration::hours(1))
        .build()
        .await?;

    let comments = CommentRepository::new(db).find_all_by_item(item.id).await?;

    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].0.id, older.id);
    assert_eq!(comments[1].0.id, newer.id);
    assert_eq!(comments[0].1.as_ref().unwrap().id, author.id);

    Ok(())
}

/// Tests that comments on other items are not returned.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_uncommented_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shareit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, item) = factory::helpers::create_item_with_owner(db).await?;
    let (_, other_item) = factory::helpers::create_item_with_owner(db).await?;
    let author = factory::user::create_user(db).await?;

    factory::comment::create_comment(db, other_item.id, author.id).await?;

    let comments = CommentRepository::new(db).find_all_by_item(item.id).await?;

    assert!(comments.is_empty());

    Ok(())
}
