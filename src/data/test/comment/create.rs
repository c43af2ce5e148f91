use super::*;

/// Tests creating a comment.
///
/// Expected: Ok with comment created
#[tokio::test]
async fn creates_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_shareit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, item) = factory::helpers::create_item_with_owner(db).await?;
    let author = factory::user::create_user(db).await?;

    let created = Utc::now().naive_utc();
    let comment = CommentRepository::new(db)
        .create(item.id, author.id, "Worked great".to_string(), created)
        .await?;

    assert!(comment.id > 0);
    assert_eq!(comment.text, "Worked great");
    assert_eq!(comment.item_id, item.id);
    assert_eq!(comment.author_id, author.id);
    assert_eq!(comment.created, created);

    Ok(())
}
