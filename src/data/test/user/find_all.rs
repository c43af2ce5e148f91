use super::*;

/// Tests listing all users.
///
/// Expected: Ok with every stored user
#[tokio::test]
async fn returns_all_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;
    factory::user::create_user(db).await?;
    factory::user::create_user(db).await?;

    let users = UserRepository::new(db).find_all().await?;

    assert_eq!(users.len(), 3);

    Ok(())
}

/// Tests listing users when none exist.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_without_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let users = UserRepository::new(db).find_all().await?;

    assert!(users.is_empty());

    Ok(())
}
