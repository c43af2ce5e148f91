use super::*;

/// Tests deleting an existing user.
///
/// Expected: Ok, user gone afterwards
#[tokio::test]
async fn deletes_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let service = UserService::new(db);
    service.delete(user.id).await.unwrap();

    let err = service.get(user.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Err(NotFound) naming the user
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let err = UserService::new(db).delete(999).await.unwrap_err();

    assert_eq!(err.to_string(), "User with ID:999 not found");

    Ok(())
}
