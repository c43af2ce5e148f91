use super::*;

/// Tests creating a user with a free email.
///
/// Expected: Ok with the created user
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserService::new(db)
        .create(CreateUserParams {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        })
        .await
        .unwrap();

    assert!(user.id > 0);
    assert_eq!(user.name, "Alice");
    assert_eq!(user.email, "alice@example.com");

    Ok(())
}

/// Tests creating a user with an email another user already holds.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_taken_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::create_user(db).await?;

    let err = UserService::new(db)
        .create(CreateUserParams {
            name: "Bob".to_string(),
            email: existing.email.clone(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));

    Ok(())
}
