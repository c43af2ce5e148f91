use super::*;

/// Tests the partial update merge.
///
/// Updating only the name keeps the stored email, and the other way around.
///
/// Expected: Ok with merged user
#[tokio::test]
async fn merges_absent_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let service = UserService::new(db);

    let renamed = service
        .update(
            user.id,
            UpdateUserParams {
                name: Some("Renamed".to_string()),
                email: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(renamed.name, "Renamed");
    assert_eq!(renamed.email, user.email);

    let remailed = service
        .update(
            user.id,
            UpdateUserParams {
                name: None,
                email: Some("new@example.com".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(remailed.name, "Renamed");
    assert_eq!(remailed.email, "new@example.com");

    Ok(())
}

/// Tests that keeping one's own email is not a conflict.
///
/// Expected: Ok with unchanged email
#[tokio::test]
async fn keeping_own_email_is_allowed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let updated = UserService::new(db)
        .update(
            user.id,
            UpdateUserParams {
                name: Some("Renamed".to_string()),
                email: Some(user.email.clone()),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.email, user.email);

    Ok(())
}

/// Tests changing the email to one another user holds.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_email_of_another_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    let err = UserService::new(db)
        .update(
            user.id,
            UpdateUserParams {
                name: None,
                email: Some(other.email.clone()),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));

    Ok(())
}

/// Tests updating a user that does not exist.
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

    let err = UserService::new(db)
        .update(999, UpdateUserParams::default())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "User with ID:999 not found");

    Ok(())
}
