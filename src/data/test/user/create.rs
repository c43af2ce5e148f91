use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository inserts a user with the given name and email
/// and assigns an id.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.name, "Alice");
    assert_eq!(user.email, "alice@example.com");

    Ok(())
}

/// Tests the unique email constraint.
///
/// Verifies that inserting a second user with an email already stored fails
/// at the database level.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(CreateUserParams {
        name: "Alice".to_string(),
        email: "taken@example.com".to_string(),
    })
    .await?;

    let result = repo
        .create(CreateUserParams {
            name: "Bob".to_string(),
            email: "taken@example.com".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
