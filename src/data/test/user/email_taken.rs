use super::*;

/// Tests the email check used on user creation.
///
/// Verifies that an email held by any user counts as taken when no exclusion
/// is given.
///
/// Expected: Ok(true) for the stored email, Ok(false) for a fresh one
#[tokio::test]
async fn detects_taken_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.email_taken(&user.email, None).await?);
    assert!(!repo.email_taken("free@example.com", None).await?);

    Ok(())
}

/// Tests the email check used on user update.
///
/// Verifies that a user's own email does not count as taken when that user
/// is excluded, while another user's email still does.
///
/// Expected: Ok(false) for own email, Ok(true) for someone else's
#[tokio::test]
async fn excludes_own_email_on_update() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(!repo.email_taken(&user.email, Some(user.id)).await?);
    assert!(repo.email_taken(&other.email, Some(user.id)).await?);

    Ok(())
}
