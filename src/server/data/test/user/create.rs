use super::*;

/// Tests creating a customer account.
///
/// Expected: Ok with the row stored active and halal defaults applied
#[tokio::test]
async fn creates_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam::new(
            Role::Customer,
            "Amina".to_string(),
            "Guest".to_string(),
            "amina@example.com".to_string(),
            "$argon2id$hash".to_string(),
        ))
        .await?;

    assert_eq!(user.email, "amina@example.com");
    assert_eq!(user.role, Role::Customer);
    assert!(user.is_active);
    assert!(!user.is_verified);
    assert_eq!(user.halal, HalalPreferences::default());

    Ok(())
}

/// Tests that a second account with the same email is rejected by the unique index.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam::new(
            Role::Customer,
            "Other".to_string(),
            "Guest".to_string(),
            existing.email.clone(),
            "$argon2id$hash".to_string(),
        ))
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
