use super::*;

/// Tests finding a user by an unexpired reset token.
///
/// Expected: Ok(Some) for the matching user
#[tokio::test]
async fn finds_unexpired_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .reset_token("abc123", Utc::now() + Duration::hours(1))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_reset_token("abc123", Utc::now()).await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests that an expired token no longer matches.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_expired_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .reset_token("abc123", Utc::now() - Duration::minutes(1))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_reset_token("abc123", Utc::now()).await?;

    assert!(found.is_none());

    Ok(())
}
