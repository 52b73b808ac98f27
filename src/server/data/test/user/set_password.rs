use super::*;

/// Tests that setting a password clears the pending reset token.
///
/// Expected: Ok with the new hash stored and no token left
#[tokio::test]
async fn clears_reset_token() -> Result<(), DbErr> {
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
    repo.set_password(user.id, "$argon2id$new".to_string())
        .await?;

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.password, "$argon2id$new");
    assert!(stored.reset_password_token.is_none());
    assert!(stored.reset_password_expire.is_none());

    Ok(())
}
