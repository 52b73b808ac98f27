use super::*;

/// Tests that only expired reset tokens are cleared.
///
/// Expected: Ok(1), the live token is kept
#[tokio::test]
async fn clears_only_expired_tokens() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .reset_token("expired", Utc::now() - Duration::hours(2))
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .reset_token("live", Utc::now() + Duration::hours(1))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let cleared = repo.clear_expired_reset_tokens(Utc::now()).await?;

    assert_eq!(cleared, 1);
    assert!(repo.find_by_reset_token("live", Utc::now()).await?.is_some());

    Ok(())
}
