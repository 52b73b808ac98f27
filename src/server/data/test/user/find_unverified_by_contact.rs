use super::*;

/// Tests lookup of an unverified account by phone only.
///
/// Expected: Ok(Some) for the account owning the phone
#[tokio::test]
async fn finds_by_phone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .phone("5551234567", "verizon")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo
        .find_unverified_by_contact(None, Some("5551234567"))
        .await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests that verified accounts are skipped.
///
/// Expected: Ok(None)
#[tokio::test]
async fn skips_verified_accounts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .verified(true)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo
        .find_unverified_by_contact(Some(&user.email), None)
        .await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that a request without any identifier matches nothing.
///
/// Expected: Ok(None) even though an unverified account exists
#[tokio::test]
async fn requires_an_identifier() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let found = repo.find_unverified_by_contact(None, None).await?;

    assert!(found.is_none());

    Ok(())
}
