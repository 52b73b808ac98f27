use super::*;

/// Tests that a code is consumed once and records when.
///
/// Expected: Ok(true) with is_used and used_at set
#[tokio::test]
async fn consumes_unused_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_otp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let otp = factory::create_otp(db, user.id).await?;

    let consumed = OtpRepository::new(db).mark_used(otp.id, Utc::now()).await?;

    assert!(consumed);
    let stored = entity::prelude::Otp::find_by_id(otp.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.is_used);
    assert!(stored.used_at.is_some());

    Ok(())
}

/// Tests that a second consumption of the same code is refused.
///
/// Expected: Ok(false) and the first used_at is kept
#[tokio::test]
async fn refuses_already_used_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_otp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let otp = factory::create_otp(db, user.id).await?;

    let repo = OtpRepository::new(db);
    let first_at = Utc::now() - Duration::minutes(1);
    assert!(repo.mark_used(otp.id, first_at).await?);

    let second = repo.mark_used(otp.id, Utc::now()).await?;

    assert!(!second);
    let stored = entity::prelude::Otp::find_by_id(otp.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.used_at.unwrap() < Utc::now() - Duration::seconds(30));

    Ok(())
}
