use super::*;

/// Tests matching an unused, unexpired code.
///
/// Expected: Ok(Some)
#[tokio::test]
async fn finds_matching_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_otp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let otp = factory::create_otp(db, user.id).await?;

    let repo = OtpRepository::new(db);
    let found = repo
        .find_valid(user.id, &otp.code, OtpChannel::Email, Utc::now())
        .await?;

    assert_eq!(found.map(|o| o.id), Some(otp.id));

    Ok(())
}

/// Tests that expired, used and wrong-channel codes never match.
///
/// Expected: Ok(None) for each
#[tokio::test]
async fn rejects_expired_used_and_wrong_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_otp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    factory::otp::OtpFactory::new(db, user.id)
        .code("111111")
        .expires_at(Utc::now() - Duration::seconds(1))
        .build()
        .await?;
    factory::otp::OtpFactory::new(db, user.id)
        .code("222222")
        .used(true)
        .build()
        .await?;
    factory::otp::OtpFactory::new(db, user.id)
        .code("333333")
        .channel("sms")
        .build()
        .await?;

    let repo = OtpRepository::new(db);
    let now = Utc::now();
    assert!(repo
        .find_valid(user.id, "111111", OtpChannel::Email, now)
        .await?
        .is_none());
    assert!(repo
        .find_valid(user.id, "222222", OtpChannel::Email, now)
        .await?
        .is_none());
    assert!(repo
        .find_valid(user.id, "333333", OtpChannel::Email, now)
        .await?
        .is_none());

    Ok(())
}
