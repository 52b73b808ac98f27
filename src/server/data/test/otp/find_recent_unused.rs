use super::*;

/// Tests that the cooldown lookup only sees codes newer than `since`.
///
/// Expected: Ok(Some) for a fresh code, Ok(None) for an old one
#[tokio::test]
async fn respects_since() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_otp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    factory::otp::OtpFactory::new(db, user.id)
        .created_at(Utc::now() - Duration::seconds(30))
        .build()
        .await?;
    factory::otp::OtpFactory::new(db, other.id)
        .created_at(Utc::now() - Duration::seconds(90))
        .build()
        .await?;

    let repo = OtpRepository::new(db);
    let since = Utc::now() - Duration::seconds(60);

    assert!(repo
        .find_recent_unused(user.id, OtpChannel::Email, since)
        .await?
        .is_some());
    assert!(repo
        .find_recent_unused(other.id, OtpChannel::Email, since)
        .await?
        .is_none());

    Ok(())
}
