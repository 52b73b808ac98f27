use super::*;

/// Tests that invalidation only touches the given channel.
///
/// Expected: Ok(2) with the SMS code still unused
#[tokio::test]
async fn invalidates_only_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_otp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    factory::create_otp(db, user.id).await?;
    factory::create_otp(db, user.id).await?;
    let sms = factory::otp::OtpFactory::new(db, user.id)
        .channel("sms")
        .build()
        .await?;

    let repo = OtpRepository::new(db);
    let invalidated = repo.invalidate_unused(user.id, OtpChannel::Email).await?;

    assert_eq!(invalidated, 2);
    let sms = entity::prelude::Otp::find_by_id(sms.id)
        .one(db)
        .await?
        .unwrap();
    assert!(!sms.is_used);

    Ok(())
}
