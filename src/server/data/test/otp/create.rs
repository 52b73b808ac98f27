use super::*;

/// Tests inserting a fresh passcode.
///
/// Expected: Ok with an unused code stored on the requested channel
#[tokio::test]
async fn creates_unused_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_otp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let repo = OtpRepository::new(db);
    let otp = repo
        .create(CreateOtpParam {
            user_id: user.id,
            code: "654321".to_string(),
            channel: OtpChannel::Sms,
            expires_at: Utc::now() + Duration::minutes(10),
        })
        .await?;

    assert_eq!(otp.code, "654321");
    assert_eq!(otp.channel, "sms");
    assert!(!otp.is_used);

    Ok(())
}
