use super::*;

/// Tests counting failures inside the lockout window.
///
/// Expected: Ok(3) for the user, Ok(0) for another user
#[tokio::test]
async fn counts_user_failures() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_otp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let repo = FailedOtpAttemptRepository::new(db);
    repo.create(user.id, "000000", OtpChannel::Email).await?;
    repo.create(user.id, "000001", OtpChannel::Email).await?;
    repo.create(user.id, "000002", OtpChannel::Sms).await?;

    let since = Utc::now() - Duration::minutes(15);
    assert_eq!(repo.count_since(user.id, since).await?, 3);
    assert_eq!(repo.count_since(other.id, since).await?, 0);

    Ok(())
}

/// Tests that attempts older than the cutoff are removed.
///
/// Expected: Ok(0) deleted for a past cutoff, Ok(1) for a future one
#[tokio::test]
async fn deletes_before_cutoff() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_otp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let repo = FailedOtpAttemptRepository::new(db);
    repo.create(user.id, "000000", OtpChannel::Email).await?;

    assert_eq!(repo.delete_before(Utc::now() - Duration::days(1)).await?, 0);
    assert_eq!(repo.delete_before(Utc::now() + Duration::seconds(1)).await?, 1);

    Ok(())
}
