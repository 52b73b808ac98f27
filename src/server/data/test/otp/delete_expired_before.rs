use super::*;

/// Tests housekeeping deletion of long-expired codes.
///
/// Expected: Ok(1), the live code remains
#[tokio::test]
async fn deletes_old_codes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_otp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    factory::otp::OtpFactory::new(db, user.id)
        .expires_at(Utc::now() - Duration::days(2))
        .build()
        .await?;
    let live = factory::create_otp(db, user.id).await?;

    let repo = OtpRepository::new(db);
    let deleted = repo
        .delete_expired_before(Utc::now() - Duration::days(1))
        .await?;

    assert_eq!(deleted, 1);
    assert!(entity::prelude::Otp::find_by_id(live.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
