use super::*;

/// Tests a user may act on their own account.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_owner() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let actor = AuthGuard::new(db, session)
        .require_owner_or_admin(user.id)
        .await?;

    assert_eq!(actor.id, user.id);

    Ok(())
}

/// Tests a customer may not act on another account.
///
/// Expected: Err(AuthError::NotOwner)
#[tokio::test]
async fn denies_other_customer() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require_owner_or_admin(other.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotOwner { actor_id, target_id }))
            if actor_id == user.id && target_id == other.id
    ));

    Ok(())
}

/// Tests an admin may act on any account.
///
/// Expected: Ok(User) with the admin
#[tokio::test]
async fn grants_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::create_admin(db).await?;
    let customer = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let actor = AuthGuard::new(db, session)
        .require_owner_or_admin(customer.id)
        .await?;

    assert_eq!(actor.id, admin.id);

    Ok(())
}
