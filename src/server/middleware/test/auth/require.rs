use super::*;

/// Tests an admin passes the admin check.
///
/// Expected: Ok(User) with role ADMIN
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::create_admin(db).await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let user = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(user.id, admin.id);
    assert_eq!(user.role, Role::Admin);

    Ok(())
}

/// Tests a customer is denied the admin check.
///
/// Expected: Err(AccessDenied) with code INSUFFICIENT_PERMISSIONS
#[tokio::test]
async fn denies_admin_to_customer() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let customer = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(customer.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied { user_id, code, .. })) => {
            assert_eq!(user_id, customer.id);
            assert_eq!(code, "INSUFFICIENT_PERMISSIONS");
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}

/// Tests a regular admin is denied the super admin check.
///
/// Expected: Err(AccessDenied) with code SUPER_ADMIN_REQUIRED
#[tokio::test]
async fn denies_super_admin_to_regular_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::create_admin(db).await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin, Permission::SuperAdmin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied { code: "SUPER_ADMIN_REQUIRED", .. }))
    ));

    Ok(())
}

/// Tests the super admin passes every admin check.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_super_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::create_super_admin(db).await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let user = AuthGuard::new(db, session)
        .require(&[Permission::Admin, Permission::SuperAdmin, Permission::Verified])
        .await?;

    assert!(user.is_super());

    Ok(())
}

/// Tests unverified and worker checks.
///
/// Expected: VERIFICATION_REQUIRED for an unverified customer, WORKER_ACCESS_REQUIRED for an admin
#[tokio::test]
async fn denies_verified_and_worker_checks() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let customer = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(customer.id).await?;
    let result = AuthGuard::new(db, session)
        .require(&[Permission::Verified])
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied { code: "VERIFICATION_REQUIRED", .. }))
    ));

    let admin = factory::create_admin(db).await?;
    AuthSession::new(session).set_user_id(admin.id).await?;
    let result = AuthGuard::new(db, session)
        .require(&[Permission::Worker])
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied { code: "WORKER_ACCESS_REQUIRED", .. }))
    ));

    let worker = factory::create_worker(db).await?;
    AuthSession::new(session).set_user_id(worker.id).await?;
    AuthGuard::new(db, session)
        .require(&[Permission::Worker, Permission::Verified])
        .await?;

    Ok(())
}

/// Tests an unauthenticated request is rejected.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn denies_access_when_not_authenticated() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session pointing at a deleted user is rejected.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn denies_access_when_user_not_in_database() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(999).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(999)))
    ));

    Ok(())
}

/// Tests a deactivated account is rejected before permissions are checked.
///
/// Expected: Err(AuthError::AccountInactive)
#[tokio::test]
async fn denies_inactive_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::user::UserFactory::new(db)
        .admin()
        .active(false)
        .build()
        .await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountInactive(id))) if id == admin.id
    ));

    Ok(())
}

/// Tests logout removes the user from the session.
///
/// Expected: Err(AuthError::UserNotInSession) after clear
#[tokio::test]
async fn cleared_session_is_unauthenticated() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;
    auth_session.clear().await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}
