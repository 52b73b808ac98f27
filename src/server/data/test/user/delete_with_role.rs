use super::*;

/// Tests deleting a worker through the role-scoped delete.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_matching_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let worker = factory::create_worker(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.delete_with_role(worker.id, Role::Worker).await?);
    assert!(repo.find_by_id(worker.id).await?.is_none());

    Ok(())
}

/// Tests that a role mismatch leaves the row in place.
///
/// Expected: Ok(false) and the admin still exists
#[tokio::test]
async fn keeps_other_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;

    let repo = UserRepository::new(db);
    assert!(!repo.delete_with_role(admin.id, Role::Worker).await?);
    assert!(repo.find_by_id(admin.id).await?.is_some());

    Ok(())
}
