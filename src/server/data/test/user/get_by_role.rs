use super::*;

/// Tests that role listing only returns that role, newest first.
///
/// Expected: Ok with two workers in reverse insertion order
#[tokio::test]
async fn returns_only_role_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_worker(db).await?;
    factory::create_user(db).await?;
    factory::create_admin(db).await?;
    let second = factory::create_worker(db).await?;

    let repo = UserRepository::new(db);
    let workers = repo.get_by_role(Role::Worker).await?;

    let ids: Vec<i32> = workers.iter().map(|w| w.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}
