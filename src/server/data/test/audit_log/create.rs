use super::*;

/// Tests that metadata is stored as JSON text next to the action code.
///
/// Expected: Ok with one row carrying `CREATE_WORKER`
#[tokio::test]
async fn stores_action_and_metadata() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await?;
    let worker = factory::create_worker(db).await?;

    let repo = AuditLogRepository::new(db);
    repo.create(CreateAuditLogParam {
        action: AuditAction::CreateWorker,
        admin_id: admin.id,
        target_id: worker.id,
        metadata: Some(serde_json::json!({ "position": "Chef" })),
    })
    .await?;

    let rows = entity::prelude::AdminAuditLog::find().all(db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].action, "CREATE_WORKER");
    assert_eq!(rows[0].target_id, worker.id);
    assert_eq!(rows[0].metadata.as_deref(), Some(r#"{"position":"Chef"}"#));

    Ok(())
}
