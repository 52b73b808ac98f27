use super::*;

fn params(email: &str) -> UpdateCustomerParam {
    UpdateCustomerParam {
        first_name: "Yusuf".to_string(),
        last_name: "Traveller".to_string(),
        email: email.to_string(),
        phone: "5550001111".to_string(),
        gender: "male".to_string(),
        id_type: "passport".to_string(),
        id_number: String::new(),
        halal: HalalPreferences::default(),
        special_requests: String::new(),
        is_active: false,
    }
}

/// Tests replacing a customer's editable columns.
///
/// Expected: Ok(Some) with every column replaced
#[tokio::test]
async fn updates_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_customer(customer.id, params("yusuf@example.com"))
        .await?
        .unwrap();

    assert_eq!(updated.first_name, "Yusuf");
    assert_eq!(updated.email, "yusuf@example.com");
    assert_eq!(updated.phone.as_deref(), Some("5550001111"));
    assert!(!updated.is_active);

    Ok(())
}

/// Tests that the customer update cannot reach other roles.
///
/// Expected: Ok(None) for a worker ID
#[tokio::test]
async fn ignores_non_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let worker = factory::create_worker(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_customer(worker.id, params("x@example.com"))
        .await?;

    assert!(updated.is_none());

    Ok(())
}
