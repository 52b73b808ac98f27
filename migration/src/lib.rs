pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_user_table;
mod m20250601_000002_create_otp_table;
mod m20250601_000003_create_failed_otp_attempt_table;
mod m20250601_000004_create_admin_audit_log_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_user_table::Migration),
            Box::new(m20250601_000002_create_otp_table::Migration),
            Box::new(m20250601_000003_create_failed_otp_attempt_table::Migration),
            Box::new(m20250601_000004_create_admin_audit_log_table::Migration),
        ]
    }
}
