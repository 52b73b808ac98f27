use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FailedOtpAttempt::Table)
                    .if_not_exists()
                    .col(pk_auto(FailedOtpAttempt::Id))
                    .col(integer(FailedOtpAttempt::UserId))
                    .col(string(FailedOtpAttempt::AttemptedCode))
                    .col(string(FailedOtpAttempt::Channel))
                    .col(
                        timestamp_with_time_zone(FailedOtpAttempt::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_failed_otp_attempt_user_id")
                            .from(FailedOtpAttempt::Table, FailedOtpAttempt::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FailedOtpAttempt::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FailedOtpAttempt {
    Table,
    Id,
    UserId,
    AttemptedCode,
    Channel,
    CreatedAt,
}
