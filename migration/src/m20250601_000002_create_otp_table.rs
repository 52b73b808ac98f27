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
                    .table(Otp::Table)
                    .if_not_exists()
                    .col(pk_auto(Otp::Id))
                    .col(integer(Otp::UserId))
                    .col(string(Otp::Code))
                    .col(string(Otp::Channel))
                    .col(timestamp_with_time_zone(Otp::ExpiresAt))
                    .col(boolean(Otp::IsUsed).default(false))
                    .col(timestamp_with_time_zone_null(Otp::UsedAt))
                    .col(
                        timestamp_with_time_zone(Otp::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_otp_user_id")
                            .from(Otp::Table, Otp::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_otp_user_channel")
                    .table(Otp::Table)
                    .col(Otp::UserId)
                    .col(Otp::Channel)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Otp::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Otp {
    Table,
    Id,
    UserId,
    Code,
    Channel,
    ExpiresAt,
    IsUsed,
    UsedAt,
    CreatedAt,
}
