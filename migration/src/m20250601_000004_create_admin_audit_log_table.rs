use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AdminAuditLog::Table)
                    .if_not_exists()
                    .col(pk_auto(AdminAuditLog::Id))
                    .col(string(AdminAuditLog::Action))
                    .col(integer(AdminAuditLog::AdminId))
                    .col(integer(AdminAuditLog::TargetId))
                    .col(text_null(AdminAuditLog::Metadata))
                    .col(
                        timestamp_with_time_zone(AdminAuditLog::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AdminAuditLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AdminAuditLog {
    Table,
    Id,
    Action,
    AdminId,
    TargetId,
    Metadata,
    CreatedAt,
}
