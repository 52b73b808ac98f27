use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string(User::FirstName))
                    .col(string(User::LastName))
                    .col(string_uniq(User::Email))
                    .col(string_null(User::Phone))
                    .col(string_null(User::Carrier))
                    .col(string(User::Password))
                    .col(string(User::Role).default("CUSTOMER"))
                    .col(boolean(User::IsSuperAdmin).default(false))
                    .col(boolean(User::IsVerified).default(false))
                    .col(boolean(User::IsActive).default(true))
                    .col(string_null(User::Gender))
                    .col(string_null(User::IdType))
                    .col(string_null(User::IdNumber))
                    .col(boolean(User::PrayerInRoom).default(false))
                    .col(boolean(User::NoAlcohol).default(true))
                    .col(boolean(User::ZabihahOnly).default(true))
                    .col(text_null(User::SpecialRequests))
                    .col(string_null(User::Position))
                    .col(string_null(User::Department))
                    .col(integer_null(User::InvitedById))
                    .col(string_null(User::ResetPasswordToken))
                    .col(timestamp_with_time_zone_null(User::ResetPasswordExpire))
                    .col(
                        timestamp_with_time_zone(User::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(User::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_role")
                    .table(User::Table)
                    .col(User::Role)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    Carrier,
    Password,
    Role,
    IsSuperAdmin,
    IsVerified,
    IsActive,
    Gender,
    IdType,
    IdNumber,
    PrayerInRoom,
    NoAlcohol,
    ZabihahOnly,
    SpecialRequests,
    Position,
    Department,
    InvitedById,
    ResetPasswordToken,
    ResetPasswordExpire,
    CreatedAt,
    UpdatedAt,
}
