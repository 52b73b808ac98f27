use sea_orm::entity::prelude::*;

/// Account role stored on every user row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Role {
    #[sea_orm(string_value = "CUSTOMER")]
    Customer,
    #[sea_orm(string_value = "WORKER")]
    Worker,
    #[sea_orm(string_value = "ADMIN")]
    Admin,
}

impl Role {
    /// Returns the value stored in the `role` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "CUSTOMER",
            Role::Worker => "WORKER",
            Role::Admin => "ADMIN",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: Option<String>,
    pub carrier: Option<String>,
    pub password: String,
    pub role: Role,
    pub is_super_admin: bool,
    pub is_verified: bool,
    pub is_active: bool,
    pub gender: Option<String>,
    pub id_type: Option<String>,
    pub id_number: Option<String>,
    pub prayer_in_room: bool,
    pub no_alcohol: bool,
    pub zabihah_only: bool,
    pub special_requests: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub invited_by_id: Option<i32>,
    pub reset_password_token: Option<String>,
    pub reset_password_expire: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::otp::Entity")]
    Otp,
    #[sea_orm(has_many = "super::failed_otp_attempt::Entity")]
    FailedOtpAttempt,
}

impl Related<super::otp::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Otp.def()
    }
}

impl Related<super::failed_otp_attempt::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FailedOtpAttempt.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
