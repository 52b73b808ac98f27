use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Full user profile.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub carrier: Option<String>,
    /// `CUSTOMER`, `WORKER` or `ADMIN`.
    pub role: String,
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
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct UserListDto {
    pub success: bool,
    pub count: usize,
    pub data: Vec<UserDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct UserResponseDto {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: UserDto,
}

/// Self-service profile update. Absent fields are left unchanged; email, password and role
/// cannot be changed through this body.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub carrier: Option<String>,
    pub gender: Option<String>,
    pub id_type: Option<String>,
    pub id_number: Option<String>,
    pub prayer_in_room: Option<bool>,
    pub no_alcohol: Option<bool>,
    pub zabihah_only: Option<bool>,
    pub special_requests: Option<String>,
}
