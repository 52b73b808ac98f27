use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HalalPreferencesDto {
    pub prayer_in_room: Option<bool>,
    pub no_alcohol: Option<bool>,
    pub zabihah_only: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub carrier: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub gender: Option<String>,
    pub id_type: Option<String>,
    pub id_number: Option<String>,
    #[serde(default)]
    pub halal_preferences: HalalPreferencesDto,
    pub special_requests: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
pub struct LoginDto {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Body returned by register and login.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct AuthResponseDto {
    pub success: bool,
    pub message: String,
    pub user: UserDto,
}
