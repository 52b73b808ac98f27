use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub id_type: Option<String>,
    pub id_number: Option<String>,
    pub prayer_in_room: bool,
    pub no_alcohol: bool,
    pub zabihah_only: bool,
    pub special_requests: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CustomerListDto {
    pub success: bool,
    pub count: usize,
    pub customers: Vec<CustomerDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CustomerResponseDto {
    pub success: bool,
    pub message: String,
    pub customer: CustomerDto,
}

/// Admin-created customer. Required fields are optional here so that a missing field yields
/// a 400 with a readable message instead of a deserialization rejection.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
    pub gender: Option<String>,
    pub id_type: Option<String>,
    pub id_number: Option<String>,
    pub prayer_in_room: Option<bool>,
    pub no_alcohol: Option<bool>,
    pub zabihah_only: Option<bool>,
    pub special_requests: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub id_type: Option<String>,
    pub id_number: Option<String>,
    pub prayer_in_room: Option<bool>,
    pub no_alcohol: Option<bool>,
    pub zabihah_only: Option<bool>,
    pub special_requests: Option<String>,
    pub is_active: Option<bool>,
}
