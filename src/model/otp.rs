use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
pub struct RequestOtpDto {
    /// `email` (default) or `sms`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// OTP request for accounts that cannot log in yet.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
pub struct RequestOtpUnverifiedDto {
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct VerifyOtpDto {
    /// Code as a string or a number; surrounding whitespace is ignored.
    #[schema(value_type = String)]
    pub otp: Option<serde_json::Value>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct OtpSentDto {
    pub success: bool,
    pub message: String,
    /// Only present when the server runs in development mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp: Option<String>,
}
