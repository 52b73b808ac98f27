//! User domain models and parameters.
//!
//! Every role (customer, worker, admin) lives in the single `user` table. The domain `User`
//! carries the full row minus reset-token bookkeeping, and converts into the role-specific
//! DTOs returned by the different route groups.

use chrono::{DateTime, Utc};
use entity::user::Role;

use crate::model::{
    admin::{AdminDto, WorkerDto},
    customer::CustomerDto,
    user::UserDto,
};

/// Dietary and prayer preferences recorded for guests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalalPreferences {
    pub prayer_in_room: bool,
    pub no_alcohol: bool,
    pub zabihah_only: bool,
}

/// New accounts get no prayer room but alcohol-free, zabihah-only catering.
impl Default for HalalPreferences {
    fn default() -> Self {
        Self {
            prayer_in_room: false,
            no_alcohol: true,
            zabihah_only: true,
        }
    }
}

impl HalalPreferences {
    /// Builds preferences from optional request values, falling back to the defaults for
    /// anything not provided.
    pub fn from_optional(
        prayer_in_room: Option<bool>,
        no_alcohol: Option<bool>,
        zabihah_only: Option<bool>,
    ) -> Self {
        let defaults = Self::default();

        Self {
            prayer_in_room: prayer_in_room.unwrap_or(defaults.prayer_in_room),
            no_alcohol: no_alcohol.unwrap_or(defaults.no_alcohol),
            zabihah_only: zabihah_only.unwrap_or(defaults.zabihah_only),
        }
    }
}

/// Account of any role.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    /// Normalized (trimmed, lowercase) login email.
    pub email: String,
    pub phone: Option<String>,
    /// Key into the SMS carrier gateway table.
    pub carrier: Option<String>,
    /// Argon2 PHC string; never leaves the server.
    pub password_hash: String,
    pub role: Role,
    pub is_super_admin: bool,
    pub is_verified: bool,
    pub is_active: bool,
    pub gender: Option<String>,
    pub id_type: Option<String>,
    pub id_number: Option<String>,
    pub halal: HalalPreferences,
    pub special_requests: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    /// Admin that created this account through an invite.
    pub invited_by_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            phone: entity.phone,
            carrier: entity.carrier,
            password_hash: entity.password,
            role: entity.role,
            is_super_admin: entity.is_super_admin,
            is_verified: entity.is_verified,
            is_active: entity.is_active,
            gender: entity.gender,
            id_type: entity.id_type,
            id_number: entity.id_number,
            halal: HalalPreferences {
                prayer_in_room: entity.prayer_in_room,
                no_alcohol: entity.no_alcohol,
                zabihah_only: entity.zabihah_only,
            },
            special_requests: entity.special_requests,
            position: entity.position,
            department: entity.department,
            invited_by_id: entity.invited_by_id,
            created_at: entity.created_at,
        }
    }

    /// Whether the user holds the `ADMIN` role.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Whether the user is an admin with the super-admin flag.
    pub fn is_super(&self) -> bool {
        self.is_admin() && self.is_super_admin
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Converts to the general profile DTO.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            carrier: self.carrier,
            role: self.role.as_str().to_string(),
            is_super_admin: self.is_super_admin,
            is_verified: self.is_verified,
            is_active: self.is_active,
            gender: self.gender,
            id_type: self.id_type,
            id_number: self.id_number,
            prayer_in_room: self.halal.prayer_in_room,
            no_alcohol: self.halal.no_alcohol,
            zabihah_only: self.halal.zabihah_only,
            special_requests: self.special_requests,
            created_at: self.created_at,
        }
    }

    pub fn into_customer_dto(self) -> CustomerDto {
        CustomerDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            gender: self.gender,
            id_type: self.id_type,
            id_number: self.id_number,
            prayer_in_room: self.halal.prayer_in_room,
            no_alcohol: self.halal.no_alcohol,
            zabihah_only: self.halal.zabihah_only,
            special_requests: self.special_requests,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }

    pub fn into_admin_dto(self) -> AdminDto {
        AdminDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            is_super_admin: self.is_super_admin,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }

    pub fn into_worker_dto(self) -> WorkerDto {
        WorkerDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            position: self.position,
            department: self.department,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}

/// Parameters for inserting a new account of any role.
///
/// The password must already be hashed; repositories never see plain-text passwords.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub carrier: Option<String>,
    pub password_hash: String,
    pub role: Role,
    pub is_super_admin: bool,
    pub is_verified: bool,
    pub gender: Option<String>,
    pub id_type: Option<String>,
    pub id_number: Option<String>,
    pub halal: HalalPreferences,
    pub special_requests: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub invited_by_id: Option<i32>,
}

impl CreateUserParam {
    /// Starts a parameter set for `role` with every optional column empty.
    pub fn new(
        role: Role,
        first_name: String,
        last_name: String,
        email: String,
        password_hash: String,
    ) -> Self {
        Self {
            first_name,
            last_name,
            email,
            phone: None,
            carrier: None,
            password_hash,
            role,
            is_super_admin: false,
            is_verified: false,
            gender: None,
            id_type: None,
            id_number: None,
            halal: HalalPreferences::default(),
            special_requests: None,
            position: None,
            department: None,
            invited_by_id: None,
        }
    }
}

/// Validated self-registration request. The password is still plain text.
#[derive(Debug, Clone)]
pub struct RegisterParam {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub carrier: Option<String>,
    pub password: String,
    pub confirm_password: String,
    pub gender: Option<String>,
    pub id_type: Option<String>,
    pub id_number: Option<String>,
    pub halal: HalalPreferences,
    pub special_requests: Option<String>,
}

/// Admin-created customer. The password is still plain text.
#[derive(Debug, Clone)]
pub struct NewCustomerParam {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub gender: String,
    pub id_type: String,
    pub id_number: String,
    pub halal: HalalPreferences,
    pub special_requests: String,
}

/// Staff account created by invitation with a generated temporary password.
#[derive(Debug, Clone)]
pub struct InviteParam {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Only honoured for admin invitations.
    pub is_super_admin: bool,
    /// Only honoured for worker invitations.
    pub position: Option<String>,
    pub department: Option<String>,
}

/// Self-service profile update. `None` leaves a column unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileParam {
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

/// Full replacement of a customer's editable columns, defaults already applied.
#[derive(Debug, Clone)]
pub struct UpdateCustomerParam {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub gender: String,
    pub id_type: String,
    pub id_number: String,
    pub halal: HalalPreferences,
    pub special_requests: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAdminParam {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_super_admin: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateWorkerParam {
    pub position: Option<String>,
    pub department: Option<String>,
}
