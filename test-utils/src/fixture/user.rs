//! User fixtures for creating in-memory entity models.

use chrono::{TimeZone, Utc};
use entity::user::{self, Role};

/// Default test email.
pub const DEFAULT_EMAIL: &str = "guest@example.com";

/// Creates a customer entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Amina"` / `"Guest"`
/// - email: `"guest@example.com"`
/// - role: `Customer`, active, unverified
/// - halal preferences: no prayer room, no alcohol, zabihah only
pub fn entity() -> user::Model {
    entity_builder().build()
}

/// Creates a user entity builder for customization.
pub fn entity_builder() -> UserEntityBuilder {
    UserEntityBuilder::default()
}

/// Builder for customized user entity models.
pub struct UserEntityBuilder {
    id: i32,
    email: String,
    phone: Option<String>,
    carrier: Option<String>,
    role: Role,
    is_super_admin: bool,
    is_verified: bool,
    is_active: bool,
}

impl Default for UserEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            email: DEFAULT_EMAIL.to_string(),
            phone: None,
            carrier: None,
            role: Role::Customer,
            is_super_admin: false,
            is_verified: false,
            is_active: true,
        }
    }
}

impl UserEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>, carrier: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self.carrier = Some(carrier.into());
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn super_admin(mut self, is_super_admin: bool) -> Self {
        self.is_super_admin = is_super_admin;
        self
    }

    pub fn verified(mut self, is_verified: bool) -> Self {
        self.is_verified = is_verified;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn build(self) -> user::Model {
        let created = Utc
            .with_ymd_and_hms(2025, 1, 1, 12, 0, 0)
            .single()
            .unwrap_or_else(Utc::now);
        user::Model {
            id: self.id,
            first_name: "Amina".to_string(),
            last_name: "Guest".to_string(),
            email: self.email,
            phone: self.phone,
            carrier: self.carrier,
            password: "$argon2id$fixture".to_string(),
            role: self.role,
            is_super_admin: self.is_super_admin,
            is_verified: self.is_verified,
            is_active: self.is_active,
            gender: Some("female".to_string()),
            id_type: Some("passport".to_string()),
            id_number: Some("P1234567".to_string()),
            prayer_in_room: false,
            no_alcohol: true,
            zabihah_only: true,
            special_requests: None,
            position: None,
            department: None,
            invited_by_id: None,
            reset_password_token: None,
            reset_password_expire: None,
            created_at: created,
            updated_at: created,
        }
    }
}
