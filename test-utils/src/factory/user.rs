//! User factory for creating test accounts.
//!
//! Defaults describe an active, unverified customer with a known password
//! (`helpers::DEFAULT_PASSWORD`) so tests can exercise login directly.

use crate::factory::helpers::{hash_password, next_id, DEFAULT_PASSWORD};
use chrono::{DateTime, Utc};
use entity::user::Role;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let worker = UserFactory::new(&db)
///     .email("worker@example.com")
///     .role(Role::Worker)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    email: String,
    phone: Option<String>,
    carrier: Option<String>,
    password: String,
    role: Role,
    is_super_admin: bool,
    is_verified: bool,
    is_active: bool,
    position: Option<String>,
    department: Option<String>,
    reset_password_token: Option<String>,
    reset_password_expire: Option<DateTime<Utc>>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - email: `"user{id}@example.com"` where id is auto-incremented
    /// - name: `"Test"` / `"User {id}"`
    /// - role: `Customer`, active, unverified, not super admin
    /// - password: `DEFAULT_PASSWORD`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: "Test".to_string(),
            last_name: format!("User {}", id),
            email: format!("user{}@example.com", id),
            phone: None,
            carrier: None,
            password: DEFAULT_PASSWORD.to_string(),
            role: Role::Customer,
            is_super_admin: false,
            is_verified: false,
            is_active: true,
            position: None,
            department: None,
            reset_password_token: None,
            reset_password_expire: None,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Sets the phone number and carrier used for SMS delivery.
    pub fn phone(mut self, phone: impl Into<String>, carrier: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self.carrier = Some(carrier.into());
        self
    }

    /// Sets the plain-text password; it is hashed on `build()`.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Shorthand for `role(Role::Admin)` with a verified account.
    pub fn admin(mut self) -> Self {
        self.role = Role::Admin;
        self.is_verified = true;
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

    /// Sets the worker position and department.
    pub fn worker_details(
        mut self,
        position: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        self.position = Some(position.into());
        self.department = Some(department.into());
        self
    }

    /// Stores an already-hashed reset token and its expiry.
    pub fn reset_token(mut self, token_hash: impl Into<String>, expires: DateTime<Utc>) -> Self {
        self.reset_password_token = Some(token_hash.into());
        self.reset_password_expire = Some(expires);
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(self.phone),
            carrier: ActiveValue::Set(self.carrier),
            password: ActiveValue::Set(hash_password(&self.password)),
            role: ActiveValue::Set(self.role),
            is_super_admin: ActiveValue::Set(self.is_super_admin),
            is_verified: ActiveValue::Set(self.is_verified),
            is_active: ActiveValue::Set(self.is_active),
            gender: ActiveValue::Set(None),
            id_type: ActiveValue::Set(None),
            id_number: ActiveValue::Set(None),
            prayer_in_room: ActiveValue::Set(false),
            no_alcohol: ActiveValue::Set(true),
            zabihah_only: ActiveValue::Set(true),
            special_requests: ActiveValue::Set(None),
            position: ActiveValue::Set(self.position),
            department: ActiveValue::Set(self.department),
            invited_by_id: ActiveValue::Set(None),
            reset_password_token: ActiveValue::Set(self.reset_password_token),
            reset_password_expire: ActiveValue::Set(self.reset_password_expire),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active, unverified customer with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a regular (non-super) admin.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).admin().build().await
}

/// Creates an admin carrying the super-admin flag.
pub async fn create_super_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).admin().super_admin(true).build().await
}

/// Creates a verified worker with a default position and department.
pub async fn create_worker(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db)
        .role(Role::Worker)
        .verified(true)
        .worker_details("Receptionist", "Front Desk")
        .build()
        .await
}
