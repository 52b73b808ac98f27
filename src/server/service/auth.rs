//! Registration and credential checks.

use entity::user::Role;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, RegisterParam, User},
    util::{
        password::{hash_password, verify_password},
        validate::{check_password_strength, normalize_email},
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new customer account.
    ///
    /// Checks run in order: password confirmation, password strength, email shape, email
    /// uniqueness. The account starts active and unverified.
    ///
    /// # Returns
    /// - `Ok(User)` - The created customer
    /// - `Err(AppError::Validation)` - A check failed; `fields` names the offending inputs
    pub async fn register(&self, param: RegisterParam) -> Result<User, AppError> {
        if param.password != param.confirm_password {
            return Err(AppError::validation(
                "Passwords do not match",
                &["password", "confirmPassword"],
            ));
        }
        check_password_strength(&param.password)?;
        let email = normalize_email(&param.email)?;

        let user_repo = UserRepository::new(self.db);
        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::validation("Email already in use", &["email"]));
        }

        let mut create = CreateUserParam::new(
            Role::Customer,
            param.first_name,
            param.last_name,
            email,
            hash_password(&param.password)?,
        );
        create.phone = param.phone;
        create.carrier = param.carrier;
        create.gender = param.gender;
        create.id_type = param.id_type;
        create.id_number = param.id_number;
        create.halal = param.halal;
        create.special_requests = param.special_requests;

        let user = user_repo
            .create(create)
            .await
            .map_err(AppError::from_email_conflict)?;

        tracing::info!(user_id = user.id, "Customer registered");

        Ok(user)
    }

    /// Checks credentials.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials match an active account
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AuthError::AccountInactive)` - Credentials match a deactivated account
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let email = email.trim().to_lowercase();

        let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.is_active {
            return Err(AuthError::AccountInactive(user.id).into());
        }

        Ok(user)
    }
}
