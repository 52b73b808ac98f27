//! Password reset by emailed link.

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    service::mail::{templates, Mailer},
    util::{
        password::hash_password,
        token::{generate_reset_token, hash_token},
        validate::check_password_strength,
    },
};

/// Lifetime of a reset link.
pub const RESET_TOKEN_TTL_HOURS: i64 = 1;

pub struct PasswordService<'a> {
    db: &'a DatabaseConnection,
    mailer: &'a dyn Mailer,
    frontend_url: &'a str,
}

impl<'a> PasswordService<'a> {
    /// Creates a new PasswordService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `mailer` - Transport for the reset link mail
    /// - `frontend_url` - Base URL the reset link points at
    pub fn new(db: &'a DatabaseConnection, mailer: &'a dyn Mailer, frontend_url: &'a str) -> Self {
        Self {
            db,
            mailer,
            frontend_url,
        }
    }

    /// Starts a reset: stores a hashed token valid for one hour and mails the link.
    ///
    /// Only the SHA-256 of the token is stored; the plain token exists only in the link.
    ///
    /// # Returns
    /// - `Ok(())` - Link sent
    /// - `Err(AppError::NotFound)` - No account with that email
    /// - `Err(AppError::MailErr)` - Link could not be delivered
    pub async fn forgot(&self, email: &str) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);
        let email = email.trim().to_lowercase();

        let Some(user) = user_repo.find_by_email(&email).await? else {
            return Err(AppError::NotFound(
                "No user found with that email".to_string(),
            ));
        };

        let token = generate_reset_token();
        let expires_at = Utc::now() + Duration::hours(RESET_TOKEN_TTL_HOURS);
        user_repo
            .set_reset_token(user.id, hash_token(&token), expires_at)
            .await?;

        let reset_url = format!(
            "{}/reset-password/{}",
            self.frontend_url.trim_end_matches('/'),
            token
        );
        self.mailer
            .send(templates::password_reset_email(
                &user.email,
                &user.first_name,
                &reset_url,
            ))
            .await?;

        tracing::info!(user_id = user.id, "Password reset link sent");

        Ok(())
    }

    /// Completes a reset with the token from the link.
    ///
    /// # Returns
    /// - `Ok(())` - Password replaced, token cleared
    /// - `Err(AppError::Validation)` - New password fails the strength rule
    /// - `Err(AppError::BadRequest)` - Token unknown or expired
    pub async fn reset(&self, token: &str, password: &str) -> Result<(), AppError> {
        check_password_strength(password)?;

        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo
            .find_by_reset_token(&hash_token(token), Utc::now())
            .await?
        else {
            return Err(AppError::BadRequest("Invalid or expired token".to_string()));
        };

        user_repo
            .set_password(user.id, hash_password(password)?)
            .await?;

        tracing::info!(user_id = user.id, "Password reset completed");

        Ok(())
    }
}
