use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Route-level requirement checked against the session user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Role ADMIN, super or not.
    Admin,
    /// Role ADMIN with the super flag.
    SuperAdmin,
    /// Email address confirmed by OTP.
    Verified,
    /// Role WORKER.
    Worker,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Loads the session user and checks every permission in order.
    ///
    /// An empty slice only requires an active, logged-in user.
    ///
    /// # Returns
    /// - `Ok(User)` - The logged-in user satisfying all permissions
    /// - `Err(AuthError::UserNotInSession)` - Not logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session references a deleted account
    /// - `Err(AuthError::AccountInactive)` - Account deactivated
    /// - `Err(AuthError::AccessDenied)` - First permission the user lacks
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if !user.is_active {
            return Err(AuthError::AccountInactive(user_id).into());
        }

        for permission in permissions {
            let denied = |message, code| AuthError::AccessDenied {
                user_id,
                message,
                code,
            };

            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(denied("Required roles: ADMIN", "INSUFFICIENT_PERMISSIONS").into());
                    }
                }
                Permission::SuperAdmin => {
                    if !user.is_super() {
                        return Err(
                            denied("Super admin privileges required", "SUPER_ADMIN_REQUIRED").into(),
                        );
                    }
                }
                Permission::Verified => {
                    if !user.is_verified {
                        return Err(
                            denied("Account verification required", "VERIFICATION_REQUIRED").into(),
                        );
                    }
                }
                Permission::Worker => {
                    if user.role != entity::user::Role::Worker {
                        return Err(denied("Worker access required", "WORKER_ACCESS_REQUIRED").into());
                    }
                }
            }
        }

        Ok(user)
    }

    /// Requires the session user to be `target_id` or an admin.
    pub async fn require_owner_or_admin(&self, target_id: i32) -> Result<User, AppError> {
        let user = self.require(&[]).await?;

        if user.id != target_id && !user.is_admin() {
            return Err(AuthError::NotOwner {
                actor_id: user.id,
                target_id,
            }
            .into());
        }

        Ok(user)
    }
}
