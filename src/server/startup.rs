use std::sync::Arc;

use entity::user::Role;
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, ExpiredDeletion, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::{BootstrapAdmin, Config, MailTransport},
    data::user::UserRepository,
    error::AppError,
    model::user::CreateUserParam,
    service::mail::{smtp::SmtpMailer, LogMailer, Mailer},
    util::{
        password::hash_password,
        validate::{check_password_strength, normalize_email},
    },
};

/// Sessions expire after this many days without a request.
const SESSION_INACTIVITY_DAYS: i64 = 7;

/// Interval between sweeps of expired sessions.
const SESSION_CLEANUP_INTERVAL_SECS: u64 = 3600;

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the same SQLite database.
///
/// Migrates the session table and spawns a background task deleting expired sessions.
/// Cookies are marked secure outside development.
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(format!("Failed to migrate session store: {e}")))?;

    tokio::task::spawn(session_store.clone().continuously_delete_expired(
        tokio::time::Duration::from_secs(SESSION_CLEANUP_INTERVAL_SECS),
    ));

    let layer = SessionManagerLayer::new(session_store)
        .with_secure(!config.expose_otp())
        .with_expiry(Expiry::OnInactivity(Duration::days(SESSION_INACTIVITY_DAYS)));

    Ok(layer)
}

/// Builds the configured mail transport.
pub fn build_mailer(config: &Config) -> Result<Arc<dyn Mailer>, AppError> {
    let mailer: Arc<dyn Mailer> = match &config.mail {
        MailTransport::Smtp(smtp) => {
            tracing::info!(host = %smtp.host, port = smtp.port, "Using SMTP mail transport");
            Arc::new(SmtpMailer::new(smtp)?)
        }
        MailTransport::Log => {
            tracing::warn!("MAIL_TRANSPORT=log, outbound mail will only be logged");
            Arc::new(LogMailer)
        }
    };

    Ok(mailer)
}

/// Creates the initial super admin when none exists.
///
/// Does nothing if a super admin already exists or no bootstrap credentials are configured.
///
/// # Returns
/// - `Ok(true)` - A super admin was created
/// - `Ok(false)` - Nothing to do
/// - `Err(AppError::Validation)` - Configured email or password is unusable
pub async fn ensure_super_admin(
    db: &DatabaseConnection,
    bootstrap: Option<&BootstrapAdmin>,
) -> Result<bool, AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.super_admin_exists().await? {
        return Ok(false);
    }

    let Some(bootstrap) = bootstrap else {
        tracing::warn!(
            "No super admin exists; set SUPER_ADMIN_EMAIL and SUPER_ADMIN_PASSWORD to create one"
        );
        return Ok(false);
    };

    let email = normalize_email(&bootstrap.email)?;
    check_password_strength(&bootstrap.password)?;

    let mut param = CreateUserParam::new(
        Role::Admin,
        "Super".to_string(),
        "Admin".to_string(),
        email,
        hash_password(&bootstrap.password)?,
    );
    param.is_super_admin = true;
    param.is_verified = true;

    let admin = user_repo
        .create(param)
        .await
        .map_err(AppError::from_email_conflict)?;

    tracing::info!(user_id = admin.id, email = %admin.email, "Created initial super admin");

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::builder::TestBuilder;

    fn bootstrap() -> BootstrapAdmin {
        BootstrapAdmin {
            email: "Root@Example.com".to_string(),
            password: "Secret123".to_string(),
        }
    }

    /// Expected: first call creates a verified super admin, second call is a no-op
    #[tokio::test]
    async fn creates_super_admin_once() -> Result<(), AppError> {
        let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        assert!(ensure_super_admin(db, Some(&bootstrap())).await?);
        assert!(!ensure_super_admin(db, Some(&bootstrap())).await?);

        let admin = UserRepository::new(db)
            .find_by_email("root@example.com")
            .await?
            .unwrap();
        assert!(admin.is_super());
        assert!(admin.is_verified);

        Ok(())
    }

    /// Expected: Ok(false) without credentials
    #[tokio::test]
    async fn skips_without_credentials() -> Result<(), AppError> {
        let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        assert!(!ensure_super_admin(db, None).await?);
        assert!(!UserRepository::new(db).super_admin_exists().await?);

        Ok(())
    }
}
