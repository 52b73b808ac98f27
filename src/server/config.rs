use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_SMTP_PORT: u16 = 587;

/// Deployment environment selected with `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

/// Outbound mail transport selected with `MAIL_TRANSPORT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailTransport {
    Smtp(SmtpConfig),
    /// Log messages instead of sending them.
    Log,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Sender mailbox, e.g. `Sufrikh <no-reply@sufrikh.com>`.
    pub from: String,
}

/// Credentials for the super admin created on first start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapAdmin {
    pub email: String,
    pub password: String,
}

pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,

    /// Base URL of the booking frontend used in mailed links.
    pub frontend_url: String,
    pub cors_origin: String,

    pub app_env: AppEnv,
    pub mail: MailTransport,

    pub bootstrap_admin: Option<BootstrapAdmin>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let require =
            |name: &str| var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        let bind_addr = var("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "BIND_ADDR".to_string(),
                reason: e.to_string(),
            })?;

        let app_env = match var("APP_ENV").as_deref() {
            None | Some("production") => AppEnv::Production,
            Some("development") => AppEnv::Development,
            Some(other) => {
                return Err(ConfigError::InvalidEnvVar {
                    name: "APP_ENV".to_string(),
                    reason: format!("expected development or production, got {other}"),
                }
                .into())
            }
        };

        let mail = match var("MAIL_TRANSPORT").as_deref() {
            None | Some("smtp") => {
                let port = match var("SMTP_PORT") {
                    Some(port) => port.parse::<u16>().map_err(|e| ConfigError::InvalidEnvVar {
                        name: "SMTP_PORT".to_string(),
                        reason: e.to_string(),
                    })?,
                    None => DEFAULT_SMTP_PORT,
                };

                MailTransport::Smtp(SmtpConfig {
                    host: require("SMTP_HOST")?,
                    port,
                    username: var("SMTP_USERNAME"),
                    password: var("SMTP_PASSWORD"),
                    from: require("MAIL_FROM")?,
                })
            }
            Some("log") => MailTransport::Log,
            Some(other) => {
                return Err(ConfigError::InvalidEnvVar {
                    name: "MAIL_TRANSPORT".to_string(),
                    reason: format!("expected smtp or log, got {other}"),
                }
                .into())
            }
        };

        let bootstrap_admin = match (var("SUPER_ADMIN_EMAIL"), var("SUPER_ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(BootstrapAdmin { email, password }),
            _ => None,
        };

        let frontend_url = require("FRONTEND_URL")?;
        url::Url::parse(&frontend_url).map_err(|e| ConfigError::InvalidEnvVar {
            name: "FRONTEND_URL".to_string(),
            reason: e.to_string(),
        })?;
        let cors_origin = var("CORS_ORIGIN").unwrap_or_else(|| frontend_url.clone());

        Ok(Self {
            database_url: require("DATABASE_URL")?,
            bind_addr,
            frontend_url,
            cors_origin,
            app_env,
            mail,
            bootstrap_admin,
        })
    }

    /// Whether issued OTP codes are echoed back in API responses.
    pub fn expose_otp(&self) -> bool {
        self.app_env == AppEnv::Development
    }
}
