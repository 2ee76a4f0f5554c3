use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::info;

use crate::auth::adapter::outgoing::jwt::JwtConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("Invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Outgoing mail relay. Absent when `SMTP_SERVER` is not set.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub server: String,
    pub username: String,
    pub password: String,
}

/// Server configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub jwt: JwtConfig,
    pub admin_email: String,
    pub admin_password_hash: String,
    pub email_from: String,
    pub smtp: Option<SmtpConfig>,
    pub resume_max_bytes: usize,
    /// Holds every JSON store and the uploaded resume.
    pub data_dir: PathBuf,
    /// Signs outgoing emails and names the default profile.
    pub site_owner: String,
}

impl AppConfig {
    pub const DEFAULT_RESUME_MAX_BYTES: usize = 10 * 1024 * 1024;
    pub const DEFAULT_SITE_OWNER: &'static str = "Portfolio Owner";
    pub const DEFAULT_DATA_DIR: &'static str = "data";

    pub fn from_env() -> Result<Self, ConfigError> {
        let smtp = match env::var("SMTP_SERVER") {
            Ok(server) => Some(SmtpConfig {
                server,
                username: required("SMTP_USERNAME")?,
                password: required("SMTP_PASSWORD")?,
            }),
            Err(_) => None,
        };

        Ok(Self {
            host: try_load("HOST", "127.0.0.1")?,
            port: try_load("PORT", "5000")?,
            jwt: JwtConfig::from_env()?,
            admin_email: required("ADMIN_EMAIL")?,
            admin_password_hash: required("ADMIN_PASSWORD_HASH")?,
            email_from: try_load("EMAIL_FROM", "noreply@localhost")?,
            smtp,
            resume_max_bytes: try_load(
                "RESUME_MAX_BYTES",
                &Self::DEFAULT_RESUME_MAX_BYTES.to_string(),
            )?,
            data_dir: try_load("DATA_DIR", Self::DEFAULT_DATA_DIR)?,
            site_owner: try_load("SITE_OWNER", Self::DEFAULT_SITE_OWNER)?,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Settings of the HTTP client side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: Self::DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub const DEFAULT_API_BASE_URL: &'static str = "http://localhost:5000/api";

    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let base: String = try_load("API_BASE_URL", Self::DEFAULT_API_BASE_URL)?;
        if !base.starts_with("http://") && !base.starts_with("https://") {
            return Err(ConfigError::Invalid {
                key: "API_BASE_URL",
                reason: "must start with http:// or https://".to_string(),
            });
        }
        Ok(Self::new(base))
    }
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(key))
}

fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        })
}
