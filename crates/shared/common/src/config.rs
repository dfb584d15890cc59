//! Database configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, AppResult};

/// Default endpoint of the records database
pub const DEFAULT_DATABASE_URL: &str = "mysql://localhost:3306/educagestor360";

/// Default connect timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Database endpoint and credentials.
///
/// The credentials are kept apart from the endpoint and merged into the
/// connection URL only when a connection is opened.
#[derive(Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Endpoint URL without credentials, e.g. `mysql://localhost:3306/school`
    pub url: String,
    #[serde(default)]
    pub username: String,
    #[serde(default, skip_serializing)]
    pub password: String,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_connect_timeout_secs() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url)
            .field("username", &"[REDACTED]")
            .field("password", &"[REDACTED]")
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            username: String::new(),
            password: String::new(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl DatabaseConfig {
    /// Endpoint with no credentials, e.g. a local SQLite file
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Set the credentials injected into the connection URL
    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    /// Load configuration from environment variables (and `.env`, if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            username: lookup("DATABASE_USER").unwrap_or_default(),
            password: lookup("DATABASE_PASSWORD").unwrap_or_default(),
            connect_timeout_secs: lookup("DATABASE_CONNECT_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// URL scheme of the endpoint, which selects the driver.
    ///
    /// Whether a driver for it is compiled in is up to the storage layer.
    pub fn scheme(&self) -> AppResult<String> {
        let url = self.parse_endpoint()?;
        Ok(url.scheme().to_ascii_lowercase())
    }

    /// Full connection URL with credentials merged in (percent-encoded).
    pub fn connection_url(&self) -> AppResult<String> {
        let mut url = self.parse_endpoint()?;

        if !self.username.is_empty() {
            url.set_username(&self.username).map_err(|_| {
                AppError::config("database endpoint cannot carry a username")
            })?;
        }
        if !self.password.is_empty() {
            url.set_password(Some(&self.password)).map_err(|_| {
                AppError::config("database endpoint cannot carry a password")
            })?;
        }

        Ok(url.to_string())
    }

    fn parse_endpoint(&self) -> AppResult<Url> {
        Url::parse(&self.url)
            .map_err(|e| AppError::config(format!("invalid database url '{}': {}", self.url, e)))
    }
}
