use std::env;
use thiserror::Error;

pub const HOST_KEY: &str = "APP_HOST";
pub const PORT_KEY: &str = "APP_PORT";
pub const LOG_FILTER_KEY: &str = "LOG_FILTER";
pub const DATABASE_URL_KEY: &str = "DATABASE_URL";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Used when `RUST_LOG` is not set.
    pub log_filter: String,
    /// Postgres event store. Without it events are kept in memory.
    pub database_url: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            database_url: None,
        }
    }
}

impl AppConfig {
    /// Reads the process environment, after loading a `.env` file when one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let port = match lookup(PORT_KEY) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|error| ConfigError::InvalidValue {
                    key: PORT_KEY,
                    message: format!("`{raw}` is not a port number ({error})"),
                })?,
            None => defaults.port,
        };

        Ok(Self {
            host: lookup(HOST_KEY).unwrap_or(defaults.host),
            port,
            log_filter: lookup(LOG_FILTER_KEY).unwrap_or(defaults.log_filter),
            database_url: lookup(DATABASE_URL_KEY).filter(|url| !url.trim().is_empty()),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
