use std::env;
use thiserror::Error;

const DEFAULT_DATA_PATH: &str = "data";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),
}

/// Runtime settings, read once from the environment at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory holding cars.json and bookings.json
    pub data_path: String,
    pub host: String,
    pub port: u16,
    /// Path prefix the API is nested under; empty for none
    pub api_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: DEFAULT_DATA_PATH.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            api_prefix: String::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            Err(_) => defaults.port,
        };

        Ok(Self {
            data_path: env::var("DATA_PATH").unwrap_or(defaults.data_path),
            host: env::var("HOST").unwrap_or(defaults.host),
            port,
            api_prefix: normalize_prefix(&env::var("API_PREFIX").unwrap_or_default()),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// "" and "/" mean no prefix; otherwise a single leading slash, no trailing one
fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
