use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_FRONTEND_URL: &str = "https://xylo.world";
const DEFAULT_CODE_EXPIRES_MINUTES: i64 = 15;
const DEFAULT_MAX_VERIFICATION_ATTEMPTS: i32 = 3;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,

    /// Empty when crawling is disabled.
    pub youtube_api_key: String,

    pub frontend_url: String,
    pub discord_server_id: Option<String>,

    pub verification_code_expires_minutes: i64,
    pub max_verification_attempts: i32,

    pub enable_scheduler: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            port: parse_or("PORT", DEFAULT_PORT)?,
            youtube_api_key: std::env::var("YOUTUBE_API_KEY").unwrap_or_default(),
            frontend_url: std::env::var("FRONTEND_URL")
                .unwrap_or_else(|_| DEFAULT_FRONTEND_URL.to_string()),
            discord_server_id: std::env::var("DISCORD_SERVER_ID")
                .ok()
                .filter(|id| !id.is_empty()),
            verification_code_expires_minutes: parse_or(
                "VERIFICATION_CODE_EXPIRES_MINUTES",
                DEFAULT_CODE_EXPIRES_MINUTES,
            )?,
            max_verification_attempts: parse_or(
                "MAX_VERIFICATION_ATTEMPTS",
                DEFAULT_MAX_VERIFICATION_ATTEMPTS,
            )?,
            enable_scheduler: parse_or("ENABLE_SCHEDULER", true)?,
        })
    }
}

impl Default for Config {
    /// Defaults for every optional setting with an empty database URL.
    fn default() -> Self {
        Self {
            database_url: String::new(),
            port: DEFAULT_PORT,
            youtube_api_key: String::new(),
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
            discord_server_id: None,
            verification_code_expires_minutes: DEFAULT_CODE_EXPIRES_MINUTES,
            max_verification_attempts: DEFAULT_MAX_VERIFICATION_ATTEMPTS,
            enable_scheduler: true,
        }
    }
}

/// Reads `name` and parses it, falling back to `default` when unset or empty.
fn parse_or<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => {
            value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: name.to_string(),
                    value,
                })
        }
        _ => Ok(default),
    }
}
