//! Load `ServerConfig` from environment variables, optionally seeded from a `.env` file.

use crate::config::types::{ServerConfig, UpdatePolicy};
use crate::error::ConfigError;
use std::str::FromStr;

pub const ENV_HOST: &str = "BUG_TRACKER_HOST";
pub const ENV_PORT: &str = "BUG_TRACKER_PORT";
/// Fallback port variable, as set by most hosting platforms.
pub const ENV_PORT_FALLBACK: &str = "PORT";
pub const ENV_CORS_ORIGINS: &str = "BUG_TRACKER_CORS_ORIGINS";
pub const ENV_BODY_LIMIT: &str = "BUG_TRACKER_BODY_LIMIT";
pub const ENV_STRICT_UPDATES: &str = "BUG_TRACKER_STRICT_UPDATES";

impl ServerConfig {
    /// Read `.env` if present (without overriding the real environment), then `from_env`.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::from_env()
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = ServerConfig::default();

        if let Some(host) = get(ENV_HOST) {
            config.host = host;
        }
        if let Some((key, raw)) = get(ENV_PORT)
            .map(|v| (ENV_PORT, v))
            .or_else(|| get(ENV_PORT_FALLBACK).map(|v| (ENV_PORT_FALLBACK, v)))
        {
            config.port = parse(key, &raw)?;
        }
        if let Some(raw) = get(ENV_CORS_ORIGINS) {
            config.cors_origins = raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
        if let Some(raw) = get(ENV_BODY_LIMIT) {
            config.body_limit_bytes = parse(ENV_BODY_LIMIT, &raw)?;
        }
        if let Some(raw) = get(ENV_STRICT_UPDATES) {
            config.update_policy = if parse_bool(ENV_STRICT_UPDATES, &raw)? {
                UpdatePolicy::Strict
            } else {
                UpdatePolicy::Lenient
            };
        }
        Ok(config)
    }
}

fn parse<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.parse().map_err(|_| ConfigError::Invalid {
        key,
        value: raw.to_string(),
    })
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: raw.to_string(),
        }),
    }
}
