//! Configuration management for the contact book binary.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Log levels accepted by `LOG_LEVEL`.
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration for the contact book binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level, one of trace/debug/info/warn/error (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout
        let _ = dotenvy::dotenv();

        let log_level = Self::parse_log_level("LOG_LEVEL", "error")?;

        Ok(Config { log_level })
    }

    /// Read a log level variable, lowercased, falling back to `default`.
    fn parse_log_level(var_name: &str, default: &str) -> ConfigResult<String> {
        let level = match env::var(var_name) {
            Ok(val) => val.trim().to_lowercase(),
            Err(_) => return Ok(default.to_string()),
        };

        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join("/"), level),
            });
        }

        Ok(level)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
        }
    }
}
