//! Configuration management for the record server.
//!
//! This module handles loading and validating configuration from environment
//! variables. A `.env` file is honoured if present; stdout is never written to
//! because it carries command responses.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the record server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,

    /// Pretty-print JSON responses (default: false)
    pub pretty_output: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `RECORDS_PRETTY_OUTPUT`: `true`/`false` (default: false)
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() does not print to stdout
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        let pretty_output = Self::parse_env_bool("RECORDS_PRETTY_OUTPUT", false)?;

        Ok(Config {
            log_level,
            pretty_output,
        })
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            pretty_output: false,
        }
    }
}
