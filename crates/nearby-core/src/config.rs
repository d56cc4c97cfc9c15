use std::net::SocketAddr;
use std::str::FromStr;

use thiserror::Error;

use crate::app_config::{AppConfig, Environment};
use crate::search::{
    SearchConfig, DEFAULT_BASE_STEP, DEFAULT_LIMIT, DEFAULT_MAX_ATTEMPTS, DEFAULT_SUFFICIENCY,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let database_url = require("DATABASE_URL")?;
    let env = parse_environment(&or_default("NEARBY_ENV", "development"))?;

    let bind_addr: SocketAddr = parse_var(&or_default, "NEARBY_BIND_ADDR", "0.0.0.0:4000")?;
    let log_level = or_default("NEARBY_LOG_LEVEL", "info");

    let db_max_connections = parse_var(&or_default, "NEARBY_DB_MAX_CONNECTIONS", "10")?;
    let db_min_connections = parse_var(&or_default, "NEARBY_DB_MIN_CONNECTIONS", "1")?;
    let db_acquire_timeout_secs = parse_var(&or_default, "NEARBY_DB_ACQUIRE_TIMEOUT_SECS", "10")?;
    let request_timeout_secs = parse_var(&or_default, "NEARBY_REQUEST_TIMEOUT_SECS", "30")?;

    let search = SearchConfig {
        base_step: parse_var(
            &or_default,
            "NEARBY_SEARCH_BASE_STEP",
            &DEFAULT_BASE_STEP.to_string(),
        )?,
        max_attempts: parse_var(
            &or_default,
            "NEARBY_SEARCH_MAX_ATTEMPTS",
            &DEFAULT_MAX_ATTEMPTS.to_string(),
        )?,
        sufficiency: parse_var(
            &or_default,
            "NEARBY_SEARCH_SUFFICIENCY",
            &DEFAULT_SUFFICIENCY.to_string(),
        )?,
        limit: parse_var(&or_default, "NEARBY_SEARCH_LIMIT", &DEFAULT_LIMIT.to_string())?,
    };
    validate_search_config(&search)?;

    Ok(AppConfig {
        database_url,
        env,
        bind_addr,
        log_level,
        db_max_connections,
        db_min_connections,
        db_acquire_timeout_secs,
        request_timeout_secs,
        search,
    })
}

fn parse_var<T, D>(or_default: D, var: &str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    D: Fn(&str, &str) -> String,
{
    or_default(var, default)
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
}

fn validate_search_config(search: &SearchConfig) -> Result<(), ConfigError> {
    if !(search.base_step.is_finite() && search.base_step > 0.0) {
        return Err(ConfigError::InvalidEnvVar {
            var: "NEARBY_SEARCH_BASE_STEP".to_string(),
            reason: format!("must be a positive number, got {}", search.base_step),
        });
    }
    if search.max_attempts == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "NEARBY_SEARCH_MAX_ATTEMPTS".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(())
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] for anything other than
/// `development`, `test` or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "NEARBY_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
