use std::path::PathBuf;

use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a
/// plain `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let optional = |var: &str| -> Option<String> {
        lookup(var).ok().filter(|v| !v.trim().is_empty())
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_radius = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let radius = or_default(var, default)
            .parse::<f64>()
            .map_err(|e| invalid(var, e.to_string()))?;
        if !radius.is_finite() || radius < 0.0 {
            return Err(invalid(
                var,
                format!("radius must be a finite, non-negative number of km, got {radius}"),
            ));
        }
        Ok(radius)
    };

    let database_url = optional("DATABASE_URL");
    let env = parse_environment(&or_default("MERCATO_ENV", "development"))?;
    let log_level = or_default("MERCATO_LOG_LEVEL", "info");

    let db_max_connections = parse_u32("MERCATO_DB_MAX_CONNECTIONS", "5")?;
    let db_min_connections = parse_u32("MERCATO_DB_MIN_CONNECTIONS", "0")?;
    let db_acquire_timeout_secs = parse_u64("MERCATO_DB_ACQUIRE_TIMEOUT_SECS", "5")?;

    let remote_timeout_secs = parse_u64("MERCATO_REMOTE_TIMEOUT_SECS", "5")?;
    if remote_timeout_secs == 0 {
        return Err(invalid(
            "MERCATO_REMOTE_TIMEOUT_SECS",
            "timeout must be at least 1 second".to_string(),
        ));
    }

    let default_radius_km = parse_radius("MERCATO_DEFAULT_RADIUS_KM", "10")?;
    let fixtures_path = optional("MERCATO_FIXTURES_PATH").map(PathBuf::from);

    Ok(AppConfig {
        database_url,
        env,
        log_level,
        db_max_connections,
        db_min_connections,
        db_acquire_timeout_secs,
        remote_timeout_secs,
        default_radius_km,
        fixtures_path,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for anything other than
/// `development`, `test`, or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "MERCATO_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
