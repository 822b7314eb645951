use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_API_URL: &str = "https://estace-v2.onrender.com";
pub const DEFAULT_GEOREF_URL: &str = "https://apis.datos.gob.ar/georef/api";
pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_USER_AGENT: &str = "estace/0.1 (parking-admin)";

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
/// Decoupled from the real environment so tests can drive it with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_optional_u64 = |var: &str| -> Result<Option<u64>, ConfigError> {
        match lookup(var) {
            Ok(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<u64>()
                .map(Some)
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                }),
            _ => Ok(None),
        }
    };

    let env = parse_environment(&or_default("ESTACE_ENV", "development"))?;
    let log_level = or_default("ESTACE_LOG_LEVEL", "info");

    let api_url = parse_base_url(
        "ESTACE_API_URL",
        &or_default("ESTACE_API_URL", DEFAULT_API_URL),
    )?;
    let georef_url = parse_base_url(
        "ESTACE_GEOREF_URL",
        &or_default("ESTACE_GEOREF_URL", DEFAULT_GEOREF_URL),
    )?;
    let nominatim_url = parse_base_url(
        "ESTACE_NOMINATIM_URL",
        &or_default("ESTACE_NOMINATIM_URL", DEFAULT_NOMINATIM_URL),
    )?;

    let user_agent = or_default("ESTACE_USER_AGENT", DEFAULT_USER_AGENT);
    let api_timeout_secs = parse_optional_u64("ESTACE_API_TIMEOUT_SECS")?;
    let session_path = PathBuf::from(or_default(
        "ESTACE_SESSION_PATH",
        "./.estace/session.json",
    ));

    Ok(AppConfig {
        env,
        log_level,
        api_url,
        georef_url,
        nominatim_url,
        user_agent,
        api_timeout_secs,
        session_path,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "ESTACE_ENV".to_string(),
            reason: format!("expected development, test or production, got '{other}'"),
        }),
    }
}

/// Accepts only `http`/`https` URLs and strips trailing slashes so callers can
/// append paths with a single `/`.
fn parse_base_url(var: &str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("'{raw}' is not an http(s) URL"),
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
