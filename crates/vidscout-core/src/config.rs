use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse.
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
/// Returns `ConfigError` if a value fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can pass a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| invalid(var, e.to_string()))
    };

    let parse_positive_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        match parse_u32(var, default)? {
            0 => Err(invalid(var, "must be at least 1".to_string())),
            n => Ok(n),
        }
    };

    let parse_positive_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        match parse_u64(var, default)? {
            0 => Err(invalid(var, "must be at least 1".to_string())),
            n => Ok(n),
        }
    };

    let log_level = or_default("VIDSCOUT_LOG_LEVEL", "info");
    let region = or_default("VIDSCOUT_REGION", "US");
    let max_results = parse_positive_u32("VIDSCOUT_MAX_RESULTS", "12")?;

    let annotation_timeout_secs = parse_positive_u64("VIDSCOUT_ANNOTATION_TIMEOUT_SECS", "30")?;
    let annotation_max_retries = parse_u32("VIDSCOUT_ANNOTATION_MAX_RETRIES", "0")?;
    let annotation_retry_backoff_ms = parse_u64("VIDSCOUT_ANNOTATION_RETRY_BACKOFF_MS", "500")?;

    let trend_query = or_default("VIDSCOUT_TREND_QUERY", "trending");
    let trend_max_results = parse_positive_u32("VIDSCOUT_TREND_MAX_RESULTS", "10")?;
    let stats_timeout_secs = parse_positive_u64("VIDSCOUT_STATS_TIMEOUT_SECS", "10")?;

    Ok(AppConfig {
        log_level,
        region,
        max_results,
        annotation_timeout_secs,
        annotation_max_retries,
        annotation_retry_backoff_ms,
        trend_query,
        trend_max_results,
        stats_timeout_secs,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
