use chrono::{Local, NaiveDate};

use crate::app_config::AppConfig;
use crate::ConfigError;

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
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key), Local::now().date_naive())
}

/// Build application configuration using the provided env-var lookup function.
///
/// `today` supplies the default end date, so tests can pin the clock. This is
/// the core parsing/validation logic, decoupled from the actual environment so
/// it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var`
/// needed.
fn build_app_config<F>(lookup: F, today: NaiveDate) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_date = |var: &str, raw: &str| -> Result<NaiveDate, ConfigError> {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("expected YYYY-MM-DD: {e}"),
        })
    };

    let base_url = require("RDSYNC_BASE_URL")?;
    let api_token = require("RDSYNC_API_TOKEN")?;
    let output_dir = PathBuf::from(require("RDSYNC_OUTPUT_DIR")?);

    let start_date = parse_date("RDSYNC_START_DATE", &require("RDSYNC_START_DATE")?)?;
    let end_date = match lookup("RDSYNC_END_DATE") {
        Ok(raw) => parse_date("RDSYNC_END_DATE", &raw)?,
        Err(_) => today,
    };

    if start_date > end_date {
        return Err(ConfigError::InvalidEnvVar {
            var: "RDSYNC_START_DATE".to_string(),
            reason: format!("start date {start_date} is after end date {end_date}"),
        });
    }

    let per_page = parse_u32("RDSYNC_PER_PAGE", "200")?;
    if per_page == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "RDSYNC_PER_PAGE".to_string(),
            reason: "page size must be at least 1".to_string(),
        });
    }

    let retry_attempts = parse_u32("RDSYNC_RETRY_ATTEMPTS", "3")?;
    let retry_delay_secs = parse_u64("RDSYNC_RETRY_DELAY_SECS", "5")?;
    let request_timeout_secs = parse_u64("RDSYNC_REQUEST_TIMEOUT_SECS", "30")?;
    let log_level = or_default("RDSYNC_LOG_LEVEL", "info");
    let log_dir = PathBuf::from(or_default("RDSYNC_LOG_DIR", "."));

    Ok(AppConfig {
        base_url,
        api_token,
        output_dir,
        start_date,
        end_date,
        per_page,
        retry_attempts,
        retry_delay_secs,
        request_timeout_secs,
        log_level,
        log_dir,
    })
}
