use thiserror::Error;

use crate::app_config::{AppConfig, StoreConfig};

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

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup — no
/// `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
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

    let bind_addr = parse_addr("VITRINE_BIND_ADDR", "0.0.0.0:4000")?;
    let log_level = or_default("VITRINE_LOG_LEVEL", "info");
    let store_timeout_secs = parse_u64("VITRINE_STORE_TIMEOUT_SECS", "10")?;
    let store_user_agent = or_default(
        "VITRINE_STORE_USER_AGENT",
        "vitrine/0.1 (catalog-aggregator)",
    );

    // Comma-separated variant names taken out of rotation, e.g. "footwear,legacy".
    let disabled: Vec<String> = or_default("VITRINE_DISABLED_STORES", "")
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    let store = |var: &str, name: &str| -> Result<StoreConfig, ConfigError> {
        let base_url = require(var)?.trim_end_matches('/').to_string();
        Ok(StoreConfig {
            base_url,
            enabled: !disabled.iter().any(|d| d == name),
        })
    };

    let legacy_store = store("VITRINE_LEGACY_STORE_URL", "legacy")?;
    let market_store = store("VITRINE_MARKET_STORE_URL", "market")?;
    let footwear_store = store("VITRINE_FOOTWEAR_STORE_URL", "footwear")?;

    Ok(AppConfig {
        bind_addr,
        log_level,
        store_timeout_secs,
        store_user_agent,
        legacy_store,
        market_store,
        footwear_store,
    })
}
