//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! Required:
//! - `DEFERRAL_TOKEN_URL`: Device token endpoint
//! - `DEFERRAL_APP_KEY`: Application key
//! - `DEFERRAL_APP_SECRET`: Application secret
//! - `DEFERRAL_CHANNEL_ID`: Channel ID of this device
//!
//! Optional:
//! - `DEFERRAL_ENABLED`: Whether the client starts enabled (true/false)
//! - `DEFERRAL_TIMEOUT_SECONDS`: Request timeout in seconds
//! - `DEFERRAL_USER_AGENT`: User agent sent with every request
//! - `DEFERRAL_PLATFORM`: Platform reported in resolution requests
//! - `DEFERRAL_APP_VERSION`: Application version
//! - `DEFERRAL_NOTIFICATION_OPT_IN`: Notification opt-in state (true/false)
//! - `DEFERRAL_LOCALE_LANGUAGE` / `DEFERRAL_LOCALE_COUNTRY`: Device locale
//! - `DEFERRAL_LOG_FILTER`: Log filter directive
//! - `DEFERRAL_LOG_JSON`: Emit JSON logs (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./deferral.json` or `./deferral.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. `../deferral.json` or `../deferral.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};
use std::str::FromStr;

use deferral_domain::{
    AuthConfig, ClientConfig, Config, DeferralError, LoggingConfig, Result, StateConfig,
};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `DeferralError::Config` if configuration cannot be loaded from
/// either source or is invalid.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// The auth variables are required; everything else falls back to the
/// section defaults.
///
/// # Errors
/// Returns `DeferralError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<Config> {
    let auth = AuthConfig {
        token_url: env_var("DEFERRAL_TOKEN_URL")?,
        app_key: env_var("DEFERRAL_APP_KEY")?,
        app_secret: env_var("DEFERRAL_APP_SECRET")?,
        channel_id: env_var("DEFERRAL_CHANNEL_ID")?,
    };

    let client_defaults = ClientConfig::default();
    let client = ClientConfig {
        enabled: env_bool("DEFERRAL_ENABLED", client_defaults.enabled),
        timeout_seconds: env_parse("DEFERRAL_TIMEOUT_SECONDS", client_defaults.timeout_seconds)?,
        user_agent: env_optional("DEFERRAL_USER_AGENT").unwrap_or(client_defaults.user_agent),
    };

    let state_defaults = StateConfig::default();
    let state = StateConfig {
        platform: env_optional("DEFERRAL_PLATFORM").unwrap_or(state_defaults.platform),
        app_version: env_optional("DEFERRAL_APP_VERSION").or(state_defaults.app_version),
        sdk_version: state_defaults.sdk_version,
        notification_opt_in: env_bool(
            "DEFERRAL_NOTIFICATION_OPT_IN",
            state_defaults.notification_opt_in,
        ),
        locale_language: env_optional("DEFERRAL_LOCALE_LANGUAGE"),
        locale_country: env_optional("DEFERRAL_LOCALE_COUNTRY"),
    };

    let logging_defaults = LoggingConfig::default();
    let logging = LoggingConfig {
        filter: env_optional("DEFERRAL_LOG_FILTER").unwrap_or(logging_defaults.filter),
        json: env_bool("DEFERRAL_LOG_JSON", logging_defaults.json),
    };

    let config = Config { client, auth, state, logging };
    validate(&config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `DeferralError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing or empty
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(DeferralError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            DeferralError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| DeferralError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    validate(&config)?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| DeferralError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| DeferralError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(DeferralError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Reject configurations the client cannot start with.
fn validate(config: &Config) -> Result<()> {
    url::Url::parse(&config.auth.token_url)
        .map_err(|e| DeferralError::Config(format!("Invalid token URL: {}", e)))?;

    if config.auth.channel_id.trim().is_empty() {
        return Err(DeferralError::Config("Channel ID must not be empty".to_string()));
    }
    if config.client.timeout_seconds == 0 {
        return Err(DeferralError::Config("Timeout must be greater than zero".to_string()));
    }

    Ok(())
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_in(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidates_in(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidates_in(dir: &Path) -> Vec<PathBuf> {
    vec![
        dir.join("deferral.json"),
        dir.join("deferral.toml"),
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("../deferral.json"),
        dir.join("../deferral.toml"),
    ]
}

/// Get required environment variable
///
/// # Errors
/// Returns `DeferralError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        DeferralError::Config(format!("Missing required environment variable: {}", key))
    })
}

fn env_optional(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Parse an optional numeric environment variable, falling back to `default`.
fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env_optional(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| DeferralError::Config(format!("Invalid value for {}: {}", key, e))),
        None => Ok(default),
    }
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
