//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_TIMEOUT_SECONDS, DEFAULT_USER_AGENT};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,
    pub auth: AuthConfig,
    #[serde(default)]
    pub state: StateConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Deferred schedule client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub enabled: bool,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Device auth configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    pub token_url: String,
    pub app_key: String,
    #[serde(skip_serializing)]
    pub app_secret: String,
    pub channel_id: String,
}

/// Device state reported alongside every resolution request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StateConfig {
    pub platform: String,
    pub app_version: Option<String>,
    pub sdk_version: Option<String>,
    pub notification_opt_in: bool,
    pub locale_language: Option<String>,
    pub locale_country: Option<String>,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            platform: "linux".to_string(),
            app_version: None,
            sdk_version: Some(env!("CARGO_PKG_VERSION").to_string()),
            notification_opt_in: false,
            locale_language: None,
            locale_country: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info,deferral_core=debug`.
    pub filter: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: "info".to_string(), json: false }
    }
}
