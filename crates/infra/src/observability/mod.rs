//! Logging setup
//!
//! Installs the process-wide `tracing` subscriber. Library code only emits
//! events; binaries and examples call [`init_tracing`] once at startup.

use anyhow::{anyhow, Context, Result};
use deferral_domain::LoggingConfig;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Install a fmt subscriber filtered by `config.filter`
///
/// `RUST_LOG` takes precedence over the configured filter when set.
///
/// # Errors
/// Fails if the filter directive is empty or invalid, or if a global
/// subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = build_env_filter(&config.filter)?;

    let layer = if config.json {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_ansi(false)
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        fmt::layer().with_target(true).with_writer(std::io::stderr).boxed()
    };

    tracing_subscriber::registry()
        .with(layer.with_filter(filter))
        .try_init()
        .context("failed to initialize tracing subscriber")?;

    tracing::debug!(filter = %config.filter, json = config.json, "tracing initialized");
    Ok(())
}

fn build_env_filter(directive: &str) -> Result<EnvFilter> {
    if directive.trim().is_empty() {
        return Err(anyhow!("logging.filter cannot be empty"));
    }

    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(from_env) if !from_env.trim().is_empty() => EnvFilter::try_new(from_env)
            .with_context(|| format!("invalid {} directive", EnvFilter::DEFAULT_ENV)),
        _ => EnvFilter::try_new(directive)
            .with_context(|| format!("invalid logging.filter directive `{directive}`")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_is_rejected() {
        assert!(build_env_filter("  ").is_err());
    }

    #[test]
    fn valid_directive_is_accepted() {
        assert!(build_env_filter("info,deferral_core=debug").is_ok());
    }

    #[test]
    fn second_initialization_fails() {
        let config = LoggingConfig::default();
        let _ = init_tracing(&config);
        assert!(init_tracing(&config).is_err());
    }
}
