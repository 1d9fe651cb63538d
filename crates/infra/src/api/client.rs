//! Default client wiring
//!
//! Builds a [`DeferredScheduleClient`] backed by the reqwest transport, the
//! device token provider and config-derived device state.

use std::sync::Arc;
use std::time::Duration;

use deferral_core::DeferredScheduleClient;
use deferral_domain::{Config, DeferralError, Result};
use tracing::info;

use super::auth::DeviceTokenProvider;
use super::state::StaticStateOverrides;
use crate::http::HttpClient;

/// Build a ready-to-use client from configuration
///
/// The transport and the token provider share one connection pool. The
/// configured timeout bounds each HTTP exchange and each send as a whole.
///
/// # Errors
///
/// Returns `DeferralError::Config` if the HTTP client cannot be built or the
/// auth section is incomplete.
pub fn build_deferred_client(config: &Config) -> Result<DeferredScheduleClient> {
    if config.auth.token_url.trim().is_empty() {
        return Err(DeferralError::Config("auth.token_url must be set".to_string()));
    }

    let timeout = Duration::from_secs(config.client.timeout_seconds);
    let http = HttpClient::builder()
        .timeout(timeout)
        .user_agent(config.client.user_agent.clone())
        .build()?;

    let auth = Arc::new(DeviceTokenProvider::new(http.clone(), &config.auth));
    let state = Arc::new(StaticStateOverrides::new(&config.state));

    let client = DeferredScheduleClient::builder()
        .session(Arc::new(http))
        .auth(auth)
        .state(state)
        .timeout(timeout)
        .enabled(config.client.enabled)
        .build()?;

    info!(
        enabled = config.client.enabled,
        timeout_seconds = config.client.timeout_seconds,
        platform = %config.state.platform,
        "deferred schedule client ready"
    );

    Ok(client)
}
