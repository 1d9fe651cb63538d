//! Resolve one deferred schedule against a live endpoint
//!
//! Configuration comes from `DEFERRAL_*` environment variables or a
//! `deferral.{json,toml}` file. The decision URL is the first argument.
//!
//! Run with:
//! ```bash
//! cargo run -p deferral-infra --example resolve_deferred -- https://example.com/api/deferred/abc123
//! ```

use anyhow::{anyhow, Context, Result};
use deferral_domain::{ResolutionRequest, TriggerContext, TriggerType};
use deferral_infra::{build_deferred_client, config, init_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load().context("failed to load configuration")?;
    init_tracing(&config.logging)?;

    let url = std::env::args().nth(1).ok_or_else(|| anyhow!("usage: resolve_deferred <url>"))?;
    let request = ResolutionRequest::builder(url, config.auth.channel_id.clone())
        .trigger_context(TriggerContext::new(TriggerType::AppInit, 1.0, serde_json::Value::Null))
        .build()?;

    let client = build_deferred_client(&config)?;

    match client.resolve(&request).await {
        Ok(result) => tracing::info!(
            is_audience_match = result.is_audience_match,
            actions = %serde_json::Value::Array(result.actions),
            "resolved"
        ),
        Err(err) => tracing::error!(error = %err, kind = err.label(), "resolution failed"),
    }

    Ok(())
}
