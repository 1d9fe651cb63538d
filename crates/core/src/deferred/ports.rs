//! Port interfaces for deferred schedule resolution

use async_trait::async_trait;
use deferral_domain::{AuthToken, Result, StateOverrides};

/// Source of bearer tokens for the decision endpoint
///
/// Implementations may fetch tokens over the network. They are shared by all
/// concurrent resolutions, so `invalidate` must tolerate a token that was
/// already replaced.
#[async_trait]
pub trait AuthTokenProvider: Send + Sync {
    /// Current token, or `None` if no token can be produced
    async fn current_token(&self) -> Result<Option<AuthToken>>;

    /// Mark `token` as rejected so the next `current_token` returns a fresh one
    async fn invalidate(&self, token: &AuthToken);
}

/// Snapshot of device state sent with every resolution request
///
/// Queried synchronously while the request body is built.
pub trait StateOverridesProvider: Send + Sync {
    /// Platform identifier reported to the endpoint (e.g. `"android"`)
    fn platform(&self) -> String;

    fn state_overrides(&self) -> StateOverrides;
}
