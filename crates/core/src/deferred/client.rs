//! Deferred schedule client
//!
//! Drives token fetch → send → classify → (one retry on auth rejection) →
//! deliver for each resolve call.

use std::sync::Arc;
use std::time::Duration;

use deferral_domain::constants::MAX_RESOLVE_ATTEMPTS;
use deferral_domain::{
    AuthToken, ClientError, DeferralError, DeferredScheduleResult, ResolutionRequest,
};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, warn};

use super::completion::CompletionQueue;
use super::payload;
use super::ports::{AuthTokenProvider, StateOverridesProvider};
use crate::api::base::BaseApiClient;
use crate::api::ports::RequestSession;

/// Outcome of one resolve call
pub type ResolveOutcome = Result<DeferredScheduleResult, ClientError>;

/// Client for the deferred schedule decision endpoint
pub struct DeferredScheduleClient {
    base: BaseApiClient,
    auth: Arc<dyn AuthTokenProvider>,
    state: Arc<dyn StateOverridesProvider>,
    completions: CompletionQueue,
}

impl DeferredScheduleClient {
    /// Create a client from its collaborators
    pub fn new(
        base: BaseApiClient,
        auth: Arc<dyn AuthTokenProvider>,
        state: Arc<dyn StateOverridesProvider>,
    ) -> Self {
        Self { base, auth, state, completions: CompletionQueue::new() }
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> DeferredScheduleClientBuilder {
        DeferredScheduleClientBuilder::default()
    }

    pub fn base(&self) -> &BaseApiClient {
        &self.base
    }

    pub fn is_enabled(&self) -> bool {
        self.base.is_enabled()
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.base.set_enabled(enabled);
    }

    /// Abort every in-flight send; affected resolve calls fail with
    /// `ClientError::Cancelled`.
    pub fn cancel_all_requests(&self) {
        self.base.cancel_all_requests();
    }

    /// Resolve a deferred schedule
    ///
    /// A `401` from the endpoint invalidates the token that was used and the
    /// request is sent once more with a fresh token. A second `401` is
    /// reported as `UnsuccessfulStatus(401)`.
    ///
    /// # Errors
    ///
    /// - `Unavailable` if the client is disabled (nothing is fetched or sent)
    /// - `MissingAuthToken` if no token can be obtained
    /// - `TimedOut`, `Cancelled` or `Network` for transport failures
    /// - `UnsuccessfulStatus` for non-2xx responses
    /// - `InvalidResponse` for unparseable decisions or status lines
    #[instrument(skip(self, request), fields(channel_id = %request.channel_id()))]
    pub async fn resolve(&self, request: &ResolutionRequest) -> ResolveOutcome {
        if !self.base.is_enabled() {
            debug!("client disabled, skipping resolution");
            return Err(ClientError::Unavailable);
        }

        let mut attempt: u32 = 1;
        loop {
            let token = self.fetch_token().await?;
            let body = payload::encode_body(request, self.state.as_ref())?;
            let outbound = payload::build_request(request.url(), &token, body);

            let raw = self.base.send(outbound).await?;
            let response = BaseApiClient::classify_response(raw)?;

            if response.is_success() {
                let result = payload::decode_result(&response.body)?;
                info!(
                    attempt,
                    is_audience_match = result.is_audience_match,
                    actions = result.actions.len(),
                    "deferred schedule resolved"
                );
                return Ok(result);
            }

            if response.is_unauthorized() && attempt < MAX_RESOLVE_ATTEMPTS {
                warn!(attempt, "auth token rejected, retrying with a fresh token");
                self.auth.invalidate(&token).await;
                attempt += 1;
                continue;
            }

            warn!(attempt, status = response.status, "deferred schedule resolution failed");
            return Err(ClientError::UnsuccessfulStatus(response.status));
        }
    }

    /// Resolve in the background and hand the outcome to `handler`
    ///
    /// Handlers run on this client's serial completion queue, one at a time.
    /// Each call invokes its handler exactly once, even if the resolution
    /// task panics or is aborted.
    pub fn resolve_with_handler<F>(
        self: &Arc<Self>,
        request: ResolutionRequest,
        handler: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(ResolveOutcome) + Send + 'static,
    {
        let client = Arc::clone(self);
        tokio::spawn(async move {
            let resolution = {
                let client = Arc::clone(&client);
                tokio::spawn(async move { client.resolve(&request).await })
            };

            let outcome = match resolution.await {
                Ok(outcome) => outcome,
                Err(err) => {
                    error!(error = %err, panicked = err.is_panic(), "resolution task failed");
                    Err(ClientError::Network("resolution aborted".to_string()))
                }
            };

            client.completions.deliver(move || handler(outcome));
        })
    }

    async fn fetch_token(&self) -> Result<AuthToken, ClientError> {
        match self.auth.current_token().await {
            Ok(Some(token)) => Ok(token),
            Ok(None) => {
                warn!("no auth token available");
                Err(ClientError::MissingAuthToken)
            }
            // A failing provider is indistinguishable from one without a token.
            Err(err) => {
                warn!(error = %err, "auth token provider failed");
                Err(ClientError::MissingAuthToken)
            }
        }
    }
}

/// Builder for [`DeferredScheduleClient`]
#[derive(Default)]
pub struct DeferredScheduleClientBuilder {
    session: Option<Arc<dyn RequestSession>>,
    auth: Option<Arc<dyn AuthTokenProvider>>,
    state: Option<Arc<dyn StateOverridesProvider>>,
    timeout: Option<Duration>,
    enabled: Option<bool>,
}

impl DeferredScheduleClientBuilder {
    /// Set the transport session
    pub fn session(mut self, session: Arc<dyn RequestSession>) -> Self {
        self.session = Some(session);
        self
    }

    /// Set the auth token provider
    pub fn auth(mut self, auth: Arc<dyn AuthTokenProvider>) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Set the device state provider
    pub fn state(mut self, state: Arc<dyn StateOverridesProvider>) -> Self {
        self.state = Some(state);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Build the client
    ///
    /// # Errors
    ///
    /// Returns `DeferralError::Config` if a collaborator is missing.
    pub fn build(self) -> deferral_domain::Result<DeferredScheduleClient> {
        let session = self
            .session
            .ok_or_else(|| DeferralError::Config("Request session not set".to_string()))?;
        let auth =
            self.auth.ok_or_else(|| DeferralError::Config("Auth provider not set".to_string()))?;
        let state = self
            .state
            .ok_or_else(|| DeferralError::Config("State provider not set".to_string()))?;

        let mut base = BaseApiClient::new(session);
        if let Some(timeout) = self.timeout {
            base = base.with_timeout(timeout);
        }
        base.set_enabled(self.enabled.unwrap_or(true));

        Ok(DeferredScheduleClient::new(base, auth, state))
    }
}
