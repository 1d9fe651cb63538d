//! Mock port implementations

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use deferral_core::{AuthTokenProvider, RequestSession, StateOverridesProvider};
use deferral_domain::{
    AuthToken, DeferralError, HttpRequest, RawResponse, Result as DomainResult, StateOverrides,
    TransportError,
};
use parking_lot::Mutex;

/// Session that replays scripted responses in order and records requests.
#[derive(Default)]
pub struct ScriptedSession {
    responses: Mutex<VecDeque<Result<RawResponse, TransportError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and body.
    pub fn respond(self, status: u16, body: &str) -> Self {
        self.responses.lock().push_back(Ok(RawResponse::new(status, body.as_bytes().to_vec())));
        self
    }

    /// Queue a transport failure.
    pub fn fail(self, error: TransportError) -> Self {
        self.responses.lock().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait]
impl RequestSession for ScriptedSession {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, TransportError> {
        self.requests.lock().push(request);
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Connection("no scripted response".into())))
    }
}

/// Session whose sends never complete; counts how many were started.
#[derive(Default)]
pub struct StalledSession {
    started: AtomicUsize,
}

impl StalledSession {
    pub fn started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }

    /// Wait until `count` sends are in flight.
    pub async fn wait_for(&self, count: usize) {
        while self.started() < count {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
    }
}

#[async_trait]
impl RequestSession for StalledSession {
    async fn send(&self, _request: HttpRequest) -> Result<RawResponse, TransportError> {
        self.started.fetch_add(1, Ordering::SeqCst);
        std::future::pending().await
    }
}

/// Provider that hands out `t1`, `t2`, ... and moves to the next token when
/// the current one is invalidated.
pub struct RotatingTokenProvider {
    tokens: Vec<String>,
    current: AtomicUsize,
    fetches: AtomicUsize,
    invalidated: Mutex<Vec<String>>,
}

impl RotatingTokenProvider {
    pub fn new(tokens: &[&str]) -> Self {
        Self {
            tokens: tokens.iter().map(|t| (*t).to_string()).collect(),
            current: AtomicUsize::new(0),
            fetches: AtomicUsize::new(0),
            invalidated: Mutex::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self::new(&[])
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn invalidated(&self) -> Vec<String> {
        self.invalidated.lock().clone()
    }
}

#[async_trait]
impl AuthTokenProvider for RotatingTokenProvider {
    async fn current_token(&self) -> DomainResult<Option<AuthToken>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let index = self.current.load(Ordering::SeqCst);
        Ok(self.tokens.get(index).map(|t| AuthToken::new(t.clone())))
    }

    async fn invalidate(&self, token: &AuthToken) {
        self.invalidated.lock().push(token.as_str().to_string());
        let index = self.current.load(Ordering::SeqCst);
        if self.tokens.get(index).map(String::as_str) == Some(token.as_str()) {
            self.current.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Provider that replays scripted fetch results, including provider errors.
#[derive(Default)]
pub struct ScriptedTokenProvider {
    results: Mutex<VecDeque<DomainResult<Option<AuthToken>>>>,
    invalidated: Mutex<Vec<String>>,
}

impl ScriptedTokenProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(self, token: &str) -> Self {
        self.results.lock().push_back(Ok(Some(AuthToken::new(token))));
        self
    }

    pub fn error(self, message: &str) -> Self {
        self.results.lock().push_back(Err(DeferralError::Auth(message.to_string())));
        self
    }

    pub fn invalidated(&self) -> Vec<String> {
        self.invalidated.lock().clone()
    }
}

#[async_trait]
impl AuthTokenProvider for ScriptedTokenProvider {
    async fn current_token(&self) -> DomainResult<Option<AuthToken>> {
        self.results.lock().pop_front().unwrap_or(Ok(None))
    }

    async fn invalidate(&self, token: &AuthToken) {
        self.invalidated.lock().push(token.as_str().to_string());
    }
}

/// Provider whose token fetch panics.
pub struct PanickingTokenProvider;

#[async_trait]
impl AuthTokenProvider for PanickingTokenProvider {
    async fn current_token(&self) -> DomainResult<Option<AuthToken>> {
        panic!("token source exploded")
    }

    async fn invalidate(&self, _token: &AuthToken) {}
}

/// Fixed device state.
pub struct FixedState;

impl StateOverridesProvider for FixedState {
    fn platform(&self) -> String {
        "android".to_string()
    }

    fn state_overrides(&self) -> StateOverrides {
        StateOverrides {
            app_version: Some("1.0.0".into()),
            sdk_version: Some("16.0.0".into()),
            notification_opt_in: true,
            locale_language: Some("en".into()),
            locale_country: Some("US".into()),
        }
    }
}

pub fn fixed_state() -> Arc<FixedState> {
    Arc::new(FixedState)
}
