//! Base API client
//!
//! Holds the transport session, the enabled flag and the cancellation handle
//! shared by every request issued through a client.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use deferral_domain::{ClientError, HttpRequest, RawResponse};
use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, warn};

use super::ports::RequestSession;

/// Response whose status line was recognized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl ClassifiedResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == deferral_domain::constants::STATUS_UNAUTHORIZED
    }
}

/// Common request lifecycle for API clients
pub struct BaseApiClient {
    session: Arc<dyn RequestSession>,
    enabled: AtomicBool,
    cancellation: Mutex<CancellationToken>,
    timeout: Option<Duration>,
}

impl BaseApiClient {
    /// Create an enabled client without a request timeout
    pub fn new(session: Arc<dyn RequestSession>) -> Self {
        Self {
            session,
            enabled: AtomicBool::new(true),
            cancellation: Mutex::new(CancellationToken::new()),
            timeout: None,
        }
    }

    /// Bound every send by `timeout`; expiry yields `ClientError::TimedOut`.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    /// Enable or disable the client. Takes effect for calls started afterwards.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
        debug!(enabled, "api client enabled flag changed");
    }

    /// Abort every send currently in flight through this client
    ///
    /// Each aborted send resolves with `ClientError::Cancelled`. Sends started
    /// after this call are not affected.
    pub fn cancel_all_requests(&self) {
        let previous = std::mem::replace(&mut *self.cancellation.lock(), CancellationToken::new());
        previous.cancel();
        debug!("cancelled all in-flight requests");
    }

    /// Send a request through the transport session
    ///
    /// # Errors
    ///
    /// - `ClientError::Unavailable` if the client is disabled
    /// - `ClientError::Cancelled` if `cancel_all_requests` ran while in flight
    /// - `ClientError::TimedOut` on transport or client-side timeout
    /// - `ClientError::Network` / `ClientError::InvalidRequest` for other
    ///   transport failures
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    pub async fn send(&self, request: HttpRequest) -> Result<RawResponse, ClientError> {
        if !self.is_enabled() {
            return Err(ClientError::Unavailable);
        }

        let cancellation = self.cancellation.lock().clone();
        let session = Arc::clone(&self.session);
        let timeout = self.timeout;

        let exchange = async move {
            match timeout {
                Some(limit) => match tokio::time::timeout(limit, session.send(request)).await {
                    Ok(result) => result.map_err(ClientError::from),
                    Err(_) => Err(ClientError::TimedOut),
                },
                None => session.send(request).await.map_err(ClientError::from),
            }
        };

        tokio::select! {
            biased;
            () = cancellation.cancelled() => {
                debug!("request cancelled");
                Err(ClientError::Cancelled)
            }
            result = exchange => {
                if let Err(err) = &result {
                    warn!(error = %err, error_kind = err.label(), "request failed");
                }
                result
            }
        }
    }

    /// Validate the status line of a raw response
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidResponse` if the status is not a valid HTTP
    /// status code.
    pub fn classify_response(raw: RawResponse) -> Result<ClassifiedResponse, ClientError> {
        if !(100..=599).contains(&raw.status) {
            return Err(ClientError::InvalidResponse(format!(
                "unrecognized status code {}",
                raw.status
            )));
        }

        Ok(ClassifiedResponse { status: raw.status, headers: raw.headers, body: raw.body })
    }
}
