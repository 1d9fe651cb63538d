//! Port interface for the HTTP transport

use async_trait::async_trait;
use deferral_domain::{HttpRequest, RawResponse, TransportError};

/// Executes HTTP requests on behalf of an API client
///
/// Dropping the future returned by `send` must abort the request; the base
/// client relies on that to cancel in-flight work.
#[async_trait]
pub trait RequestSession: Send + Sync {
    /// Send a request and return the raw response
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, TransportError>;
}
