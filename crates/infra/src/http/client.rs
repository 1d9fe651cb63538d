use std::time::Duration;

use async_trait::async_trait;
use deferral_core::RequestSession;
use deferral_domain::constants::DEFAULT_TIMEOUT_SECONDS;
use deferral_domain::{DeferralError, HttpMethod, HttpRequest, RawResponse, TransportError};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use tracing::debug;

use crate::errors::{transport_error, InfraError};

/// HTTP client with a per-exchange timeout.
///
/// Implements [`RequestSession`] for the core clients. Every call is a
/// single exchange; status handling such as the auth retry belongs to the
/// caller.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self, DeferralError> {
        Self::builder().build()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the provided request builder.
    pub async fn execute(&self, builder: RequestBuilder) -> Result<Response, TransportError> {
        let request = builder.build().map_err(|err| transport_error(&err))?;

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending HTTP request");

        match self.client.execute(request).await {
            Ok(response) => {
                debug!(%method, %url, status = %response.status(), "received HTTP response");
                Ok(response)
            }
            Err(err) => {
                debug!(%method, %url, error = %err, "HTTP request failed");
                Err(transport_error(&err))
            }
        }
    }
}

#[async_trait]
impl RequestSession for HttpClient {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, TransportError> {
        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        };

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = self.execute(builder).await?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value.to_str().ok().map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response.bytes().await.map_err(|err| transport_error(&err))?.to_vec();

        Ok(RawResponse { status, headers, body })
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    user_agent: Option<String>,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self { timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS), user_agent: None }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn build(self) -> Result<HttpClient, DeferralError> {
        let mut builder = ReqwestClient::builder().timeout(self.timeout).no_proxy();

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        let client = builder.build().map_err(|err| DeferralError::from(InfraError::from(err)))?;

        Ok(HttpClient { client })
    }
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use wiremock::matchers::{body_string, header, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn session_send_maps_request_and_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("Authorization", "Bearer t1"))
            .and(body_string("{\"a\":1}"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("X-Trace", "abc")
                    .set_body_string("{\"ok\":true}"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new().expect("http client");
        let request = HttpRequest::new(HttpMethod::Post, server.uri())
            .header("Authorization", "Bearer t1")
            .body(b"{\"a\":1}".to_vec());

        let response = client.send(request).await.expect("response");

        assert_eq!(response.status, 200);
        assert_eq!(response.header_value("x-trace"), Some("abc"));
        assert_eq!(response.body, b"{\"ok\":true}".to_vec());
    }

    #[tokio::test]
    async fn server_errors_are_returned_after_one_exchange() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new().expect("http client");
        let response = client
            .send(HttpRequest::new(HttpMethod::Get, server.uri()))
            .await
            .expect("response");

        assert_eq!(response.status, 503);
    }

    #[tokio::test]
    async fn sends_configured_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("User-Agent", "deferral-test/1.0"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client =
            HttpClient::builder().user_agent("deferral-test/1.0").build().expect("http client");
        let response = client
            .send(HttpRequest::new(HttpMethod::Get, server.uri()))
            .await
            .expect("response");

        assert_eq!(response.status, 204);
    }

    #[tokio::test]
    async fn connection_refused_is_connection_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener); // release the port so that requests fail with ECONNREFUSED
        let url = format!("http://{}", addr);

        let client = HttpClient::new().expect("http client");

        let result = client.send(HttpRequest::new(HttpMethod::Get, url)).await;
        assert!(matches!(result, Err(TransportError::Connection(_))), "got {:?}", result);
    }

    #[tokio::test]
    async fn slow_server_is_timed_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let client =
            HttpClient::builder().timeout(Duration::from_millis(50)).build().expect("http client");

        let result = client.send(HttpRequest::new(HttpMethod::Get, server.uri())).await;
        assert_eq!(result, Err(TransportError::TimedOut));
    }
}
