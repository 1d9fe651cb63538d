//! Error types used throughout the workspace

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// General error type for configuration, builders and adapters
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum DeferralError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Deferral operations
pub type Result<T> = std::result::Result<T, DeferralError>;

/// Failure reported by a transport session
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("request timed out")]
    TimedOut,

    #[error("connection failed: {0}")]
    Connection(String),

    #[error("request could not be built: {0}")]
    Request(String),
}

/// Outcome error of a deferred schedule resolution
///
/// Exactly one of these, or a successful result, is produced per resolve call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The client is disabled; nothing was sent.
    #[error("API client is unavailable")]
    Unavailable,

    #[error("auth token unavailable")]
    MissingAuthToken,

    #[error("request timed out")]
    TimedOut,

    /// The request was aborted by `cancel_all_requests`.
    #[error("request cancelled")]
    Cancelled,

    #[error("unsuccessful status: {0}")]
    UnsuccessfulStatus(u16),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("network error: {0}")]
    Network(String),

    /// The outbound request could not be encoded.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    /// Stable label suitable for structured logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unavailable => "unavailable",
            Self::MissingAuthToken => "missing_auth_token",
            Self::TimedOut => "timed_out",
            Self::Cancelled => "cancelled",
            Self::UnsuccessfulStatus(_) => "unsuccessful_status",
            Self::InvalidResponse(_) => "invalid_response",
            Self::Network(_) => "network",
            Self::InvalidRequest(_) => "invalid_request",
        }
    }

    /// Status code carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnsuccessfulStatus(code) => Some(*code),
            _ => None,
        }
    }
}

impl From<TransportError> for ClientError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::TimedOut => Self::TimedOut,
            TransportError::Connection(message) => Self::Network(message),
            TransportError::Request(message) => Self::InvalidRequest(message),
        }
    }
}
