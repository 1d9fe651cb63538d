//! Conversions from external infrastructure errors into domain errors.

use deferral_domain::{DeferralError, TransportError};
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct InfraError(pub DeferralError);

impl From<InfraError> for DeferralError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<DeferralError> for InfraError {
    fn from(value: DeferralError) -> Self {
        InfraError(value)
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → DeferralError */
/* -------------------------------------------------------------------------- */

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        if value.is_timeout() {
            return InfraError(DeferralError::Network("HTTP request timed out".into()));
        }
        if value.is_builder() {
            return InfraError(DeferralError::Config(format!("invalid HTTP request: {value}")));
        }
        #[cfg(not(target_arch = "wasm32"))]
        if value.is_connect() {
            return InfraError(DeferralError::Network(format!("HTTP connection failure: {value}")));
        }
        if let Some(status) = value.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));
            return InfraError(match code {
                401 | 403 => DeferralError::Auth(message),
                400..=499 => DeferralError::InvalidInput(message),
                _ => DeferralError::Network(message),
            });
        }
        InfraError(DeferralError::Network(value.to_string()))
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → TransportError */
/* -------------------------------------------------------------------------- */

/// Classify a reqwest failure for the transport session contract.
pub fn transport_error(err: &HttpError) -> TransportError {
    if err.is_timeout() {
        TransportError::TimedOut
    } else if err.is_builder() {
        TransportError::Request(err.to_string())
    } else {
        TransportError::Connection(err.to_string())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
