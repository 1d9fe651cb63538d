//! # Deferral Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The reqwest-backed transport session
//! - The device token provider and config-derived device state
//! - Configuration loading (environment, JSON, TOML)
//! - Logging setup
//!
//! ## Architecture
//! - Implements traits defined in `deferral-core`
//! - Depends on `deferral-domain` and `deferral-core`
//! - Contains all "impure" code (network, files, environment)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod observability;

// Re-export commonly used items
pub use api::{build_deferred_client, DeviceTokenProvider, StaticStateOverrides};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use observability::init_tracing;
