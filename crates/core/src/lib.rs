//! # Deferral Core
//!
//! Protocol logic for resolving deferred schedules - no infrastructure
//! dependencies.
//!
//! This crate contains:
//! - Port interfaces (traits) for the transport session, the auth token
//!   provider and the device state provider
//! - The base API client (enabled flag, cancellation, response
//!   classification)
//! - The deferred schedule client (request building, bounded retry on auth
//!   rejection, serialized completion delivery)
//!
//! ## Architecture Principles
//! - Only depends on `deferral-domain`
//! - No HTTP client or platform code
//! - All external dependencies via traits

pub mod api;
pub mod deferred;

// Re-export specific items to avoid ambiguity
pub use api::base::{BaseApiClient, ClassifiedResponse};
pub use api::ports::RequestSession;
pub use deferred::client::{DeferredScheduleClient, DeferredScheduleClientBuilder, ResolveOutcome};
pub use deferred::completion::CompletionQueue;
pub use deferred::ports::{AuthTokenProvider, StateOverridesProvider};
