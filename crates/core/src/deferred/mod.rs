//! Deferred schedule resolution
//!
//! Resolves a deferred schedule by posting the channel's identity, trigger
//! and pending overrides to the decision endpoint.
//!
//! # Flow
//!
//! 1. Fail fast with `Unavailable` when the client is disabled
//! 2. Fetch a bearer token (`MissingAuthToken` if none is available)
//! 3. Build and send the request
//! 4. On `401`, invalidate the token, fetch a fresh one and send once more
//! 5. Deliver exactly one outcome

pub mod client;
pub mod completion;
pub mod payload;
pub mod ports;
