//! # Deferral Domain
//!
//! Domain types for deferred schedule resolution.
//!
//! This crate contains:
//! - Resolution request model (trigger context, tag and attribute overrides)
//! - Decision payload returned by the remote endpoint
//! - Transport-neutral HTTP request/response values
//! - Error types and Result definitions
//! - Configuration structures
//!
//! ## Architecture
//! - No dependencies on other Deferral crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
