//! Default adapters for the deferred schedule client
//!
//! - [`DeviceTokenProvider`]: bearer tokens from the device auth endpoint
//! - [`StaticStateOverrides`]: device state taken from configuration
//! - [`build_deferred_client`]: wires both onto the reqwest transport

pub mod auth;
pub mod client;
pub mod state;

pub use auth::DeviceTokenProvider;
pub use client::build_deferred_client;
pub use state::StaticStateOverrides;
