//! Request lifecycle shared by API clients

pub mod base;
pub mod ports;
