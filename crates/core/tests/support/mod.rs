//! Shared test helpers for `deferral-core` integration tests.
//!
//! Deterministic in-memory implementations of the core ports so resolution
//! tests can script token rotation and endpoint responses without a network.

#![allow(dead_code)]

pub mod mocks;
