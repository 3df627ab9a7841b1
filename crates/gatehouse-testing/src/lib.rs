//! Test utilities for Gatehouse crates.
//!
//! Provides `LogCapture`, identity record fixtures and a stub identity runtime.
//! Import from `[dev-dependencies]` only, never in production code.

pub mod fixture;
pub mod identity_server;
pub mod log;
