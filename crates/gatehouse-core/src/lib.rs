//! Cross-cutting plumbing shared by Gatehouse services: configuration loading and
//! tracing setup.

pub mod config;
pub mod tracing;
