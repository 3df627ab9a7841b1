//! Router event relay.

pub mod registry;
pub mod service;
