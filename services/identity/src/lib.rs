pub mod config;
pub mod domain;
pub mod error;
pub mod foundation;
pub mod infra;
pub mod navigation;
pub mod state;
