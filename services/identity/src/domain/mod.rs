pub mod broker;
pub mod types;
