//! Identity records shared across Gatehouse crates.
//!
//! Every type here is owned by the external identity runtime. Gatehouse services carry
//! them through unchanged and never read or write their fields.

pub mod claim;
pub mod login;
pub mod passkey;
pub mod result;
pub mod role;
pub mod user;
