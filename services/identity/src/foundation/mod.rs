//! Foundation services: one broker call per operation, wrapped in logging.
//!
//! Each service checks that its required text arguments are present, then hands the
//! broker future to [`delegate`], which logs around it and returns the broker's result
//! as-is. Services never read or modify the identity records they pass along.

use std::future::Future;

use crate::error::{BrokerError, IdentityServiceError};

pub mod role;
pub mod role_claims;
pub mod user;
pub mod user_auth_tokens;
pub mod user_claims;
pub mod user_email;
pub mod user_lockout;
pub mod user_login;
pub mod user_name;
pub mod user_passkeys;
pub mod user_password;
pub mod user_phone;
pub mod user_recovery_codes;
pub mod user_roles;
pub mod user_security;
pub mod user_tokens;

/// Argument that can be absent. An empty string or byte slice counts as missing.
pub(crate) trait Required {
    fn is_missing(&self) -> bool;
}

impl Required for str {
    fn is_missing(&self) -> bool {
        self.is_empty()
    }
}

impl Required for [u8] {
    fn is_missing(&self) -> bool {
        self.is_empty()
    }
}

/// Fail with [`IdentityServiceError::Validation`] when `value` is missing.
pub(crate) fn require<V>(argument: &'static str, value: &V) -> Result<(), IdentityServiceError>
where
    V: Required + ?Sized,
{
    if value.is_missing() {
        tracing::warn!(argument, "missing required argument");
        return Err(IdentityServiceError::Validation { argument });
    }
    Ok(())
}

/// Await a single broker call, logging entry and outcome.
pub(crate) async fn delegate<T, F>(
    service: &'static str,
    operation: &'static str,
    call: F,
) -> Result<T, IdentityServiceError>
where
    F: Future<Output = Result<T, BrokerError>>,
{
    tracing::info!(service, operation, "calling broker");
    match call.await {
        Ok(value) => {
            tracing::info!(service, operation, "broker call completed");
            Ok(value)
        }
        Err(e) => {
            tracing::warn!(service, operation, kind = e.kind(), error = %e, "broker call failed");
            Err(e.into())
        }
    }
}

/// Blocking counterpart of [`delegate`] for synchronous brokers.
pub(crate) fn delegate_sync<T, F>(
    service: &'static str,
    operation: &'static str,
    call: F,
) -> Result<T, IdentityServiceError>
where
    F: FnOnce() -> Result<T, BrokerError>,
{
    tracing::info!(service, operation, "calling broker");
    match call() {
        Ok(value) => {
            tracing::info!(service, operation, "broker call completed");
            Ok(value)
        }
        Err(e) => {
            tracing::warn!(service, operation, kind = e.kind(), error = %e, "broker call failed");
            Err(e.into())
        }
    }
}
