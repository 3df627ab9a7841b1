//! Outcome of an identity runtime write.

use serde::{Deserialize, Serialize};

/// Single failure reported inside an [`IdentityResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityError {
    pub code: String,
    pub description: String,
}

/// Result value returned by identity writes.
///
/// A failed result is a normal value, not an error: the runtime uses it for rule
/// violations such as a duplicate user name or a weak password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityResult {
    pub succeeded: bool,
    #[serde(default)]
    pub errors: Vec<IdentityError>,
}

impl IdentityResult {
    pub fn success() -> Self {
        Self {
            succeeded: true,
            errors: vec![],
        }
    }

    pub fn failed(errors: Vec<IdentityError>) -> Self {
        Self {
            succeeded: false,
            errors,
        }
    }
}
