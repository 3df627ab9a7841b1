//! Role domain type.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role record owned by the identity runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    pub name: Option<String>,
    pub normalized_name: Option<String>,
    pub concurrency_stamp: Option<String>,
}

impl Role {
    /// New role record with a fresh id, ready to hand to the runtime for creation.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            name: Some(name.into()),
            normalized_name: None,
            concurrency_stamp: Some(Uuid::new_v4().to_string()),
        }
    }
}
