//! Passkey credential type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// WebAuthn public-key credential issued and verified by the identity runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasskeyCredential {
    pub credential_id: Vec<u8>,
    pub public_key: Vec<u8>,
    /// Signature counter reported by the authenticator.
    pub sign_count: u32,
    pub transports: Vec<String>,
    pub is_user_verified: bool,
    pub is_backup_eligible: bool,
    pub is_backed_up: bool,
    pub attestation_object: Vec<u8>,
    pub client_data_json: Vec<u8>,
    /// User-chosen label, if any.
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}
