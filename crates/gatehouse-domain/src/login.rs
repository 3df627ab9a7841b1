use serde::{Deserialize, Serialize};

/// External login (e.g. an OAuth provider account) linked to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLoginInfo {
    pub login_provider: String,
    pub provider_key: String,
    pub provider_display_name: Option<String>,
}

impl UserLoginInfo {
    pub fn new(
        login_provider: impl Into<String>,
        provider_key: impl Into<String>,
        provider_display_name: Option<String>,
    ) -> Self {
        Self {
            login_provider: login_provider.into(),
            provider_key: provider_key.into(),
            provider_display_name,
        }
    }
}
