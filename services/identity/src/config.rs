use std::fmt;

use serde::Deserialize;

use gatehouse_core::config::Config;

/// Identity service configuration loaded from environment variables.
#[derive(Clone, Deserialize)]
pub struct IdentityConfig {
    /// Base URL of the identity runtime (e.g. "http://identity:8080"). Env var:
    /// `IDENTITY_BASE_URL`.
    pub identity_base_url: String,
    /// Bearer token for the identity runtime. Env var: `IDENTITY_API_KEY`.
    #[serde(default)]
    pub identity_api_key: Option<String>,
    /// Per-request timeout (default 10). Env var: `IDENTITY_TIMEOUT_SECS`.
    #[serde(default = "default_timeout_secs")]
    pub identity_timeout_secs: u64,
    /// Absolute base URI for the in-process router (default "http://localhost/").
    /// Env var: `NAVIGATION_BASE_URI`.
    #[serde(default = "default_navigation_base_uri")]
    pub navigation_base_uri: String,
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_navigation_base_uri() -> String {
    "http://localhost/".to_owned()
}

impl Config for IdentityConfig {}

impl fmt::Debug for IdentityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityConfig")
            .field("identity_base_url", &self.identity_base_url)
            .field(
                "identity_api_key",
                &self.identity_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("identity_timeout_secs", &self.identity_timeout_secs)
            .field("navigation_base_uri", &self.navigation_base_uri)
            .finish()
    }
}
