//! Browser-login configuration.

use serde::{Deserialize, Serialize};

const fn default_login_timeout_secs() -> u64 {
    120
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// How long `auth login` waits for the browser callback.
    #[serde(default = "default_login_timeout_secs")]
    pub login_timeout_secs: u64,

    /// Fixed local callback port. `0` (the default) picks a free port; a
    /// fixed value is needed when the provider only allows registered
    /// redirect URIs.
    #[serde(default)]
    pub callback_port: u16,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_timeout_secs: default_login_timeout_secs(),
            callback_port: 0,
        }
    }
}
