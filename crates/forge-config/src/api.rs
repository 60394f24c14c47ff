//! Backend endpoint configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the thesis resource (e.g. `https://api.example.com/thesis`).
    #[serde(default)]
    pub thesis_url: String,

    /// URL returning the profile of the bearer token's owner.
    #[serde(default)]
    pub user_url: String,

    /// URL returning the identity provider's authorization URL.
    #[serde(default)]
    pub login_url: String,
}

impl ApiConfig {
    /// Check whether every endpoint needed for normal operation is set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.thesis_url.is_empty() && !self.user_url.is_empty()
    }

    /// `thesis_url` without a trailing slash, for safe path joining.
    #[must_use]
    pub fn thesis_base(&self) -> &str {
        self.thesis_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        assert!(!ApiConfig::default().is_configured());
    }

    #[test]
    fn configured_when_thesis_and_user_urls_set() {
        let config = ApiConfig {
            thesis_url: "https://api.example.com/thesis".into(),
            user_url: "https://api.example.com/user".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
    }

    #[test]
    fn thesis_base_strips_trailing_slash() {
        let config = ApiConfig {
            thesis_url: "https://api.example.com/thesis/".into(),
            ..Default::default()
        };
        assert_eq!(config.thesis_base(), "https://api.example.com/thesis");
    }
}
