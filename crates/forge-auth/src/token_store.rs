//! Durable bearer-token storage.
//!
//! Three tiers, checked in priority order:
//! 1. OS keychain (`keyring`)
//! 2. `FORGE_AUTH__TOKEN` environment variable (read-only; set by the user
//!    or CI, never written by us)
//! 3. Plain file, default `~/.forge/credentials`, mode 0600
//!
//! Writes prefer the keychain and fall back to the file when no keychain is
//! reachable (headless machines, containers). The token is opaque: stored
//! and returned verbatim, never parsed.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AuthError;

const DEFAULT_KEYRING_SERVICE: &str = "thesis-forge-cli";
const KEYRING_USER: &str = "bearer-token";
const TOKEN_ENV_VAR: &str = "FORGE_AUTH__TOKEN";

/// Handle on the three storage tiers.
///
/// The keyring service name and the credentials file path are both
/// injectable, with env overrides (`FORGE_KEYRING_SERVICE`,
/// `FORGE_CREDENTIALS_PATH`) so tests and scripts can redirect storage away
/// from the real credentials.
#[derive(Debug, Clone)]
pub struct TokenStore {
    service: String,
    credentials_path: PathBuf,
}

impl TokenStore {
    #[must_use]
    pub fn new(service: impl Into<String>, credentials_path: impl Into<PathBuf>) -> Self {
        Self {
            service: service.into(),
            credentials_path: credentials_path.into(),
        }
    }

    /// Build the store from the environment, falling back to the defaults
    /// (`thesis-forge-cli` / `~/.forge/credentials`).
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` when no credentials path can be
    /// resolved (no `FORGE_CREDENTIALS_PATH` and no home directory).
    pub fn from_env() -> Result<Self, AuthError> {
        let service = std::env::var("FORGE_KEYRING_SERVICE")
            .unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string());

        let credentials_path = match std::env::var("FORGE_CREDENTIALS_PATH") {
            Ok(path) if !path.is_empty() => PathBuf::from(path),
            _ => dirs::home_dir()
                .map(|home| home.join(".forge").join("credentials"))
                .ok_or_else(|| {
                    AuthError::TokenStoreError(
                        "home directory not found - cannot locate credentials".into(),
                    )
                })?,
        };

        Ok(Self {
            service,
            credentials_path,
        })
    }

    /// Persist a token. Keychain first, credentials file if the keychain is
    /// unavailable.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` if both tiers fail.
    pub fn store(&self, token: &str) -> Result<(), AuthError> {
        match self.entry() {
            Ok(entry) => match entry.set_password(token) {
                Ok(()) => Ok(()),
                Err(error) => {
                    tracing::warn!(%error, "keyring store failed; falling back to file");
                    self.store_file(token)
                }
            },
            Err(error) => {
                tracing::warn!(%error, "keyring unavailable; falling back to file");
                self.store_file(token)
            }
        }
    }

    /// Load the stored token, trying each tier in priority order.
    #[must_use]
    pub fn load(&self) -> Option<String> {
        if let Ok(entry) = self.entry()
            && let Ok(token) = entry.get_password()
            && !token.is_empty()
        {
            return Some(token);
        }

        if let Ok(token) = std::env::var(TOKEN_ENV_VAR)
            && !token.is_empty()
        {
            return Some(token);
        }

        self.load_file()
    }

    /// Purge the token from every writable tier. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` if the credentials file exists
    /// but cannot be removed.
    pub fn delete(&self) -> Result<(), AuthError> {
        // Keyring entry may not exist (ignore errors)
        if let Ok(entry) = self.entry() {
            let _ = entry.delete_credential();
        }

        if self.credentials_path.exists() {
            fs::remove_file(&self.credentials_path).map_err(|e| {
                AuthError::TokenStoreError(format!(
                    "failed to delete {}: {e}",
                    self.credentials_path.display()
                ))
            })?;
        }

        Ok(())
    }

    /// Name the tier the current token would be loaded from, for `auth
    /// status` display.
    #[must_use]
    pub fn detect_source(&self) -> Option<String> {
        if let Ok(entry) = self.entry()
            && entry.get_password().is_ok_and(|t| !t.is_empty())
        {
            return Some("keyring".into());
        }
        if std::env::var(TOKEN_ENV_VAR).is_ok_and(|t| !t.is_empty()) {
            return Some("env".into());
        }
        if self.load_file().is_some() {
            return Some("file".into());
        }
        None
    }

    fn entry(&self) -> Result<keyring::Entry, keyring::Error> {
        keyring::Entry::new(&self.service, KEYRING_USER)
    }

    fn store_file(&self, token: &str) -> Result<(), AuthError> {
        if let Some(parent) = self.credentials_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AuthError::TokenStoreError(format!("mkdir {}: {e}", parent.display()))
            })?;
            restrict_mode(parent, 0o700);
        }
        fs::write(&self.credentials_path, token).map_err(|e| {
            AuthError::TokenStoreError(format!(
                "write {}: {e}",
                self.credentials_path.display()
            ))
        })?;
        restrict_mode(&self.credentials_path, 0o600);
        Ok(())
    }

    fn load_file(&self) -> Option<String> {
        fs::read_to_string(&self.credentials_path)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }
}

#[cfg(unix)]
fn restrict_mode(path: &Path, mode: u32) {
    use std::os::unix::fs::PermissionsExt;
    if let Err(e) = fs::set_permissions(path, fs::Permissions::from_mode(mode)) {
        tracing::warn!("failed to chmod {mode:o} {}: {e}", path.display());
    }
}

#[cfg(not(unix))]
fn restrict_mode(_path: &Path, _mode: u32) {}
