//! # forge-auth
//!
//! Authentication state for the Thesis Forge CLI.
//!
//! Provides the in-memory [`Session`] store, durable bearer-token storage
//! (`keyring` with env/file fallback), the provider-redirect state machine,
//! and the browser login flow (`tiny_http` + `open`).
//!
//! The bearer token is treated as an opaque credential: it is stored and sent
//! verbatim, never decoded or validated locally.

pub mod browser_flow;
pub mod error;
pub mod redirect;
pub mod session;
pub mod token_store;

pub use error::AuthError;
pub use session::Session;
pub use token_store::TokenStore;

use forge_core::User;

/// Resolve the stored bearer token, if any.
///
/// Priority: keyring → env var → file.
#[must_use]
pub fn resolve_token() -> Option<String> {
    TokenStore::from_env().ok()?.load()
}

/// Commit a successful login: persist the token durably, then populate the
/// in-memory session. The session is only touched if persistence succeeds.
///
/// # Errors
///
/// Returns [`AuthError::TokenStoreError`] if the token cannot be stored.
pub fn commit_login(session: &mut Session, user: User, token: String) -> Result<(), AuthError> {
    TokenStore::from_env()?.store(&token)?;
    session.login(user, token);
    Ok(())
}

/// Clear the in-memory session and purge stored credentials.
///
/// # Errors
///
/// Returns [`AuthError::TokenStoreError`] if the credentials file cannot be
/// removed. The in-memory session is cleared regardless.
pub fn logout(session: &mut Session) -> Result<(), AuthError> {
    session.logout();
    TokenStore::from_env()?.delete()
}
