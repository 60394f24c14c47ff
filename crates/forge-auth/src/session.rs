use forge_core::User;

/// The current authenticated identity and credential.
///
/// Purely in-memory; durable token storage lives in [`crate::token_store`]
/// and the two are tied together by [`crate::commit_login`] /
/// [`crate::logout`]. Created empty at process start and rebuilt by
/// re-resolving the profile from the stored token (the user object itself is
/// never persisted).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<User>,
    token: Option<String>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a session from an already-stored token and a freshly resolved
    /// profile (process-start path; does not persist anything).
    #[must_use]
    pub fn resumed(user: User, token: String) -> Self {
        Self {
            user: Some(user),
            token: Some(token),
        }
    }

    /// Set the current user and token.
    pub fn login(&mut self, user: User, token: String) {
        self.user = Some(user);
        self.token = Some(token);
    }

    /// Clear the current user and token.
    pub fn logout(&mut self) {
        self.user = None;
        self.token = None;
    }

    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn current_token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn demo_user() -> User {
        User {
            id: "u1".into(),
            first_name: "Demo".into(),
            last_name: "User".into(),
            email: "demo@example.com".into(),
            image: None,
        }
    }

    #[test]
    fn starts_empty() {
        let session = Session::new();
        assert!(session.current_user().is_none());
        assert!(session.current_token().is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn login_populates_user_and_token() {
        let mut session = Session::new();
        session.login(demo_user(), "abc123".into());
        assert_eq!(session.current_user().map(|u| u.id.as_str()), Some("u1"));
        assert_eq!(session.current_token(), Some("abc123"));
        assert!(session.is_authenticated());
    }

    #[test]
    fn logout_clears_both_fields() {
        let mut session = Session::resumed(demo_user(), "abc123".into());
        session.logout();
        assert_eq!(session, Session::new());
    }
}
