//! Provider-redirect handling.
//!
//! A redirect arrival goes through a small lifecycle:
//! `Idle` → `ResolvingUser` → `Committed` or `Failed`. The callback may be
//! observed more than once (browser refresh, duplicate request) while the
//! profile resolution is still in flight, so the handler de-duplicates on the
//! extracted token value: a token triggers resolution exactly once.

/// Lifecycle state of a single provider redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectState {
    /// No callback observed yet.
    Idle,
    /// A token was extracted and the user profile is being resolved.
    ResolvingUser { token: String },
    /// The session was populated with the resolved user.
    Committed,
    /// The redirect could not be turned into a session; the session is
    /// untouched.
    Failed { reason: String },
}

/// Consumes a provider redirect and tracks its lifecycle.
#[derive(Debug)]
pub struct RedirectHandler {
    state: RedirectState,
}

impl Default for RedirectHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl RedirectHandler {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: RedirectState::Idle,
        }
    }

    /// Observe a callback query string.
    ///
    /// Returns `Some(token)` exactly once per distinct token value: the
    /// caller must then resolve the user and report back via
    /// [`Self::commit`] or [`Self::fail`]. Returns `None` when there is
    /// nothing (new) to resolve:
    /// - the query has no `token` parameter (transitions to `Failed`),
    /// - the same token is observed again while resolving,
    /// - the handler is already in a terminal state.
    pub fn observe_query(&mut self, query: &str) -> Option<String> {
        let extracted = extract_token(query);

        match (&self.state, extracted) {
            (RedirectState::Idle, Some(token)) => {
                self.state = RedirectState::ResolvingUser {
                    token: token.clone(),
                };
                Some(token)
            }
            (RedirectState::Idle, None) => {
                self.state = RedirectState::Failed {
                    reason: "no token in callback".into(),
                };
                None
            }
            (RedirectState::ResolvingUser { token }, Some(seen)) if *token == seen => {
                tracing::debug!("duplicate callback for in-flight token; ignoring");
                None
            }
            (RedirectState::ResolvingUser { .. }, _) => None,
            (RedirectState::Committed | RedirectState::Failed { .. }, _) => None,
        }
    }

    /// Mark the in-flight resolution as successfully committed.
    pub fn commit(&mut self) {
        if matches!(self.state, RedirectState::ResolvingUser { .. }) {
            self.state = RedirectState::Committed;
        }
    }

    /// Mark the in-flight resolution as failed.
    pub fn fail(&mut self, reason: impl Into<String>) {
        self.state = RedirectState::Failed {
            reason: reason.into(),
        };
    }

    #[must_use]
    pub const fn state(&self) -> &RedirectState {
        &self.state
    }
}

/// Extract the `token` parameter from a callback query string.
#[must_use]
pub fn extract_token(query: &str) -> Option<String> {
    for pair in query.split('&') {
        if let Some((key, value)) = pair.split_once('=')
            && key == "token"
            && !value.is_empty()
        {
            return urlencoding::decode(value).ok().map(|v| v.into_owned());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn extracts_token_among_other_params() {
        assert_eq!(
            extract_token("state=xyz&token=abc123"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn extracts_url_encoded_token() {
        assert_eq!(
            extract_token("token=abc%2F123"),
            Some("abc/123".to_string())
        );
    }

    #[test]
    fn missing_or_empty_token_extracts_nothing() {
        assert_eq!(extract_token("code=abc"), None);
        assert_eq!(extract_token("token="), None);
        assert_eq!(extract_token(""), None);
    }

    #[test]
    fn query_without_token_fails_without_resolution() {
        let mut handler = RedirectHandler::new();
        assert_eq!(handler.observe_query("error=denied"), None);
        assert!(matches!(handler.state(), RedirectState::Failed { .. }));
    }

    #[test]
    fn first_observation_starts_resolution() {
        let mut handler = RedirectHandler::new();
        assert_eq!(
            handler.observe_query("token=abc123"),
            Some("abc123".to_string())
        );
        assert_eq!(
            handler.state(),
            &RedirectState::ResolvingUser {
                token: "abc123".into()
            }
        );
    }

    #[test]
    fn duplicate_token_is_not_resolved_twice() {
        let mut handler = RedirectHandler::new();
        assert!(handler.observe_query("token=abc123").is_some());
        // Re-render / browser refresh delivers the same token again.
        assert_eq!(handler.observe_query("token=abc123"), None);
        assert_eq!(handler.observe_query("token=abc123"), None);
        assert!(matches!(
            handler.state(),
            RedirectState::ResolvingUser { .. }
        ));
    }

    #[test]
    fn commit_finishes_the_lifecycle() {
        let mut handler = RedirectHandler::new();
        handler.observe_query("token=abc123");
        handler.commit();
        assert_eq!(handler.state(), &RedirectState::Committed);
        // Terminal: further callbacks are inert.
        assert_eq!(handler.observe_query("token=other"), None);
        assert_eq!(handler.state(), &RedirectState::Committed);
    }

    #[test]
    fn fail_records_the_reason() {
        let mut handler = RedirectHandler::new();
        handler.observe_query("token=abc123");
        handler.fail("profile fetch returned 401");
        assert_eq!(
            handler.state(),
            &RedirectState::Failed {
                reason: "profile fetch returned 401".into()
            }
        );
    }

    #[test]
    fn commit_without_resolution_is_a_no_op() {
        let mut handler = RedirectHandler::new();
        handler.commit();
        assert_eq!(handler.state(), &RedirectState::Idle);
    }
}
