use shared::models::CurrentUser;
use yewdux::Store;

/// Client-side session state: the identity of the current visitor.
///
/// Nothing here survives a reload; protected pages re-derive it from the
/// session-check endpoint on mount. The record reflects the most recent
/// successful authentication response and nothing stronger.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct SessionState {
    /// Present between a successful session check or login and the next
    /// logout or failed session check.
    pub user: Option<CurrentUser>,
}

impl SessionState {
    /// Replace the current identity. Both fields travel together; there is
    /// no partial write.
    pub fn set_user(&mut self, username: impl Into<String>, email: impl Into<String>) {
        self.user = Some(CurrentUser {
            username: username.into(),
            email: email.into(),
        });
    }

    /// Drop the current identity.
    pub fn clear_user(&mut self) {
        self.user = None;
    }

    /// Username of the authenticated visitor, if any.
    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.username.as_str())
    }

    /// Email of the authenticated visitor, if any.
    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.email.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unauthenticated() {
        let state = SessionState::default();
        assert_eq!(state.user, None);
        assert_eq!(state.username(), None);
        assert_eq!(state.email(), None);
    }

    #[test]
    fn test_set_user_exposes_both_fields() {
        let mut state = SessionState::default();
        state.set_user("alice", "a@b.com");

        assert_eq!(state.username(), Some("alice"));
        assert_eq!(state.email(), Some("a@b.com"));
    }

    #[test]
    fn test_set_user_holds_until_next_write() {
        let mut state = SessionState::default();
        state.set_user("alice", "a@b.com");

        // Reads do not disturb the record.
        let _ = state.username();
        let _ = state.email();
        assert_eq!(state.username(), Some("alice"));
        assert_eq!(state.email(), Some("a@b.com"));

        state.set_user("bob", "b@c.org");
        assert_eq!(state.username(), Some("bob"));
        assert_eq!(state.email(), Some("b@c.org"));
    }

    #[test]
    fn test_clear_user_resets_both_fields() {
        let mut state = SessionState::default();
        state.set_user("alice", "a@b.com");
        state.clear_user();

        assert_eq!(state.username(), None);
        assert_eq!(state.email(), None);
        assert_eq!(state, SessionState::default());
    }

    #[test]
    fn test_lifecycle_transitions() {
        // unauthenticated -> authenticated -> unauthenticated
        let mut state = SessionState::default();
        assert!(state.user.is_none());

        state.set_user("alice", "a@b.com");
        assert!(state.user.is_some());

        state.clear_user();
        assert!(state.user.is_none());
    }
}
