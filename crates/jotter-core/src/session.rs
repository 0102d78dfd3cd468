//! Process-wide store of the authenticated user.
//!
//! Shared as `Arc<SessionStore>`. Mutations are synchronous and observers
//! follow along through a `watch` channel.

use tokio::sync::watch;

use crate::models::{SessionUser, UserPatch};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<SessionUser>,
    pub is_authenticated: bool,
}

#[derive(Debug)]
pub struct SessionStore {
    state: watch::Sender<SessionState>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        let (state, _) = watch::channel(SessionState::default());
        Self { state }
    }

    pub fn login_user(&self, user: SessionUser) {
        tracing::debug!(user_id = %user.id, "Session store: login");
        self.state.send_replace(SessionState {
            user: Some(user),
            is_authenticated: true,
        });
    }

    pub fn logout_user(&self) {
        self.state.send_if_modified(|state| {
            if *state == SessionState::default() {
                return false;
            }
            *state = SessionState::default();
            true
        });
    }

    /// Merge `patch` into the current user; does nothing while logged out.
    pub fn update_user(&self, patch: UserPatch) {
        self.state.send_if_modified(|state| match state.user.as_mut() {
            Some(user) => {
                patch.apply_to(user);
                true
            }
            None => false,
        });
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.state.borrow().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn user() -> SessionUser {
        SessionUser {
            id: "user-1".to_string(),
            token: "token".to_string(),
            email: "a@b.com".to_string(),
            email_verified: false,
        }
    }

    #[test]
    fn starts_logged_out() {
        let store = SessionStore::new();
        assert_eq!(store.state(), SessionState::default());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn login_sets_user_and_flag() {
        let store = SessionStore::new();
        store.login_user(user());
        assert_eq!(
            store.state(),
            SessionState {
                user: Some(user()),
                is_authenticated: true,
            }
        );
    }

    #[test]
    fn logout_is_idempotent() {
        let store = SessionStore::new();
        store.login_user(user());
        store.logout_user();
        let once = store.state();
        store.logout_user();
        assert_eq!(store.state(), once);
        assert_eq!(once.user, None);
        assert!(!once.is_authenticated);
    }

    #[test]
    fn update_user_merges_only_given_fields() {
        let store = SessionStore::new();
        store.login_user(user());
        store.update_user(UserPatch::email("x"));

        let expected = SessionUser {
            email: "x".to_string(),
            ..user()
        };
        assert_eq!(store.user(), Some(expected));
    }

    #[test]
    fn update_user_without_user_is_noop() {
        let store = SessionStore::new();
        store.update_user(UserPatch::email("x"));
        assert_eq!(store.state(), SessionState::default());
    }

    #[tokio::test]
    async fn subscribers_see_logout_but_not_repeats() {
        let store = SessionStore::new();
        store.login_user(user());
        let mut receiver = store.subscribe();
        receiver.mark_unchanged();

        store.logout_user();
        assert!(receiver.has_changed().unwrap());
        receiver.mark_unchanged();

        store.logout_user();
        assert!(!receiver.has_changed().unwrap());
    }
}
