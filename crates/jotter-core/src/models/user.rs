//! Signed-in user record held by the session store

use serde::{Deserialize, Serialize};

use crate::auth::AuthSession;

/// The authenticated user as the app sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Backend user id; never changed after login
    pub id: String,
    /// Access token of the session that produced this record
    pub token: String,
    pub email: String,
    pub email_verified: bool,
}

impl SessionUser {
    /// Build the store record from a backend session.
    ///
    /// Returns `None` when the backend user has no email on file.
    pub fn from_session(session: &AuthSession) -> Option<Self> {
        let email = session.user.email.clone()?;
        Some(Self {
            id: session.user.id.clone(),
            token: session.access_token.clone(),
            email,
            email_verified: session.user.email_verified,
        })
    }
}

/// Partial update for [`SessionUser`]; `None` fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub token: Option<String>,
    pub email: Option<String>,
    pub email_verified: Option<bool>,
}

impl UserPatch {
    #[must_use]
    pub fn email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Self::default()
        }
    }

    /// Shallow-merge this patch over `user`.
    pub fn apply_to(self, user: &mut SessionUser) {
        if let Some(token) = self.token {
            user.token = token;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(email_verified) = self.email_verified {
            user.email_verified = email_verified;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthUser;

    fn session(email: Option<&str>) -> AuthSession {
        AuthSession {
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
            expires_at: 1_700_000_000,
            user: AuthUser {
                id: "user-1".to_string(),
                email: email.map(str::to_string),
                email_verified: true,
            },
        }
    }

    #[test]
    fn from_session_copies_token_and_identity() {
        let user = SessionUser::from_session(&session(Some("a@b.com"))).unwrap();
        assert_eq!(user.id, "user-1");
        assert_eq!(user.token, "access");
        assert_eq!(user.email, "a@b.com");
        assert!(user.email_verified);
    }

    #[test]
    fn from_session_requires_email() {
        assert!(SessionUser::from_session(&session(None)).is_none());
    }
}
