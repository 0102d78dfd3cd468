//! Error types for jotter-core

use thiserror::Error;

use crate::auth::AuthError;

/// Result type alias using jotter-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Backend message GoTrue returns when the token's user no longer exists.
const USER_NOT_FOUND_MESSAGE: &str = "user not found";

/// Errors that can occur in jotter-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Backend responded with an error payload
    #[error("{0}")]
    Api(String),

    /// Transport-level failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Auth client error
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// No active session, or the backend rejected the access token
    #[error("session expired, login again")]
    SessionExpired,

    /// Note not found
    #[error("Note not found: {0}")]
    NotFound(String),
}

impl Error {
    /// Whether this error should force the user back to the login screen.
    pub fn is_session_expired(&self) -> bool {
        match self {
            Self::SessionExpired | Self::Auth(AuthError::NotSignedIn) => true,
            Self::Api(message) | Self::Auth(AuthError::Api(message)) => message
                .trim()
                .to_lowercase()
                .starts_with(USER_NOT_FOUND_MESSAGE),
            _ => false,
        }
    }
}
