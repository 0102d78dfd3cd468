//! Errors raised by the mobile shell itself.
#![cfg_attr(not(target_os = "android"), allow(dead_code))]

use thiserror::Error;

pub type MobileResult<T> = Result<T, MobileError>;

#[derive(Debug, Error)]
pub enum MobileError {
    #[error("Secure storage error: {0}")]
    SecretStore(String),

    #[error("Invalid bootstrap config: {0}")]
    Bootstrap(String),

    #[error("Supabase is not configured for this build")]
    NotConfigured,

    #[error(transparent)]
    Core(#[from] jotter_core::Error),

    #[error(transparent)]
    Auth(#[from] jotter_core::auth::AuthError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
