//! Supabase backend wiring with the session kept in the platform keyring.
#![cfg_attr(not(target_os = "android"), allow(dead_code))]

use jotter_core::auth::{AuthError, AuthResult, AuthSession, SessionPersistence};
use jotter_core::backend::Backend;
use jotter_core::config::BootstrapConfig;

use crate::error::{MobileError, MobileResult};
use crate::secret_store;

#[derive(Debug, Clone, Copy, Default)]
pub struct KeyringSessionStore;

impl SessionPersistence for KeyringSessionStore {
    fn load_session(&self) -> AuthResult<Option<AuthSession>> {
        match secret_store::read_secret(secret_store::SECRET_SUPABASE_SESSION) {
            Ok(Some(value)) => Ok(Some(serde_json::from_str(&value)?)),
            Ok(None) => Ok(None),
            Err(error) => Err(AuthError::SecureStorage(error.to_string())),
        }
    }

    fn save_session(&self, session: &AuthSession) -> AuthResult<()> {
        let serialized = serde_json::to_string(session)?;
        secret_store::write_secret(secret_store::SECRET_SUPABASE_SESSION, &serialized)
            .map_err(|error| AuthError::SecureStorage(error.to_string()))
    }

    fn clear_session(&self) -> AuthResult<()> {
        secret_store::delete_secret(secret_store::SECRET_SUPABASE_SESSION)
            .map_err(|error| AuthError::SecureStorage(error.to_string()))
    }
}

/// Build the Supabase-backed [`Backend`] for this device.
pub fn connect(config: &BootstrapConfig) -> MobileResult<Backend> {
    let (url, anon_key) = config.supabase()?.ok_or(MobileError::NotConfigured)?;
    Ok(Backend::supabase(&url, anon_key, KeyringSessionStore)?)
}

#[cfg(test)]
mod tests {
    use jotter_core::auth::AuthUser;

    use super::*;

    fn sample_session() -> AuthSession {
        AuthSession {
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
            expires_at: 1_700_000_000,
            user: AuthUser {
                id: "user-1".to_string(),
                email: Some("a@b.com".to_string()),
                email_verified: true,
            },
        }
    }

    #[test]
    fn keyring_store_persists_session() {
        let store = KeyringSessionStore;
        store.clear_session().unwrap();
        assert!(store.load_session().unwrap().is_none());

        store.save_session(&sample_session()).unwrap();
        let loaded = store.load_session().unwrap().unwrap();
        assert_eq!(loaded.user.id, "user-1");
        assert_eq!(loaded.access_token, "access");

        store.clear_session().unwrap();
        assert!(store.load_session().unwrap().is_none());
    }

    #[test]
    fn connect_requires_supabase_config() {
        let error = connect(&BootstrapConfig::default()).err().unwrap();
        assert!(matches!(error, MobileError::NotConfigured));
    }

    #[test]
    fn connect_builds_backend() {
        let config = BootstrapConfig {
            supabase_url: Some("https://demo.supabase.co".to_string()),
            supabase_anon_key: Some("anon".to_string()),
            ..Default::default()
        };
        assert!(connect(&config).is_ok());
    }
}
