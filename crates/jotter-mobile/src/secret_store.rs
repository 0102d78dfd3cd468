//! Platform keyring access for the persisted auth session.
#![cfg_attr(not(target_os = "android"), allow(dead_code))]

use std::sync::{Arc, OnceLock};

use keyring_core::{CredentialStore, Entry, Error as KeyringError};

use crate::error::{MobileError, MobileResult};

const SECRET_SERVICE_NAME: &str = "jotter-mobile";
pub const SECRET_SUPABASE_SESSION: &str = "supabase_session";

static STORE_INIT: OnceLock<Result<(), String>> = OnceLock::new();

pub fn write_secret(name: &str, value: &str) -> MobileResult<()> {
    let value = value.trim();
    if value.is_empty() {
        return Err(MobileError::SecretStore(
            "secret value must not be empty".to_string(),
        ));
    }

    entry(name)?.set_password(value).map_err(map_keyring_error)
}

pub fn read_secret(name: &str) -> MobileResult<Option<String>> {
    match entry(name)?.get_password() {
        Ok(value) => Ok(Some(value.trim().to_string()).filter(|value| !value.is_empty())),
        Err(KeyringError::NoEntry) => Ok(None),
        Err(error) => Err(map_keyring_error(error)),
    }
}

pub fn delete_secret(name: &str) -> MobileResult<()> {
    match entry(name)?.delete_credential() {
        Ok(()) | Err(KeyringError::NoEntry) => Ok(()),
        Err(error) => Err(map_keyring_error(error)),
    }
}

fn entry(name: &str) -> MobileResult<Entry> {
    STORE_INIT
        .get_or_init(initialize_store)
        .clone()
        .map_err(MobileError::SecretStore)?;
    Entry::new(SECRET_SERVICE_NAME, name).map_err(map_keyring_error)
}

#[cfg(target_os = "android")]
fn initialize_store() -> Result<(), String> {
    let store: Arc<CredentialStore> = android_native_keyring_store::Store::new()
        .map_err(|error| format!("failed to initialize Android secure store: {error}"))?;
    keyring_core::set_default_store(store);
    Ok(())
}

#[cfg(not(target_os = "android"))]
fn initialize_store() -> Result<(), String> {
    let store: Arc<CredentialStore> = keyring_core::mock::Store::new()
        .map_err(|error| format!("failed to initialize mock secure store: {error}"))?;
    keyring_core::set_default_store(store);
    Ok(())
}

fn map_keyring_error(error: KeyringError) -> MobileError {
    MobileError::SecretStore(match error {
        KeyringError::NoDefaultStore => "secure store is not initialized".to_string(),
        other => other.to_string(),
    })
}
