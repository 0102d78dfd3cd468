//! Bootstrap configuration for client apps.
//!
//! Provides the `BootstrapConfig` struct the mobile shell uses to discover the
//! Supabase project and the deep-link scheme it is registered under.

use serde::{Deserialize, Serialize};

use crate::auth::{resolve_optional_supabase_config, AuthResult};
use crate::navigation::{DeepLinkConfig, DEFAULT_LINK_PREFIX};
use crate::util::{is_http_url, normalize_text_option};

/// Where confirmation emails send the user back to.
pub const DEFAULT_EMAIL_REDIRECT_URL: &str = "myapp://login";

pub const ENV_SUPABASE_URL: &str = "SUPABASE_URL";
pub const ENV_SUPABASE_ANON_KEY: &str = "SUPABASE_ANON_KEY";
pub const ENV_EMAIL_REDIRECT_URL: &str = "JOTTER_EMAIL_REDIRECT_URL";
pub const ENV_DEEP_LINK_PREFIX: &str = "JOTTER_DEEP_LINK_PREFIX";

/// Build-provisioned client configuration.
///
/// These values are safe-to-ship public endpoints/keys. Secret credentials
/// must never be stored here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BootstrapConfig {
    #[serde(default)]
    pub supabase_url: Option<String>,
    #[serde(default)]
    pub supabase_anon_key: Option<String>,
    #[serde(default)]
    pub email_redirect_url: Option<String>,
    #[serde(default)]
    pub deep_link_prefix: Option<String>,
}

impl BootstrapConfig {
    pub fn from_env() -> Self {
        Self::from_raw(
            std::env::var(ENV_SUPABASE_URL).ok(),
            std::env::var(ENV_SUPABASE_ANON_KEY).ok(),
            std::env::var(ENV_EMAIL_REDIRECT_URL).ok(),
            std::env::var(ENV_DEEP_LINK_PREFIX).ok(),
        )
    }

    pub fn from_raw(
        supabase_url: Option<String>,
        supabase_anon_key: Option<String>,
        email_redirect_url: Option<String>,
        deep_link_prefix: Option<String>,
    ) -> Self {
        Self {
            supabase_url: normalize_text_option(supabase_url),
            supabase_anon_key: normalize_text_option(supabase_anon_key),
            email_redirect_url: normalize_text_option(email_redirect_url),
            deep_link_prefix: normalize_text_option(deep_link_prefix),
        }
    }

    /// Fill unset fields from `fallback`.
    #[must_use]
    pub fn or(self, fallback: Self) -> Self {
        Self {
            supabase_url: self.supabase_url.or(fallback.supabase_url),
            supabase_anon_key: self.supabase_anon_key.or(fallback.supabase_anon_key),
            email_redirect_url: self.email_redirect_url.or(fallback.email_redirect_url),
            deep_link_prefix: self.deep_link_prefix.or(fallback.deep_link_prefix),
        }
    }

    /// Supabase URL and anon key, or `None` when neither is set.
    pub fn supabase(&self) -> AuthResult<Option<(String, String)>> {
        resolve_optional_supabase_config(self.supabase_url.clone(), self.supabase_anon_key.clone())
    }

    pub fn email_redirect(&self) -> String {
        normalize_text_option(self.email_redirect_url.clone())
            .unwrap_or_else(|| DEFAULT_EMAIL_REDIRECT_URL.to_string())
    }

    pub fn deep_links(&self) -> DeepLinkConfig {
        let prefix = normalize_text_option(self.deep_link_prefix.clone())
            .unwrap_or_else(|| DEFAULT_LINK_PREFIX.to_string());
        DeepLinkConfig {
            prefixes: vec![prefix],
        }
    }
}

/// Parse and validate a bootstrap config JSON payload.
pub fn parse_bootstrap_config(payload: &str) -> Result<BootstrapConfig, String> {
    let raw: BootstrapConfig = serde_json::from_str(payload)
        .map_err(|error| format!("invalid bootstrap config JSON: {error}"))?;
    let config = BootstrapConfig::from_raw(
        raw.supabase_url,
        raw.supabase_anon_key,
        raw.email_redirect_url,
        raw.deep_link_prefix,
    );

    if let Some(url) = config.supabase_url.as_deref() {
        if !is_http_url(url) {
            return Err("bootstrap field 'supabase_url' must include http:// or https://".to_string());
        }
    }
    if let Some(prefix) = config.deep_link_prefix.as_deref() {
        if !prefix.ends_with("://") {
            return Err("bootstrap field 'deep_link_prefix' must end with ://".to_string());
        }
    }
    Ok(config)
}
