//! Mobile bootstrap configuration loaded from generated JSON.
#![cfg_attr(not(target_os = "android"), allow(dead_code))]

use jotter_core::config::{parse_bootstrap_config, BootstrapConfig};

use crate::config::load_runtime_config;
use crate::error::{MobileError, MobileResult};

const BUILD_BOOTSTRAP_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/mobile-bootstrap.json"));

/// Values baked in at build time.
pub fn load_bootstrap_config() -> MobileResult<BootstrapConfig> {
    parse_bootstrap_config(BUILD_BOOTSTRAP_JSON).map_err(MobileError::Bootstrap)
}

/// Runtime overrides first, then the process environment, then build values.
pub fn resolve_bootstrap_config() -> MobileResult<BootstrapConfig> {
    let build = load_bootstrap_config()?;
    let resolved = load_runtime_config()
        .into_bootstrap()
        .or(BootstrapConfig::from_env())
        .or(build);
    tracing::debug!(
        supabase_configured = resolved.supabase_url.is_some(),
        "Resolved bootstrap config"
    );
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_config_parses() {
        assert!(load_bootstrap_config().is_ok());
    }

    #[test]
    fn invalid_payload_is_reported() {
        let error = parse_bootstrap_config("{ not json").unwrap_err();
        assert!(MobileError::Bootstrap(error)
            .to_string()
            .starts_with("Invalid bootstrap config"));
    }
}
