//! Runtime configuration handling for mobile.
#![cfg_attr(not(target_os = "android"), allow(dead_code))]

use std::path::{Path, PathBuf};

use jotter_core::config::BootstrapConfig;
use jotter_core::util::normalize_text_option;
use serde::{Deserialize, Serialize};

use crate::error::MobileResult;

const RUNTIME_CONFIG_FILE: &str = "mobile-config.json";

/// Project override saved on the device, e.g. to point a debug build at a
/// different Supabase project.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MobileRuntimeConfig {
    #[serde(default)]
    pub supabase_url: Option<String>,
    #[serde(default)]
    pub supabase_anon_key: Option<String>,
}

impl MobileRuntimeConfig {
    pub fn from_raw(url: Option<String>, anon_key: Option<String>) -> Self {
        Self {
            supabase_url: normalize_text_option(url),
            supabase_anon_key: normalize_text_option(anon_key),
        }
    }

    pub fn into_bootstrap(self) -> BootstrapConfig {
        BootstrapConfig::from_raw(self.supabase_url, self.supabase_anon_key, None, None)
    }
}

pub fn default_runtime_config_path() -> PathBuf {
    dirs::data_local_dir()
        .or_else(dirs::data_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("jotter")
        .join(RUNTIME_CONFIG_FILE)
}

pub fn load_runtime_config() -> MobileRuntimeConfig {
    load_runtime_config_from_path(&default_runtime_config_path())
}

pub fn load_runtime_config_from_path(path: &Path) -> MobileRuntimeConfig {
    if !path.exists() {
        return MobileRuntimeConfig::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<MobileRuntimeConfig>(&content) {
            Ok(config) => config,
            Err(error) => {
                tracing::warn!(
                    "Failed to parse mobile runtime config at {}: {}",
                    path.display(),
                    error
                );
                MobileRuntimeConfig::default()
            }
        },
        Err(error) => {
            tracing::warn!(
                "Failed to read mobile runtime config at {}: {}",
                path.display(),
                error
            );
            MobileRuntimeConfig::default()
        }
    }
}

pub fn save_runtime_config(config: &MobileRuntimeConfig) -> MobileResult<()> {
    save_runtime_config_to_path(config, &default_runtime_config_path())
}

pub fn save_runtime_config_to_path(config: &MobileRuntimeConfig, path: &Path) -> MobileResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let normalized =
        MobileRuntimeConfig::from_raw(config.supabase_url.clone(), config.supabase_anon_key.clone());
    let content = serde_json::to_string_pretty(&normalized)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("jotter-mobile-{name}-{}", std::process::id()))
            .join(RUNTIME_CONFIG_FILE)
    }

    #[test]
    fn save_and_load_runtime_config_roundtrip() {
        let config_path = temp_config_path("roundtrip");
        let config = MobileRuntimeConfig::from_raw(
            Some(" https://runtime.supabase.co ".to_string()),
            Some(" anon ".to_string()),
        );
        save_runtime_config_to_path(&config, &config_path).unwrap();

        let loaded = load_runtime_config_from_path(&config_path);
        assert_eq!(
            loaded.supabase_url.as_deref(),
            Some("https://runtime.supabase.co")
        );
        assert_eq!(loaded.supabase_anon_key.as_deref(), Some("anon"));

        if let Some(dir) = config_path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn missing_or_corrupt_file_yields_default() {
        let config_path = temp_config_path("corrupt");
        assert_eq!(
            load_runtime_config_from_path(&config_path),
            MobileRuntimeConfig::default()
        );

        std::fs::create_dir_all(config_path.parent().unwrap()).unwrap();
        std::fs::write(&config_path, "{ nope").unwrap();
        assert_eq!(
            load_runtime_config_from_path(&config_path),
            MobileRuntimeConfig::default()
        );

        let _ = std::fs::remove_dir_all(config_path.parent().unwrap());
    }

    #[test]
    fn runtime_override_wins_over_build_values() {
        let build = BootstrapConfig {
            supabase_url: Some("https://build.supabase.co".to_string()),
            supabase_anon_key: Some("build-anon".to_string()),
            ..Default::default()
        };
        let runtime =
            MobileRuntimeConfig::from_raw(Some("https://runtime.supabase.co".to_string()), None);

        let merged = runtime.into_bootstrap().or(build);
        assert_eq!(
            merged.supabase().unwrap(),
            Some((
                "https://runtime.supabase.co".to_string(),
                "build-anon".to_string()
            ))
        );
    }
}
