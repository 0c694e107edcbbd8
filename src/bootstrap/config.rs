//! # Configuration Loader
//!
//! Reads the TOML file and maps it onto the [`AppConfig`] DTO.
//!
//! **No validation and no defaults here.** Whatever the file says is a
//! fact; fallbacks are applied later by `ig_app::config`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use ig_core::AppConfig;
use tracing::debug;

const CONFIG_DIR_NAME: &str = "igloo-sync";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Fails when the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// `<config dir>/igloo-sync/config.toml`, when the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// An explicit path must exist. Without one, the default location is used
/// if present and an empty config otherwise.
pub fn resolve_config(explicit: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    if let Some(path) = explicit {
        return load_config(&path);
    }
    match default_config_path() {
        Some(path) if path.exists() => load_config(&path),
        _ => {
            debug!("no config file found, using empty config");
            Ok(AppConfig::empty())
        }
    }
}
