//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - Define configuration data structures
//! - Provide TOML → DTO mapping
//!
//! ## Prohibited
//!
//! - No business logic or policies
//! - No validation logic
//! - No default value calculation (fallbacks live in `ig-app::config`)
//!
//! > **This module contains data only, no policy, no validation.**

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Wallet address of the player (may be empty - this is a fact, not an error)
    pub wallet: String,

    /// Display name of the player (may be empty)
    pub username: String,

    /// Delay before the first eligibility re-check, 0 when unset
    pub initial_delay_secs: u64,

    /// Interval between eligibility re-checks, 0 when unset
    pub interval_secs: u64,

    /// tracing filter directives, empty when unset
    pub log_filter: String,

    /// Directory for rolling log files (path info only, no existence check)
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation
    /// or default value logic. Empty strings and zeros are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let str_at = |section: &str, key: &str| {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };
        let secs_at = |section: &str, key: &str| {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_integer())
                .filter(|v| *v >= 0)
                .unwrap_or(0) as u64
        };

        Ok(Self {
            wallet: str_at("identity", "wallet"),
            username: str_at("identity", "username"),
            initial_delay_secs: secs_at("poller", "initial_delay_secs"),
            interval_secs: secs_at("poller", "interval_secs"),
            log_filter: str_at("logging", "filter"),
            log_dir: PathBuf::from(str_at("logging", "dir")),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            wallet: String::new(),
            username: String::new(),
            initial_delay_secs: 0,
            interval_secs: 0,
            log_filter: String::new(),
            log_dir: PathBuf::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_every_section() {
        let value: toml::Value = toml::from_str(
            r#"
            [identity]
            wallet = "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU"
            username = "Ann"

            [poller]
            initial_delay_secs = 3
            interval_secs = 20

            [logging]
            filter = "ig_app=debug"
            dir = "/tmp/igloo-logs"
            "#,
        )
        .unwrap();

        let config = AppConfig::from_toml(&value).unwrap();

        assert_eq!(config.wallet, "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU");
        assert_eq!(config.username, "Ann");
        assert_eq!(config.initial_delay_secs, 3);
        assert_eq!(config.interval_secs, 20);
        assert_eq!(config.log_filter, "ig_app=debug");
        assert_eq!(config.log_dir, PathBuf::from("/tmp/igloo-logs"));
    }

    #[test]
    fn missing_and_negative_values_map_to_empty_facts() {
        let value: toml::Value = toml::from_str(
            r#"
            [poller]
            interval_secs = -4
            "#,
        )
        .unwrap();

        assert_eq!(AppConfig::from_toml(&value).unwrap(), AppConfig::empty());
    }
}
