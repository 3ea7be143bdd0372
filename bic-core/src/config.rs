//! Configuration for best-in-class selection.
//!
//! Maps directly to the `[general]` and `[marker]` tables of the plugin's
//! TOML file. Every field has a default, so an empty file is valid.

use serde::{Deserialize, Serialize};

use crate::marker::StaleFlagPolicy;

/// Top-level configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BicConfig {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Marker behavior.
    #[serde(default)]
    pub marker: MarkerConfig,
}

impl BicConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `BicError::Config` if the TOML is invalid.
    pub fn from_toml(toml_str: &str) -> crate::error::Result<Self> {
        toml::from_str(toml_str).map_err(|e| crate::BicError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// General system settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Master switch. When off, triggers do nothing.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Log filter directive: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_level: "info".to_string(),
        }
    }
}

/// Marker configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MarkerConfig {
    /// Handling of flags left over from earlier passes.
    #[serde(default)]
    pub stale_flags: StaleFlagPolicy,
}

// ---------------------------------------------------------------------------
// Serde default helpers
// ---------------------------------------------------------------------------

fn default_true() -> bool { true }
fn default_log_level() -> String { "info".to_string() }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_uses_defaults() {
        let config = BicConfig::from_toml("").expect("empty config parses");
        assert_eq!(config, BicConfig::default());
        assert!(config.general.enabled);
        assert_eq!(config.marker.stale_flags, StaleFlagPolicy::Keep);
    }

    #[test]
    fn parses_all_fields() {
        let config = BicConfig::from_toml(
            r#"
            [general]
            enabled = false
            log_level = "debug"

            [marker]
            stale_flags = "clear_non_winners"
            "#,
        )
        .expect("valid config");
        assert!(!config.general.enabled);
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.marker.stale_flags, StaleFlagPolicy::ClearNonWinners);
    }

    #[test]
    fn rejects_unknown_policy() {
        let result = BicConfig::from_toml("[marker]\nstale_flags = \"sometimes\"");
        assert!(matches!(result, Err(crate::BicError::Config(_))));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bestinclass.toml");
        std::fs::write(&path, "[general]\nlog_level = \"warn\"\n").expect("write config");
        let config = BicConfig::from_file(&path).expect("load config");
        assert_eq!(config.general.log_level, "warn");
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = BicConfig::from_file(std::path::Path::new("/nonexistent/bestinclass.toml"));
        assert!(matches!(result, Err(crate::BicError::Io(_))));
    }
}
