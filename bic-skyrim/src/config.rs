//! Plugin identity, host version negotiation and the plugin's TOML config.
//!
//! The TOML file holds the core tables plus a `[menus]` table:
//!
//! ```toml
//! [general]
//! enabled = true
//! log_level = "info"
//!
//! [marker]
//! stale_flags = "keep"
//!
//! [menus]
//! inventory = true
//! barter = true
//! container = true
//! ```

use std::fmt;

use bic_core::config::BicConfig;
use serde::{Deserialize, Serialize};

use crate::events::MenuKind;

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// Name the plugin registers under.
pub const PLUGIN_NAME: &str = "BestInClass++";

/// Packed plugin version: main, major, minor in the three top bytes.
pub const PLUGIN_VERSION: PluginVersion = PluginVersion(0x0100_0000);

/// Release channel of this build.
pub const PLUGIN_RELEASE: ReleaseType = ReleaseType::Candidate;

/// Oldest host script extender the plugin runs against.
pub const REQUIRED_HOST_VERSION: HostVersion = HostVersion::new(1, 7, 1);

/// Release channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseType {
    /// Development build.
    Development,
    /// Testing build.
    Testing,
    /// Release candidate.
    Candidate,
    /// Final release.
    Release,
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Development => "Development",
            Self::Testing => "Testing",
            Self::Candidate => "Candidate",
            Self::Release => "Release",
        })
    }
}

/// Plugin version packed as `main << 24 | major << 16 | minor << 8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PluginVersion(pub u32);

impl PluginVersion {
    /// Leading component.
    #[must_use]
    pub const fn main(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Second component.
    #[must_use]
    pub const fn major(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Third component.
    #[must_use]
    pub const fn minor(self) -> u8 {
        (self.0 >> 8) as u8
    }
}

impl fmt::Display for PluginVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.main(), self.major(), self.minor())
    }
}

/// Version of the host script extender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HostVersion {
    /// Major version.
    pub major: u8,
    /// Minor version.
    pub minor: u8,
    /// Beta / patch number.
    pub beta: u8,
}

impl HostVersion {
    /// A version triple.
    #[must_use]
    pub const fn new(major: u8, minor: u8, beta: u8) -> Self {
        Self { major, minor, beta }
    }

    /// Packed form as reported by the host: `major << 24 | minor << 16 | beta << 4`.
    #[must_use]
    pub const fn packed(self) -> u32 {
        (self.major as u32) << 24 | (self.minor as u32) << 16 | (self.beta as u32) << 4
    }

    /// Inverse of [`HostVersion::packed`]; the low nibble is ignored.
    #[must_use]
    pub const fn from_packed(packed: u32) -> Self {
        Self {
            major: (packed >> 24) as u8,
            minor: (packed >> 16) as u8,
            beta: ((packed >> 4) & 0xFF) as u8,
        }
    }

    /// Whether this version satisfies `required`.
    #[must_use]
    pub fn satisfies(self, required: Self) -> bool {
        self >= required
    }
}

impl fmt::Display for HostVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.beta)
    }
}

// ---------------------------------------------------------------------------
// Plugin configuration
// ---------------------------------------------------------------------------

/// Plugin configuration: core settings plus per-menu switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SkyrimConfig {
    /// Core settings (`[general]`, `[marker]`).
    #[serde(flatten)]
    pub core: BicConfig,
    /// Which menus get marked.
    #[serde(default)]
    pub menus: MenuConfig,
}

impl SkyrimConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `BicError::Config` if the TOML is invalid.
    pub fn from_toml(toml_str: &str) -> bic_core::error::Result<Self> {
        toml::from_str(toml_str).map_err(|e| bic_core::BicError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> bic_core::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Whether an opening of `menu` should trigger a pass.
    #[must_use]
    pub fn marks(&self, menu: MenuKind) -> bool {
        self.core.general.enabled && self.menus.is_enabled(menu)
    }
}

/// Per-menu switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Player inventory.
    #[serde(default = "default_true")]
    pub inventory: bool,
    /// Merchant trade screen.
    #[serde(default = "default_true")]
    pub barter: bool,
    /// Container transfer screen.
    #[serde(default = "default_true")]
    pub container: bool,
}

impl MenuConfig {
    /// Whether `menu` is switched on.
    #[must_use]
    pub fn is_enabled(&self, menu: MenuKind) -> bool {
        match menu {
            MenuKind::Inventory => self.inventory,
            MenuKind::Barter => self.barter,
            MenuKind::Container => self.container,
        }
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            inventory: true,
            barter: true,
            container: true,
        }
    }
}

fn default_true() -> bool { true }

#[cfg(test)]
mod tests {
    use super::*;
    use bic_core::StaleFlagPolicy;

    #[test]
    fn plugin_version_string() {
        assert_eq!(PLUGIN_VERSION.to_string(), "1.0.0");
        assert_eq!(format!("{PLUGIN_VERSION} ({PLUGIN_RELEASE})"), "1.0.0 (Candidate)");
        assert_eq!(PluginVersion(0x0203_0400).to_string(), "2.3.4");
    }

    #[test]
    fn host_version_ordering() {
        assert!(HostVersion::new(1, 7, 3).satisfies(REQUIRED_HOST_VERSION));
        assert!(HostVersion::new(1, 7, 1).satisfies(REQUIRED_HOST_VERSION));
        assert!(!HostVersion::new(1, 7, 0).satisfies(REQUIRED_HOST_VERSION));
        assert!(!HostVersion::new(1, 6, 16).satisfies(REQUIRED_HOST_VERSION));
        assert!(HostVersion::new(2, 0, 0).satisfies(REQUIRED_HOST_VERSION));
    }

    #[test]
    fn host_version_packing() {
        assert_eq!(REQUIRED_HOST_VERSION.packed(), 0x0107_0010);
        assert_eq!(HostVersion::from_packed(0x0107_0030), HostVersion::new(1, 7, 3));
    }

    #[test]
    fn parses_flattened_config() {
        let config = SkyrimConfig::from_toml(
            r#"
            [general]
            log_level = "debug"

            [marker]
            stale_flags = "clear_non_winners"

            [menus]
            container = false
            "#,
        )
        .expect("valid config");
        assert_eq!(config.core.general.log_level, "debug");
        assert_eq!(config.core.marker.stale_flags, StaleFlagPolicy::ClearNonWinners);
        assert!(config.marks(MenuKind::Inventory));
        assert!(config.marks(MenuKind::Barter));
        assert!(!config.marks(MenuKind::Container));
    }

    #[test]
    fn master_switch_disables_every_menu() {
        let config = SkyrimConfig::from_toml("[general]\nenabled = false\n").expect("valid config");
        for menu in MenuKind::ALL {
            assert!(!config.marks(menu));
        }
    }

    #[test]
    fn empty_config_marks_everything() {
        let config = SkyrimConfig::from_toml("").expect("valid config");
        assert_eq!(config, SkyrimConfig::default());
        for menu in MenuKind::ALL {
            assert!(config.marks(menu));
        }
    }
}
