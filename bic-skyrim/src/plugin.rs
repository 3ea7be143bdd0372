//! The plugin object: lifecycle hooks and the menu event sink.
//!
//! The host calls [`BestInClassPlugin::init_instance`] once at load, then
//! forwards every menu open/close notification to
//! [`BestInClassPlugin::receive_event`]. Opening one of the three item menus
//! runs one select-then-mark pass over that menu's item list.

use std::collections::HashMap;
use std::path::Path;

use bic_core::metrics::{CounterSnapshot, PassCounters};
use bic_core::{InventoryItem, PassReport, run_pass};
use parking_lot::RwLock;
use tracing::{debug, error, info};

use crate::bridge::MenuItem;
use crate::config::{
    HostVersion, PLUGIN_NAME, PLUGIN_RELEASE, PLUGIN_VERSION, REQUIRED_HOST_VERSION,
    SkyrimConfig,
};
use crate::error::{PluginError, Result};
use crate::events::{EventResult, MenuKind, MenuOpenCloseEvent};
use crate::logging;

/// Gives access to the item list of an open menu.
pub trait MenuItemSource {
    /// Item type of the menu lists.
    type Item: InventoryItem;

    /// Items of `menu`, or `None` when the menu is not available.
    fn items_mut(&mut self, menu: MenuKind) -> Option<&mut [Self::Item]>;
}

impl<I: InventoryItem> MenuItemSource for HashMap<MenuKind, Vec<I>> {
    type Item = I;

    fn items_mut(&mut self, menu: MenuKind) -> Option<&mut [I]> {
        self.get_mut(&menu).map(Vec::as_mut_slice)
    }
}

/// Best-in-class plugin state.
#[derive(Default)]
pub struct BestInClassPlugin {
    config: RwLock<SkyrimConfig>,
    counters: PassCounters,
}

impl BestInClassPlugin {
    /// Create a plugin with the given configuration.
    #[must_use]
    pub fn new(config: SkyrimConfig) -> Self {
        Self {
            config: RwLock::new(config),
            counters: PassCounters::new(),
        }
    }

    /// Install logging at the configured level, check the host version and
    /// announce the plugin.
    ///
    /// # Errors
    /// Returns [`PluginError::Logging`] when `general.log_level` is not a
    /// valid filter, and [`PluginError::HostTooOld`] when `host` is older
    /// than [`REQUIRED_HOST_VERSION`].
    pub fn init_instance(&self, host: HostVersion) -> Result<()> {
        let level = self.config.read().core.general.log_level.clone();
        logging::init(&level)?;
        info!("Initializing {PLUGIN_NAME}");
        if !host.satisfies(REQUIRED_HOST_VERSION) {
            error!(%host, required = %REQUIRED_HOST_VERSION, "Host version is too old");
            return Err(PluginError::HostTooOld {
                required: REQUIRED_HOST_VERSION,
                found: host,
            });
        }
        info!("Current version is {PLUGIN_VERSION} ({PLUGIN_RELEASE})");
        Ok(())
    }

    /// Handle a menu open/close notification.
    ///
    /// Always lets the event continue to other sinks.
    pub fn receive_event<S: MenuItemSource>(
        &self,
        event: &MenuOpenCloseEvent,
        source: &mut S,
    ) -> EventResult {
        let Some(menu) = event.opened_menu() else {
            return EventResult::Continue;
        };
        self.mark_menu(menu, source);
        EventResult::Continue
    }

    /// Run one pass over `menu`'s items if the menu is enabled and available.
    pub fn mark_menu<S: MenuItemSource>(
        &self,
        menu: MenuKind,
        source: &mut S,
    ) -> Option<PassReport> {
        let config = self.config.read().clone();
        if !config.marks(menu) {
            debug!(%menu, "Marking disabled for menu");
            return None;
        }
        info!("Menu \"{menu}\" has been opened");

        let Some(items) = source.items_mut(menu) else {
            debug!(%menu, "Menu has no item list");
            return None;
        };
        let report = run_pass(items, &config.core.marker);
        self.counters.record(&report);
        Some(report)
    }

    /// Replace the configuration with the contents of `path`.
    ///
    /// # Errors
    /// Returns the load error; the current configuration is kept.
    pub fn reload_config(&self, path: &Path) -> Result<()> {
        let config = SkyrimConfig::from_file(path)?;
        info!(path = %path.display(), "Configuration reloaded");
        *self.config.write() = config;
        Ok(())
    }

    /// A copy of the current configuration.
    #[must_use]
    pub fn config(&self) -> SkyrimConfig {
        self.config.read().clone()
    }

    /// Totals across every pass so far.
    #[must_use]
    pub fn stats(&self) -> CounterSnapshot {
        self.counters.snapshot()
    }
}

/// Item lists of the currently open menus, keyed by menu.
pub type OpenMenus = HashMap<MenuKind, Vec<MenuItem>>;
