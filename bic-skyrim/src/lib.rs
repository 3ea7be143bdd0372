//! # bic-skyrim — Skyrim Integration for Best-in-Class Marking
//!
//! This crate connects the game-agnostic `bic-core` library to the host's
//! menu system.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │            Host UI (menus)               │
//! │  ┌────────────────────────────────────┐  │
//! │  │           bic-skyrim               │  │
//! │  │  ┌──────────┐  ┌────────────────┐  │  │
//! │  │  │  events  │  │ bridge (forms) │  │  │
//! │  │  └────┬─────┘  └───────┬────────┘  │  │
//! │  │       ▼                ▼           │  │
//! │  │  ┌──────────────────────────────┐  │  │
//! │  │  │  plugin (event sink)         │  │  │
//! │  │  └──────────────┬───────────────┘  │  │
//! │  │                 ▼                  │  │
//! │  │  ┌──────────────────────────────┐  │  │
//! │  │  │          bic-core            │  │  │
//! │  │  └──────────────────────────────┘  │  │
//! │  └────────────────────────────────────┘  │
//! └──────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `events` — Menu open/close events and the three recognized menus
//! - `bridge` — Host base forms and menu entries mapped to core item kinds
//! - `config` — Plugin identity, host version check, TOML configuration
//! - `logging` — Tracing subscriber setup
//! - `plugin` — Lifecycle hooks and the menu event sink

pub mod bridge;
pub mod config;
pub mod error;
pub mod events;
pub mod logging;
pub mod plugin;

pub use error::PluginError;
pub use plugin::{BestInClassPlugin, MenuItemSource, OpenMenus};
