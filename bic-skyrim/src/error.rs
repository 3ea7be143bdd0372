//! Plugin error types.

use thiserror::Error;

use crate::config::HostVersion;

/// Errors raised while loading or running the plugin.
#[derive(Debug, Error)]
pub enum PluginError {
    /// The host script extender is older than the plugin requires.
    #[error("Host version {found} is too old (requires {required} or newer)")]
    HostTooOld {
        required: HostVersion,
        found: HostVersion,
    },

    /// The tracing subscriber could not be installed.
    #[error("Logging setup failed: {0}")]
    Logging(String),

    /// Error from the core library (configuration, I/O).
    #[error(transparent)]
    Core(#[from] bic_core::BicError),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, PluginError>;
