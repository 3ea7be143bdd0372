//! Tracing subscriber setup for the plugin log.
//!
//! Every line carries a timestamp. The `BIC_LOG` environment variable, when
//! set, overrides the configured level.

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::error::{PluginError, Result};

/// Environment variable that overrides `general.log_level`.
pub const LOG_ENV_VAR: &str = "BIC_LOG";

/// Build the filter from `level`, or from `BIC_LOG` when that is set and
/// valid. `level` is validated either way.
///
/// # Errors
/// Returns [`PluginError::Logging`] when `level` is not a valid directive.
pub fn filter(level: &str) -> Result<EnvFilter> {
    let configured = EnvFilter::try_new(level).map_err(|e| PluginError::Logging(e.to_string()))?;
    Ok(EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or(configured))
}

/// Install the global fmt subscriber.
///
/// Returns `false` when another global subscriber is already installed; the
/// existing one is left in place.
///
/// # Errors
/// Returns [`PluginError::Logging`] when `level` is not a valid directive.
pub fn init(level: &str) -> Result<bool> {
    let filter = filter(level)?;
    match tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
    {
        Ok(()) => Ok(true),
        Err(e) => {
            debug!(error = %e, "Keeping the existing global subscriber");
            Ok(false)
        }
    }
}
