//! Error types for best-in-class selection.

use thiserror::Error;

/// Top-level error type for the core library.
#[derive(Error, Debug)]
pub enum BicError {
    /// Configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The item cannot accept a best-in-class flag write right now.
    #[error("Best-in-class flag unavailable on item: {item}")]
    MarkUnavailable {
        /// Display name of the item.
        item: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, BicError>;
