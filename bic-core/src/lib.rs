//! # Best-in-Class Core Library
//!
//! Game-agnostic selection of the best item per category.
//!
//! Every item is mapped to one of 24 fixed [`Category`] buckets (light,
//! heavy and clothing armor per body slot, eight weapon families, arrows and
//! bolts). A single pass over an item list keeps, per category, the first
//! item with the highest metric (damage or armor rating) in a fresh
//! [`Ledger`]; the marker then sets the best-in-class flag on each winner.
//!
//! ```text
//! items ──► classify ──► select (Ledger) ──► mark ──► flagged items
//! ```
//!
//! Any item source can participate by implementing [`InventoryItem`].
//!
//! ## Performance Contract
//!
//! A pass is one traversal, no sorting, no allocation besides the winner
//! bitmap the marker builds when clearing stale flags. Hundreds of items
//! finish in microseconds.

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod category;
pub mod classify;
pub mod config;
pub mod error;
pub mod ledger;
pub mod marker;
pub mod metrics;
pub mod pass;
pub mod selection;
pub mod types;

pub use category::{CATEGORY_COUNT, Category};
pub use classify::classify;
pub use config::BicConfig;
pub use error::BicError;
pub use ledger::Ledger;
pub use marker::{StaleFlagPolicy, mark};
pub use pass::{PassReport, run_pass};
pub use selection::select;
pub use types::*;
