//! Single-traversal per-category argmax.
//!
//! Items are visited once, in input order. Each classified item is offered
//! to its category's ledger slot; the strict comparison in
//! [`Ledger::offer`] keeps the earliest item on ties. Nothing is sorted and
//! no state survives the call.

use tracing::{debug, trace};

use crate::classify::classify_kind;
use crate::ledger::Ledger;
use crate::types::InventoryItem;

/// Build a fresh ledger from `items`.
///
/// Items without data, unclassified items and items whose metric is
/// negative or not finite are skipped; none of them fail the pass.
#[must_use]
pub fn select<I: InventoryItem>(items: &[I]) -> Ledger {
    let mut ledger = Ledger::new();

    for (position, item) in items.iter().enumerate() {
        ledger.stats.items_seen += 1;

        let Some(kind) = item.kind() else {
            trace!(item = item.display_name(), "Skipping item without data");
            ledger.stats.skipped += 1;
            continue;
        };
        let Some(category) = classify_kind(&kind) else {
            trace!(item = item.display_name(), ?kind, "Item is unclassified");
            ledger.stats.skipped += 1;
            continue;
        };
        let Some(metric) = kind.metric().filter(|m| m.is_finite() && *m >= 0.0) else {
            debug!(
                item = item.display_name(),
                %category,
                "Skipping item with out-of-range {}",
                category.metric_name()
            );
            ledger.stats.skipped += 1;
            continue;
        };

        ledger.stats.classified += 1;
        let incumbent = ledger.slot(category).best_metric;
        let replaced = ledger.offer(category, position, metric);

        debug!(
            item = item.display_name(),
            %category,
            metric,
            incumbent,
            replaced,
            "Compared {}",
            category.metric_name()
        );
    }

    ledger
}
