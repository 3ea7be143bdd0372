//! One complete select-then-mark cycle.

use serde::Serialize;
use tracing::{info, info_span};

use crate::config::MarkerConfig;
use crate::ledger::Ledger;
use crate::marker::{self, MarkOutcome};
use crate::metrics::spans;
use crate::selection;
use crate::types::InventoryItem;

/// Summary of one pass, suitable for logging and counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PassReport {
    /// Items offered to the pass.
    pub items_seen: usize,
    /// Items that landed in a category.
    pub classified: usize,
    /// Items skipped without error.
    pub skipped: usize,
    /// Categories with a winner.
    pub winners: usize,
    /// Winners whose flag was written.
    pub marked: usize,
    /// Winners whose flag write failed.
    pub mark_failures: usize,
    /// Stale flags cleared on non-winners.
    pub cleared: usize,
}

impl PassReport {
    fn new(ledger: &Ledger, outcome: MarkOutcome) -> Self {
        Self {
            items_seen: ledger.stats.items_seen,
            classified: ledger.stats.classified,
            skipped: ledger.stats.skipped,
            winners: ledger.winner_count(),
            marked: outcome.marked,
            mark_failures: outcome.failures,
            cleared: outcome.cleared,
        }
    }
}

/// Select the best item per category in `items` and flag the winners.
///
/// Never fails: per-item problems are absorbed and counted.
pub fn run_pass<I: InventoryItem>(items: &mut [I], config: &MarkerConfig) -> PassReport {
    let _span = info_span!(spans::PASS, items = items.len()).entered();

    let ledger = {
        let _span = info_span!(spans::SELECT).entered();
        selection::select(items)
    };
    let outcome = {
        let _span = info_span!(spans::MARK).entered();
        marker::mark(&ledger, items, config.stale_flags)
    };

    let report = PassReport::new(&ledger, outcome);
    info!(
        items = report.items_seen,
        winners = report.winners,
        marked = report.marked,
        failures = report.mark_failures,
        "Finished marking the best items"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker::StaleFlagPolicy;
    use crate::types::{ItemRecord, WeaponSubtype};

    #[test]
    fn report_counts() {
        let mut items = vec![
            ItemRecord::weapon("Iron Dagger", WeaponSubtype::Dagger, 4.0),
            ItemRecord::weapon("Glass Dagger", WeaponSubtype::Dagger, 9.0),
            ItemRecord::other("Lockpick"),
        ];
        let report = run_pass(&mut items, &MarkerConfig::default());
        assert_eq!(
            report,
            PassReport {
                items_seen: 3,
                classified: 2,
                skipped: 1,
                winners: 1,
                marked: 1,
                mark_failures: 0,
                cleared: 0,
            }
        );
        assert!(items[1].best_in_class);
    }

    #[test]
    fn second_pass_with_clear_policy_moves_flag() {
        let config = MarkerConfig {
            stale_flags: StaleFlagPolicy::ClearNonWinners,
        };
        let mut items = vec![ItemRecord::weapon("Iron Dagger", WeaponSubtype::Dagger, 4.0)];
        run_pass(&mut items, &config);
        assert!(items[0].best_in_class);

        items.push(ItemRecord::weapon("Daedric Dagger", WeaponSubtype::Dagger, 11.0));
        let report = run_pass(&mut items, &config);
        assert_eq!(report.cleared, 1);
        assert!(!items[0].best_in_class);
        assert!(items[1].best_in_class);
    }
}
