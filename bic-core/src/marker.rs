//! Writes the best-in-class flag onto ledger winners.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::ledger::Ledger;
use crate::types::InventoryItem;

/// What to do with flags already set on items that did not win this pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaleFlagPolicy {
    /// Flags are only ever set, never cleared.
    #[default]
    Keep,
    /// Clear the flag on every item of the current list that did not win.
    ClearNonWinners,
}

/// Tallies from one marking step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MarkOutcome {
    /// Winners whose flag was written.
    pub marked: usize,
    /// Winners whose flag write failed.
    pub failures: usize,
    /// Non-winners whose stale flag was cleared.
    pub cleared: usize,
}

/// Set the flag on every winner in `ledger`.
///
/// `items` must be the slice the ledger was built from; positions outside
/// it are ignored. A failed write is logged and counted without affecting
/// other winners.
pub fn mark<I: InventoryItem>(
    ledger: &Ledger,
    items: &mut [I],
    policy: StaleFlagPolicy,
) -> MarkOutcome {
    let mut outcome = MarkOutcome::default();

    for (category, position, metric) in ledger.winners() {
        let Some(item) = items.get_mut(position) else {
            warn!(%category, position, "Ledger winner outside item list");
            outcome.failures += 1;
            continue;
        };

        match item.set_best_in_class(true) {
            Ok(()) => {
                info!(
                    item = item.display_name(),
                    %category,
                    metric,
                    "Best item of type is {}",
                    item.display_name()
                );
                outcome.marked += 1;
            }
            Err(e) => {
                warn!(
                    item = item.display_name(),
                    %category,
                    error = %e,
                    "Failed to mark best item"
                );
                outcome.failures += 1;
            }
        }
    }

    if policy == StaleFlagPolicy::ClearNonWinners {
        outcome.cleared = clear_non_winners(ledger, items);
    }

    outcome
}

/// Clear the flag on every flagged item of `items` that holds no ledger slot.
fn clear_non_winners<I: InventoryItem>(ledger: &Ledger, items: &mut [I]) -> usize {
    let mut is_winner = vec![false; items.len()];
    for (_, position, _) in ledger.winners() {
        if let Some(winner) = is_winner.get_mut(position) {
            *winner = true;
        }
    }

    let mut cleared = 0;
    for (item, _) in items
        .iter_mut()
        .zip(is_winner)
        .filter(|(item, winner)| !winner && item.is_best_in_class())
    {
        match item.set_best_in_class(false) {
            Ok(()) => {
                debug!(item = item.display_name(), "Cleared stale best-in-class flag");
                cleared += 1;
            }
            Err(e) => {
                warn!(item = item.display_name(), error = %e, "Failed to clear stale flag");
            }
        }
    }
    cleared
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::error::{BicError, Result};
    use crate::types::{ItemKind, ItemRecord, WeaponSubtype};

    /// Item whose UI binding is not available.
    struct Detached(ItemRecord);

    impl InventoryItem for Detached {
        fn display_name(&self) -> &str {
            &self.0.display_name
        }
        fn kind(&self) -> Option<ItemKind> {
            Some(self.0.kind)
        }
        fn is_best_in_class(&self) -> bool {
            false
        }
        fn set_best_in_class(&mut self, _value: bool) -> Result<()> {
            Err(BicError::MarkUnavailable {
                item: self.0.display_name.clone(),
            })
        }
    }

    fn ledger_with(entries: &[(Category, usize, f32)]) -> Ledger {
        let mut ledger = Ledger::new();
        for &(category, position, metric) in entries {
            ledger.offer(category, position, metric);
        }
        ledger
    }

    #[test]
    fn marks_only_winners() {
        let mut items = vec![
            ItemRecord::weapon("Iron Sword", WeaponSubtype::Sword, 7.0),
            ItemRecord::weapon("Steel Sword", WeaponSubtype::Sword, 8.0),
        ];
        let ledger = ledger_with(&[(Category::Sword, 1, 8.0)]);
        let outcome = mark(&ledger, &mut items, StaleFlagPolicy::Keep);
        assert_eq!(outcome.marked, 1);
        assert!(!items[0].best_in_class);
        assert!(items[1].best_in_class);
    }

    #[test]
    fn marking_twice_is_idempotent() {
        let mut items = vec![ItemRecord::weapon("Bow", WeaponSubtype::Bow, 9.0)];
        let ledger = ledger_with(&[(Category::Bow, 0, 9.0)]);
        mark(&ledger, &mut items, StaleFlagPolicy::Keep);
        mark(&ledger, &mut items, StaleFlagPolicy::Keep);
        assert!(items[0].best_in_class);
    }

    #[test]
    fn keep_policy_leaves_stale_flags() {
        let mut items = vec![ItemRecord::weapon("Old Bow", WeaponSubtype::Bow, 5.0)];
        items[0].best_in_class = true;
        let outcome = mark(&Ledger::new(), &mut items, StaleFlagPolicy::Keep);
        assert_eq!(outcome, MarkOutcome::default());
        assert!(items[0].best_in_class);
    }

    #[test]
    fn clear_policy_resets_non_winners() {
        let mut items = vec![
            ItemRecord::weapon("Old Bow", WeaponSubtype::Bow, 5.0),
            ItemRecord::weapon("New Bow", WeaponSubtype::Bow, 12.0),
        ];
        items[0].best_in_class = true;
        let ledger = ledger_with(&[(Category::Bow, 1, 12.0)]);
        let outcome = mark(&ledger, &mut items, StaleFlagPolicy::ClearNonWinners);
        assert_eq!(outcome.cleared, 1);
        assert!(!items[0].best_in_class);
        assert!(items[1].best_in_class);
    }

    #[test]
    fn write_failure_is_isolated() {
        let mut items = vec![
            Detached(ItemRecord::weapon("Ghost Blade", WeaponSubtype::Sword, 11.0)),
            Detached(ItemRecord::weapon("Ghost Axe", WeaponSubtype::Axe, 12.0)),
        ];
        let ledger = ledger_with(&[(Category::Sword, 0, 11.0), (Category::WarAxe, 1, 12.0)]);
        let outcome = mark(&ledger, &mut items, StaleFlagPolicy::Keep);
        assert_eq!(outcome.failures, 2);
        assert_eq!(outcome.marked, 0);
    }

    #[test]
    fn empty_ledger_is_a_no_op() {
        let mut items: Vec<ItemRecord> = Vec::new();
        let outcome = mark(&Ledger::new(), &mut items, StaleFlagPolicy::ClearNonWinners);
        assert_eq!(outcome, MarkOutcome::default());
    }

    #[test]
    fn clear_policy_keeps_winner_flags_and_ignores_stray_positions() {
        let mut items = vec![
            ItemRecord::weapon("Old Dagger", WeaponSubtype::Dagger, 4.0),
            ItemRecord::weapon("Glass Dagger", WeaponSubtype::Dagger, 10.0),
            ItemRecord::weapon("Old Mace", WeaponSubtype::Mace, 9.0),
        ];
        items[0].best_in_class = true;
        items[2].best_in_class = true;
        let ledger = ledger_with(&[
            (Category::Dagger, 1, 10.0),
            (Category::Mace, 2, 9.0),
            (Category::Bow, 7, 3.0),
        ]);

        let outcome = mark(&ledger, &mut items, StaleFlagPolicy::ClearNonWinners);
        assert_eq!(
            outcome,
            MarkOutcome {
                marked: 2,
                failures: 1,
                cleared: 1,
            }
        );
        let flags: Vec<bool> = items.iter().map(|item| item.best_in_class).collect();
        assert_eq!(flags, vec![false, true, true]);
    }
}
