//! Per-pass record of the current best item in every category.

use serde::Serialize;

use crate::category::{CATEGORY_COUNT, Category};

/// Best item seen so far for one category.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct LedgerSlot {
    /// Position of the winning item in the pass input.
    pub winner: Option<usize>,
    /// Metric of the winner; `0.0` while the slot is empty.
    pub best_metric: f32,
}

/// Item tallies gathered while filling a ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SelectionStats {
    /// Items offered to the pass.
    pub items_seen: usize,
    /// Items that landed in a category.
    pub classified: usize,
    /// Items skipped as unclassified, missing data or out-of-domain metric.
    pub skipped: usize,
}

/// Fixed 24-slot table built fresh by every selection pass.
///
/// Winners are recorded by input position, so a ledger is only meaningful
/// together with the item slice it was built from.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Ledger {
    slots: [LedgerSlot; CATEGORY_COUNT],
    /// Tallies for the pass that produced this ledger.
    pub stats: SelectionStats,
}

impl Ledger {
    /// An empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The slot for `category`.
    #[must_use]
    pub fn slot(&self, category: Category) -> &LedgerSlot {
        &self.slots[category.index()]
    }

    /// Input position of the winner of `category`, if any.
    #[must_use]
    pub fn winner(&self, category: Category) -> Option<usize> {
        self.slot(category).winner
    }

    /// Offer an item to a category. Replaces the incumbent only when
    /// `metric` is strictly greater, so the earliest item wins ties.
    ///
    /// Returns `true` when the item became the new winner.
    pub fn offer(&mut self, category: Category, position: usize, metric: f32) -> bool {
        let slot = &mut self.slots[category.index()];
        if slot.winner.is_none() && metric == 0.0 {
            // Zero-metric items still win an empty category.
            slot.winner = Some(position);
            return true;
        }
        if metric > slot.best_metric {
            *slot = LedgerSlot {
                winner: Some(position),
                best_metric: metric,
            };
            return true;
        }
        false
    }

    /// Every category with a winner, in index order.
    pub fn winners(&self) -> impl Iterator<Item = (Category, usize, f32)> + '_ {
        Category::ALL.into_iter().filter_map(|category| {
            let slot = self.slot(category);
            slot.winner.map(|position| (category, position, slot.best_metric))
        })
    }

    /// Number of categories with a winner.
    #[must_use]
    pub fn winner_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.winner.is_some()).count()
    }

    /// Whether no category has a winner.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.winner_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ledger_is_empty() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.winners().count(), 0);
        for category in Category::ALL {
            assert_eq!(*ledger.slot(category), LedgerSlot::default());
        }
    }

    #[test]
    fn strict_greater_keeps_incumbent_on_tie() {
        let mut ledger = Ledger::new();
        assert!(ledger.offer(Category::Sword, 0, 10.0));
        assert!(!ledger.offer(Category::Sword, 1, 10.0));
        assert!(ledger.offer(Category::Sword, 2, 11.0));
        assert_eq!(ledger.winner(Category::Sword), Some(2));
        assert!((ledger.slot(Category::Sword).best_metric - 11.0).abs() < f32::EPSILON);
    }

    #[test]
    fn zero_metric_wins_only_an_empty_slot() {
        let mut ledger = Ledger::new();
        assert!(ledger.offer(Category::ClothingFeet, 3, 0.0));
        assert!(!ledger.offer(Category::ClothingFeet, 4, 0.0));
        assert_eq!(ledger.winner(Category::ClothingFeet), Some(3));
        assert!(ledger.offer(Category::ClothingFeet, 5, 1.0));
        assert_eq!(ledger.winner(Category::ClothingFeet), Some(5));
    }

    #[test]
    fn categories_are_independent() {
        let mut ledger = Ledger::new();
        ledger.offer(Category::Arrow, 0, 8.0);
        ledger.offer(Category::Bolt, 1, 12.0);
        let winners: Vec<_> = ledger.winners().map(|(c, p, _)| (c, p)).collect();
        assert_eq!(winners, vec![(Category::Arrow, 0), (Category::Bolt, 1)]);
        assert_eq!(ledger.winner_count(), 2);
    }
}
