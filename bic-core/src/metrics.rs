//! Runtime counters and span names.
//!
//! Counters are plain `AtomicU64`s so a host can share one set between
//! event callbacks and read it from anywhere.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::pass::PassReport;

/// Cumulative totals across passes.
pub struct PassCounters {
    /// Passes run.
    pub passes: AtomicU64,
    /// Items offered across all passes.
    pub items_seen: AtomicU64,
    /// Items classified into a category.
    pub items_classified: AtomicU64,
    /// Items skipped.
    pub items_skipped: AtomicU64,
    /// Winner flags written.
    pub winners_marked: AtomicU64,
    /// Winner flag writes that failed.
    pub mark_failures: AtomicU64,
    /// Stale flags cleared.
    pub flags_cleared: AtomicU64,
}

impl PassCounters {
    /// Create a new set of zeroed counters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            passes: AtomicU64::new(0),
            items_seen: AtomicU64::new(0),
            items_classified: AtomicU64::new(0),
            items_skipped: AtomicU64::new(0),
            winners_marked: AtomicU64::new(0),
            mark_failures: AtomicU64::new(0),
            flags_cleared: AtomicU64::new(0),
        }
    }

    /// Fold one pass into the totals.
    pub fn record(&self, report: &PassReport) {
        let add = |counter: &AtomicU64, n: usize| {
            counter.fetch_add(n as u64, Ordering::Relaxed);
        };
        add(&self.passes, 1);
        add(&self.items_seen, report.items_seen);
        add(&self.items_classified, report.classified);
        add(&self.items_skipped, report.skipped);
        add(&self.winners_marked, report.marked);
        add(&self.mark_failures, report.mark_failures);
        add(&self.flags_cleared, report.cleared);
    }

    /// Snapshot all counters for export.
    #[must_use]
    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            passes: self.passes.load(Ordering::Relaxed),
            items_seen: self.items_seen.load(Ordering::Relaxed),
            items_classified: self.items_classified.load(Ordering::Relaxed),
            items_skipped: self.items_skipped.load(Ordering::Relaxed),
            winners_marked: self.winners_marked.load(Ordering::Relaxed),
            mark_failures: self.mark_failures.load(Ordering::Relaxed),
            flags_cleared: self.flags_cleared.load(Ordering::Relaxed),
        }
    }
}

impl Default for PassCounters {
    fn default() -> Self {
        Self::new()
    }
}

/// A snapshot of counter values at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterSnapshot {
    /// Passes run.
    pub passes: u64,
    /// Items offered.
    pub items_seen: u64,
    /// Items classified.
    pub items_classified: u64,
    /// Items skipped.
    pub items_skipped: u64,
    /// Winner flags written.
    pub winners_marked: u64,
    /// Failed winner flag writes.
    pub mark_failures: u64,
    /// Stale flags cleared.
    pub flags_cleared: u64,
}

/// Span names used with `tracing::span!`.
pub mod spans {
    /// One select-then-mark cycle.
    pub const PASS: &str = "bic::pass";
    /// Selection traversal.
    pub const SELECT: &str = "bic::select";
    /// Marker step.
    pub const MARK: &str = "bic::mark";
}
