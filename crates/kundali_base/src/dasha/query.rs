//! Point-in-time lookups over a dasha tree.

use chrono::{DateTime, Utc};

use super::types::{DashaPeriod, DashaTree};

/// Index of the period containing `at` (`start <= at < end`).
///
/// Periods must be sorted and contiguous, which every built tree guarantees.
pub fn find_active_period(periods: &[DashaPeriod], at: DateTime<Utc>) -> Option<usize> {
    let idx = periods.partition_point(|p| p.end <= at);
    periods.get(idx).filter(|p| p.start <= at).map(|_| idx)
}

/// The chain of periods active at `at`, maha first, as deep as the tree
/// goes. Empty when `at` is before birth or after the cycle ends.
pub fn active_stack(tree: &DashaTree, at: DateTime<Utc>) -> Vec<&DashaPeriod> {
    let mut stack = Vec::with_capacity(tree.depth.depth() as usize + 1);
    let mut level: &[DashaPeriod] = &tree.periods;
    while let Some(idx) = find_active_period(level, at) {
        let period = &level[idx];
        stack.push(period);
        level = &period.children;
    }
    stack
}

impl DashaTree {
    /// See [`active_stack`].
    pub fn active_stack(&self, at: DateTime<Utc>) -> Vec<&DashaPeriod> {
        active_stack(self, at)
    }
}
