//! Time spent at each population level
//!
//! The ledger is sparse: the queue can in principle grow without bound, so
//! levels are keys in an ordered map rather than indices into a fixed array.
//!
//! # Critical Invariants
//!
//! 1. Every entry is non-negative
//! 2. After a run closes, the entries sum to the horizon

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Cumulative time spent with `n` customers in the system, keyed by `n`.
///
/// # Example
/// ```
/// use queue_simulator_core_rs::models::StateTimeLedger;
///
/// let mut ledger = StateTimeLedger::new();
/// ledger.accrue(0, 1.5);
/// ledger.accrue(1, 0.5);
/// ledger.accrue(0, 1.0);
///
/// assert_eq!(ledger.time_at(0), 2.5);
/// assert_eq!(ledger.total_time(), 3.0);
/// assert_eq!(ledger.max_level(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateTimeLedger {
    levels: BTreeMap<usize, f64>,
}

impl StateTimeLedger {
    /// Empty ledger with level 0 already observed.
    pub fn new() -> Self {
        let mut levels = BTreeMap::new();
        levels.insert(0, 0.0);
        Self { levels }
    }

    /// Add `duration` to the entry for `level`, creating it if needed.
    pub fn accrue(&mut self, level: usize, duration: f64) {
        debug_assert!(duration >= 0.0, "negative duration {} at level {}", duration, level);
        *self.levels.entry(level).or_insert(0.0) += duration;
    }

    /// Time accumulated at `level`, zero if never observed.
    pub fn time_at(&self, level: usize) -> f64 {
        self.levels.get(&level).copied().unwrap_or(0.0)
    }

    pub fn total_time(&self) -> f64 {
        self.levels.values().sum()
    }

    /// Highest population level observed.
    pub fn max_level(&self) -> usize {
        self.levels.keys().next_back().copied().unwrap_or(0)
    }

    /// `(level, time)` pairs in ascending level order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.levels.iter().map(|(level, time)| (*level, *time))
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl Default for StateTimeLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ledger_observes_level_zero() {
        let ledger = StateTimeLedger::new();
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.time_at(0), 0.0);
        assert_eq!(ledger.total_time(), 0.0);
    }

    #[test]
    fn test_unobserved_level_reads_zero() {
        let ledger = StateTimeLedger::new();
        assert_eq!(ledger.time_at(17), 0.0);
    }

    #[test]
    fn test_sparse_levels_iterate_in_order() {
        let mut ledger = StateTimeLedger::new();
        ledger.accrue(40, 0.25);
        ledger.accrue(3, 0.5);

        let levels: Vec<usize> = ledger.iter().map(|(level, _)| level).collect();
        assert_eq!(levels, vec![0, 3, 40]);
        assert_eq!(ledger.max_level(), 40);
    }
}
