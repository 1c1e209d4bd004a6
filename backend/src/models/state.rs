//! Population and server state
//!
//! # Critical Invariants
//!
//! 1. **Unit steps**: every processed event changes the population by exactly one
//! 2. **Non-negative**: the population never drops below zero
//! 3. **Consistency**: population = customers waiting + (1 if server busy)

use serde::{Deserialize, Serialize};

/// Number of customers currently in the system (waiting + in service).
///
/// # Example
/// ```
/// use queue_simulator_core_rs::models::PopulationState;
///
/// let mut population = PopulationState::new();
/// population.increment();
/// population.increment();
/// population.decrement();
/// assert_eq!(population.count(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationState {
    count: usize,
}

impl PopulationState {
    pub fn new() -> Self {
        Self { count: 0 }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn increment(&mut self) {
        self.count += 1;
    }

    /// Remove one customer. A departure from an empty system is an engine bug.
    pub fn decrement(&mut self) {
        debug_assert!(self.count > 0, "departure from an empty system");
        self.count = self.count.saturating_sub(1);
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Whether the single server is serving someone, and since when.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum ServerStatus {
    #[default]
    Idle,
    Busy { service_start_time: f64 },
}

impl ServerStatus {
    pub fn is_busy(&self) -> bool {
        matches!(self, ServerStatus::Busy { .. })
    }
}
