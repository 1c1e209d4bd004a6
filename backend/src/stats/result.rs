//! Reduced output of one simulation run.

use crate::orchestrator::SimulationError;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Scalar and distributional statistics derived from one run
///
/// Time-valued fields are in the same unit as the rates' reciprocal (e.g.
/// minutes when rates are per minute). Waiting and system time statistics
/// cover completed customers only; `total_customers` counts every customer
/// that reached service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Customers that entered service during the run
    pub total_customers: usize,
    /// Customers that departed at or before the horizon
    pub completed_customers: usize,
    pub total_system_time: f64,
    pub total_queue_time: f64,
    pub server_busy_time: f64,
    /// Mean time in system (W), 0 when nobody completed
    pub average_system_time: f64,
    /// Mean time in line (Wq), 0 when nobody completed
    pub average_queue_time: f64,
    pub server_utilization: f64,
    /// Time-averaged customers in system (L)
    pub average_system_length: f64,
    /// Time-averaged customers in line (Lq)
    pub average_queue_length: f64,
    /// Fraction of the horizon spent at each observed population level
    pub state_probabilities: BTreeMap<usize, f64>,
}

impl SimulationResult {
    /// Probability of population level `n`, zero if never observed.
    pub fn state_probability(&self, n: usize) -> f64 {
        self.state_probabilities.get(&n).copied().unwrap_or(0.0)
    }

    /// Highest population level observed during the run.
    pub fn max_population(&self) -> usize {
        self.state_probabilities
            .keys()
            .next_back()
            .copied()
            .unwrap_or(0)
    }

    /// SHA-256 of the JSON encoding, hex-encoded.
    ///
    /// Field order is fixed by the struct and `state_probabilities` is
    /// ordered, so equal results always hash equally.
    pub fn fingerprint(&self) -> Result<String, SimulationError> {
        let json = serde_json::to_string(self).map_err(|e| {
            SimulationError::Serialization(format!("Result serialization failed: {}", e))
        })?;

        let mut hasher = Sha256::new();
        hasher.update(json.as_bytes());
        Ok(format!("{:x}", hasher.finalize()))
    }
}
