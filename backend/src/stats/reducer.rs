//! Statistics reducer
//!
//! Turns a finished trace into a [`SimulationResult`]. Everything here is a
//! pure function of the trace and the horizon.
//!
//! # Formulas
//!
//! With `T(n)` the ledger time at population `n` and `H` the horizon:
//!
//! ```text
//! L   = Σ n · T(n) / H
//! Lq  = Σ max(0, n - 1) · T(n) / H
//! p_n = T(n) / H
//! ρ̂   = busy time within [0, H] / H
//! ```

use crate::models::TraceRecorder;
use crate::stats::result::SimulationResult;

/// Reduce a closed trace over `horizon` into summary statistics.
///
/// Only customers that departed by the horizon contribute to waiting and
/// system times. Busy time also counts the part of an unfinished service that
/// falls before the horizon. Averages over zero completed customers are 0.
///
/// # Example
/// ```
/// use queue_simulator_core_rs::models::{CustomerRecord, TraceRecorder};
/// use queue_simulator_core_rs::stats::reduce;
///
/// let mut trace = TraceRecorder::new();
/// trace.accrue_level_time(0, 1.0);
/// trace.record_customer(CustomerRecord::new(1.0, 1.0, 2.0));
/// trace.accrue_level_time(1, 1.0);
/// trace.accrue_level_time(0, 2.0);
///
/// let result = reduce(&trace, 4.0);
/// assert_eq!(result.completed_customers, 1);
/// assert_eq!(result.server_utilization, 0.25);
/// assert_eq!(result.average_system_length, 0.25);
/// ```
pub fn reduce(trace: &TraceRecorder, horizon: f64) -> SimulationResult {
    debug_assert!(horizon > 0.0, "horizon must be positive");

    let mut completed_customers = 0usize;
    let mut total_system_time = 0.0;
    let mut total_queue_time = 0.0;
    let mut server_busy_time = 0.0;

    for record in trace.customers() {
        if record.completed_by(horizon) {
            completed_customers += 1;
            total_system_time += record.system_time();
            total_queue_time += record.queue_time();
            server_busy_time += record.service_time();
        } else {
            // Still in service (or started after the horizon)
            server_busy_time += record.busy_time_within(horizon);
        }
    }

    let (average_system_time, average_queue_time) = if completed_customers > 0 {
        let n = completed_customers as f64;
        (total_system_time / n, total_queue_time / n)
    } else {
        (0.0, 0.0)
    };

    let ledger = trace.ledger();
    let weighted_population: f64 = ledger.iter().map(|(n, t)| n as f64 * t).sum();
    let weighted_queue: f64 = ledger
        .iter()
        .map(|(n, t)| n.saturating_sub(1) as f64 * t)
        .sum();

    let state_probabilities = ledger.iter().map(|(n, t)| (n, t / horizon)).collect();

    SimulationResult {
        total_customers: trace.customers().len(),
        completed_customers,
        total_system_time,
        total_queue_time,
        server_busy_time,
        average_system_time,
        average_queue_time,
        server_utilization: server_busy_time / horizon,
        average_system_length: weighted_population / horizon,
        average_queue_length: weighted_queue / horizon,
        state_probabilities,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CustomerRecord;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_empty_trace_gives_zero_averages() {
        let mut trace = TraceRecorder::new();
        trace.accrue_level_time(0, 5.0);

        let result = reduce(&trace, 5.0);
        assert_eq!(result.total_customers, 0);
        assert_eq!(result.completed_customers, 0);
        assert_eq!(result.average_system_time, 0.0);
        assert_eq!(result.average_queue_time, 0.0);
        assert_eq!(result.server_utilization, 0.0);
        assert_eq!(result.average_system_length, 0.0);
        assert_eq!(result.state_probability(0), 1.0);
    }

    #[test]
    fn test_unfinished_customer_counts_partial_busy_time_only() {
        let mut trace = TraceRecorder::new();
        // Served 0..2, then a second customer waiting from 1 is served 2..7
        trace.record_customer(CustomerRecord::new(0.0, 0.0, 2.0));
        trace.record_customer(CustomerRecord::new(1.0, 2.0, 7.0));
        trace.accrue_level_time(1, 1.0);
        trace.accrue_level_time(2, 1.0);
        trace.accrue_level_time(1, 3.0);

        let result = reduce(&trace, 5.0);
        assert_eq!(result.total_customers, 2);
        assert_eq!(result.completed_customers, 1);
        assert_eq!(result.total_system_time, 2.0);
        assert_eq!(result.total_queue_time, 0.0);
        // 2.0 completed + 3.0 partial (2..5)
        assert!((result.server_busy_time - 5.0).abs() < EPS);
        assert!((result.server_utilization - 1.0).abs() < EPS);
    }

    #[test]
    fn test_queue_length_excludes_customer_in_service() {
        let mut trace = TraceRecorder::new();
        trace.accrue_level_time(0, 1.0);
        trace.accrue_level_time(1, 1.0);
        trace.accrue_level_time(3, 2.0);

        let result = reduce(&trace, 4.0);
        // L = (1*1 + 3*2) / 4, Lq = (0*1 + 2*2) / 4
        assert!((result.average_system_length - 1.75).abs() < EPS);
        assert!((result.average_queue_length - 1.0).abs() < EPS);

        let total: f64 = result.state_probabilities.values().sum();
        assert!((total - 1.0).abs() < EPS);
    }
}
