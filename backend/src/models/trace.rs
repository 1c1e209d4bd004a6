//! Trace recorder: per-customer records plus the population time ledger.

use crate::models::customer::CustomerRecord;
use crate::models::ledger::StateTimeLedger;
use serde::{Deserialize, Serialize};

/// Append-only trace accumulated during one run.
///
/// Records appear in service-start order, which for a FIFO single server is
/// also arrival order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraceRecorder {
    customers: Vec<CustomerRecord>,
    ledger: StateTimeLedger,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self {
            customers: Vec::new(),
            ledger: StateTimeLedger::new(),
        }
    }

    /// Record a customer entering service.
    pub fn record_customer(&mut self, record: CustomerRecord) {
        self.customers.push(record);
    }

    /// Attribute `duration` to population level `level`.
    pub fn accrue_level_time(&mut self, level: usize, duration: f64) {
        self.ledger.accrue(level, duration);
    }

    pub fn customers(&self) -> &[CustomerRecord] {
        &self.customers
    }

    pub fn ledger(&self) -> &StateTimeLedger {
        &self.ledger
    }

    /// Records whose departure is at or before `horizon`.
    pub fn completed_by(&self, horizon: f64) -> impl Iterator<Item = &CustomerRecord> + '_ {
        self.customers
            .iter()
            .filter(move |record| record.completed_by(horizon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_filter() {
        let mut trace = TraceRecorder::new();
        trace.record_customer(CustomerRecord::new(0.0, 0.0, 1.0));
        trace.record_customer(CustomerRecord::new(0.5, 1.0, 3.0));

        assert_eq!(trace.customers().len(), 2);
        assert_eq!(trace.completed_by(2.0).count(), 1);
        assert_eq!(trace.completed_by(3.0).count(), 2);
    }
}
