//! Per-customer service record
//!
//! A record is created the instant a customer enters service, not when it
//! arrives: only then are all three timestamps known. Customers still waiting
//! at the end of a run never get a record.

use serde::{Deserialize, Serialize};

/// Immutable (arrival, service start, departure) triple for one customer.
///
/// # Example
/// ```
/// use queue_simulator_core_rs::models::CustomerRecord;
///
/// let record = CustomerRecord::new(1.0, 1.5, 2.25);
/// assert_eq!(record.queue_time(), 0.5);
/// assert_eq!(record.service_time(), 0.75);
/// assert_eq!(record.system_time(), 1.25);
/// assert!(record.completed_by(3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    arrival_time: f64,
    service_start_time: f64,
    departure_time: f64,
}

impl CustomerRecord {
    /// # Panics
    /// In debug builds, if the timestamps are not ordered
    /// `arrival <= service_start <= departure`.
    pub fn new(arrival_time: f64, service_start_time: f64, departure_time: f64) -> Self {
        debug_assert!(
            arrival_time <= service_start_time && service_start_time <= departure_time,
            "customer timestamps out of order: {} / {} / {}",
            arrival_time,
            service_start_time,
            departure_time
        );
        Self {
            arrival_time,
            service_start_time,
            departure_time,
        }
    }

    pub fn arrival_time(&self) -> f64 {
        self.arrival_time
    }

    pub fn service_start_time(&self) -> f64 {
        self.service_start_time
    }

    pub fn departure_time(&self) -> f64 {
        self.departure_time
    }

    /// Time spent waiting in line before service (Wq sample)
    pub fn queue_time(&self) -> f64 {
        self.service_start_time - self.arrival_time
    }

    /// Time from arrival to departure (W sample)
    pub fn system_time(&self) -> f64 {
        self.departure_time - self.arrival_time
    }

    pub fn service_time(&self) -> f64 {
        self.departure_time - self.service_start_time
    }

    /// Whether the customer left the system at or before `horizon`.
    pub fn completed_by(&self, horizon: f64) -> bool {
        self.departure_time <= horizon
    }

    /// Portion of this customer's service that falls inside `[0, horizon]`.
    pub fn busy_time_within(&self, horizon: f64) -> f64 {
        (self.departure_time.min(horizon) - self.service_start_time).max(0.0)
    }
}
