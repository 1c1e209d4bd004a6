//! Event logging for replaying and auditing a run.
//!
//! When `record_events` is enabled on the simulation config, every processed
//! transition is appended here:
//! - **Arrival**: a customer enters the system
//! - **ServiceStart**: a customer reaches the server
//! - **Departure**: a customer leaves after service
//!
//! # Example
//!
//! ```rust
//! use queue_simulator_core_rs::models::{Event, EventLog};
//!
//! let mut log = EventLog::new();
//! log.log(Event::Arrival { time: 0.2, population: 1 });
//! log.log(Event::ServiceStart { time: 0.2, arrival_time: 0.2, queue_len: 0 });
//!
//! assert_eq!(log.len(), 2);
//! assert_eq!(log.events_of_type("arrival").len(), 1);
//! ```

use serde::{Deserialize, Serialize};

/// Simulation event capturing a state change.
///
/// `population` is the count *after* the transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Arrival {
        time: f64,
        population: usize,
    },

    /// Customer entered service; `queue_len` is the line length afterwards
    ServiceStart {
        time: f64,
        arrival_time: f64,
        queue_len: usize,
    },

    Departure {
        time: f64,
        population: usize,
    },
}

impl Event {
    pub fn time(&self) -> f64 {
        match self {
            Event::Arrival { time, .. } => *time,
            Event::ServiceStart { time, .. } => *time,
            Event::Departure { time, .. } => *time,
        }
    }

    pub fn event_type(&self) -> &'static str {
        match self {
            Event::Arrival { .. } => "arrival",
            Event::ServiceStart { .. } => "service_start",
            Event::Departure { .. } => "departure",
        }
    }
}

/// Event log for storing and querying simulation events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn log(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Events with `start <= time < end`
    pub fn events_between(&self, start: f64, end: f64) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.time() >= start && e.time() < end)
            .collect()
    }

    pub fn events_of_type(&self, event_type: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
