//! FIFO single-server discipline
//!
//! # Behavior
//!
//! - An arriving customer starts service at once if the server is idle,
//!   otherwise its arrival time is appended to the line
//! - When the server frees up, the earliest waiting arrival enters service
//! - The line only ever shrinks from the front

use crate::models::state::ServerStatus;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Outcome of admitting an arriving customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Admission {
    /// Server was idle; the customer is now in service
    StartService,
    /// Server was busy; the customer joined the line
    Enqueued,
}

/// FIFO line feeding one server
///
/// # Example
///
/// ```
/// use queue_simulator_core_rs::policy::{Admission, FifoDiscipline};
///
/// let mut fifo = FifoDiscipline::new();
/// assert_eq!(fifo.admit(1.0), Admission::StartService);
/// assert_eq!(fifo.admit(1.5), Admission::Enqueued);
/// assert_eq!(fifo.admit(2.0), Admission::Enqueued);
///
/// // Server frees up at t=3: earliest waiting customer goes first
/// assert_eq!(fifo.release(3.0), Some(1.5));
/// assert_eq!(fifo.queue_len(), 1);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FifoDiscipline {
    /// Arrival times of customers not yet in service, oldest first
    waiting_line: VecDeque<f64>,
    server: ServerStatus,
}

impl FifoDiscipline {
    pub fn new() -> Self {
        Self {
            waiting_line: VecDeque::new(),
            server: ServerStatus::Idle,
        }
    }

    /// Admit a customer arriving at `now`.
    pub fn admit(&mut self, now: f64) -> Admission {
        match self.server {
            ServerStatus::Idle => {
                self.server = ServerStatus::Busy {
                    service_start_time: now,
                };
                Admission::StartService
            }
            ServerStatus::Busy { .. } => {
                self.waiting_line.push_back(now);
                Admission::Enqueued
            }
        }
    }

    /// The customer in service leaves at `now`.
    ///
    /// Returns the arrival time of the customer that enters service next, or
    /// `None` if the line was empty and the server is now idle.
    pub fn release(&mut self, now: f64) -> Option<f64> {
        debug_assert!(self.server.is_busy(), "release on an idle server");
        match self.waiting_line.pop_front() {
            Some(arrival_time) => {
                self.server = ServerStatus::Busy {
                    service_start_time: now,
                };
                Some(arrival_time)
            }
            None => {
                self.server = ServerStatus::Idle;
                None
            }
        }
    }

    pub fn server_status(&self) -> ServerStatus {
        self.server
    }

    pub fn is_idle(&self) -> bool {
        !self.server.is_busy()
    }

    /// Customers waiting (excludes the one in service)
    pub fn queue_len(&self) -> usize {
        self.waiting_line.len()
    }

    /// Customers in the system according to the discipline
    pub fn occupancy(&self) -> usize {
        self.waiting_line.len() + usize::from(self.server.is_busy())
    }
}
