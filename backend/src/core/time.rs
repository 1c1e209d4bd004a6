//! Event clock for the continuous-time simulation
//!
//! The simulation jumps from event to event. Two events can be pending at any
//! moment: the next arrival (always scheduled) and the next departure (only
//! while the server is busy). This module selects the earlier one and keeps
//! time monotonic.

use serde::{Deserialize, Serialize};

/// The next event to process, tagged with its scheduled time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum NextEvent {
    Arrival(f64),
    Departure(f64),
}

impl NextEvent {
    pub fn time(&self) -> f64 {
        match self {
            NextEvent::Arrival(t) | NextEvent::Departure(t) => *t,
        }
    }
}

/// Tracks current time and the pending arrival/departure times
///
/// # Example
/// ```
/// use queue_simulator_core_rs::core::time::{NextEvent, SimulationClock};
///
/// let mut clock = SimulationClock::new(0.4);
/// assert_eq!(clock.next_event(), NextEvent::Arrival(0.4));
///
/// clock.schedule_departure(0.4);
/// // Ties go to the arrival
/// assert_eq!(clock.next_event(), NextEvent::Arrival(0.4));
///
/// let elapsed = clock.advance_to(0.4, 10.0);
/// assert_eq!(elapsed, 0.4);
/// assert_eq!(clock.current_time(), 0.4);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationClock {
    current_time: f64,
    /// Time of the last processed event (ledger accounting starts here)
    last_event_time: f64,
    next_arrival_time: f64,
    /// `None` while the server is idle and the line is empty
    next_departure_time: Option<f64>,
}

impl SimulationClock {
    /// Start at time zero with the first arrival already scheduled.
    pub fn new(first_arrival_time: f64) -> Self {
        Self {
            current_time: 0.0,
            last_event_time: 0.0,
            next_arrival_time: first_arrival_time,
            next_departure_time: None,
        }
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn last_event_time(&self) -> f64 {
        self.last_event_time
    }

    pub fn next_arrival_time(&self) -> f64 {
        self.next_arrival_time
    }

    pub fn next_departure_time(&self) -> Option<f64> {
        self.next_departure_time
    }

    /// Pick the earlier pending event. Arrival wins on exact equality.
    pub fn next_event(&self) -> NextEvent {
        match self.next_departure_time {
            Some(departure) if departure < self.next_arrival_time => {
                NextEvent::Departure(departure)
            }
            _ => NextEvent::Arrival(self.next_arrival_time),
        }
    }

    pub fn schedule_arrival(&mut self, time: f64) {
        self.next_arrival_time = time;
    }

    pub fn schedule_departure(&mut self, time: f64) {
        self.next_departure_time = Some(time);
    }

    pub fn clear_departure(&mut self) {
        self.next_departure_time = None;
    }

    /// Move the clock to `event_time` and return the time to attribute to the
    /// population level that held since the previous event.
    ///
    /// The attributed span is clipped to `[0, horizon]`: the overshooting
    /// final event contributes only up to the horizon, so the accumulated
    /// spans never exceed it.
    pub fn advance_to(&mut self, event_time: f64, horizon: f64) -> f64 {
        debug_assert!(
            event_time >= self.current_time,
            "clock moved backwards: {} -> {}",
            self.current_time,
            event_time
        );
        let elapsed = event_time.min(horizon) - self.last_event_time.min(horizon);
        self.current_time = event_time;
        self.last_event_time = event_time;
        elapsed
    }

    /// Remaining span between the last processed event and the horizon,
    /// attributed to the final population level when the run closes.
    ///
    /// Zero when the last event already reached or passed the horizon.
    pub fn remaining_until(&self, horizon: f64) -> f64 {
        horizon - self.last_event_time.min(horizon)
    }

    pub fn reached(&self, horizon: f64) -> bool {
        self.current_time >= horizon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_departure_selected_when_strictly_earlier() {
        let mut clock = SimulationClock::new(2.0);
        clock.schedule_departure(1.5);
        assert_eq!(clock.next_event(), NextEvent::Departure(1.5));
    }

    #[test]
    fn test_no_pending_departure_means_arrival() {
        let clock = SimulationClock::new(f64::MAX);
        assert_eq!(clock.next_event(), NextEvent::Arrival(f64::MAX));
    }

    #[test]
    fn test_advance_clips_overshoot() {
        let mut clock = SimulationClock::new(3.0);
        assert_eq!(clock.advance_to(3.0, 5.0), 3.0);
        assert_eq!(clock.advance_to(7.0, 5.0), 2.0);
        assert_eq!(clock.current_time(), 7.0);
        assert_eq!(clock.remaining_until(5.0), 0.0);
        assert!(clock.reached(5.0));
    }

    #[test]
    fn test_remaining_until_before_horizon() {
        let mut clock = SimulationClock::new(1.0);
        clock.advance_to(1.0, 4.0);
        assert_eq!(clock.remaining_until(4.0), 3.0);
        assert!(!clock.reached(4.0));
    }
}
