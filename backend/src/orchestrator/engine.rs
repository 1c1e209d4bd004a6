//! Simulation engine
//!
//! Runs the event loop for one M/M/1 scenario:
//!
//! ```text
//! While current_time < horizon:
//! 1. Pick the earlier pending event (arrival wins ties)
//! 2. Attribute elapsed time to the current population level
//! 3. Arrival:   schedule next arrival; start service or join the line; n += 1
//!    Departure: n -= 1; serve head of line or go idle
//! Then attribute any remaining time up to the horizon and reduce the trace.
//! ```
//!
//! # Example
//!
//! ```rust
//! use queue_simulator_core_rs::orchestrator::{Simulation, SimulationConfig};
//!
//! let config = SimulationConfig::new(6.0, 12.0, 500.0).with_seed(42);
//! let mut simulation = Simulation::new(config).unwrap();
//!
//! // Step a few events by hand, then run to the horizon
//! for _ in 0..10 {
//!     simulation.step();
//! }
//! let outcome = simulation.finish();
//! assert!(outcome.result.server_utilization <= 1.0);
//! ```

use crate::core::time::{NextEvent, SimulationClock};
use crate::models::{CustomerRecord, Event, EventLog, PopulationState, ServerStatus, TraceRecorder};
use crate::policy::{Admission, FifoDiscipline};
use crate::rng::RngManager;
use crate::sampling::{Rate, SampleSource};
use crate::stats::{reduce, SimulationResult};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

// ============================================================================
// Configuration Types
// ============================================================================

/// Parameters for one simulation run
///
/// Rates are events per unit time; the horizon is in the same unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Poisson arrival rate λ
    pub arrival_rate: f64,

    /// Exponential service rate μ
    pub service_rate: f64,

    /// Simulated duration; the event loop stops once time reaches it
    pub horizon: f64,

    /// RNG seed. `None` draws a fresh random seed per run.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Keep a full [`EventLog`] of the run
    #[serde(default)]
    pub record_events: bool,
}

impl SimulationConfig {
    pub fn new(arrival_rate: f64, service_rate: f64, horizon: f64) -> Self {
        Self {
            arrival_rate,
            service_rate,
            horizon,
            seed: None,
            record_events: false,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_event_log(mut self) -> Self {
        self.record_events = true;
        self
    }

    /// Check every parameter is finite and strictly positive.
    pub fn validate(&self) -> Result<(), SimulationError> {
        self.validated().map(|_| ())
    }

    fn validated(&self) -> Result<(Rate, Rate, f64), SimulationError> {
        let arrival_rate = Rate::new(self.arrival_rate).ok_or(SimulationError::InvalidParameter {
            parameter: "arrival_rate",
            value: self.arrival_rate,
        })?;
        let service_rate = Rate::new(self.service_rate).ok_or(SimulationError::InvalidParameter {
            parameter: "service_rate",
            value: self.service_rate,
        })?;
        if !(self.horizon.is_finite() && self.horizon > 0.0) {
            return Err(SimulationError::InvalidParameter {
                parameter: "horizon",
                value: self.horizon,
            });
        }
        Ok((arrival_rate, service_rate, self.horizon))
    }
}

// ============================================================================
// Errors and Outcome
// ============================================================================

/// Errors surfaced by the simulator
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SimulationError {
    /// A rate or the horizon is zero, negative, or not finite
    #[error("Invalid parameter {parameter}: {value} (must be finite and > 0)")]
    InvalidParameter { parameter: &'static str, value: f64 },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Everything a finished run produced
#[derive(Debug, Clone)]
pub struct SimulationOutcome {
    pub result: SimulationResult,
    pub trace: TraceRecorder,
    /// Empty unless `record_events` was set
    pub events: EventLog,
    /// Seed the run used (`None` only for custom sample sources without one)
    pub seed: Option<u64>,
    pub events_processed: usize,
}

// ============================================================================
// Simulation
// ============================================================================

/// Exclusively owned state of one run
///
/// Nothing is shared between instances, so independent scenarios can run on
/// separate threads.
pub struct Simulation<S: SampleSource = RngManager> {
    arrival_rate: Rate,
    service_rate: Rate,
    horizon: f64,
    seed: Option<u64>,
    source: S,
    clock: SimulationClock,
    population: PopulationState,
    discipline: FifoDiscipline,
    trace: TraceRecorder,
    event_log: Option<EventLog>,
    events_processed: usize,
}

impl Simulation<RngManager> {
    /// Validate `config` and set up a run driven by a seeded xorshift RNG.
    ///
    /// # Errors
    ///
    /// [`SimulationError::InvalidParameter`] if a rate or the horizon is not
    /// strictly positive. No state is created in that case.
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        // Validate before drawing a seed so a bad config has no side effects
        config.validate()?;
        let seed = config.seed.unwrap_or_else(random_seed);
        let mut simulation = Self::with_source(config, RngManager::new(seed))?;
        simulation.seed = Some(seed);
        Ok(simulation)
    }
}

impl<S: SampleSource> Simulation<S> {
    /// Set up a run that draws durations from `source`.
    ///
    /// The first arrival is scheduled immediately with one draw.
    pub fn with_source(config: SimulationConfig, mut source: S) -> Result<Self, SimulationError> {
        let (arrival_rate, service_rate, horizon) = config.validated()?;

        let first_arrival = source.sample(arrival_rate);

        debug!(
            arrival_rate = arrival_rate.get(),
            service_rate = service_rate.get(),
            horizon,
            seed = ?config.seed,
            first_arrival,
            "simulation initialized"
        );

        Ok(Self {
            arrival_rate,
            service_rate,
            horizon,
            seed: config.seed,
            source,
            clock: SimulationClock::new(first_arrival),
            population: PopulationState::new(),
            discipline: FifoDiscipline::new(),
            trace: TraceRecorder::new(),
            event_log: config.record_events.then(EventLog::new),
            events_processed: 0,
        })
    }

    /// Process one event.
    ///
    /// Returns the event handled, or `None` once the clock has reached the
    /// horizon. The last event handled may lie past the horizon.
    pub fn step(&mut self) -> Option<NextEvent> {
        if self.clock.reached(self.horizon) {
            return None;
        }

        let event = self.clock.next_event();
        match event {
            NextEvent::Arrival(time) => self.process_arrival(time),
            NextEvent::Departure(time) => self.process_departure(time),
        }
        self.events_processed += 1;

        debug_assert_eq!(
            self.clock.next_departure_time().is_none(),
            self.discipline.is_idle(),
            "pending departure must match server status"
        );
        debug_assert_eq!(self.population.count(), self.discipline.occupancy());

        trace!(
            ?event,
            population = self.population.count(),
            queue_len = self.discipline.queue_len(),
            "event processed"
        );
        Some(event)
    }

    /// Step until the horizon is reached; returns the number of events handled.
    pub fn run_to_horizon(&mut self) -> usize {
        let mut handled = 0;
        while self.step().is_some() {
            handled += 1;
        }
        handled
    }

    /// Run to the horizon, close the ledger, and reduce the trace.
    pub fn finish(mut self) -> SimulationOutcome {
        self.run_to_horizon();

        let remaining = self.clock.remaining_until(self.horizon);
        self.trace
            .accrue_level_time(self.population.count(), remaining);

        let result = reduce(&self.trace, self.horizon);

        debug!(
            events = self.events_processed,
            total_customers = result.total_customers,
            completed_customers = result.completed_customers,
            utilization = result.server_utilization,
            "simulation finished"
        );

        SimulationOutcome {
            result,
            trace: self.trace,
            events: self.event_log.unwrap_or_default(),
            seed: self.seed,
            events_processed: self.events_processed,
        }
    }

    // ------------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------------

    fn process_arrival(&mut self, time: f64) {
        self.attribute_elapsed(time);

        let gap = self.source.sample(self.arrival_rate);
        self.clock.schedule_arrival(time + gap);

        self.log_event(Event::Arrival {
            time,
            population: self.population.count() + 1,
        });

        match self.discipline.admit(time) {
            Admission::StartService => self.start_service(time, time),
            Admission::Enqueued => {}
        }

        self.population.increment();
    }

    fn process_departure(&mut self, time: f64) {
        self.attribute_elapsed(time);
        self.population.decrement();

        self.log_event(Event::Departure {
            time,
            population: self.population.count(),
        });

        match self.discipline.release(time) {
            Some(arrival_time) => self.start_service(arrival_time, time),
            None => self.clock.clear_departure(),
        }
    }

    fn start_service(&mut self, arrival_time: f64, now: f64) {
        let departure = now + self.source.sample(self.service_rate);
        self.clock.schedule_departure(departure);
        self.trace
            .record_customer(CustomerRecord::new(arrival_time, now, departure));

        self.log_event(Event::ServiceStart {
            time: now,
            arrival_time,
            queue_len: self.discipline.queue_len(),
        });
    }

    /// Advance the clock and charge the elapsed span to the pre-event level.
    fn attribute_elapsed(&mut self, time: f64) {
        let elapsed = self.clock.advance_to(time, self.horizon);
        self.trace
            .accrue_level_time(self.population.count(), elapsed);
    }

    fn log_event(&mut self, event: Event) {
        if let Some(log) = self.event_log.as_mut() {
            log.log(event);
        }
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn current_time(&self) -> f64 {
        self.clock.current_time()
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn population(&self) -> usize {
        self.population.count()
    }

    pub fn queue_len(&self) -> usize {
        self.discipline.queue_len()
    }

    pub fn server_status(&self) -> ServerStatus {
        self.discipline.server_status()
    }

    pub fn trace(&self) -> &TraceRecorder {
        &self.trace
    }

    pub fn event_log(&self) -> Option<&EventLog> {
        self.event_log.as_ref()
    }

    pub fn events_processed(&self) -> usize {
        self.events_processed
    }

    pub fn is_finished(&self) -> bool {
        self.clock.reached(self.horizon)
    }
}

/// Run one M/M/1 scenario and return its statistics.
///
/// # Example
///
/// ```rust
/// use queue_simulator_core_rs::simulate;
///
/// let result = simulate(6.0, 12.0, 1_000.0, Some(42)).unwrap();
/// assert!(result.completed_customers > 0);
///
/// assert!(simulate(6.0, 0.0, 1_000.0, Some(42)).is_err());
/// ```
pub fn simulate(
    arrival_rate: f64,
    service_rate: f64,
    horizon: f64,
    seed: Option<u64>,
) -> Result<SimulationResult, SimulationError> {
    let mut config = SimulationConfig::new(arrival_rate, service_rate, horizon);
    config.seed = seed;
    Ok(Simulation::new(config)?.finish().result)
}

fn random_seed() -> u64 {
    let seed = uuid::Uuid::new_v4().as_u128() as u64;
    debug!(seed, "no seed configured, drew a random one");
    seed
}
