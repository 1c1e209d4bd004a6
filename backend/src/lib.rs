//! Queue Simulator Core - Rust Engine
//!
//! Discrete-event simulation of a single-server queue with Poisson arrivals
//! and exponential service (M/M/1), used to check analytic queueing formulas
//! against a stochastic model.
//!
//! # Architecture
//!
//! - **rng**: Deterministic random number generation
//! - **sampling**: Exponential durations at a validated rate
//! - **core**: Event clock
//! - **models**: Domain types (population, customer records, ledger, trace)
//! - **policy**: FIFO queueing discipline
//! - **orchestrator**: Main event loop
//! - **stats**: Result reduction and the analytic M/M/1 model
//!
//! # Critical Invariants
//!
//! 1. All randomness is deterministic (seeded, per-run RNG)
//! 2. The population changes by exactly one per event and is never negative
//! 3. Time spent across population levels sums to the horizon
//!
//! # Example
//!
//! ```
//! use queue_simulator_core_rs::{simulate, Mm1Theory};
//!
//! let result = simulate(6.0, 12.0, 2_000.0, Some(42)).unwrap();
//! let theory = Mm1Theory::new(6.0, 12.0).unwrap();
//!
//! let total: f64 = result.state_probabilities.values().sum();
//! assert!((total - 1.0).abs() < 1e-9);
//! assert!((result.server_utilization - theory.utilization()).abs() < 0.1);
//! ```

// Module declarations
pub mod core;
pub mod models;
pub mod orchestrator;
pub mod policy;
pub mod rng;
pub mod sampling;
pub mod stats;

// Re-exports for convenience
pub use crate::core::time::{NextEvent, SimulationClock};
pub use models::{
    CustomerRecord, Event, EventLog, PopulationState, ServerStatus, StateTimeLedger, TraceRecorder,
};
pub use orchestrator::{simulate, Simulation, SimulationConfig, SimulationError, SimulationOutcome};
pub use policy::{Admission, FifoDiscipline};
pub use rng::RngManager;
pub use sampling::{Rate, SampleSource, ScriptedSource};
pub use stats::{reduce, Mm1Theory, SimulationResult, TheoryComparison};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn queue_simulator_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::simulate_mm1_queue, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::mm1_theory, m)?)?;
    Ok(())
}
