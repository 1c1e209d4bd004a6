//! Orchestrator - the event loop driving one simulation run
//!
//! See `engine.rs` for the implementation.

pub mod engine;

// Re-export main types for convenience
pub use engine::{simulate, Simulation, SimulationConfig, SimulationError, SimulationOutcome};
