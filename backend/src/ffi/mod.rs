//! Python bindings
//!
//! Exposes the engine to Python so analysis notebooks can call it directly.
//!
//! # Example (from Python)
//!
//! ```python
//! from queue_simulator_core_rs import simulate_mm1_queue, mm1_theory
//!
//! result = simulate_mm1_queue(6, 12, 20000, seed=42)
//! print(result["average_queue_time"], mm1_theory(6, 12)["average_queue_time"])
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::orchestrator::{simulate, SimulationError};
use crate::stats::{Mm1Theory, SimulationResult};

fn to_py_err(err: SimulationError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Run one scenario and return the result fields as a dict.
///
/// `state_probabilities` maps population level (int) to probability.
#[pyfunction]
#[pyo3(signature = (arrival_rate, service_rate, simulation_time, seed=None))]
pub fn simulate_mm1_queue<'py>(
    py: Python<'py>,
    arrival_rate: f64,
    service_rate: f64,
    simulation_time: f64,
    seed: Option<u64>,
) -> PyResult<Bound<'py, PyDict>> {
    // Release the GIL: the run is pure Rust
    let result = py
        .allow_threads(|| simulate(arrival_rate, service_rate, simulation_time, seed))
        .map_err(to_py_err)?;
    result_to_py(py, &result)
}

/// Closed-form M/M/1 metrics; steady-state entries are `None` when ρ >= 1.
#[pyfunction]
pub fn mm1_theory<'py>(
    py: Python<'py>,
    arrival_rate: f64,
    service_rate: f64,
) -> PyResult<Bound<'py, PyDict>> {
    let theory = Mm1Theory::new(arrival_rate, service_rate).map_err(to_py_err)?;

    let dict = PyDict::new(py);
    dict.set_item("utilization", theory.utilization())?;
    dict.set_item("stable", theory.is_stable())?;
    dict.set_item("average_system_time", theory.average_system_time())?;
    dict.set_item("average_queue_time", theory.average_queue_time())?;
    dict.set_item("average_system_length", theory.average_system_length())?;
    dict.set_item("average_queue_length", theory.average_queue_length())?;
    Ok(dict)
}

fn result_to_py<'py>(py: Python<'py>, result: &SimulationResult) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("total_customers", result.total_customers)?;
    dict.set_item("completed_customers", result.completed_customers)?;
    dict.set_item("total_system_time", result.total_system_time)?;
    dict.set_item("total_queue_time", result.total_queue_time)?;
    dict.set_item("server_busy_time", result.server_busy_time)?;
    dict.set_item("average_system_time", result.average_system_time)?;
    dict.set_item("average_queue_time", result.average_queue_time)?;
    dict.set_item("server_utilization", result.server_utilization)?;
    dict.set_item("average_system_length", result.average_system_length)?;
    dict.set_item("average_queue_length", result.average_queue_length)?;

    let probabilities = PyDict::new(py);
    for (level, probability) in &result.state_probabilities {
        probabilities.set_item(*level, *probability)?;
    }
    dict.set_item("state_probabilities", probabilities)?;
    Ok(dict)
}
