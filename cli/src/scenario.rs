//! Scenario definitions for utilization sweeps.
//!
//! A scenario file is a JSON array:
//!
//! ```json
//! [
//!   { "label": "ρ = 0.5", "arrival_rate": 6, "service_rate": 12 },
//!   { "arrival_rate": 9.6, "service_rate": 12 }
//! ]
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Failed to read scenario file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid scenario file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Scenario file {0} contains no scenarios")]
    Empty(String),
}

/// One arrival/service rate pair to simulate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub label: Option<String>,
    pub arrival_rate: f64,
    pub service_rate: f64,
}

impl Scenario {
    pub fn rho(&self) -> f64 {
        self.arrival_rate / self.service_rate
    }

    /// Explicit label, or one derived from ρ.
    pub fn display_label(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => format!("ρ = {:.2}", self.rho()),
        }
    }
}

/// Scenarios with a fixed service rate at each requested utilization.
pub fn from_utilizations(service_rate: f64, rhos: &[f64]) -> Vec<Scenario> {
    rhos.iter()
        .map(|rho| Scenario {
            label: Some(format!("ρ = {}", rho)),
            arrival_rate: rho * service_rate,
            service_rate,
        })
        .collect()
}

pub fn parse(json: &str, origin: &str) -> Result<Vec<Scenario>, ScenarioError> {
    let scenarios: Vec<Scenario> =
        serde_json::from_str(json).map_err(|source| ScenarioError::Parse {
            path: origin.to_string(),
            source,
        })?;
    if scenarios.is_empty() {
        return Err(ScenarioError::Empty(origin.to_string()));
    }
    Ok(scenarios)
}

pub fn load(path: &Path) -> Result<Vec<Scenario>, ScenarioError> {
    let origin = path.display().to_string();
    let json = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
        path: origin.clone(),
        source,
    })?;
    parse(&json, &origin)
}
