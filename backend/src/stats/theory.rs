//! Closed-form M/M/1 steady-state results
//!
//! For arrival rate λ, service rate μ and ρ = λ/μ < 1:
//!
//! ```text
//! W   = 1 / (μ - λ)          Wq = ρ / (μ (1 - ρ))
//! L   = ρ / (1 - ρ)          Lq = ρ² / (1 - ρ)
//! p_n = (1 - ρ) ρⁿ
//! ```
//!
//! With ρ ≥ 1 the queue has no steady state and every metric is `None`.

use crate::orchestrator::SimulationError;
use crate::sampling::Rate;
use crate::stats::result::SimulationResult;
use serde::{Deserialize, Serialize};

/// Analytic model for a single-server queue with Poisson arrivals and
/// exponential service.
///
/// # Example
/// ```
/// use queue_simulator_core_rs::stats::Mm1Theory;
///
/// let theory = Mm1Theory::new(6.0, 12.0).unwrap();
/// assert_eq!(theory.utilization(), 0.5);
/// let wq = theory.average_queue_time().unwrap();
/// assert!((wq - 1.0 / 12.0).abs() < 1e-12);
///
/// let saturated = Mm1Theory::new(12.0, 12.0).unwrap();
/// assert!(saturated.average_queue_time().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mm1Theory {
    arrival_rate: Rate,
    service_rate: Rate,
}

impl Mm1Theory {
    pub fn new(arrival_rate: f64, service_rate: f64) -> Result<Self, SimulationError> {
        let arrival_rate = Rate::new(arrival_rate).ok_or(SimulationError::InvalidParameter {
            parameter: "arrival_rate",
            value: arrival_rate,
        })?;
        let service_rate = Rate::new(service_rate).ok_or(SimulationError::InvalidParameter {
            parameter: "service_rate",
            value: service_rate,
        })?;
        Ok(Self {
            arrival_rate,
            service_rate,
        })
    }

    /// Traffic intensity ρ = λ/μ
    pub fn utilization(&self) -> f64 {
        self.arrival_rate.get() / self.service_rate.get()
    }

    pub fn is_stable(&self) -> bool {
        self.utilization() < 1.0
    }

    fn stable_rho(&self) -> Option<f64> {
        let rho = self.utilization();
        (rho < 1.0).then_some(rho)
    }

    /// W = 1 / (μ - λ)
    pub fn average_system_time(&self) -> Option<f64> {
        self.stable_rho()
            .map(|_| 1.0 / (self.service_rate.get() - self.arrival_rate.get()))
    }

    /// Wq = ρ / (μ (1 - ρ))
    pub fn average_queue_time(&self) -> Option<f64> {
        self.stable_rho()
            .map(|rho| rho / (self.service_rate.get() * (1.0 - rho)))
    }

    /// L = ρ / (1 - ρ)
    pub fn average_system_length(&self) -> Option<f64> {
        self.stable_rho().map(|rho| rho / (1.0 - rho))
    }

    /// Lq = ρ² / (1 - ρ)
    pub fn average_queue_length(&self) -> Option<f64> {
        self.stable_rho().map(|rho| rho * rho / (1.0 - rho))
    }

    /// p_n = (1 - ρ) ρⁿ
    pub fn state_probability(&self, n: usize) -> Option<f64> {
        self.stable_rho().map(|rho| {
            let exponent = i32::try_from(n).unwrap_or(i32::MAX);
            (1.0 - rho) * rho.powi(exponent)
        })
    }

    /// Pair each headline metric of `result` with its analytic value.
    ///
    /// Server utilization is always compared; the steady-state metrics only
    /// when the queue is stable.
    pub fn compare(&self, result: &SimulationResult) -> Vec<TheoryComparison> {
        let mut rows = vec![TheoryComparison::new(
            "server_utilization",
            result.server_utilization,
            self.utilization(),
        )];

        let steady_state = [
            (
                "average_system_time",
                result.average_system_time,
                self.average_system_time(),
            ),
            (
                "average_queue_time",
                result.average_queue_time,
                self.average_queue_time(),
            ),
            (
                "average_system_length",
                result.average_system_length,
                self.average_system_length(),
            ),
            (
                "average_queue_length",
                result.average_queue_length,
                self.average_queue_length(),
            ),
        ];

        rows.extend(
            steady_state
                .into_iter()
                .filter_map(|(metric, simulated, theoretical)| {
                    theoretical.map(|t| TheoryComparison::new(metric, simulated, t))
                }),
        );
        rows
    }
}

/// One simulated metric next to its closed-form value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TheoryComparison {
    pub metric: &'static str,
    pub simulated: f64,
    pub theoretical: f64,
}

impl TheoryComparison {
    pub fn new(metric: &'static str, simulated: f64, theoretical: f64) -> Self {
        Self {
            metric,
            simulated,
            theoretical,
        }
    }

    /// |simulated - theoretical| / |theoretical|; absolute error when the
    /// theoretical value is zero.
    pub fn relative_error(&self) -> f64 {
        let diff = (self.simulated - self.theoretical).abs();
        if self.theoretical == 0.0 {
            diff
        } else {
            diff / self.theoretical.abs()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_rejects_invalid_rates() {
        assert_eq!(
            Mm1Theory::new(0.0, 1.0),
            Err(SimulationError::InvalidParameter {
                parameter: "arrival_rate",
                value: 0.0
            })
        );
        assert!(Mm1Theory::new(1.0, -3.0).is_err());
    }

    #[test]
    fn test_littles_law_holds_analytically() {
        let theory = Mm1Theory::new(9.6, 12.0).unwrap();
        let lambda = 9.6;

        let l = theory.average_system_length().unwrap();
        let w = theory.average_system_time().unwrap();
        assert!((l - lambda * w).abs() < 1e-9);

        let lq = theory.average_queue_length().unwrap();
        let wq = theory.average_queue_time().unwrap();
        assert!((lq - lambda * wq).abs() < 1e-9);
    }

    #[test]
    fn test_state_probabilities_geometric() {
        let theory = Mm1Theory::new(1.0, 2.0).unwrap();
        assert!((theory.state_probability(0).unwrap() - 0.5).abs() < EPS);
        assert!((theory.state_probability(2).unwrap() - 0.125).abs() < EPS);
    }

    #[test]
    fn test_relative_error() {
        let row = TheoryComparison::new("x", 1.1, 1.0);
        assert!((row.relative_error() - 0.1).abs() < 1e-9);

        let zero = TheoryComparison::new("y", 0.25, 0.0);
        assert_eq!(zero.relative_error(), 0.25);
    }
}
