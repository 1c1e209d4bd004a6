//! Exponential duration sampling for arrivals and service.
//!
//! The engine draws two kinds of durations: interarrival gaps at the arrival
//! rate λ and service times at the service rate μ. Both are exponential, so a
//! single rate-parameterized source covers them.
//!
//! # Key Principles
//!
//! 1. **Determinism**: same seed + same call order → same durations
//! 2. **Validated rates**: a [`Rate`] can only hold a finite value > 0, so an
//!    invalid rate is rejected before any simulation state exists
//! 3. **Replaceable source**: [`SampleSource`] lets tests script durations
//!
//! # Example
//!
//! ```
//! use queue_simulator_core_rs::rng::RngManager;
//! use queue_simulator_core_rs::sampling::{Rate, SampleSource};
//!
//! let mut rng = RngManager::new(42);
//! let arrivals = Rate::new(6.0).unwrap();
//! let gap = rng.sample(arrivals);
//! assert!(gap >= 0.0);
//!
//! assert!(Rate::new(0.0).is_none());
//! ```

use crate::rng::RngManager;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A strictly positive, finite event rate (events per unit time).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Rate(f64);

impl Rate {
    /// Returns `None` unless `value` is finite and greater than zero.
    pub fn new(value: f64) -> Option<Self> {
        if value.is_finite() && value > 0.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// Mean duration between events, `1 / rate`.
    pub fn mean_duration(self) -> f64 {
        1.0 / self.0
    }
}

impl TryFrom<f64> for Rate {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Rate::new(value).ok_or_else(|| format!("rate must be finite and > 0, got {}", value))
    }
}

impl From<Rate> for f64 {
    fn from(rate: Rate) -> f64 {
        rate.0
    }
}

/// Source of exponentially distributed, non-negative durations.
///
/// Implementations must be memoryless and rate-parameterized: `sample(rate)`
/// has mean `1 / rate`. Seeded implementations must replay the same sequence
/// for the same call order.
pub trait SampleSource {
    /// Draw one duration with mean `1 / rate`.
    fn sample(&mut self, rate: Rate) -> f64;
}

impl SampleSource for RngManager {
    fn sample(&mut self, rate: Rate) -> f64 {
        self.exponential(rate.get())
    }
}

/// Replays a fixed list of durations, ignoring the requested rate.
///
/// Used to drive the engine through hand-computed scenarios. Once the script
/// is exhausted every further draw returns `f64::INFINITY`, i.e. "never".
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    durations: VecDeque<f64>,
}

impl ScriptedSource {
    pub fn new<I: IntoIterator<Item = f64>>(durations: I) -> Self {
        Self {
            durations: durations.into_iter().collect(),
        }
    }

    /// Durations not yet consumed.
    pub fn remaining(&self) -> usize {
        self.durations.len()
    }
}

impl SampleSource for ScriptedSource {
    fn sample(&mut self, _rate: Rate) -> f64 {
        self.durations.pop_front().unwrap_or(f64::INFINITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_rejects_non_positive_and_non_finite() {
        assert!(Rate::new(0.0).is_none());
        assert!(Rate::new(-1.5).is_none());
        assert!(Rate::new(f64::NAN).is_none());
        assert!(Rate::new(f64::INFINITY).is_none());
        assert_eq!(Rate::new(12.0).map(Rate::get), Some(12.0));
    }

    #[test]
    fn test_rate_mean_duration() {
        let rate = Rate::new(4.0).unwrap();
        assert_eq!(rate.mean_duration(), 0.25);
    }

    #[test]
    fn test_rate_deserialize_validates() {
        let ok: Rate = serde_json::from_str("6.0").unwrap();
        assert_eq!(ok.get(), 6.0);

        let err = serde_json::from_str::<Rate>("-2.0");
        assert!(err.is_err());
    }

    #[test]
    fn test_rng_source_deterministic() {
        let rate = Rate::new(3.0).unwrap();
        let mut a = RngManager::new(99);
        let mut b = RngManager::new(99);

        for _ in 0..100 {
            assert_eq!(a.sample(rate), b.sample(rate));
        }
    }

    #[test]
    fn test_scripted_source_replays_then_never() {
        let rate = Rate::new(1.0).unwrap();
        let mut source = ScriptedSource::new([0.5, 1.25]);

        assert_eq!(source.sample(rate), 0.5);
        assert_eq!(source.sample(rate), 1.25);
        assert_eq!(source.remaining(), 0);
        assert_eq!(source.sample(rate), f64::INFINITY);
    }
}
