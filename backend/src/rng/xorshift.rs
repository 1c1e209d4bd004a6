//! xorshift64* random number generator
//!
//! A small, fast PRNG that is fully deterministic given its seed.
//!
//! # Algorithm
//!
//! xorshift64* passes TestU01's BigCrush. It keeps 64 bits of state and
//! scrambles the output with a multiplicative step.
//!
//! # Determinism
//!
//! Same seed → same sequence of draws. Regression tests for the queue engine
//! rely on this: two runs with identical parameters and seed must produce
//! bit-identical results.

use serde::{Deserialize, Serialize};

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use queue_simulator_core_rs::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let raw = rng.next();
/// let unit = rng.next_f64();
/// assert!(unit >= 0.0 && unit < 1.0);
/// # let _ = raw;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    /// Internal state (64-bit, never zero)
    state: u64,
}

impl RngManager {
    /// Create a new RNG with given seed
    ///
    /// A zero seed is mapped to 1 because xorshift has an all-zero fixed point.
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u64 value
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Get current RNG state
    ///
    /// `RngManager::new(state)` resumes the sequence from this point.
    pub fn get_state(&self) -> u64 {
        self.state
    }

    /// Generate random f64 in range [0.0, 1.0)
    ///
    /// Uses the top 53 bits so every value is exactly representable.
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next();
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Draw from an exponential distribution with the given rate (mean `1/rate`).
    ///
    /// Inversion on `1 - u` keeps the logarithm argument in (0, 1], so the
    /// draw is always finite and non-negative. The caller guarantees
    /// `rate > 0`; see [`crate::sampling::Rate`] for the validated entry point.
    ///
    /// # Example
    /// ```
    /// use queue_simulator_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(42);
    /// let wait = rng.exponential(12.0);
    /// assert!(wait >= 0.0 && wait.is_finite());
    /// ```
    pub fn exponential(&mut self, rate: f64) -> f64 {
        debug_assert!(rate > 0.0, "exponential rate must be positive");
        let u = self.next_f64();
        -(1.0 - u).ln() / rate
    }
}
