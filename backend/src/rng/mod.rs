//! Deterministic random number generation
//!
//! Uses the xorshift64* algorithm for fast, reproducible sampling.
//! All randomness consumed by the engine MUST come from an owned `RngManager`;
//! there is no process-wide generator.

mod xorshift;

pub use xorshift::RngManager;
