//! Core simulation primitives: the event clock.

pub mod time;

pub use time::{NextEvent, SimulationClock};
