//! Queueing discipline
//!
//! The simulator serves a single first-come-first-served line. The discipline
//! owns the waiting line and the server status and makes the two decisions the
//! engine needs:
//!
//! - on **arrival**: start service immediately or join the line
//! - on **departure**: hand the server to the head of the line or go idle
//!
//! No priorities, reneging, or balking.

pub mod fifo;

pub use fifo::{Admission, FifoDiscipline};
