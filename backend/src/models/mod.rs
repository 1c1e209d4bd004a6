//! Domain models for the queue simulator

pub mod customer;
pub mod event;
pub mod ledger;
pub mod state;
pub mod trace;

// Re-exports
pub use customer::CustomerRecord;
pub use event::{Event, EventLog};
pub use ledger::StateTimeLedger;
pub use state::{PopulationState, ServerStatus};
pub use trace::TraceRecorder;
