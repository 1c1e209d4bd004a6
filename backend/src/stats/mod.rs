//! Statistics: the reducer, the result record, and the analytic M/M/1 model.

pub mod reducer;
pub mod result;
pub mod theory;

pub use reducer::reduce;
pub use result::SimulationResult;
pub use theory::{Mm1Theory, TheoryComparison};
