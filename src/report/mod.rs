//! Reporting on warehouse runs.
//!
//! The models compute costs; this module presents them.
//!
//! - `Narrator` writes the step-by-step console transcript of a run.
//! - `CostSummary` is the same information as a serializable tree.

mod narrator;
mod summary;

pub use narrator::Narrator;
pub use summary::{CostSummary, LineItem, OperationSummary, ProcessSummary};
