//! Analysis command handlers.
//!
//! Handlers that run the domain analyses on caller-supplied data.

mod run_analysis;

pub use run_analysis::{RunAnalysisCommand, RunAnalysisHandler, SharedBaselineOutputs};
