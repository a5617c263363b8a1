//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations. Handlers receive a command,
//! run the analyses it asks for, and return a report for a renderer.

pub mod handlers;

pub use handlers::{RunAnalysisCommand, RunAnalysisHandler, SharedBaselineOutputs};
