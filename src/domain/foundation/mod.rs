//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects, input guards and error types
//! that form the vocabulary of the trade-off analysis domain.

mod direction;
mod errors;
mod validation;

pub use direction::Direction;
pub use errors::{AnalysisError, ErrorCode};
pub use validation::{ensure_finite, ensure_finite_value, ensure_rectangular};
