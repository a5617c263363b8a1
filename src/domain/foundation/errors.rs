//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors raised when analysis input violates a component's contract.
///
/// Every check runs at the boundary of a component call, before any
/// computation, so an error never comes with a partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("Field '{field}' expected {expected} entries, got {actual}")]
    ShapeMismatch {
        field: String,
        expected: usize,
        actual: usize,
    },

    #[error("Row {row} has {actual} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("At least {min} objectives are required, got {actual}")]
    TooFewObjectives { min: usize, actual: usize },

    #[error("Field '{field}' has a non-finite value at index {index}: {value}")]
    NonFiniteValue {
        field: String,
        index: usize,
        value: f64,
    },

    #[error("Field '{field}' cannot be empty")]
    EmptyInput { field: String },
}

impl AnalysisError {
    /// Creates a shape mismatch error.
    pub fn shape_mismatch(field: impl Into<String>, expected: usize, actual: usize) -> Self {
        AnalysisError::ShapeMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }

    /// Creates a ragged row error.
    pub fn ragged_row(row: usize, expected: usize, actual: usize) -> Self {
        AnalysisError::RaggedRow {
            row,
            expected,
            actual,
        }
    }

    /// Creates a non-finite value error.
    pub fn non_finite(field: impl Into<String>, index: usize, value: f64) -> Self {
        AnalysisError::NonFiniteValue {
            field: field.into(),
            index,
            value,
        }
    }

    /// Creates an empty input error.
    pub fn empty_input(field: impl Into<String>) -> Self {
        AnalysisError::EmptyInput {
            field: field.into(),
        }
    }

    /// Returns the stable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AnalysisError::ShapeMismatch { .. } => ErrorCode::ShapeMismatch,
            AnalysisError::RaggedRow { .. } => ErrorCode::RaggedRow,
            AnalysisError::TooFewObjectives { .. } => ErrorCode::TooFewObjectives,
            AnalysisError::NonFiniteValue { .. } => ErrorCode::NonFiniteValue,
            AnalysisError::EmptyInput { .. } => ErrorCode::EmptyInput,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Shape errors
    ShapeMismatch,
    RaggedRow,
    TooFewObjectives,
    EmptyInput,

    // Value errors
    NonFiniteValue,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ShapeMismatch => "SHAPE_MISMATCH",
            ErrorCode::RaggedRow => "RAGGED_ROW",
            ErrorCode::TooFewObjectives => "TOO_FEW_OBJECTIVES",
            ErrorCode::EmptyInput => "EMPTY_INPUT",
            ErrorCode::NonFiniteValue => "NON_FINITE_VALUE",
        };
        write!(f, "{}", s)
    }
}
