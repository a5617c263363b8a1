//! Input guards shared by the analysis components.

use super::AnalysisError;

/// Rejects the first NaN or infinite value in `values`.
pub fn ensure_finite(field: &str, values: &[f64]) -> Result<(), AnalysisError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(AnalysisError::non_finite(field, index, values[index])),
        None => Ok(()),
    }
}

/// Rejects a single non-finite scalar reported at `index`.
pub fn ensure_finite_value(field: &str, index: usize, value: f64) -> Result<(), AnalysisError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AnalysisError::non_finite(field, index, value))
    }
}

/// Checks that every row has `width` finite values.
///
/// Non-finite values are reported with their flattened row-major index.
pub fn ensure_rectangular(field: &str, rows: &[Vec<f64>], width: usize) -> Result<(), AnalysisError> {
    for (row, values) in rows.iter().enumerate() {
        if values.len() != width {
            return Err(AnalysisError::ragged_row(row, width, values.len()));
        }
        if let Some(col) = values.iter().position(|v| !v.is_finite()) {
            return Err(AnalysisError::non_finite(field, row * width + col, values[col]));
        }
    }
    Ok(())
}
