//! Scale Normalizer - Per-column min-max scaling for multi-axis display.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ensure_rectangular, AnalysisError};

/// Observed bounds of one matrix column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnRange {
    pub min: f64,
    pub max: f64,
}

impl ColumnRange {
    /// Returns `max - min`.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Returns true if every value in the column is equal.
    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }

    /// Maps `value` into [0, 1]; a degenerate column maps to 0.
    pub fn scale(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            0.0
        } else {
            (value - self.min) / self.span()
        }
    }
}

/// Column scaling functions.
pub struct ScaleNormalizer;

impl ScaleNormalizer {
    /// Rescales every column of `matrix` to [0, 1] independently.
    ///
    /// # Algorithm
    /// For each column: `(v - min) / (max - min)`
    ///
    /// # Edge Cases
    /// - Empty matrix: Returns empty matrix
    /// - Constant column: Every value becomes 0
    ///
    /// # Errors
    /// Rows of different widths or any non-finite value.
    pub fn normalize(matrix: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, AnalysisError> {
        let ranges = Self::column_ranges(matrix)?;

        Ok(matrix
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&ranges)
                    .map(|(&value, range)| range.scale(value))
                    .collect()
            })
            .collect())
    }

    /// Computes the min and max of every column.
    ///
    /// The width is taken from the first row.
    pub fn column_ranges(matrix: &[Vec<f64>]) -> Result<Vec<ColumnRange>, AnalysisError> {
        let Some(first) = matrix.first() else {
            return Ok(Vec::new());
        };
        ensure_rectangular("matrix", matrix, first.len())?;

        let mut ranges: Vec<ColumnRange> = first
            .iter()
            .map(|&v| ColumnRange { min: v, max: v })
            .collect();

        for row in &matrix[1..] {
            for (range, &value) in ranges.iter_mut().zip(row) {
                range.min = range.min.min(value);
                range.max = range.max.max(value);
            }
        }

        Ok(ranges)
    }

    /// Finds columns that do not distinguish between rows.
    ///
    /// # Edge Cases
    /// - Fewer than two rows: Returns empty Vec (no comparison possible)
    pub fn find_constant_columns(matrix: &[Vec<f64>]) -> Result<Vec<usize>, AnalysisError> {
        let ranges = Self::column_ranges(matrix)?;

        if matrix.len() < 2 {
            return Ok(Vec::new());
        }

        Ok(ranges
            .iter()
            .enumerate()
            .filter(|(_, range)| range.is_degenerate())
            .map(|(i, _)| i)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: &[Vec<f64>], b: &[Vec<f64>]) {
        assert_eq!(a.len(), b.len());
        for (ra, rb) in a.iter().zip(b) {
            for (x, y) in ra.iter().zip(rb) {
                assert!((x - y).abs() < 1e-12, "{} != {}", x, y);
            }
        }
    }

    #[test]
    fn normalize_empty_matrix() {
        assert!(ScaleNormalizer::normalize(&[]).unwrap().is_empty());
    }

    #[test]
    fn normalize_scales_columns_independently() {
        let matrix = vec![vec![0.0, 100.0], vec![5.0, 300.0], vec![10.0, 200.0]];
        let normalized = ScaleNormalizer::normalize(&matrix).unwrap();
        assert_close(
            &normalized,
            &[vec![0.0, 0.0], vec![0.5, 1.0], vec![1.0, 0.5]],
        );
    }

    #[test]
    fn normalize_constant_column_is_zero() {
        let matrix = vec![vec![5.0, 1.0], vec![5.0, 2.0], vec![5.0, 3.0]];
        let normalized = ScaleNormalizer::normalize(&matrix).unwrap();
        let first_column: Vec<f64> = normalized.iter().map(|r| r[0]).collect();
        assert_eq!(first_column, vec![0.0, 0.0, 0.0]);
        assert!(normalized.iter().all(|r| r.iter().all(|v| v.is_finite())));
    }

    #[test]
    fn normalize_single_row_is_all_zero() {
        let normalized = ScaleNormalizer::normalize(&[vec![3.0, -7.0]]).unwrap();
        assert_eq!(normalized, vec![vec![0.0, 0.0]]);
    }

    #[test]
    fn normalize_handles_negative_values() {
        let matrix = vec![vec![-10.0], vec![10.0], vec![0.0]];
        let normalized = ScaleNormalizer::normalize(&matrix).unwrap();
        assert_close(&normalized, &[vec![0.0], vec![1.0], vec![0.5]]);
    }

    #[test]
    fn normalize_is_idempotent_on_normalized_input() {
        let matrix = vec![vec![2.0, 9.0], vec![4.0, 1.0], vec![3.0, 5.0]];
        let once = ScaleNormalizer::normalize(&matrix).unwrap();
        let twice = ScaleNormalizer::normalize(&once).unwrap();
        assert_close(&once, &twice);
    }

    #[test]
    fn normalize_rejects_ragged_rows() {
        let matrix = vec![vec![1.0, 2.0], vec![1.0]];
        assert_eq!(
            ScaleNormalizer::normalize(&matrix).unwrap_err(),
            AnalysisError::ragged_row(1, 2, 1)
        );
    }

    #[test]
    fn normalize_rejects_nan() {
        let matrix = vec![vec![1.0, 2.0], vec![f64::NAN, 1.0]];
        assert!(matches!(
            ScaleNormalizer::normalize(&matrix).unwrap_err(),
            AnalysisError::NonFiniteValue { index: 2, .. }
        ));
    }

    #[test]
    fn column_ranges_report_bounds() {
        let matrix = vec![vec![1.0, 8.0], vec![4.0, 2.0]];
        let ranges = ScaleNormalizer::column_ranges(&matrix).unwrap();
        assert_eq!(ranges[0], ColumnRange { min: 1.0, max: 4.0 });
        assert_eq!(ranges[1].span(), 6.0);
    }

    #[test]
    fn constant_columns_found() {
        let matrix = vec![vec![1.0, 5.0, 2.0], vec![3.0, 5.0, 2.0]];
        assert_eq!(ScaleNormalizer::find_constant_columns(&matrix).unwrap(), vec![1, 2]);
    }

    #[test]
    fn constant_columns_single_row() {
        let matrix = vec![vec![1.0, 5.0]];
        assert!(ScaleNormalizer::find_constant_columns(&matrix).unwrap().is_empty());
    }
}
