//! Interaction Grid - Output over a two-parameter test grid.

use serde::{Deserialize, Serialize};

use super::{RankedImpact, SensitivityRanker, SensitivityRecord};
use crate::domain::foundation::{ensure_finite, ensure_rectangular, AnalysisError};

/// Output observed while varying two parameters together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionGrid {
    pub x_parameter: String,
    pub y_parameter: String,
    pub x_values: Vec<f64>,
    pub y_values: Vec<f64>,
    /// Rows indexed by `y_values`, columns by `x_values`.
    pub outputs: Vec<Vec<f64>>,
}

impl InteractionGrid {
    /// Creates a new grid.
    pub fn new(
        x_parameter: impl Into<String>,
        y_parameter: impl Into<String>,
        x_values: Vec<f64>,
        y_values: Vec<f64>,
        outputs: Vec<Vec<f64>>,
    ) -> Self {
        Self {
            x_parameter: x_parameter.into(),
            y_parameter: y_parameter.into(),
            x_values,
            y_values,
            outputs,
        }
    }

    /// Returns the label used for this parameter pair.
    pub fn label(&self) -> String {
        format!("{} × {}", self.x_parameter, self.y_parameter)
    }

    /// Checks axes are non-empty and the output matrix matches them.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.x_values.is_empty() {
            return Err(AnalysisError::empty_input("x_values"));
        }
        if self.y_values.is_empty() {
            return Err(AnalysisError::empty_input("y_values"));
        }
        ensure_finite("x_values", &self.x_values)?;
        ensure_finite("y_values", &self.y_values)?;

        if self.outputs.len() != self.y_values.len() {
            return Err(AnalysisError::shape_mismatch(
                "outputs",
                self.y_values.len(),
                self.outputs.len(),
            ));
        }
        ensure_rectangular("outputs", &self.outputs, self.x_values.len())
    }

    /// Returns the smallest and largest output on the grid.
    pub fn output_range(&self) -> Result<(f64, f64), AnalysisError> {
        self.validate()?;

        let mut values = self.outputs.iter().flatten().copied();
        // validate() guarantees at least one cell
        let first = values.next().unwrap_or_default();
        Ok(values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }

    /// Collapses the grid into a record whose low and high outputs are the
    /// grid's extremes.
    pub fn to_record(&self, baseline: f64) -> Result<SensitivityRecord, AnalysisError> {
        let (min, max) = self.output_range()?;
        Ok(SensitivityRecord::new(self.label(), baseline, min, max))
    }

    /// Ranks parameter pairs with the same comparator as single parameters.
    pub fn rank_interactions(
        baseline: f64,
        grids: &[InteractionGrid],
    ) -> Result<Vec<RankedImpact>, AnalysisError> {
        let records = grids
            .iter()
            .map(|grid| grid.to_record(baseline))
            .collect::<Result<Vec<_>, _>>()?;

        SensitivityRanker::rank(&records)
    }
}
