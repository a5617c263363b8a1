//! Sensitivity Sweep - Output response as one parameter is varied.

use serde::{Deserialize, Serialize};

use super::SensitivityRecord;
use crate::domain::foundation::{ensure_finite, ensure_finite_value, AnalysisError};

/// Outputs observed while sweeping a single parameter, others held at baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivitySweep {
    pub parameter: String,
    /// The parameter's baseline value.
    pub baseline_value: f64,
    /// Tested parameter values.
    pub values: Vec<f64>,
    /// Model output for each tested value.
    pub outputs: Vec<f64>,
}

impl SensitivitySweep {
    /// Creates a new sweep.
    pub fn new(
        parameter: impl Into<String>,
        baseline_value: f64,
        values: Vec<f64>,
        outputs: Vec<f64>,
    ) -> Self {
        Self {
            parameter: parameter.into(),
            baseline_value,
            values,
            outputs,
        }
    }

    /// Checks the sweep has aligned, finite, non-empty series.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.values.is_empty() {
            return Err(AnalysisError::empty_input("values"));
        }
        if self.outputs.len() != self.values.len() {
            return Err(AnalysisError::shape_mismatch(
                "outputs",
                self.values.len(),
                self.outputs.len(),
            ));
        }
        ensure_finite_value("baseline_value", 0, self.baseline_value)?;
        ensure_finite("values", &self.values)?;
        ensure_finite("outputs", &self.outputs)
    }

    /// Expresses each tested value as a percentage of the baseline value.
    ///
    /// A zero baseline cannot be divided by, so values are scaled by 100 instead.
    pub fn percent_of_baseline(&self) -> Result<Vec<f64>, AnalysisError> {
        self.validate()?;

        Ok(self
            .values
            .iter()
            .map(|&v| {
                if self.baseline_value != 0.0 {
                    v / self.baseline_value * 100.0
                } else {
                    v * 100.0
                }
            })
            .collect())
    }

    /// Collapses the sweep into a low/high record for ranking.
    ///
    /// The low output is the one observed at the smallest tested value and the
    /// high output the one at the largest. Repeated extremes use their first
    /// occurrence.
    pub fn to_record(&self, baseline_output: f64) -> Result<SensitivityRecord, AnalysisError> {
        self.validate()?;

        let mut low_index = 0;
        let mut high_index = 0;
        for (i, &value) in self.values.iter().enumerate() {
            if value < self.values[low_index] {
                low_index = i;
            }
            if value > self.values[high_index] {
                high_index = i;
            }
        }

        Ok(SensitivityRecord::new(
            self.parameter.clone(),
            baseline_output,
            self.outputs[low_index],
            self.outputs[high_index],
        ))
    }
}
