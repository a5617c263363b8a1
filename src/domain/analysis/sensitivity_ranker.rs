//! Sensitivity Ranker - One-at-a-time perturbation impact ranking.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::foundation::{ensure_finite_value, AnalysisError};

/// Output of a model at baseline and with one parameter perturbed low and high.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityRecord {
    pub parameter: String,
    pub baseline: f64,
    pub low: f64,
    pub high: f64,
}

impl SensitivityRecord {
    /// Creates a new sensitivity record.
    pub fn new(parameter: impl Into<String>, baseline: f64, low: f64, high: f64) -> Self {
        Self {
            parameter: parameter.into(),
            baseline,
            low,
            high,
        }
    }

    /// Signed output change for the low perturbation.
    pub fn low_impact(&self) -> f64 {
        self.low - self.baseline
    }

    /// Signed output change for the high perturbation.
    pub fn high_impact(&self) -> f64 {
        self.high - self.baseline
    }

    /// Sum of absolute deviations from baseline.
    pub fn total_impact(&self) -> f64 {
        self.low_impact().abs() + self.high_impact().abs()
    }

    fn validate(&self, index: usize) -> Result<(), AnalysisError> {
        ensure_finite_value("baseline", index, self.baseline)?;
        ensure_finite_value("low", index, self.low)?;
        ensure_finite_value("high", index, self.high)
    }
}

/// A record's impacts together with its position in the ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedImpact {
    pub parameter: String,
    pub low_impact: f64,
    pub high_impact: f64,
    pub total_impact: f64,
    /// 1-based, 1 = most impactful.
    pub rank: usize,
    /// Position of the source record in the input.
    pub input_index: usize,
}

impl RankedImpact {
    /// Returns true if the low and high perturbations move the output in
    /// opposite directions (or one of them leaves it unchanged).
    pub fn is_monotonic(&self) -> bool {
        self.low_impact.signum() != self.high_impact.signum()
            || self.low_impact == 0.0
            || self.high_impact == 0.0
    }
}

/// Sensitivity ranking functions.
pub struct SensitivityRanker;

impl SensitivityRanker {
    /// Ranks records by total impact, largest first.
    ///
    /// Ranks are contiguous from 1. Equal totals keep input order, so the
    /// first-seen record gets the lower rank. Duplicate parameter names are
    /// ranked as separate records.
    ///
    /// # Errors
    /// Any non-finite baseline, low or high output.
    pub fn rank(records: &[SensitivityRecord]) -> Result<Vec<RankedImpact>, AnalysisError> {
        for (index, record) in records.iter().enumerate() {
            record.validate(index)?;
        }

        let mut impacts: Vec<RankedImpact> = records
            .iter()
            .enumerate()
            .map(|(input_index, record)| RankedImpact {
                parameter: record.parameter.clone(),
                low_impact: record.low_impact(),
                high_impact: record.high_impact(),
                total_impact: record.total_impact(),
                rank: 0,
                input_index,
            })
            .collect();

        // sort_by is stable: ties keep input order
        impacts.sort_by(|a, b| Self::compare_impact(a.total_impact, b.total_impact));

        for (position, impact) in impacts.iter_mut().enumerate() {
            impact.rank = position + 1;
        }

        Ok(impacts)
    }

    /// Orders total impacts from most to least sensitive.
    ///
    /// Every sensitivity ordering in the crate goes through this comparator.
    pub fn compare_impact(a: f64, b: f64) -> Ordering {
        b.total_cmp(&a)
    }

    /// Builds records for parameters that share one baseline output.
    ///
    /// # Errors
    /// `lows` or `highs` not matching the number of names.
    pub fn from_outputs(
        names: &[String],
        baseline: f64,
        lows: &[f64],
        highs: &[f64],
    ) -> Result<Vec<SensitivityRecord>, AnalysisError> {
        if lows.len() != names.len() {
            return Err(AnalysisError::shape_mismatch("low_values", names.len(), lows.len()));
        }
        if highs.len() != names.len() {
            return Err(AnalysisError::shape_mismatch("high_values", names.len(), highs.len()));
        }

        Ok(names
            .iter()
            .zip(lows.iter().zip(highs))
            .map(|(name, (&low, &high))| SensitivityRecord::new(name.clone(), baseline, low, high))
            .collect())
    }

    /// Returns the most sensitive parameter of a ranking.
    pub fn most_sensitive(ranked: &[RankedImpact]) -> Option<&RankedImpact> {
        ranked.iter().find(|r| r.rank == 1)
    }
}
