//! Candidate Set - Core data structure for multi-objective analysis.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ensure_finite, AnalysisError, Direction};

/// Minimum number of objectives for a trade-off to exist.
pub const MIN_OBJECTIVES: usize = 2;

/// A candidate solution scored on every objective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    /// Objective scores, in the batch's objective order.
    pub objectives: Vec<f64>,
}

impl Candidate {
    /// Creates a new candidate.
    pub fn new(id: impl Into<String>, objectives: Vec<f64>) -> Self {
        Self {
            id: id.into(),
            objectives,
        }
    }

    /// Returns the number of objective scores.
    pub fn objective_count(&self) -> usize {
        self.objectives.len()
    }
}

/// Checks a batch against its directions before any comparison happens.
///
/// The direction count must be at least [`MIN_OBJECTIVES`] and equal the
/// first candidate's objective count; every later candidate must match
/// that width.
pub fn validate_batch(candidates: &[Candidate], directions: &[Direction]) -> Result<(), AnalysisError> {
    if directions.len() < MIN_OBJECTIVES {
        return Err(AnalysisError::TooFewObjectives {
            min: MIN_OBJECTIVES,
            actual: directions.len(),
        });
    }

    let Some(first) = candidates.first() else {
        return Ok(());
    };
    let width = first.objective_count();
    if width != directions.len() {
        return Err(AnalysisError::shape_mismatch("directions", width, directions.len()));
    }

    for (row, candidate) in candidates.iter().enumerate() {
        if candidate.objective_count() != width {
            return Err(AnalysisError::ragged_row(row, width, candidate.objective_count()));
        }
        ensure_finite(&format!("candidates[{}].objectives", row), &candidate.objectives)?;
    }

    Ok(())
}

/// Named objectives, their directions, and the candidates scored on them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateSet {
    /// Ordered list of objective names.
    pub objective_names: Vec<String>,
    /// One direction per objective; empty means "use the caller's default".
    #[serde(default)]
    pub directions: Vec<Direction>,
    /// Candidates in input order.
    pub candidates: Vec<Candidate>,
}

impl CandidateSet {
    /// Creates an empty candidate set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a builder for constructing a candidate set.
    pub fn builder() -> CandidateSetBuilder {
        CandidateSetBuilder::new()
    }

    /// Returns true if the set has no candidates.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Returns the number of candidates.
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Returns the number of objectives.
    pub fn objective_count(&self) -> usize {
        self.objective_names.len()
    }

    /// Returns the name of objective `index`, falling back to a positional label.
    pub fn objective_name(&self, index: usize) -> String {
        self.objective_names
            .get(index)
            .cloned()
            .unwrap_or_else(|| format!("objective {}", index + 1))
    }

    /// Returns one direction per objective, filling with `default` when none were given.
    ///
    /// # Errors
    /// Explicit directions whose count differs from the number of objective names.
    pub fn resolved_directions(&self, default: Direction) -> Result<Vec<Direction>, AnalysisError> {
        if self.directions.is_empty() {
            return Ok(vec![default; self.objective_count()]);
        }
        if self.directions.len() != self.objective_count() {
            return Err(AnalysisError::shape_mismatch(
                "directions",
                self.objective_count(),
                self.directions.len(),
            ));
        }
        Ok(self.directions.clone())
    }

    /// Returns the objective matrix, one row per candidate.
    pub fn rows(&self) -> Vec<Vec<f64>> {
        self.candidates.iter().map(|c| c.objectives.clone()).collect()
    }
}

/// Builder for constructing CandidateSet instances.
#[derive(Debug, Default)]
pub struct CandidateSetBuilder {
    objective_names: Vec<String>,
    directions: Vec<Direction>,
    candidates: Vec<Candidate>,
}

impl CandidateSetBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the objectives.
    pub fn objectives(mut self, names: Vec<impl Into<String>>) -> Self {
        self.objective_names = names.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Sets the optimization directions.
    pub fn directions(mut self, directions: Vec<Direction>) -> Self {
        self.directions = directions;
        self
    }

    /// Adds a candidate.
    pub fn candidate(mut self, id: impl Into<String>, objectives: Vec<f64>) -> Self {
        self.candidates.push(Candidate::new(id, objectives));
        self
    }

    /// Builds the candidate set.
    pub fn build(self) -> CandidateSet {
        CandidateSet {
            objective_names: self.objective_names,
            directions: self.directions,
            candidates: self.candidates,
        }
    }
}
