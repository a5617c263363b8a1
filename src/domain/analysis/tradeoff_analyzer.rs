//! Tradeoff Analyzer - Tension analysis for Pareto-optimal candidates.

use serde::{Deserialize, Serialize};

use super::{CandidateSet, ClassificationResult};

/// Tension analysis for a single candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tension {
    pub candidate_id: String,
    /// Objectives where this candidate outperforms at least one other Pareto member.
    pub gains: Vec<String>,
    /// Objectives where this candidate underperforms at least one other Pareto member.
    pub losses: Vec<String>,
}

impl Tension {
    /// Creates a new tension record.
    pub fn new(candidate_id: impl Into<String>) -> Self {
        Self {
            candidate_id: candidate_id.into(),
            gains: Vec::new(),
            losses: Vec::new(),
        }
    }

    /// Creates a tension with gains and losses.
    pub fn with_tradeoffs(
        candidate_id: impl Into<String>,
        gains: Vec<String>,
        losses: Vec<String>,
    ) -> Self {
        Self {
            candidate_id: candidate_id.into(),
            gains,
            losses,
        }
    }

    /// Returns true if this candidate has pure tradeoffs (both gains and losses).
    ///
    /// Among Pareto members a gain always comes with a loss, so a tension
    /// without tradeoffs has neither.
    pub fn has_tradeoffs(&self) -> bool {
        !self.gains.is_empty() && !self.losses.is_empty()
    }
}

/// Summary of tradeoff analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeoffSummary {
    pub total_candidates: usize,
    /// Candidates that both gain and lose against another Pareto member.
    pub contested_candidates: usize,
    pub most_balanced: Option<String>,
    pub most_polarizing: Option<String>,
}

/// Analyzer for candidate tensions and tradeoffs.
pub struct TradeoffAnalyzer;

impl TradeoffAnalyzer {
    /// Analyzes tensions between the Pareto-optimal candidates of a set.
    ///
    /// A tension exists when choosing one candidate means:
    /// - Gaining on some objectives (where it beats another Pareto member)
    /// - Losing on other objectives (where another Pareto member beats it)
    ///
    /// `classification` must come from classifying `set` with `set`'s directions.
    ///
    /// # Edge Cases
    /// - Empty set: Returns empty Vec
    /// - Single Pareto member: Returns single tension with empty gains/losses
    ///
    /// # Panics
    /// If `classification` was produced from a different batch than `set`.
    pub fn analyze_tensions(set: &CandidateSet, classification: &ClassificationResult) -> Vec<Tension> {
        let viable = classification.pareto_indices();

        if viable.is_empty() {
            return Vec::new();
        }

        if viable.len() == 1 {
            return vec![Tension::new(set.candidates[viable[0]].id.clone())];
        }

        let mut tensions = Vec::with_capacity(viable.len());

        for &i in &viable {
            let mine = &set.candidates[i].objectives;
            let mut gains = Vec::new();
            let mut losses = Vec::new();

            for (obj, direction) in classification.directions.iter().enumerate() {
                let mut gained = false;
                let mut lost = false;

                // Compare against OTHER Pareto members
                for &j in &viable {
                    if i == j {
                        continue;
                    }
                    let theirs = set.candidates[j].objectives[obj];
                    gained |= direction.is_better(mine[obj], theirs);
                    lost |= direction.is_better(theirs, mine[obj]);
                }

                if gained {
                    gains.push(set.objective_name(obj));
                }
                if lost {
                    losses.push(set.objective_name(obj));
                }
            }

            tensions.push(Tension::with_tradeoffs(
                set.candidates[i].id.clone(),
                gains,
                losses,
            ));
        }

        tensions
    }

    /// Summarizes tradeoff analysis results.
    pub fn summarize_tradeoffs(tensions: &[Tension]) -> TradeoffSummary {
        if tensions.is_empty() {
            return TradeoffSummary {
                total_candidates: 0,
                contested_candidates: 0,
                most_balanced: None,
                most_polarizing: None,
            };
        }

        let contested_candidates = tensions.iter().filter(|t| t.has_tradeoffs()).count();

        // Most balanced: smallest absolute difference between gains and losses
        let most_balanced = tensions
            .iter()
            .min_by_key(|t| t.gains.len().abs_diff(t.losses.len()))
            .map(|t| t.candidate_id.clone());

        // Most polarizing: largest total of gains + losses.
        // max_by_key keeps the last maximum, so scan in reverse to favour input order.
        let most_polarizing = tensions
            .iter()
            .rev()
            .max_by_key(|t| Self::tradeoff_intensity(t))
            .map(|t| t.candidate_id.clone());

        TradeoffSummary {
            total_candidates: tensions.len(),
            contested_candidates,
            most_balanced,
            most_polarizing,
        }
    }

    /// Calculates the "tradeoff intensity" for a candidate.
    /// Higher values mean more objectives are in contention.
    pub fn tradeoff_intensity(tension: &Tension) -> usize {
        tension.gains.len() + tension.losses.len()
    }
}
