//! Analysis Report - Prepared structures handed to a report renderer.

use serde::{Deserialize, Serialize};

use super::{Candidate, ClassificationResult, RankedImpact, Tension, TradeoffSummary};

/// Everything computed for one analysis request.
///
/// Sections whose inputs were absent stay `None` or empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub pareto: Option<ParetoReport>,
    /// Ranking of explicit low/high perturbation records (tornado order).
    pub sensitivity: Vec<RankedImpact>,
    /// Ranking of one-at-a-time sweeps collapsed to their extremes.
    pub sweep_ranking: Vec<RankedImpact>,
    /// Ranking of two-parameter grids.
    pub interaction_ranking: Vec<RankedImpact>,
}

impl AnalysisReport {
    /// Returns true if no section produced any output.
    pub fn is_empty(&self) -> bool {
        self.pareto.is_none()
            && self.sensitivity.is_empty()
            && self.sweep_ranking.is_empty()
            && self.interaction_ranking.is_empty()
    }
}

/// Multi-objective section of a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParetoReport {
    pub objective_names: Vec<String>,
    /// Candidates in input order, aligned with `classification.is_pareto`.
    pub candidates: Vec<Candidate>,
    pub classification: ClassificationResult,
    /// Pareto indices ordered along the first objective.
    pub front_order: Vec<usize>,
    /// Objective matrix rescaled to [0, 1] per column.
    pub normalized: Option<Vec<Vec<f64>>>,
    /// Objectives on which every candidate scores the same.
    pub constant_objectives: Vec<usize>,
    /// Pareto member nearest to the ideal point.
    pub compromise: Option<String>,
    pub tensions: Vec<Tension>,
    pub tradeoff_summary: Option<TradeoffSummary>,
}

impl ParetoReport {
    /// Returns the ids of Pareto-optimal candidates in input order.
    pub fn pareto_ids(&self) -> Vec<&str> {
        self.classification
            .pareto_indices()
            .into_iter()
            .filter_map(|i| self.candidates.get(i).map(|c| c.id.as_str()))
            .collect()
    }

    /// Returns the ids along the frontier, as a line through them would be drawn.
    pub fn front_ids(&self) -> Vec<&str> {
        self.front_order
            .iter()
            .filter_map(|&i| self.candidates.get(i).map(|c| c.id.as_str()))
            .collect()
    }
}
