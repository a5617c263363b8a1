//! Analysis Module - Pure domain services for trade-off analysis.
//!
//! This module contains stateless functions that classify, bound, rescale
//! and rank analysis inputs supplied by the caller.
//!
//! # Components
//!
//! - `CandidateSet` - Named objectives, directions and scored candidates
//! - `DominanceClassifier` - Pareto membership, ideal and nadir points
//! - `ScaleNormalizer` - Per-column min-max scaling for multi-axis display
//! - `SensitivityRanker` - Perturbation impact ranking (tornado ordering)
//! - `SensitivitySweep` - One-at-a-time parameter sweeps (spider data)
//! - `InteractionGrid` - Two-parameter output grids (heatmap data)
//! - `TradeoffAnalyzer` - Tension analysis between Pareto-optimal candidates
//! - `AnalysisReport` - Prepared results handed to a renderer
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take
//! borrowed inputs, validate them up front, and return owned results. No
//! ports or adapters are needed since there is no I/O.

mod candidate_set;
mod dominance_classifier;
mod interaction_grid;
mod report;
mod scale_normalizer;
mod sensitivity_ranker;
mod sensitivity_sweep;
mod tradeoff_analyzer;

// Re-export all public types
pub use candidate_set::{validate_batch, Candidate, CandidateSet, CandidateSetBuilder, MIN_OBJECTIVES};
pub use dominance_classifier::{
    ClassificationResult, DominanceClassifier, DominatedCandidate, ReferencePoints,
};
pub use interaction_grid::InteractionGrid;
pub use report::{AnalysisReport, ParetoReport};
pub use scale_normalizer::{ColumnRange, ScaleNormalizer};
pub use sensitivity_ranker::{RankedImpact, SensitivityRanker, SensitivityRecord};
pub use sensitivity_sweep::SensitivitySweep;
pub use tradeoff_analyzer::{Tension, TradeoffAnalyzer, TradeoffSummary};
