//! Dominance Classifier - Pareto membership and reference points.

use serde::{Deserialize, Serialize};

use super::candidate_set::{validate_batch, Candidate};
use crate::domain::foundation::{AnalysisError, Direction};

/// A candidate that is dominated by another member of its batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DominatedCandidate {
    pub index: usize,
    pub candidate_id: String,
    /// First dominator found while scanning the batch in input order.
    pub dominated_by_index: usize,
    pub dominated_by_id: String,
    /// Objective indices on which the dominator is strictly better.
    pub better_on: Vec<usize>,
}

impl DominatedCandidate {
    /// Describes why this candidate is dominated, naming objectives by `names`.
    pub fn explanation(&self, names: &[String]) -> String {
        let better_on: Vec<String> = self
            .better_on
            .iter()
            .map(|&i| {
                names
                    .get(i)
                    .cloned()
                    .unwrap_or_else(|| format!("objective {}", i + 1))
            })
            .collect();

        format!(
            "{} is at least as good on all objectives and strictly better on: {}",
            self.dominated_by_id,
            better_on.join(", ")
        )
    }
}

/// Ideal and nadir points bounding the trade-off space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoints {
    /// Best observed value per objective over the whole batch.
    pub ideal: Vec<f64>,
    /// Worst observed value per objective over the Pareto set only.
    pub nadir: Vec<f64>,
}

/// Outcome of classifying one batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Pareto membership, aligned index-for-index with the input batch.
    pub is_pareto: Vec<bool>,
    pub dominated: Vec<DominatedCandidate>,
    /// `None` for an empty batch.
    pub reference_points: Option<ReferencePoints>,
    pub directions: Vec<Direction>,
}

impl ClassificationResult {
    /// Returns true if the classified batch was empty.
    pub fn is_empty(&self) -> bool {
        self.is_pareto.is_empty()
    }

    /// Returns the number of Pareto-optimal candidates.
    pub fn pareto_count(&self) -> usize {
        self.is_pareto.iter().filter(|&&p| p).count()
    }

    /// Returns the indices of Pareto-optimal candidates in input order.
    pub fn pareto_indices(&self) -> Vec<usize> {
        self.is_pareto
            .iter()
            .enumerate()
            .filter(|(_, &p)| p)
            .map(|(i, _)| i)
            .collect()
    }

    /// Returns the indices of dominated candidates in input order.
    pub fn dominated_indices(&self) -> Vec<usize> {
        self.is_pareto
            .iter()
            .enumerate()
            .filter(|(_, &p)| !p)
            .map(|(i, _)| i)
            .collect()
    }

    /// Returns the ideal point, if the batch was non-empty.
    pub fn ideal(&self) -> Option<&[f64]> {
        self.reference_points.as_ref().map(|r| r.ideal.as_slice())
    }

    /// Returns the nadir point, if the batch was non-empty.
    pub fn nadir(&self) -> Option<&[f64]> {
        self.reference_points.as_ref().map(|r| r.nadir.as_slice())
    }

    /// Returns Pareto indices ordered along the first objective.
    ///
    /// This is the order in which frontier points are connected when drawn.
    /// Equal first-objective values keep input order.
    ///
    /// # Panics
    /// If `candidates` is not the batch this result was classified from.
    pub fn front_order(&self, candidates: &[Candidate]) -> Vec<usize> {
        let mut order = self.pareto_indices();
        order.sort_by(|&a, &b| {
            let va = candidates[a].objectives[0];
            let vb = candidates[b].objectives[0];
            va.total_cmp(&vb)
        });
        order
    }
}

/// Pareto dominance analysis functions.
pub struct DominanceClassifier;

impl DominanceClassifier {
    /// Partitions a batch into Pareto-optimal and dominated candidates.
    ///
    /// # Algorithm
    /// All-pairs scan: candidate `i` is dominated as soon as any `j != i`
    /// dominates it. O(N²·M) for N candidates and M objectives.
    ///
    /// # Edge Cases
    /// - Empty batch: empty membership, no reference points
    /// - Single candidate: Pareto-optimal, ideal = nadir = its scores
    /// - Identical vectors: neither dominates, all stay Pareto-optimal
    ///
    /// # Errors
    /// Fewer than two directions, a candidate whose length differs from the
    /// direction count, or any non-finite score.
    pub fn classify(
        candidates: &[Candidate],
        directions: &[Direction],
    ) -> Result<ClassificationResult, AnalysisError> {
        validate_batch(candidates, directions)?;

        let mut is_pareto = vec![true; candidates.len()];
        let mut dominated = Vec::new();

        for (i, candidate) in candidates.iter().enumerate() {
            for (j, potential_dominator) in candidates.iter().enumerate() {
                if i == j {
                    continue;
                }

                if Self::dominates(&potential_dominator.objectives, &candidate.objectives, directions) {
                    is_pareto[i] = false;
                    dominated.push(DominatedCandidate {
                        index: i,
                        candidate_id: candidate.id.clone(),
                        dominated_by_index: j,
                        dominated_by_id: potential_dominator.id.clone(),
                        better_on: Self::better_on(
                            &potential_dominator.objectives,
                            &candidate.objectives,
                            directions,
                        ),
                    });
                    break; // Only need one dominator per candidate
                }
            }
        }

        let reference_points = match (
            Self::ideal_point(candidates, directions),
            Self::nadir_point(candidates, &is_pareto, directions),
        ) {
            (Some(ideal), Some(nadir)) => Some(ReferencePoints { ideal, nadir }),
            _ => None,
        };

        Ok(ClassificationResult {
            is_pareto,
            dominated,
            reference_points,
            directions: directions.to_vec(),
        })
    }

    /// Checks if score vector `a` dominates score vector `b`.
    ///
    /// Both vectors must have one entry per direction.
    pub fn dominates(a: &[f64], b: &[f64], directions: &[Direction]) -> bool {
        let mut strictly_better_on_one = false;

        for ((&a_value, &b_value), direction) in a.iter().zip(b).zip(directions) {
            let a_adj = direction.adjust(a_value);
            let b_adj = direction.adjust(b_value);

            if a_adj > b_adj {
                return false;
            }

            if a_adj < b_adj {
                strictly_better_on_one = true;
            }
        }

        strictly_better_on_one
    }

    /// Best observed value per objective over the whole batch.
    pub fn ideal_point(candidates: &[Candidate], directions: &[Direction]) -> Option<Vec<f64>> {
        Self::fold_points(candidates.iter(), directions, |d, a, b| d.best(a, b))
    }

    /// Worst observed value per objective over the Pareto members only.
    ///
    /// `is_pareto` must be aligned with `candidates`.
    pub fn nadir_point(
        candidates: &[Candidate],
        is_pareto: &[bool],
        directions: &[Direction],
    ) -> Option<Vec<f64>> {
        let members = candidates
            .iter()
            .zip(is_pareto)
            .filter(|(_, &p)| p)
            .map(|(c, _)| c);
        Self::fold_points(members, directions, |d, a, b| d.worst(a, b))
    }

    /// Finds the compromise solution: the Pareto member closest to the ideal point.
    ///
    /// Each objective is scaled by its ideal-to-nadir span before measuring the
    /// Euclidean distance; objectives with zero span contribute nothing. Ties go
    /// to the lowest index.
    ///
    /// # Panics
    /// If `candidates` is not the batch `result` was classified from.
    pub fn closest_to_ideal(candidates: &[Candidate], result: &ClassificationResult) -> Option<usize> {
        let points = result.reference_points.as_ref()?;

        result
            .pareto_indices()
            .into_iter()
            .map(|i| {
                let distance = candidates[i]
                    .objectives
                    .iter()
                    .zip(points.ideal.iter().zip(&points.nadir))
                    .map(|(&value, (&ideal, &nadir))| {
                        let span = (nadir - ideal).abs();
                        if span == 0.0 {
                            0.0
                        } else {
                            ((value - ideal) / span).powi(2)
                        }
                    })
                    .sum::<f64>()
                    .sqrt();
                (i, distance)
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    fn fold_points<'a>(
        mut members: impl Iterator<Item = &'a Candidate>,
        directions: &[Direction],
        pick: impl Fn(&Direction, f64, f64) -> f64,
    ) -> Option<Vec<f64>> {
        let mut point = members.next()?.objectives.clone();
        for candidate in members {
            for ((slot, &value), direction) in point.iter_mut().zip(&candidate.objectives).zip(directions) {
                *slot = pick(direction, *slot, value);
            }
        }
        Some(point)
    }

    fn better_on(a: &[f64], b: &[f64], directions: &[Direction]) -> Vec<usize> {
        a.iter()
            .zip(b)
            .zip(directions)
            .enumerate()
            .filter(|(_, ((a_value, b_value), direction))| direction.is_better(**a_value, **b_value))
            .map(|(i, _)| i)
            .collect()
    }
}
