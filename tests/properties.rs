//! Property tests for dominance classification, normalization and ranking.

use proptest::prelude::*;

use tradeoff_engine::domain::analysis::{
    Candidate, CandidateSet, DominanceClassifier, ScaleNormalizer, SensitivityRanker,
    SensitivityRecord, TradeoffAnalyzer,
};
use tradeoff_engine::domain::foundation::Direction;

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Minimize), Just(Direction::Maximize)]
}

/// A batch of candidates over 2..=4 objectives with matching directions.
///
/// Scores are drawn from a small integer grid so ties and duplicates show up.
fn batch() -> impl Strategy<Value = (Vec<Candidate>, Vec<Direction>)> {
    (2usize..=4).prop_flat_map(|objectives| {
        (
            prop::collection::vec(prop::collection::vec(0i32..6, objectives), 0..12),
            prop::collection::vec(direction(), objectives),
        )
            .prop_map(|(rows, directions)| {
                let candidates = rows
                    .into_iter()
                    .enumerate()
                    .map(|(i, row)| {
                        Candidate::new(format!("c{}", i), row.into_iter().map(f64::from).collect())
                    })
                    .collect();
                (candidates, directions)
            })
    })
}

fn matrix() -> impl Strategy<Value = Vec<Vec<f64>>> {
    (1usize..=4).prop_flat_map(|width| {
        prop::collection::vec(prop::collection::vec(-1.0e3f64..1.0e3, width), 1..10)
    })
}

fn records() -> impl Strategy<Value = Vec<SensitivityRecord>> {
    prop::collection::vec((-50i32..50, -50i32..50, -50i32..50), 0..15).prop_map(|triples| {
        triples
            .into_iter()
            .enumerate()
            .map(|(i, (baseline, low, high))| {
                SensitivityRecord::new(
                    format!("p{}", i),
                    f64::from(baseline),
                    f64::from(low),
                    f64::from(high),
                )
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn every_dominated_candidate_has_a_dominator((candidates, directions) in batch()) {
        let result = DominanceClassifier::classify(&candidates, &directions).unwrap();

        for (i, &is_pareto) in result.is_pareto.iter().enumerate() {
            let dominated = candidates
                .iter()
                .enumerate()
                .any(|(j, other)| j != i && DominanceClassifier::dominates(&other.objectives, &candidates[i].objectives, &directions));
            prop_assert_eq!(is_pareto, !dominated);
        }

        for entry in &result.dominated {
            prop_assert!(DominanceClassifier::dominates(
                &candidates[entry.dominated_by_index].objectives,
                &candidates[entry.index].objectives,
                &directions,
            ));
        }
    }

    #[test]
    fn no_pareto_member_dominates_another((candidates, directions) in batch()) {
        let result = DominanceClassifier::classify(&candidates, &directions).unwrap();
        let members = result.pareto_indices();

        for &i in &members {
            for &j in &members {
                prop_assert!(!DominanceClassifier::dominates(
                    &candidates[i].objectives,
                    &candidates[j].objectives,
                    &directions,
                ));
            }
        }
    }

    #[test]
    fn ideal_is_at_least_as_good_as_every_candidate((candidates, directions) in batch()) {
        let result = DominanceClassifier::classify(&candidates, &directions).unwrap();
        let Some(ideal) = result.ideal() else {
            prop_assert!(candidates.is_empty());
            return Ok(());
        };

        for candidate in &candidates {
            for ((&best, &value), direction) in ideal.iter().zip(&candidate.objectives).zip(&directions) {
                prop_assert!(!direction.is_better(value, best));
            }
        }
    }

    #[test]
    fn nadir_comes_from_pareto_members_only((candidates, directions) in batch()) {
        let result = DominanceClassifier::classify(&candidates, &directions).unwrap();
        let members: Vec<Candidate> = result
            .pareto_indices()
            .into_iter()
            .map(|i| candidates[i].clone())
            .collect();

        let from_members = DominanceClassifier::nadir_point(&members, &vec![true; members.len()], &directions);
        prop_assert_eq!(result.nadir().map(<[f64]>::to_vec), from_members);
    }

    #[test]
    fn normalizing_twice_is_a_no_op(matrix in matrix()) {
        let once = ScaleNormalizer::normalize(&matrix).unwrap();
        let twice = ScaleNormalizer::normalize(&once).unwrap();
        let ranges = ScaleNormalizer::column_ranges(&matrix).unwrap();

        for (row_once, row_twice) in once.iter().zip(&twice) {
            for (col, (&a, &b)) in row_once.iter().zip(row_twice).enumerate() {
                prop_assert!((0.0..=1.0).contains(&a));
                if !ranges[col].is_degenerate() {
                    prop_assert!((a - b).abs() < 1e-9, "column {} drifted: {} vs {}", col, a, b);
                }
            }
        }
    }

    #[test]
    fn ranks_are_contiguous_and_descending(records in records()) {
        let ranked = SensitivityRanker::rank(&records).unwrap();

        let ranks: Vec<usize> = ranked.iter().map(|r| r.rank).collect();
        prop_assert_eq!(ranks, (1..=records.len()).collect::<Vec<_>>());

        for pair in ranked.windows(2) {
            prop_assert!(pair[0].total_impact >= pair[1].total_impact);
            if pair[0].total_impact == pair[1].total_impact {
                prop_assert!(pair[0].input_index < pair[1].input_index);
            }
        }
    }

    #[test]
    fn pareto_tensions_pair_every_gain_with_a_loss((candidates, directions) in batch()) {
        let set = CandidateSet {
            objective_names: (0..directions.len()).map(|i| format!("o{}", i)).collect(),
            directions: directions.clone(),
            candidates,
        };
        let result = DominanceClassifier::classify(&set.candidates, &directions).unwrap();
        let tensions = TradeoffAnalyzer::analyze_tensions(&set, &result);
        let summary = TradeoffAnalyzer::summarize_tradeoffs(&tensions);

        for tension in &tensions {
            prop_assert_eq!(tension.gains.is_empty(), tension.losses.is_empty());
        }
        prop_assert_eq!(
            summary.contested_candidates,
            tensions.iter().filter(|t| !t.gains.is_empty()).count()
        );
    }
}
