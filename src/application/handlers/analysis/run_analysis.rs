//! RunAnalysisHandler - Command handler that turns caller data into a report.
//!
//! Runs every analysis whose inputs are present:
//! - Candidates → dominance classification → normalization → tensions
//! - Low/high records → sensitivity ranking
//! - Sweeps and interaction grids → rankings against a shared baseline output

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::AnalysisConfig;
use crate::domain::analysis::{
    AnalysisReport, CandidateSet, DominanceClassifier, InteractionGrid, ParetoReport,
    RankedImpact, ScaleNormalizer, SensitivityRanker, SensitivityRecord, SensitivitySweep,
    TradeoffAnalyzer,
};
use crate::domain::foundation::{ensure_finite_value, AnalysisError};

/// Low/high outputs for several parameters perturbed around one baseline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedBaselineOutputs {
    pub parameter_names: Vec<String>,
    pub baseline_output: f64,
    pub low_values: Vec<f64>,
    pub high_values: Vec<f64>,
}

/// Command to run an analysis. This is also the request document read by the binary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunAnalysisCommand {
    pub candidates: Option<CandidateSet>,
    pub sensitivity: Vec<SensitivityRecord>,
    pub shared_baseline: Option<SharedBaselineOutputs>,
    /// Model output at baseline; required when sweeps or interactions are given.
    pub baseline_output: Option<f64>,
    pub sweeps: Vec<SensitivitySweep>,
    pub interactions: Vec<InteractionGrid>,
}

/// Handler for analysis requests.
///
/// Fails the whole request on the first invalid input; no partial reports.
pub struct RunAnalysisHandler {
    config: AnalysisConfig,
}

impl RunAnalysisHandler {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn handle(&self, cmd: RunAnalysisCommand) -> Result<AnalysisReport, AnalysisError> {
        let pareto = cmd
            .candidates
            .map(|set| self.analyze_candidates(set))
            .transpose()?;

        let sensitivity = Self::rank_records(cmd.sensitivity, cmd.shared_baseline)?;

        let (sweep_ranking, interaction_ranking) =
            if cmd.sweeps.is_empty() && cmd.interactions.is_empty() {
                (Vec::new(), Vec::new())
            } else {
                let baseline = cmd
                    .baseline_output
                    .ok_or_else(|| AnalysisError::empty_input("baseline_output"))?;
                ensure_finite_value("baseline_output", 0, baseline)?;
                Self::rank_sweeps_and_interactions(baseline, &cmd.sweeps, &cmd.interactions)?
            };

        let report = AnalysisReport {
            pareto,
            sensitivity,
            sweep_ranking,
            interaction_ranking,
        };

        info!(
            pareto = report.pareto.is_some(),
            sensitivity = report.sensitivity.len(),
            sweeps = report.sweep_ranking.len(),
            interactions = report.interaction_ranking.len(),
            "Analysis report ready"
        );

        Ok(report)
    }

    fn analyze_candidates(&self, set: CandidateSet) -> Result<ParetoReport, AnalysisError> {
        let directions = set.resolved_directions(self.config.default_direction)?;
        let classification = DominanceClassifier::classify(&set.candidates, &directions)?;

        debug!(
            candidates = set.candidate_count(),
            objectives = directions.len(),
            pareto = classification.pareto_count(),
            "Classified candidates"
        );

        let rows = set.rows();
        let normalized = if self.config.normalize_objectives {
            Some(ScaleNormalizer::normalize(&rows)?)
        } else {
            None
        };
        let constant_objectives = ScaleNormalizer::find_constant_columns(&rows)?;

        let front_order = classification.front_order(&set.candidates);
        let compromise = DominanceClassifier::closest_to_ideal(&set.candidates, &classification)
            .map(|i| set.candidates[i].id.clone());

        let (tensions, tradeoff_summary) = if self.config.analyze_tensions {
            let tensions = TradeoffAnalyzer::analyze_tensions(&set, &classification);
            let summary = TradeoffAnalyzer::summarize_tradeoffs(&tensions);
            debug!(
                tensions = tensions.len(),
                contested = summary.contested_candidates,
                "Analyzed tensions"
            );
            (tensions, Some(summary))
        } else {
            (Vec::new(), None)
        };

        Ok(ParetoReport {
            objective_names: set.objective_names,
            candidates: set.candidates,
            classification,
            front_order,
            normalized,
            constant_objectives,
            compromise,
            tensions,
            tradeoff_summary,
        })
    }

    fn rank_records(
        mut records: Vec<SensitivityRecord>,
        shared: Option<SharedBaselineOutputs>,
    ) -> Result<Vec<RankedImpact>, AnalysisError> {
        if let Some(shared) = shared {
            records.extend(SensitivityRanker::from_outputs(
                &shared.parameter_names,
                shared.baseline_output,
                &shared.low_values,
                &shared.high_values,
            )?);
        }
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let ranked = SensitivityRanker::rank(&records)?;
        debug!(
            records = ranked.len(),
            most_sensitive = SensitivityRanker::most_sensitive(&ranked).map(|r| r.parameter.as_str()),
            non_monotonic = Self::non_monotonic_count(&ranked),
            "Ranked sensitivity records"
        );
        Ok(ranked)
    }

    /// Parameters whose low and high perturbations push the output the same way.
    fn non_monotonic_count(ranked: &[RankedImpact]) -> usize {
        ranked.iter().filter(|r| !r.is_monotonic()).count()
    }

    fn rank_sweeps_and_interactions(
        baseline: f64,
        sweeps: &[SensitivitySweep],
        interactions: &[InteractionGrid],
    ) -> Result<(Vec<RankedImpact>, Vec<RankedImpact>), AnalysisError> {
        let sweep_records = sweeps
            .iter()
            .map(|sweep| sweep.to_record(baseline))
            .collect::<Result<Vec<_>, _>>()?;
        let sweep_ranking = SensitivityRanker::rank(&sweep_records)?;

        let interaction_ranking = InteractionGrid::rank_interactions(baseline, interactions)?;

        debug!(
            sweeps = sweep_ranking.len(),
            interactions = interaction_ranking.len(),
            non_monotonic_sweeps = Self::non_monotonic_count(&sweep_ranking),
            "Ranked sweeps and interactions"
        );
        Ok((sweep_ranking, interaction_ranking))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Direction;

    fn handler() -> RunAnalysisHandler {
        RunAnalysisHandler::new(AnalysisConfig::default())
    }

    fn scenario_a() -> CandidateSet {
        CandidateSet::builder()
            .objectives(vec!["cost", "risk"])
            .candidate("A", vec![10.0, 90.0])
            .candidate("B", vec![50.0, 50.0])
            .candidate("C", vec![90.0, 10.0])
            .candidate("D", vec![50.0, 70.0])
            .build()
    }

    #[test]
    fn empty_command_yields_empty_report() {
        let report = handler().handle(RunAnalysisCommand::default()).unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn candidates_produce_pareto_section() {
        let report = handler()
            .handle(RunAnalysisCommand {
                candidates: Some(scenario_a()),
                ..Default::default()
            })
            .unwrap();

        let pareto = report.pareto.unwrap();
        assert_eq!(pareto.pareto_ids(), vec!["A", "B", "C"]);
        assert_eq!(pareto.classification.ideal(), Some(&[10.0, 10.0][..]));
        assert_eq!(pareto.classification.nadir(), Some(&[90.0, 90.0][..]));
        assert_eq!(pareto.front_ids(), vec!["A", "B", "C"]);
        assert_eq!(pareto.compromise.as_deref(), Some("B"));
        assert_eq!(pareto.tensions.len(), 3);
        assert!(pareto.tradeoff_summary.is_some());
        assert_eq!(pareto.normalized.as_ref().unwrap()[0], vec![0.0, 1.0]);
        assert!(pareto.constant_objectives.is_empty());
    }

    #[test]
    fn config_switches_off_optional_analyses() {
        let handler = RunAnalysisHandler::new(AnalysisConfig {
            normalize_objectives: false,
            analyze_tensions: false,
            ..Default::default()
        });

        let pareto = handler
            .handle(RunAnalysisCommand {
                candidates: Some(scenario_a()),
                ..Default::default()
            })
            .unwrap()
            .pareto
            .unwrap();

        assert!(pareto.normalized.is_none());
        assert!(pareto.tensions.is_empty());
        assert!(pareto.tradeoff_summary.is_none());
    }

    #[test]
    fn default_direction_applies_to_undirected_sets() {
        let handler = RunAnalysisHandler::new(AnalysisConfig {
            default_direction: Direction::Maximize,
            ..Default::default()
        });

        let pareto = handler
            .handle(RunAnalysisCommand {
                candidates: Some(scenario_a()),
                ..Default::default()
            })
            .unwrap()
            .pareto
            .unwrap();

        // Maximizing both, D dominates B
        assert_eq!(pareto.pareto_ids(), vec!["A", "C", "D"]);
        assert_eq!(pareto.classification.directions, vec![Direction::Maximize; 2]);
    }

    #[test]
    fn shared_baseline_outputs_join_explicit_records() {
        let report = handler()
            .handle(RunAnalysisCommand {
                sensitivity: vec![SensitivityRecord::new("A", 100.0, 80.0, 130.0)],
                shared_baseline: Some(SharedBaselineOutputs {
                    parameter_names: vec!["B".to_string()],
                    baseline_output: 100.0,
                    low_values: vec![95.0],
                    high_values: vec![102.0],
                }),
                ..Default::default()
            })
            .unwrap();

        let order: Vec<&str> = report.sensitivity.iter().map(|r| r.parameter.as_str()).collect();
        assert_eq!(order, vec!["A", "B"]);
        assert_eq!(report.sensitivity[1].total_impact, 7.0);
    }

    #[test]
    fn non_monotonic_count_flags_same_direction_impacts() {
        let ranked = SensitivityRanker::rank(&[
            SensitivityRecord::new("linear", 10.0, 8.0, 12.0),
            SensitivityRecord::new("peaked", 10.0, 8.0, 9.0),
        ])
        .unwrap();
        assert_eq!(RunAnalysisHandler::non_monotonic_count(&ranked), 1);
    }

    #[test]
    fn sweeps_require_baseline_output() {
        let err = handler()
            .handle(RunAnalysisCommand {
                sweeps: vec![SensitivitySweep::new("k", 1.0, vec![0.5, 1.5], vec![9.0, 11.0])],
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err, AnalysisError::empty_input("baseline_output"));
    }

    #[test]
    fn sweeps_and_interactions_are_ranked() {
        let report = handler()
            .handle(RunAnalysisCommand {
                baseline_output: Some(10.0),
                sweeps: vec![
                    SensitivitySweep::new("small", 1.0, vec![0.5, 1.5], vec![9.5, 10.5]),
                    SensitivitySweep::new("large", 1.0, vec![0.5, 1.5], vec![6.0, 15.0]),
                ],
                interactions: vec![InteractionGrid::new(
                    "small",
                    "large",
                    vec![0.5, 1.5],
                    vec![0.5, 1.5],
                    vec![vec![5.0, 10.0], vec![10.0, 16.0]],
                )],
                ..Default::default()
            })
            .unwrap();

        assert_eq!(report.sweep_ranking[0].parameter, "large");
        assert_eq!(report.sweep_ranking[0].total_impact, 9.0);
        assert_eq!(report.interaction_ranking[0].parameter, "small × large");
        assert_eq!(report.interaction_ranking[0].total_impact, 11.0);
    }

    #[test]
    fn any_invalid_input_fails_whole_request() {
        let err = handler()
            .handle(RunAnalysisCommand {
                candidates: Some(scenario_a()),
                sensitivity: vec![SensitivityRecord::new("A", 1.0, f64::INFINITY, 1.0)],
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, AnalysisError::NonFiniteValue { .. }));
    }

    #[test]
    fn command_deserializes_with_missing_sections() {
        let json = r#"{
            "sensitivity": [
                { "parameter": "A", "baseline": 100.0, "low": 80.0, "high": 130.0 }
            ]
        }"#;

        let cmd: RunAnalysisCommand = serde_json::from_str(json).unwrap();
        assert!(cmd.candidates.is_none());
        assert_eq!(cmd.sensitivity.len(), 1);
        assert!(cmd.sweeps.is_empty());
    }
}
