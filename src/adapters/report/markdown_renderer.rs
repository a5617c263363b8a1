//! Markdown report renderer.
//!
//! Produces a document with one section per populated part of the report:
//! the Pareto membership table (with ideal and nadir rows), dominance
//! explanations, tensions, and one sensitivity summary table per ranking.

use crate::domain::analysis::{AnalysisReport, ParetoReport, RankedImpact};
use crate::ports::{RenderError, ReportFormat, ReportRenderer};

const DEFAULT_PRECISION: usize = 3;

/// Renders reports as Markdown tables.
#[derive(Debug, Clone)]
pub struct MarkdownReportRenderer {
    /// Decimals printed for every number.
    precision: usize,
}

impl MarkdownReportRenderer {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    fn number(&self, value: f64) -> String {
        format!("{:.prec$}", value, prec = self.precision)
    }

    fn signed(&self, value: f64) -> String {
        format!("{:+.prec$}", value, prec = self.precision)
    }

    fn pareto_section(&self, pareto: &ParetoReport) -> String {
        let mut section = String::from("## Pareto Frontier\n\n");

        if pareto.candidates.is_empty() {
            section.push_str("*No candidates supplied*\n\n");
            return section;
        }

        let objective_count = pareto.classification.directions.len();

        // Header
        section.push_str("| Candidate |");
        for (i, direction) in pareto.classification.directions.iter().enumerate() {
            let name = pareto
                .objective_names
                .get(i)
                .cloned()
                .unwrap_or_else(|| format!("objective {}", i + 1));
            section.push_str(&format!(" {} ({}) |", name, direction.short_label()));
        }
        section.push_str(" Pareto Optimal | Dominated By |\n");
        section.push_str(&"|---".repeat(objective_count + 3));
        section.push_str("|\n");

        for (i, candidate) in pareto.candidates.iter().enumerate() {
            let is_pareto = pareto.classification.is_pareto.get(i).copied().unwrap_or(false);
            let dominated_by = pareto
                .classification
                .dominated
                .iter()
                .find(|d| d.index == i)
                .map(|d| d.dominated_by_id.as_str())
                .unwrap_or("");

            section.push_str(&format!("| {} |", candidate.id));
            for &value in &candidate.objectives {
                section.push_str(&format!(" {} |", self.number(value)));
            }
            section.push_str(&format!(
                " {} | {} |\n",
                if is_pareto { "yes" } else { "no" },
                dominated_by
            ));
        }

        if let Some(points) = &pareto.classification.reference_points {
            for (label, values) in [("Ideal", &points.ideal), ("Nadir", &points.nadir)] {
                section.push_str(&format!("| **{}** |", label));
                for &value in values {
                    section.push_str(&format!(" {} |", self.number(value)));
                }
                section.push_str("  |  |\n");
            }
        }
        section.push('\n');

        section.push_str(&format!(
            "**Pareto-optimal:** {} of {} candidates\n\n",
            pareto.classification.pareto_count(),
            pareto.candidates.len()
        ));
        section.push_str(&format!("**Frontier order:** {}\n\n", pareto.front_ids().join(" → ")));

        if let Some(compromise) = &pareto.compromise {
            section.push_str(&format!("**Compromise solution:** {}\n\n", compromise));
        }

        if !pareto.constant_objectives.is_empty() {
            let names: Vec<&str> = pareto
                .constant_objectives
                .iter()
                .filter_map(|&i| pareto.objective_names.get(i).map(String::as_str))
                .collect();
            section.push_str(&format!("**Constant objectives:** {}\n\n", names.join(", ")));
        }

        if !pareto.classification.dominated.is_empty() {
            section.push_str("### Dominated Candidates\n\n");
            for dominated in &pareto.classification.dominated {
                section.push_str(&format!(
                    "- **{}**: {}\n",
                    dominated.candidate_id,
                    dominated.explanation(&pareto.objective_names)
                ));
            }
            section.push('\n');
        }

        section.push_str(&Self::tension_section(pareto));
        section
    }

    fn tension_section(pareto: &ParetoReport) -> String {
        let mut section = String::new();
        if pareto.tensions.is_empty() {
            return section;
        }

        section.push_str("### Trade-offs\n\n");
        section.push_str("| Candidate | Gains | Losses |\n");
        section.push_str("|-----------|-------|--------|\n");
        for tension in &pareto.tensions {
            section.push_str(&format!(
                "| {} | {} | {} |\n",
                tension.candidate_id,
                list_or_dash(&tension.gains),
                list_or_dash(&tension.losses)
            ));
        }
        section.push('\n');

        if let Some(summary) = &pareto.tradeoff_summary {
            section.push_str(&format!(
                "**Contested:** {} of {} Pareto-optimal candidates trade gains for losses\n\n",
                summary.contested_candidates, summary.total_candidates
            ));
            if let Some(balanced) = &summary.most_balanced {
                section.push_str(&format!("**Most balanced:** {}\n\n", balanced));
            }
            if let Some(polarizing) = &summary.most_polarizing {
                section.push_str(&format!("**Most polarizing:** {}\n\n", polarizing));
            }
        }

        section
    }

    fn sensitivity_section(&self, title: &str, ranked: &[RankedImpact]) -> String {
        let mut section = format!("## {}\n\n", title);
        section.push_str("| Parameter | Low Impact | High Impact | Total Range | Sensitivity Rank |\n");
        section.push_str("|-----------|------------|-------------|-------------|------------------|\n");

        for impact in ranked {
            section.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                impact.parameter,
                self.signed(impact.low_impact),
                self.signed(impact.high_impact),
                self.number(impact.total_impact),
                impact.rank
            ));
        }
        section.push('\n');
        section
    }
}

impl Default for MarkdownReportRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}

impl ReportRenderer for MarkdownReportRenderer {
    fn render(&self, report: &AnalysisReport) -> Result<String, RenderError> {
        let mut doc = String::from("# Trade-off Analysis\n\n");

        if report.is_empty() {
            doc.push_str("*No analysis inputs supplied*\n");
            return Ok(doc);
        }

        if let Some(pareto) = &report.pareto {
            doc.push_str(&self.pareto_section(pareto));
        }
        if !report.sensitivity.is_empty() {
            doc.push_str(&self.sensitivity_section("Sensitivity Analysis", &report.sensitivity));
        }
        if !report.sweep_ranking.is_empty() {
            doc.push_str(&self.sensitivity_section("Parameter Sweeps", &report.sweep_ranking));
        }
        if !report.interaction_ranking.is_empty() {
            doc.push_str(&self.sensitivity_section(
                "Parameter Interactions",
                &report.interaction_ranking,
            ));
        }

        Ok(doc)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}

fn list_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}
