//! Report Renderer Port - Turns a prepared analysis report into text.
//!
//! The application layer builds an [`AnalysisReport`]; adapters decide how it
//! is laid out (JSON for machines, Markdown tables for people).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::analysis::AnalysisReport;

/// Port for rendering analysis reports.
///
/// # Contract
///
/// Implementations must:
/// - Render every section present in the report, in report order
/// - Leave absent sections out rather than rendering placeholders
/// - Not recompute or reorder any ranking or classification
/// - Report clear errors for rendering failures
///
/// # Usage
///
/// ```rust,ignore
/// let renderer: &dyn ReportRenderer = get_renderer();
/// let text = renderer.render(&report)?;
/// println!("{}", text);
/// ```
pub trait ReportRenderer: Send + Sync {
    /// Render the report as a string.
    ///
    /// # Errors
    ///
    /// Returns `RenderError` if the report cannot be written in this format.
    fn render(&self, report: &AnalysisReport) -> Result<String, RenderError>;

    /// The format this renderer produces.
    fn format(&self) -> ReportFormat;
}

/// Report formats supported by the renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Pretty-printed JSON of the whole report.
    #[default]
    Json,
    /// Markdown tables.
    Markdown,
}

impl ReportFormat {
    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ReportFormat::Json => "application/json",
            ReportFormat::Markdown => "text/markdown; charset=utf-8",
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ReportFormat::Json),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            _ => Err(RenderError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Errors that can occur while rendering a report.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    /// Unsupported report format requested.
    #[error("Unsupported report format: {0}")]
    UnsupportedFormat(String),

    /// Serialization of the report failed.
    #[error("Report serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::Serialization(err.to_string())
    }
}
