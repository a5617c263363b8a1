//! JSON report renderer.

use crate::domain::analysis::AnalysisReport;
use crate::ports::{RenderError, ReportFormat, ReportRenderer};

/// Renders the whole report as pretty-printed JSON.
#[derive(Debug, Clone, Default)]
pub struct JsonReportRenderer;

impl JsonReportRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ReportRenderer for JsonReportRenderer {
    fn render(&self, report: &AnalysisReport) -> Result<String, RenderError> {
        Ok(serde_json::to_string_pretty(report)?)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}
