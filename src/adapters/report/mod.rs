//! Report adapters - Implementations of the `ReportRenderer` port.
//!
//! - `JsonReportRenderer` - Pretty-printed JSON of the full report
//! - `MarkdownReportRenderer` - Human-readable Markdown tables

mod json_renderer;
mod markdown_renderer;

pub use json_renderer::JsonReportRenderer;
pub use markdown_renderer::MarkdownReportRenderer;

use crate::ports::{ReportFormat, ReportRenderer};

/// Selects the renderer for a configured format.
pub fn renderer_for(format: ReportFormat, precision: usize) -> Box<dyn ReportRenderer> {
    match format {
        ReportFormat::Json => Box::new(JsonReportRenderer::new()),
        ReportFormat::Markdown => Box::new(MarkdownReportRenderer::new(precision)),
    }
}
