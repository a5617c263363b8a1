//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `report` - Report renderers (JSON, Markdown)

pub mod report;

pub use report::{renderer_for, JsonReportRenderer, MarkdownReportRenderer};
