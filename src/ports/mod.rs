//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Output Ports
//!
//! - `ReportRenderer` - Lays out a prepared `AnalysisReport` as text

mod report_renderer;

pub use report_renderer::{RenderError, ReportFormat, ReportRenderer};
