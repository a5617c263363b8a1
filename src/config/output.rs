//! Report output configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::ports::ReportFormat;

/// Largest number of decimals printed in tabular output.
pub const MAX_PRECISION: usize = 12;

/// How the rendered report is written
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Report format written to stdout
    #[serde(default)]
    pub format: ReportFormat,

    /// Decimals used for numbers in tabular output
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl OutputConfig {
    /// Validate output configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.precision > MAX_PRECISION {
            return Err(ValidationError::PrecisionTooLarge {
                max: MAX_PRECISION,
                actual: self.precision,
            });
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            precision: default_precision(),
        }
    }
}

fn default_precision() -> usize {
    3
}
