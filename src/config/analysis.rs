//! Analysis behaviour configuration

use serde::Deserialize;

use crate::domain::foundation::Direction;

/// Controls which optional analyses run and how missing inputs are filled.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Direction applied to every objective of a batch that supplies none
    #[serde(default)]
    pub default_direction: Direction,

    /// Produce the [0, 1] objective matrix for multi-axis display
    #[serde(default = "default_true")]
    pub normalize_objectives: bool,

    /// Produce gain/loss tensions between Pareto-optimal candidates
    #[serde(default = "default_true")]
    pub analyze_tensions: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_direction: Direction::default(),
            normalize_objectives: default_true(),
            analyze_tensions: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_config_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.default_direction, Direction::Minimize);
        assert!(config.normalize_objectives);
        assert!(config.analyze_tensions);
    }

    #[test]
    fn test_analysis_config_deserialization() {
        let json = r#"{
            "default_direction": "maximize",
            "analyze_tensions": false
        }"#;

        let config: AnalysisConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.default_direction, Direction::Maximize);
        assert!(config.normalize_objectives);
        assert!(!config.analyze_tensions);
    }
}
