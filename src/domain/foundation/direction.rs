//! Optimization direction value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether an objective should be minimized or maximized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Minimize,
    Maximize,
}

impl Direction {
    /// Returns `n` minimize directions.
    pub fn all_minimize(n: usize) -> Vec<Direction> {
        vec![Direction::Minimize; n]
    }

    /// Maps a raw score onto a "smaller is better" scale.
    pub fn adjust(&self, value: f64) -> f64 {
        match self {
            Direction::Minimize => value,
            Direction::Maximize => -value,
        }
    }

    /// Returns true if `a` is strictly better than `b`.
    pub fn is_better(&self, a: f64, b: f64) -> bool {
        self.adjust(a) < self.adjust(b)
    }

    /// Returns the better of two scores.
    pub fn best(&self, a: f64, b: f64) -> f64 {
        if self.is_better(b, a) {
            b
        } else {
            a
        }
    }

    /// Returns the worse of two scores.
    pub fn worst(&self, a: f64, b: f64) -> f64 {
        if self.is_better(b, a) {
            a
        } else {
            b
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Minimize => "minimize",
            Direction::Maximize => "maximize",
        }
    }

    /// Returns the three-letter axis annotation.
    pub fn short_label(&self) -> &'static str {
        &self.label()[..3]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minimize" | "min" => Ok(Direction::Minimize),
            "maximize" | "max" => Ok(Direction::Maximize),
            _ => Err(format!("Unknown direction: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_minimize() {
        assert_eq!(Direction::default(), Direction::Minimize);
    }

    #[test]
    fn adjust_flips_sign_for_maximize() {
        assert_eq!(Direction::Minimize.adjust(4.0), 4.0);
        assert_eq!(Direction::Maximize.adjust(4.0), -4.0);
    }

    #[test]
    fn is_better_respects_direction() {
        assert!(Direction::Minimize.is_better(1.0, 2.0));
        assert!(!Direction::Minimize.is_better(2.0, 1.0));
        assert!(Direction::Maximize.is_better(2.0, 1.0));
        assert!(!Direction::Maximize.is_better(1.0, 1.0));
    }

    #[test]
    fn best_and_worst_pick_by_direction() {
        assert_eq!(Direction::Minimize.best(3.0, 7.0), 3.0);
        assert_eq!(Direction::Minimize.worst(3.0, 7.0), 7.0);
        assert_eq!(Direction::Maximize.best(3.0, 7.0), 7.0);
        assert_eq!(Direction::Maximize.worst(3.0, 7.0), 3.0);
    }

    #[test]
    fn short_label_truncates() {
        assert_eq!(Direction::Minimize.short_label(), "min");
        assert_eq!(Direction::Maximize.short_label(), "max");
    }

    #[test]
    fn parses_from_str() {
        assert_eq!("MAX".parse::<Direction>().unwrap(), Direction::Maximize);
        assert_eq!("minimize".parse::<Direction>().unwrap(), Direction::Minimize);
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Direction::Maximize).unwrap();
        assert_eq!(json, "\"maximize\"");
        let parsed: Direction = serde_json::from_str("\"minimize\"").unwrap();
        assert_eq!(parsed, Direction::Minimize);
    }
}
