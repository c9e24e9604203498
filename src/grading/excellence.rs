//! Excellence predicates
//!
//! Two rules are in use for deciding whether a student is excellent, and
//! they disagree on histories like `[5, 4, 5]`. Both are exposed by name
//! so callers pick one explicitly.

use super::average;
use crate::models::Grade;
use serde::Deserialize;
use std::fmt;

/// Rule deciding whether a grade history is excellent
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum ExcellenceRule {
    /// At least one grade, and every grade is a 5
    #[default]
    AllTopGrades,
    /// Average strictly above the threshold; an empty history averages 0
    AverageAbove {
        /// Exclusive lower bound for the average
        #[serde(default = "default_average_threshold")]
        threshold: f64,
    },
}

impl ExcellenceRule {
    /// Threshold historically used with the average rule
    pub const DEFAULT_AVERAGE_THRESHOLD: f64 = 4.5;

    /// The average rule with the historical 4.5 threshold
    #[must_use]
    pub fn average_above_default() -> Self {
        Self::AverageAbove {
            threshold: Self::DEFAULT_AVERAGE_THRESHOLD,
        }
    }

    /// Evaluate the rule against a grade history
    #[must_use]
    pub fn is_satisfied_by(self, grades: &[Grade]) -> bool {
        match self {
            Self::AllTopGrades => {
                !grades.is_empty() && grades.iter().all(|g| *g >= Grade::EXCELLENT)
            }
            Self::AverageAbove { threshold } => average(grades) > threshold,
        }
    }
}

fn default_average_threshold() -> f64 {
    ExcellenceRule::DEFAULT_AVERAGE_THRESHOLD
}

impl fmt::Display for ExcellenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllTopGrades => f.write_str("all grades are 5"),
            Self::AverageAbove { threshold } => write!(f, "average above {threshold}"),
        }
    }
}
