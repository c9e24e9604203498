//! Configuration for the school simulation.

pub mod scenario;

pub use scenario::Scenario;

use crate::error::{Result, SchoolError};
use crate::grading::{ExcellenceRule, GradeRange};
use crate::models::Mood;
use serde::Deserialize;
use std::fmt;

/// Configuration for a `School`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SchoolConfig {
    /// Rule used to decide whether a student is excellent
    pub excellence_rule: ExcellenceRule,
    /// Grades a randomly grading teacher draws from in a good mood
    pub good_mood_grades: GradeRange,
    /// Grades a randomly grading teacher draws from in a bad mood
    pub bad_mood_grades: GradeRange,
    /// Children's mean average a parent needs to see to be satisfied
    pub parent_threshold: f64,
    /// Seed for the school's random source; entropy from the OS when unset
    pub random_seed: Option<u64>,
}

impl Default for SchoolConfig {
    fn default() -> Self {
        Self {
            excellence_rule: ExcellenceRule::AllTopGrades,
            good_mood_grades: GradeRange::good_mood_default(),
            bad_mood_grades: GradeRange::bad_mood_default(),
            parent_threshold: 4.5,
            random_seed: None,
        }
    }
}

impl SchoolConfig {
    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Use a fixed seed for reproducible runs
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Use a different excellence rule
    #[must_use]
    pub fn with_excellence_rule(mut self, rule: ExcellenceRule) -> Self {
        self.excellence_rule = rule;
        self
    }

    /// Grade range for the given teacher mood
    #[must_use]
    pub fn range_for(&self, mood: Mood) -> GradeRange {
        match mood {
            Mood::Good => self.good_mood_grades,
            Mood::Bad => self.bad_mood_grades,
        }
    }

    /// Check values that the type system cannot
    pub fn validate(&self) -> Result<()> {
        if !self.parent_threshold.is_finite() {
            return Err(SchoolError::InvalidConfig(format!(
                "parent threshold must be finite, got {}",
                self.parent_threshold
            )));
        }
        if let ExcellenceRule::AverageAbove { threshold } = self.excellence_rule {
            if !threshold.is_finite() {
                return Err(SchoolError::InvalidConfig(format!(
                    "excellence threshold must be finite, got {threshold}"
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Display for SchoolConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "School Configuration:")?;
        writeln!(f, "  Excellence Rule: {}", self.excellence_rule)?;
        writeln!(f, "  Good Mood Grades: {}", self.good_mood_grades)?;
        writeln!(f, "  Bad Mood Grades: {}", self.bad_mood_grades)?;
        writeln!(f, "  Parent Threshold: {}", self.parent_threshold)?;
        if let Some(seed) = self.random_seed {
            writeln!(f, "  Random Seed: {seed}")?;
        }
        Ok(())
    }
}
