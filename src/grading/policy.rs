//! Grading policies and attendance
//!
//! A `GradingPolicy` turns a student's current record and the teacher's mood
//! into a grade. Deterministic policies ignore both. The random policy
//! rewards students who are already excellent with a 5 and otherwise draws
//! uniformly from the range configured for the teacher's mood.

use crate::config::SchoolConfig;
use crate::error::{Result, SchoolError};
use crate::models::{Grade, Mood, Student};
use rand::Rng;
use rand::distr::Bernoulli;
use serde::Deserialize;
use std::fmt;

/// Inclusive range of grades a random draw can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "[u8; 2]")]
pub struct GradeRange {
    low: Grade,
    high: Grade,
}

impl GradeRange {
    /// Create a range, validating both ends against the grade scale
    pub fn new(low: u8, high: u8) -> Result<Self> {
        let low = Grade::new(low)?;
        let high = Grade::new(high)?;
        if low > high {
            return Err(SchoolError::InvalidConfig(format!(
                "grade range {low}..={high} is empty"
            )));
        }
        Ok(Self { low, high })
    }

    /// Range used by teachers in a good mood: 4 or 5
    #[must_use]
    pub fn good_mood_default() -> Self {
        Self {
            low: Grade::GOOD,
            high: Grade::EXCELLENT,
        }
    }

    /// Range used by teachers in a bad mood: 2 to 5
    #[must_use]
    pub fn bad_mood_default() -> Self {
        Self {
            low: Grade::POOR,
            high: Grade::EXCELLENT,
        }
    }

    /// Whether the grade falls inside the range
    #[must_use]
    pub fn contains(&self, grade: Grade) -> bool {
        (self.low..=self.high).contains(&grade)
    }

    /// Draw a grade uniformly from the range
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Grade {
        Grade(rng.random_range(self.low.value()..=self.high.value()))
    }
}

impl TryFrom<[u8; 2]> for GradeRange {
    type Error = SchoolError;

    fn try_from([low, high]: [u8; 2]) -> Result<Self> {
        Self::new(low, high)
    }
}

impl fmt::Display for GradeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.low, self.high)
    }
}

/// How a teacher decides on a grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradingPolicy {
    /// Mood-dependent random grade; excellent students always get a 5
    #[default]
    Random,
    /// Always a 5
    AlwaysFive,
    /// Always a 2
    AlwaysTwo,
}

impl GradingPolicy {
    /// Produce a grade for `student` given the teacher's current mood
    pub fn grade<R: Rng>(
        self,
        student: &Student,
        mood: Mood,
        config: &SchoolConfig,
        rng: &mut R,
    ) -> Grade {
        match self {
            Self::AlwaysFive => Grade::EXCELLENT,
            Self::AlwaysTwo => Grade::POOR,
            Self::Random => {
                if student.is_excellent(config.excellence_rule) {
                    Grade::EXCELLENT
                } else {
                    config.range_for(mood).sample(rng)
                }
            }
        }
    }
}

/// Probability that a student shows up, checked to lie in `0.0..=1.0`
#[derive(Debug, Clone, Copy)]
pub struct Presence {
    probability: f64,
    coin: Bernoulli,
}

impl Presence {
    /// The probability a student is present
    #[must_use]
    pub fn probability(self) -> f64 {
        self.probability
    }
}

impl PartialEq for Presence {
    fn eq(&self, other: &Self) -> bool {
        self.probability == other.probability
    }
}

/// Who shows up when a teacher conducts a lesson
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Attendance {
    /// Every listed student attends
    #[default]
    Full,
    /// Each listed student attends independently; built with `Attendance::partial`
    Partial(Presence),
}

impl Attendance {
    /// Partial attendance, rejecting probabilities outside `0.0..=1.0`
    pub fn partial(presence: f64) -> Result<Self> {
        let coin = Bernoulli::new(presence).map_err(|_| {
            SchoolError::InvalidConfig(format!(
                "attendance probability {presence} is outside 0..=1"
            ))
        })?;
        Ok(Self::Partial(Presence {
            probability: presence,
            coin,
        }))
    }

    /// Probability of presence, or `None` for full attendance
    #[must_use]
    pub fn presence(self) -> Option<f64> {
        match self {
            Self::Full => None,
            Self::Partial(presence) => Some(presence.probability()),
        }
    }

    /// Decide whether one student is present. Full attendance does not
    /// consume randomness.
    pub fn is_present<R: Rng>(self, rng: &mut R) -> bool {
        match self {
            Self::Full => true,
            Self::Partial(presence) => rng.sample(presence.coin),
        }
    }
}
