//! Common domain type definitions
//!
//! This module contains the value types shared by every entity model:
//! typed entity handles, the validated school `Grade`, and `Mood`.

use crate::error::{Result, SchoolError};
use serde::Deserialize;
use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(usize);

        impl $name {
            /// Position of the entity in its collection's insertion order
            #[must_use]
            pub fn index(self) -> usize {
                self.0
            }
        }

        impl From<usize> for $name {
            fn from(value: usize) -> Self {
                Self(value)
            }
        }

        impl From<$name> for usize {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "#{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Handle of a student within a school
    StudentId
);
entity_id!(
    /// Handle of a teacher within a school
    TeacherId
);
entity_id!(
    /// Handle of a lesson within a school
    LessonId
);
entity_id!(
    /// Handle of a parent within a school
    ParentId
);

/// A school mark on the 1..=5 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Grade(pub(crate) u8);

impl Grade {
    /// Lowest mark on the scale
    pub const MIN: u8 = 1;
    /// Highest mark on the scale
    pub const MAX: u8 = 5;
    /// The top mark
    pub const EXCELLENT: Grade = Grade(5);
    /// The lowest mark a teacher in a good mood hands out
    pub const GOOD: Grade = Grade(4);
    /// The failing mark handed out by strict teachers
    pub const POOR: Grade = Grade(2);

    /// Create a grade, rejecting values outside the scale
    pub fn new(value: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(SchoolError::InvalidGrade(value))
        }
    }

    /// The numeric value of the grade
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Grade {
    type Error = SchoolError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Grade> for u8 {
    fn from(grade: Grade) -> Self {
        grade.0
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mood of a teacher or parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// Good mood: generous grading, proud parents
    #[default]
    Good,
    /// Bad mood: wide grading range, grumpy parents
    Bad,
}

impl From<bool> for Mood {
    fn from(good: bool) -> Self {
        if good { Self::Good } else { Self::Bad }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Good => f.write_str("good"),
            Self::Bad => f.write_str("bad"),
        }
    }
}
