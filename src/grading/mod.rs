//! Grading rules
//!
//! This module holds the logic that decides which grade a teacher hands out,
//! whether a grade history counts as excellent, and who attends a lesson.

pub mod excellence;
pub mod policy;

pub use excellence::ExcellenceRule;
pub use policy::{Attendance, GradeRange, GradingPolicy, Presence};

use crate::models::Grade;

/// Arithmetic mean of a grade history, `0.0` when it is empty
#[must_use]
pub fn average(grades: &[Grade]) -> f64 {
    if grades.is_empty() {
        return 0.0;
    }

    let sum: u32 = grades.iter().map(|g| u32::from(g.value())).sum();
    f64::from(sum) / grades.len() as f64
}
