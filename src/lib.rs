//! An in-memory school grading simulation.
//!
//! Students accumulate grades, teachers hand them out according to a
//! grading policy and their mood, lessons group students under a teacher,
//! and parents follow snapshots of their children's results.

pub mod collections;
pub mod config;
pub mod error;
pub mod grading;
pub mod models;
pub mod registry;
pub mod reporting;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{Scenario, SchoolConfig};
pub use error::{EntityKind, Result, SchoolError};
pub use registry::School;

// Entities
pub use models::{
    ChildSnapshot, Grade, Lesson, LessonOutcome, Mood, Parent, Student, Teacher, TeacherProfile,
};

// Grading rules
pub use grading::{Attendance, ExcellenceRule, GradeRange, GradingPolicy};

// Reports
pub use reporting::{ParentVerdict, SchoolReport};
