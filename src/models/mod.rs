//! Domain models for the school simulation
//!
//! This module contains the entity models used throughout the crate:
//! students, teachers, lessons and parents, plus the shared value types.

pub mod lesson;
pub mod parent;
pub mod student;
pub mod teacher;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use lesson::{GradedStudent, Lesson, LessonOutcome};
pub use parent::{ChildSnapshot, Parent};
pub use student::Student;
pub use teacher::{Teacher, TeacherProfile};
pub use traits::EntityModel;
pub use types::{Grade, LessonId, Mood, ParentId, StudentId, TeacherId};
