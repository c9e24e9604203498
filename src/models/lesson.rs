//! Lesson entity model and conduction results

use super::traits::EntityModel;
use super::types::{Grade, LessonId, StudentId};
use crate::error::EntityKind;

/// A lesson: one teacher, an ordered roster, and a fixed number of grades
/// to hand out per student. Names are resolved when the lesson is conducted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    id: LessonId,
    name: String,
    teacher: String,
    students: Vec<String>,
    grades_per_student: u32,
}

impl Lesson {
    /// Create a lesson
    pub fn new(
        id: LessonId,
        name: impl Into<String>,
        teacher: impl Into<String>,
        students: Vec<String>,
        grades_per_student: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            teacher: teacher.into(),
            students,
            grades_per_student,
        }
    }

    /// Name of the teacher running this lesson
    #[must_use]
    pub fn teacher(&self) -> &str {
        &self.teacher
    }

    /// Student names in roster order
    #[must_use]
    pub fn students(&self) -> &[String] {
        &self.students
    }

    /// Grades each present student receives
    #[must_use]
    pub fn grades_per_student(&self) -> u32 {
        self.grades_per_student
    }
}

impl EntityModel for Lesson {
    type Id = LessonId;

    const KIND: EntityKind = EntityKind::Lesson;

    fn id(&self) -> LessonId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Grades one student received during a lesson
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradedStudent {
    /// Handle of the graded student
    pub student: StudentId,
    /// Student name at the time of the lesson
    pub name: String,
    /// Grades handed out, in order
    pub grades: Vec<Grade>,
}

/// What happened when a lesson was conducted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonOutcome {
    /// Lesson name
    pub lesson: String,
    /// Teacher name
    pub teacher: String,
    /// Students who were present and graded, in roster order
    pub graded: Vec<GradedStudent>,
    /// Roster names skipped because the student did not show up
    pub absent: Vec<String>,
    /// Roster names that did not resolve to a student
    pub missing: Vec<String>,
}

impl LessonOutcome {
    /// An outcome with nothing recorded yet
    pub fn new(lesson: impl Into<String>, teacher: impl Into<String>) -> Self {
        Self {
            lesson: lesson.into(),
            teacher: teacher.into(),
            graded: Vec::new(),
            absent: Vec::new(),
            missing: Vec::new(),
        }
    }

    /// Total number of grades handed out during the lesson
    #[must_use]
    pub fn total_grades(&self) -> usize {
        self.graded.iter().map(|g| g.grades.len()).sum()
    }
}
