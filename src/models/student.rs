//! Student entity model
//!
//! A student is identified by a unique name and accumulates an ordered
//! history of grades. Averages and the excellence predicate are derived
//! from that history on demand.

use super::traits::EntityModel;
use super::types::{Grade, StudentId};
use crate::error::EntityKind;
use crate::grading::{self, ExcellenceRule};

/// A student and their grade history
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    id: StudentId,
    name: String,
    /// Grades in the order they were given
    grades: Vec<Grade>,
}

impl Student {
    /// Create a student without any grades
    pub fn new(id: StudentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            grades: Vec::new(),
        }
    }

    /// Append a grade to the history
    pub fn add_grade(&mut self, grade: Grade) {
        self.grades.push(grade);
    }

    /// Append several grades, preserving their order
    pub fn add_grades(&mut self, grades: impl IntoIterator<Item = Grade>) {
        self.grades.extend(grades);
    }

    /// All grades, oldest first
    #[must_use]
    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    /// Number of grades received so far
    #[must_use]
    pub fn grade_count(&self) -> usize {
        self.grades.len()
    }

    /// Arithmetic mean of the grades, `0.0` when there are none
    #[must_use]
    pub fn average(&self) -> f64 {
        grading::average(&self.grades)
    }

    /// Whether the grade history satisfies the given excellence rule
    #[must_use]
    pub fn is_excellent(&self, rule: ExcellenceRule) -> bool {
        rule.is_satisfied_by(&self.grades)
    }
}

impl EntityModel for Student {
    type Id = StudentId;

    const KIND: EntityKind = EntityKind::Student;

    fn id(&self) -> StudentId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
