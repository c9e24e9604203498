//! Parent entity model
//!
//! This module contains the Parent model. Parents have a mood and keep
//! point-in-time snapshots of their children. A snapshot is an owned copy
//! of the student taken when the child was assigned; grades given later
//! only show up once the school refreshes the snapshots.

use super::student::Student;
use super::traits::EntityModel;
use super::types::{Grade, Mood, ParentId, StudentId};
use crate::error::EntityKind;
use crate::grading::{self, ExcellenceRule};

/// Owned copy of a student as seen by a parent
#[derive(Debug, Clone, PartialEq)]
pub struct ChildSnapshot {
    /// Handle of the student the snapshot was taken from
    pub student: StudentId,
    /// Student name
    pub name: String,
    /// Grades at the time of the snapshot
    pub grades: Vec<Grade>,
}

impl ChildSnapshot {
    /// Take a snapshot of the student's current state
    #[must_use]
    pub fn of(student: &Student) -> Self {
        Self {
            student: student.id(),
            name: student.name().to_string(),
            grades: student.grades().to_vec(),
        }
    }

    /// Average grade in the snapshot, `0.0` when there are none
    #[must_use]
    pub fn average(&self) -> f64 {
        grading::average(&self.grades)
    }

    /// Whether the snapshot satisfies the given excellence rule
    #[must_use]
    pub fn is_excellent(&self, rule: ExcellenceRule) -> bool {
        rule.is_satisfied_by(&self.grades)
    }
}

/// A parent with a mood and snapshots of their children
#[derive(Debug, Clone, PartialEq)]
pub struct Parent {
    id: ParentId,
    name: String,
    mood: Mood,
    children: Vec<ChildSnapshot>,
}

impl Parent {
    /// Create a parent without children
    pub fn new(id: ParentId, name: impl Into<String>, mood: Mood) -> Self {
        Self {
            id,
            name: name.into(),
            mood,
            children: Vec::new(),
        }
    }

    /// Current mood
    #[must_use]
    pub fn mood(&self) -> Mood {
        self.mood
    }

    /// Child snapshots in the order they were assigned
    #[must_use]
    pub fn children(&self) -> &[ChildSnapshot] {
        &self.children
    }

    /// Look up a child snapshot by name
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&ChildSnapshot> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Store a snapshot, replacing an older snapshot of the same student
    pub fn record_child(&mut self, snapshot: ChildSnapshot) {
        match self
            .children
            .iter_mut()
            .find(|child| child.student == snapshot.student)
        {
            Some(existing) => *existing = snapshot,
            None => self.children.push(snapshot),
        }
    }

    /// Mean of the children's average grades, `None` without children
    #[must_use]
    pub fn children_average(&self) -> Option<f64> {
        if self.children.is_empty() {
            return None;
        }

        let total: f64 = self.children.iter().map(ChildSnapshot::average).sum();
        Some(total / self.children.len() as f64)
    }
}

impl EntityModel for Parent {
    type Id = ParentId;

    const KIND: EntityKind = EntityKind::Parent;

    fn id(&self) -> ParentId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
