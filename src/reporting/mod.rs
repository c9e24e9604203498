//! Text reports
//!
//! This module provides read-only traversals of a school that produce the
//! line-oriented text printed by the `school-sim` binary.

use crate::error::Result;
use crate::grading::ExcellenceRule;
use crate::models::{ChildSnapshot, EntityModel, Grade, LessonOutcome, Mood, Parent, Student};
use crate::registry::School;
use itertools::Itertools;
use rand::Rng;
use std::fmt;

/// One line describing a student's record
#[derive(Debug, Clone, PartialEq)]
pub struct StudentLine<'a> {
    /// Student name
    pub name: &'a str,
    /// Grades, oldest first
    pub grades: &'a [Grade],
    /// Average grade
    pub average: f64,
    /// Whether the record satisfies the excellence rule
    pub excellent: bool,
}

impl<'a> StudentLine<'a> {
    /// Describe a student
    #[must_use]
    pub fn for_student(student: &'a Student, rule: ExcellenceRule) -> Self {
        Self {
            name: student.name(),
            grades: student.grades(),
            average: student.average(),
            excellent: student.is_excellent(rule),
        }
    }

    /// Describe a parent's snapshot of a child
    #[must_use]
    pub fn for_child(child: &'a ChildSnapshot, rule: ExcellenceRule) -> Self {
        Self {
            name: &child.name,
            grades: &child.grades,
            average: child.average(),
            excellent: child.is_excellent(rule),
        }
    }
}

impl fmt::Display for StudentLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: grades [{}], average {:.2}, excellent: {}",
            self.name,
            self.grades.iter().join(", "),
            self.average,
            if self.excellent { "yes" } else { "no" }
        )
    }
}

/// How a parent feels about their children's results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentVerdict {
    /// Good mood, children above the threshold
    Proud,
    /// Good mood, children at or below the threshold
    Encouraging,
    /// Bad mood, children above the threshold
    Softened,
    /// Bad mood, children at or below the threshold
    Disappointed,
    /// No children to judge
    NothingToSay,
}

impl ParentVerdict {
    /// Combine the parent's mood with the mean of the children's averages.
    /// The mean has to be strictly above `threshold` to count as good.
    #[must_use]
    pub fn assess(parent: &Parent, threshold: f64) -> Self {
        let Some(average) = parent.children_average() else {
            return Self::NothingToSay;
        };

        match (parent.mood(), average > threshold) {
            (Mood::Good, true) => Self::Proud,
            (Mood::Good, false) => Self::Encouraging,
            (Mood::Bad, true) => Self::Softened,
            (Mood::Bad, false) => Self::Disappointed,
        }
    }
}

/// Functions that render a school as text
pub struct SchoolReport;

impl SchoolReport {
    /// Every student with grades, average and excellence
    #[must_use]
    pub fn students<R>(school: &School<R>) -> String {
        let rule = school.config().excellence_rule;
        let mut report = String::from("Students:\n");
        for student in school.students() {
            report.push_str(&format!("  {}\n", StudentLine::for_student(student, rule)));
        }
        report
    }

    /// Names of the students satisfying the excellence rule
    #[must_use]
    pub fn excellent_students<R>(school: &School<R>) -> String {
        let mut report = String::from("Excellent Students:\n");
        for student in school.excellent_students() {
            report.push_str(&format!("{}\n", student.name()));
        }
        report
    }

    /// Grades handed out during one lesson
    #[must_use]
    pub fn lesson(outcome: &LessonOutcome) -> String {
        let mut report = format!("Lesson {} with {}:\n", outcome.lesson, outcome.teacher);
        for graded in &outcome.graded {
            report.push_str(&format!(
                "  {} received [{}]\n",
                graded.name,
                graded.grades.iter().join(", ")
            ));
        }
        if !outcome.absent.is_empty() {
            report.push_str(&format!("  Absent: {}\n", outcome.absent.iter().join(", ")));
        }
        if !outcome.missing.is_empty() {
            report.push_str(&format!(
                "  Not enrolled: {}\n",
                outcome.missing.iter().join(", ")
            ));
        }
        report
    }

    /// Every child of a parent, as last snapshotted
    pub fn children<R>(school: &School<R>, parent: &str) -> Result<String> {
        let rule = school.config().excellence_rule;
        let parent = school.parent(parent)?;

        let mut report = format!("Children of {}:\n", parent.name());
        if parent.children().is_empty() {
            report.push_str("  (none)\n");
        }
        for child in parent.children() {
            report.push_str(&format!("  {}\n", StudentLine::for_child(child, rule)));
        }
        Ok(report)
    }

    /// One named child of a parent; fails if the student is not their child
    pub fn child<R>(school: &School<R>, parent: &str, child: &str) -> Result<String> {
        let rule = school.config().excellence_rule;
        let snapshot = school.child(parent, child)?;
        Ok(format!(
            "{} asks about {}:\n  {}\n",
            parent,
            child,
            StudentLine::for_child(snapshot, rule)
        ))
    }

    /// One child of a parent picked with the school's random source
    pub fn random_child<R: Rng>(school: &mut School<R>, parent: &str) -> Result<String> {
        let rule = school.config().excellence_rule;
        let snapshot = school.random_child(parent)?;
        Ok(format!(
            "{} picks a child at random:\n  {}\n",
            parent,
            StudentLine::for_child(snapshot, rule)
        ))
    }

    /// The parent's overall take on their children
    pub fn parent_summary<R>(school: &School<R>, parent: &str) -> Result<String> {
        let threshold = school.config().parent_threshold;
        let parent = school.parent(parent)?;
        let name = parent.name();
        let average = parent.children_average().unwrap_or(0.0);

        let line = match ParentVerdict::assess(parent, threshold) {
            ParentVerdict::Proud => format!(
                "{name} is in a good mood and proud: the children average {average:.2}."
            ),
            ParentVerdict::Encouraging => format!(
                "{name} is in a good mood but hopes for more than an average of {average:.2}."
            ),
            ParentVerdict::Softened => format!(
                "{name} is in a bad mood, but an average of {average:.2} cheers them up."
            ),
            ParentVerdict::Disappointed => format!(
                "{name} is in a bad mood and an average of {average:.2} does not help."
            ),
            ParentVerdict::NothingToSay => format!("{name} has no children to talk about."),
        };
        Ok(format!("{line}\n"))
    }
}
