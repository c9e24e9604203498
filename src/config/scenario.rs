//! Scenarios describing a school to simulate
//!
//! A scenario lists who is enrolled, who teaches what, and which parents
//! follow which children. It can be read from JSON or taken from the
//! built-in classroom used by the `school-sim` binary.

use super::SchoolConfig;
use crate::error::{Result, SchoolError};
use crate::grading::{Attendance, GradingPolicy};
use crate::models::{Mood, TeacherProfile};
use crate::registry::School;
use crate::utils::logging::log_skipped;
use rand::Rng;
use rand::rngs::StdRng;
use serde::Deserialize;
use std::path::Path;

/// A teacher as described in a scenario
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TeacherEntry {
    /// Teacher name
    pub name: String,
    /// Initial mood
    #[serde(default)]
    pub mood: Mood,
    /// Grading policy
    #[serde(default)]
    pub policy: GradingPolicy,
    /// Probability that a student attends; full attendance when unset
    #[serde(default)]
    pub presence: Option<f64>,
    /// Re-draw the mood after every n-th grade
    #[serde(default)]
    pub mood_flip_every: Option<u32>,
}

impl TeacherEntry {
    fn new(name: &str, mood: Mood, policy: GradingPolicy) -> Self {
        Self {
            name: name.to_string(),
            mood,
            policy,
            presence: None,
            mood_flip_every: None,
        }
    }

    /// Turn the entry into a profile, validating the attendance probability
    pub fn profile(&self) -> Result<TeacherProfile> {
        let attendance = match self.presence {
            Some(presence) => Attendance::partial(presence)?,
            None => Attendance::Full,
        };

        let mut profile = TeacherProfile::new(self.name.clone())
            .with_mood(self.mood)
            .with_policy(self.policy)
            .with_attendance(attendance);
        if let Some(every) = self.mood_flip_every {
            profile = profile.with_mood_flip_every(every);
        }
        Ok(profile)
    }
}

/// A lesson as described in a scenario
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LessonEntry {
    /// Lesson name
    pub name: String,
    /// Teacher name
    pub teacher: String,
    /// Student names in roster order
    pub students: Vec<String>,
    /// Grades per present student
    #[serde(default = "default_grades_per_student")]
    pub grades_per_student: u32,
}

fn default_grades_per_student() -> u32 {
    1
}

/// A parent as described in a scenario
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParentEntry {
    /// Parent name
    pub name: String,
    /// Parent mood
    #[serde(default)]
    pub mood: Mood,
    /// Names of the parent's children
    #[serde(default)]
    pub children: Vec<String>,
}

/// Grades recorded directly, outside any lesson
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GradeEntry {
    /// Student name
    pub student: String,
    /// Grades in the order they are recorded
    pub grades: Vec<u8>,
}

/// A complete school setup
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Scenario {
    /// School configuration
    pub config: SchoolConfig,
    /// Student names
    pub students: Vec<String>,
    /// Teachers
    pub teachers: Vec<TeacherEntry>,
    /// Grades recorded before any lesson
    pub grades: Vec<GradeEntry>,
    /// Lessons
    pub lessons: Vec<LessonEntry>,
    /// Parents and their children
    pub parents: Vec<ParentEntry>,
}

impl Scenario {
    /// Parse a scenario from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        let scenario: Self = serde_json::from_str(json)?;
        scenario.config.validate()?;
        Ok(scenario)
    }

    /// Read and parse a JSON scenario file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// The built-in classroom: a few students with a grade history, one
    /// teacher of each kind, and three parents.
    #[must_use]
    pub fn classroom() -> Self {
        let everyone: Vec<String> = ["Alice", "Bob", "Charlie", "Diana", "Ethan"]
            .iter()
            .map(ToString::to_string)
            .collect();

        let mut moody = TeacherEntry::new("Mr. Petrov", Mood::Bad, GradingPolicy::Random);
        moody.mood_flip_every = Some(5);
        let mut sleepy = TeacherEntry::new("Mr. Sleepy", Mood::Good, GradingPolicy::Random);
        sleepy.presence = Some(0.5);

        let lesson = |name: &str, teacher: &str, students: &[&str], grades_per_student| {
            LessonEntry {
                name: name.to_string(),
                teacher: teacher.to_string(),
                students: students.iter().map(ToString::to_string).collect(),
                grades_per_student,
            }
        };
        let grades = |student: &str, grades: &[u8]| GradeEntry {
            student: student.to_string(),
            grades: grades.to_vec(),
        };
        let parent = |name: &str, mood, children: &[&str]| ParentEntry {
            name: name.to_string(),
            mood,
            children: children.iter().map(ToString::to_string).collect(),
        };

        let all: Vec<&str> = everyone.iter().map(String::as_str).collect();
        Self {
            config: SchoolConfig::default(),
            teachers: vec![
                TeacherEntry::new("Ms. Johnson", Mood::Good, GradingPolicy::Random),
                moody,
                TeacherEntry::new("Mrs. Kind", Mood::Good, GradingPolicy::AlwaysFive),
                TeacherEntry::new("Mr. Strict", Mood::Bad, GradingPolicy::AlwaysTwo),
                sleepy,
            ],
            grades: vec![
                grades("Alice", &[5, 4, 5]),
                grades("Bob", &[4, 3, 4]),
                grades("Charlie", &[5, 5, 4]),
            ],
            lessons: vec![
                lesson("Mathematics", "Ms. Johnson", &all[..], 2),
                lesson("Physics", "Mr. Petrov", &all[..], 3),
                lesson("Music", "Mrs. Kind", &["Alice", "Diana", "Frank"], 1),
                lesson("Chemistry", "Mr. Strict", &["Bob", "Ethan"], 1),
                lesson("History", "Mr. Sleepy", &all[..], 2),
            ],
            parents: vec![
                parent("Mrs. Smith", Mood::Good, &["Alice", "Bob"]),
                parent("Mr. Brown", Mood::Bad, &["Charlie", "Diana"]),
                parent("Mr. Green", Mood::Good, &["Ethan"]),
            ],
            students: everyone,
        }
    }

    /// Build a school seeded from the scenario's configuration and enrol
    /// everyone in it. Children are not assigned yet.
    pub fn build(&self) -> Result<School<StdRng>> {
        let mut school = School::new(self.config.clone())?;
        self.enrol(&mut school)?;
        Ok(school)
    }

    /// Add the scenario's students, teachers, grades, lessons and parents
    /// to `school`.
    ///
    /// Duplicate names and invalid values abort with an error. Grades for
    /// students that are not enrolled are logged and skipped.
    pub fn enrol<R: Rng>(&self, school: &mut School<R>) -> Result<()> {
        for name in &self.students {
            school.add_student(name)?;
        }
        for teacher in &self.teachers {
            school.add_teacher(teacher.profile()?)?;
        }
        for entry in &self.grades {
            match school.add_grades(&entry.student, &entry.grades) {
                Err(e @ SchoolError::NotFound { .. }) => log_skipped("record grades", &e),
                other => other?,
            }
        }
        for lesson in &self.lessons {
            school.add_lesson(
                &lesson.name,
                &lesson.teacher,
                &lesson.students,
                lesson.grades_per_student,
            )?;
        }
        for parent in &self.parents {
            school.add_parent(&parent.name, parent.mood)?;
        }

        log::info!(
            "Enrolled {} students, {} teachers, {} lessons, {} parents",
            school.students().len(),
            school.teachers().len(),
            school.lessons().len(),
            school.parents().len()
        );
        Ok(())
    }

    /// Snapshot each parent's children as they are now. Names that do not
    /// resolve are logged and skipped. Returns the number of snapshots taken.
    pub fn assign_children<R: Rng>(&self, school: &mut School<R>) -> usize {
        let mut assigned = 0;
        for parent in &self.parents {
            for child in &parent.children {
                match school.assign_child(&parent.name, child) {
                    Ok(()) => assigned += 1,
                    Err(e) => log_skipped("assign child", &e),
                }
            }
        }
        assigned
    }
}
