//! Teacher entity model
//!
//! This module contains the Teacher model. A teacher hands out grades
//! according to a `GradingPolicy`, biased by mood, and may skip absent
//! students during lessons according to its `Attendance`.

use super::student::Student;
use super::traits::EntityModel;
use super::types::{Grade, Mood, TeacherId};
use crate::config::SchoolConfig;
use crate::error::EntityKind;
use crate::grading::{Attendance, GradingPolicy};
use rand::Rng;

/// Everything needed to hire a teacher, before the school assigns a handle
#[derive(Debug, Clone, PartialEq)]
pub struct TeacherProfile {
    /// Unique teacher name
    pub name: String,
    /// Initial mood
    pub mood: Mood,
    /// How grades are produced
    pub policy: GradingPolicy,
    /// Who actually shows up to this teacher's lessons
    pub attendance: Attendance,
    /// Re-draw the mood after every n-th grade issued
    pub mood_flip_every: Option<u32>,
}

impl TeacherProfile {
    /// A good-mood teacher grading randomly, with full attendance
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mood: Mood::Good,
            policy: GradingPolicy::Random,
            attendance: Attendance::Full,
            mood_flip_every: None,
        }
    }

    /// Set the initial mood
    #[must_use]
    pub fn with_mood(mut self, mood: Mood) -> Self {
        self.mood = mood;
        self
    }

    /// Set the grading policy
    #[must_use]
    pub fn with_policy(mut self, policy: GradingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the attendance model
    #[must_use]
    pub fn with_attendance(mut self, attendance: Attendance) -> Self {
        self.attendance = attendance;
        self
    }

    /// Re-draw the mood with a coin toss after every `every` grades
    #[must_use]
    pub fn with_mood_flip_every(mut self, every: u32) -> Self {
        self.mood_flip_every = (every > 0).then_some(every);
        self
    }
}

/// A teacher registered in a school
#[derive(Debug, Clone, PartialEq)]
pub struct Teacher {
    id: TeacherId,
    name: String,
    mood: Mood,
    policy: GradingPolicy,
    attendance: Attendance,
    mood_flip_every: Option<u32>,
    grades_issued: u32,
}

impl Teacher {
    /// Create a teacher from a profile
    pub fn from_profile(id: TeacherId, profile: TeacherProfile) -> Self {
        Self {
            id,
            name: profile.name,
            mood: profile.mood,
            policy: profile.policy,
            attendance: profile.attendance,
            mood_flip_every: profile.mood_flip_every,
            grades_issued: 0,
        }
    }

    /// Current mood
    #[must_use]
    pub fn mood(&self) -> Mood {
        self.mood
    }

    /// Grading policy
    #[must_use]
    pub fn policy(&self) -> GradingPolicy {
        self.policy
    }

    /// Attendance model used during lessons
    #[must_use]
    pub fn attendance(&self) -> Attendance {
        self.attendance
    }

    /// Total number of grades this teacher has handed out
    #[must_use]
    pub fn grades_issued(&self) -> u32 {
        self.grades_issued
    }

    /// Produce one grade for `student`.
    ///
    /// The grade is not recorded on the student; the caller appends it.
    /// Issuing counts towards the mood-flip schedule.
    pub fn grade<R: Rng>(
        &mut self,
        student: &Student,
        config: &SchoolConfig,
        rng: &mut R,
    ) -> Grade {
        let grade = self.policy.grade(student, self.mood, config, rng);
        self.grades_issued = self.grades_issued.wrapping_add(1);

        if let Some(every) = self.mood_flip_every.filter(|every| *every > 0) {
            if self.grades_issued % every == 0 {
                let previous = self.mood;
                self.mood = Mood::from(rng.random_bool(0.5));
                log::debug!(
                    "{} re-drew mood after {} grades: {} -> {}",
                    self.name,
                    self.grades_issued,
                    previous,
                    self.mood
                );
            }
        }

        log::debug!("{} gave {} a {}", self.name, student.name(), grade);
        grade
    }
}

impl EntityModel for Teacher {
    type Id = TeacherId;

    const KIND: EntityKind = EntityKind::Teacher;

    fn id(&self) -> TeacherId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
