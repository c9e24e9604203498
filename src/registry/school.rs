//! The school registry
//!
//! `School` owns every entity collection together with the single random
//! source used for grading, mood changes, attendance and random reports.
//! Cross-entity operations resolve names through the collections' name
//! indexes; a name that does not resolve yields `SchoolError::NotFound`
//! and leaves every collection untouched.

use crate::collections::EntityCollection;
use crate::config::SchoolConfig;
use crate::error::{Result, SchoolError};
use crate::models::{
    ChildSnapshot, EntityModel, Grade, GradedStudent, Lesson, LessonId, LessonOutcome, Mood,
    Parent, ParentId, Student, StudentId, Teacher, TeacherId, TeacherProfile,
};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Students, teachers, lessons and parents of one school
#[derive(Debug)]
pub struct School<R = StdRng> {
    config: SchoolConfig,
    students: EntityCollection<Student>,
    teachers: EntityCollection<Teacher>,
    lessons: EntityCollection<Lesson>,
    parents: EntityCollection<Parent>,
    rng: R,
}

impl School<StdRng> {
    /// Create an empty school.
    ///
    /// The random source is seeded from `config.random_seed` when set, so
    /// runs with the same seed and the same operations produce the same grades.
    pub fn new(config: SchoolConfig) -> Result<Self> {
        let rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R> School<R> {
    /// Configuration this school was created with
    #[must_use]
    pub fn config(&self) -> &SchoolConfig {
        &self.config
    }

    /// All students in enrolment order
    #[must_use]
    pub fn students(&self) -> &EntityCollection<Student> {
        &self.students
    }

    /// All teachers in hiring order
    #[must_use]
    pub fn teachers(&self) -> &EntityCollection<Teacher> {
        &self.teachers
    }

    /// All lessons in scheduling order
    #[must_use]
    pub fn lessons(&self) -> &EntityCollection<Lesson> {
        &self.lessons
    }

    /// All parents in registration order
    #[must_use]
    pub fn parents(&self) -> &EntityCollection<Parent> {
        &self.parents
    }

    /// Look up a student by name
    pub fn student(&self, name: &str) -> Result<&Student> {
        self.students.require(name)
    }

    /// Look up a teacher by name
    pub fn teacher(&self, name: &str) -> Result<&Teacher> {
        self.teachers.require(name)
    }

    /// Look up a lesson by name
    pub fn lesson(&self, name: &str) -> Result<&Lesson> {
        self.lessons.require(name)
    }

    /// Look up a parent by name
    pub fn parent(&self, name: &str) -> Result<&Parent> {
        self.parents.require(name)
    }

    /// Students satisfying the configured excellence rule
    #[must_use]
    pub fn excellent_students(&self) -> Vec<&Student> {
        let rule = self.config.excellence_rule;
        self.students.filter(|student| student.is_excellent(rule))
    }

    /// A named child of a named parent, as last snapshotted
    pub fn child(&self, parent: &str, child: &str) -> Result<&ChildSnapshot> {
        self.parents
            .require(parent)?
            .child(child)
            .ok_or_else(|| SchoolError::NotAChild {
                parent: parent.to_string(),
                child: child.to_string(),
            })
    }
}

impl<R: Rng> School<R> {
    /// Create an empty school drawing randomness from `rng`
    pub fn with_rng(config: SchoolConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            students: EntityCollection::new(),
            teachers: EntityCollection::new(),
            lessons: EntityCollection::new(),
            parents: EntityCollection::new(),
            rng,
        })
    }

    /// Enrol a student with no grades
    pub fn add_student(&mut self, name: &str) -> Result<StudentId> {
        let id = self
            .students
            .insert_with(name, |id| Student::new(id, name))?;
        log::debug!("Enrolled student {name} as {id}");
        Ok(id)
    }

    /// Hire a teacher
    pub fn add_teacher(&mut self, profile: TeacherProfile) -> Result<TeacherId> {
        let name = profile.name.clone();
        let id = self
            .teachers
            .insert_with(&name, |id| Teacher::from_profile(id, profile))?;
        log::debug!("Hired teacher {name} as {id}");
        Ok(id)
    }

    /// Register a parent without children
    pub fn add_parent(&mut self, name: &str, mood: Mood) -> Result<ParentId> {
        let id = self
            .parents
            .insert_with(name, |id| Parent::new(id, name, mood))?;
        log::debug!("Registered parent {name} as {id}");
        Ok(id)
    }

    /// Schedule a lesson. Teacher and student names are resolved only when
    /// the lesson is conducted.
    pub fn add_lesson<I, S>(
        &mut self,
        name: &str,
        teacher: &str,
        students: I,
        grades_per_student: u32,
    ) -> Result<LessonId>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let students = students.into_iter().map(Into::into).collect();
        let id = self.lessons.insert_with(name, |id| {
            Lesson::new(id, name, teacher, students, grades_per_student)
        })?;
        log::debug!("Scheduled lesson {name} with {teacher} as {id}");
        Ok(id)
    }

    /// Record explicit grades for a student.
    ///
    /// Every value is validated before any grade is stored.
    pub fn add_grades(&mut self, student: &str, grades: &[u8]) -> Result<()> {
        let grades = grades
            .iter()
            .map(|value| Grade::new(*value))
            .collect::<Result<Vec<_>>>()?;
        self.students.require_mut(student)?.add_grades(grades);
        Ok(())
    }

    /// Have `teacher` give `student` one grade
    pub fn assign_grade(&mut self, student: &str, teacher: &str) -> Result<Grade> {
        let student_id = self
            .students
            .id_of(student)
            .ok_or_else(|| SchoolError::not_found(Student::KIND, student))?;
        let teacher = self.teachers.require_mut(teacher)?;
        let student = self
            .students
            .get_mut(student_id)
            .ok_or_else(|| SchoolError::not_found(Student::KIND, student))?;

        let grade = teacher.grade(student, &self.config, &mut self.rng);
        student.add_grade(grade);
        Ok(grade)
    }

    /// Have `teacher` give `student` several grades in a row
    pub fn assign_grades(
        &mut self,
        student: &str,
        teacher: &str,
        count: u32,
    ) -> Result<Vec<Grade>> {
        // Resolve both up front so a miss never leaves a partial run behind
        self.students.require(student)?;
        self.teachers.require(teacher)?;

        (0..count)
            .map(|_| self.assign_grade(student, teacher))
            .collect()
    }

    /// Conduct a lesson: every present student on the roster receives the
    /// lesson's number of grades from its teacher.
    ///
    /// Roster names that do not resolve are skipped and reported in
    /// `LessonOutcome::missing`; students kept away by the teacher's
    /// attendance model are reported in `LessonOutcome::absent`.
    pub fn conduct_lesson(&mut self, lesson: &str) -> Result<LessonOutcome> {
        let lesson = self.lessons.require(lesson)?;
        let teacher = self.teachers.require_mut(lesson.teacher())?;
        let mut outcome = LessonOutcome::new(lesson.name(), teacher.name());

        for name in lesson.students() {
            let Some(student) = self.students.by_name_mut(name) else {
                log::warn!(
                    "Lesson {}: student {} is not enrolled, skipping",
                    lesson.name(),
                    name
                );
                outcome.missing.push(name.clone());
                continue;
            };

            if !teacher.attendance().is_present(&mut self.rng) {
                log::info!("Lesson {}: {} is absent", lesson.name(), name);
                outcome.absent.push(name.clone());
                continue;
            }

            let mut grades = Vec::with_capacity(lesson.grades_per_student() as usize);
            for _ in 0..lesson.grades_per_student() {
                let grade = teacher.grade(student, &self.config, &mut self.rng);
                student.add_grade(grade);
                grades.push(grade);
            }

            outcome.graded.push(GradedStudent {
                student: student.id(),
                name: name.clone(),
                grades,
            });
        }

        log::info!(
            "Conducted lesson {} with {}: {} grades, {} absent, {} missing",
            outcome.lesson,
            outcome.teacher,
            outcome.total_grades(),
            outcome.absent.len(),
            outcome.missing.len()
        );
        Ok(outcome)
    }

    /// Conduct every lesson taught by `teacher`, in scheduling order
    pub fn conduct_lessons_by(&mut self, teacher: &str) -> Result<Vec<LessonOutcome>> {
        self.teachers.require(teacher)?;

        let names: Vec<String> = self
            .lessons
            .filter(|lesson| lesson.teacher() == teacher)
            .into_iter()
            .map(|lesson| lesson.name().to_string())
            .collect();

        names.iter().map(|name| self.conduct_lesson(name)).collect()
    }

    /// Conduct every scheduled lesson. Lessons whose teacher does not
    /// resolve are logged and skipped.
    pub fn conduct_all_lessons(&mut self) -> Vec<LessonOutcome> {
        let names: Vec<String> = self
            .lessons
            .iter()
            .map(|lesson| lesson.name().to_string())
            .collect();

        let mut outcomes = Vec::with_capacity(names.len());
        for name in &names {
            match self.conduct_lesson(name) {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => log::warn!("Skipping lesson {name}: {e}"),
            }
        }
        outcomes
    }

    /// Give `parent` a snapshot of `student` as a child.
    ///
    /// The snapshot is an owned copy: grades given afterwards are not visible
    /// to the parent until `refresh_children` is called.
    pub fn assign_child(&mut self, parent: &str, student: &str) -> Result<()> {
        let snapshot = ChildSnapshot::of(self.students.require(student)?);
        let parent_entry = self.parents.require_mut(parent)?;
        parent_entry.record_child(snapshot);
        log::debug!("Assigned {student} as a child of {parent}");
        Ok(())
    }

    /// Re-take every child snapshot of `parent` from the current student
    /// records. Returns the number of refreshed snapshots.
    pub fn refresh_children(&mut self, parent: &str) -> Result<usize> {
        let parent = self.parents.require_mut(parent)?;
        let snapshots: Vec<ChildSnapshot> = parent
            .children()
            .iter()
            .filter_map(|child| self.students.get(child.student).map(ChildSnapshot::of))
            .collect();

        let refreshed = snapshots.len();
        for snapshot in snapshots {
            parent.record_child(snapshot);
        }
        Ok(refreshed)
    }

    /// Pick one of the parent's children at random
    pub fn random_child(&mut self, parent: &str) -> Result<&ChildSnapshot> {
        self.parents
            .require(parent)?
            .children()
            .choose(&mut self.rng)
            .ok_or_else(|| SchoolError::NoChildren(parent.to_string()))
    }
}
