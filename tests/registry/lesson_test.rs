//! Tests for lesson conduction

use crate::utils::{TEST_SEED, school_with_students, seeded_school};
use school_sim::models::{EntityModel, Grade, Mood};
use school_sim::{Attendance, EntityKind, GradingPolicy, SchoolError, TeacherProfile};

const ROSTER: [&str; 3] = ["Alice", "Bob", "Charlie"];

#[test]
fn test_full_attendance_gives_n_times_k_grades() {
    let mut school = school_with_students(&ROSTER);
    school.add_teacher(TeacherProfile::new("Ms. Johnson")).unwrap();
    school.add_lesson("Mathematics", "Ms. Johnson", ROSTER, 3).unwrap();

    let outcome = school.conduct_lesson("Mathematics").unwrap();

    assert_eq!(outcome.lesson, "Mathematics");
    assert_eq!(outcome.teacher, "Ms. Johnson");
    assert_eq!(outcome.total_grades(), 9);
    assert_eq!(outcome.graded.len(), 3);
    assert!(outcome.absent.is_empty());
    assert!(outcome.missing.is_empty());
    for name in ROSTER {
        assert_eq!(school.student(name).unwrap().grade_count(), 3);
    }
    assert_eq!(school.teacher("Ms. Johnson").unwrap().grades_issued(), 9);
}

#[test]
fn test_graded_students_follow_roster_order() {
    let mut school = school_with_students(&ROSTER);
    school.add_teacher(TeacherProfile::new("Ms. Johnson")).unwrap();
    school
        .add_lesson("Mathematics", "Ms. Johnson", ["Charlie", "Alice"], 1)
        .unwrap();

    let outcome = school.conduct_lesson("Mathematics").unwrap();
    let names: Vec<&str> = outcome.graded.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, ["Charlie", "Alice"]);
    assert_eq!(outcome.graded[0].student, school.student("Charlie").unwrap().id());
    assert!(school.student("Bob").unwrap().grades().is_empty());
}

#[test]
fn test_good_mood_lessons_stay_in_range() {
    let mut school = school_with_students(&ROSTER);
    school
        .add_teacher(TeacherProfile::new("Ms. Johnson").with_mood(Mood::Good))
        .unwrap();
    school.add_lesson("Mathematics", "Ms. Johnson", ROSTER, 10).unwrap();

    let outcome = school.conduct_lesson("Mathematics").unwrap();
    for graded in &outcome.graded {
        assert!(graded.grades.iter().all(|g| (4..=5).contains(&g.value())));
    }
}

#[test]
fn test_unknown_students_are_skipped() {
    let mut school = school_with_students(&ROSTER);
    school
        .add_teacher(TeacherProfile::new("Mrs. Kind").with_policy(GradingPolicy::AlwaysFive))
        .unwrap();
    school
        .add_lesson("Music", "Mrs. Kind", ["Alice", "Frank", "Bob"], 2)
        .unwrap();

    let outcome = school.conduct_lesson("Music").unwrap();

    assert_eq!(outcome.missing, ["Frank"]);
    assert_eq!(outcome.total_grades(), 4);
    assert_eq!(school.students().len(), 3);
    assert_eq!(
        school.student("Bob").unwrap().grades(),
        [Grade::EXCELLENT, Grade::EXCELLENT]
    );
}

#[test]
fn test_unknown_teacher_fails_without_grading() {
    let mut school = school_with_students(&ROSTER);
    school.add_lesson("Art", "Ms. Absent", ROSTER, 2).unwrap();

    let err = school.conduct_lesson("Art").unwrap_err();
    assert!(matches!(
        err,
        SchoolError::NotFound { kind: EntityKind::Teacher, .. }
    ));
    for name in ROSTER {
        assert!(school.student(name).unwrap().grades().is_empty());
    }
}

#[test]
fn test_unknown_lesson() {
    let mut school = seeded_school(TEST_SEED);
    let err = school.conduct_lesson("Astronomy").unwrap_err();
    assert!(matches!(
        err,
        SchoolError::NotFound { kind: EntityKind::Lesson, .. }
    ));
}

#[test]
fn test_nobody_attends_with_zero_presence() {
    let mut school = school_with_students(&ROSTER);
    school
        .add_teacher(
            TeacherProfile::new("Mr. Sleepy").with_attendance(Attendance::partial(0.0).unwrap()),
        )
        .unwrap();
    school.add_lesson("History", "Mr. Sleepy", ROSTER, 2).unwrap();

    let outcome = school.conduct_lesson("History").unwrap();
    assert_eq!(outcome.absent, ROSTER);
    assert_eq!(outcome.total_grades(), 0);
}

#[test]
fn test_partial_attendance_splits_roster() {
    let students: Vec<String> = (0..40).map(|i| format!("Student {i}")).collect();
    let mut school = seeded_school(TEST_SEED);
    for name in &students {
        school.add_student(name).unwrap();
    }
    school
        .add_teacher(
            TeacherProfile::new("Mr. Sleepy").with_attendance(Attendance::partial(0.5).unwrap()),
        )
        .unwrap();
    school.add_lesson("History", "Mr. Sleepy", &students, 1).unwrap();

    let outcome = school.conduct_lesson("History").unwrap();

    // Everyone is accounted for exactly once
    assert_eq!(outcome.absent.len() + outcome.graded.len(), students.len());
    assert_eq!(outcome.total_grades(), outcome.graded.len());
    assert!(!outcome.absent.is_empty());
    assert!(!outcome.graded.is_empty());
}

#[test]
fn test_conduct_lessons_by_teacher() {
    let mut school = school_with_students(&ROSTER);
    school.add_teacher(TeacherProfile::new("Ms. Johnson")).unwrap();
    school.add_teacher(TeacherProfile::new("Mr. Petrov")).unwrap();
    school.add_lesson("Algebra", "Ms. Johnson", ["Alice"], 1).unwrap();
    school.add_lesson("Physics", "Mr. Petrov", ["Bob"], 1).unwrap();
    school.add_lesson("Geometry", "Ms. Johnson", ["Charlie"], 2).unwrap();

    let outcomes = school.conduct_lessons_by("Ms. Johnson").unwrap();

    let lessons: Vec<&str> = outcomes.iter().map(|o| o.lesson.as_str()).collect();
    assert_eq!(lessons, ["Algebra", "Geometry"]);
    assert!(school.student("Bob").unwrap().grades().is_empty());
    assert_eq!(school.student("Charlie").unwrap().grade_count(), 2);

    assert!(school.conduct_lessons_by("Mr. Nobody").is_err());
}

#[test]
fn test_conduct_all_lessons_skips_unresolvable_teachers() {
    let mut school = school_with_students(&ROSTER);
    school.add_teacher(TeacherProfile::new("Ms. Johnson")).unwrap();
    school.add_lesson("Algebra", "Ms. Johnson", ROSTER, 1).unwrap();
    school.add_lesson("Art", "Ms. Absent", ROSTER, 1).unwrap();

    let outcomes = school.conduct_all_lessons();

    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].lesson, "Algebra");
    assert_eq!(school.student("Alice").unwrap().grade_count(), 1);
}
