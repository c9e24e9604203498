//! Tests for scenario loading and school setup

use school_sim::config::scenario::{GradeEntry, ParentEntry};
use school_sim::models::Mood;
use school_sim::{ExcellenceRule, GradeRange, GradingPolicy, Scenario, SchoolConfig, SchoolError};

const SCENARIO_JSON: &str = r#"{
    "config": {
        "excellence_rule": { "rule": "average_above", "threshold": 4.5 },
        "random_seed": 7
    },
    "students": ["Alice", "Bob"],
    "teachers": [
        { "name": "Ms. Johnson" },
        { "name": "Mr. Sleepy", "mood": "bad", "presence": 0.5, "mood_flip_every": 5 },
        { "name": "Mrs. Kind", "policy": "always_five" }
    ],
    "grades": [{ "student": "Alice", "grades": [5, 4, 5] }],
    "lessons": [
        { "name": "Mathematics", "teacher": "Ms. Johnson", "students": ["Alice", "Bob"] },
        { "name": "Music", "teacher": "Mrs. Kind", "students": ["Bob"], "grades_per_student": 3 }
    ],
    "parents": [{ "name": "Mrs. Smith", "children": ["Alice", "Zoe"] }]
}"#;

#[test]
fn test_classroom_scenario() {
    let scenario = Scenario::classroom();
    let school = scenario.build().unwrap();

    assert_eq!(school.students().len(), 5);
    assert_eq!(school.teachers().len(), 5);
    assert_eq!(school.lessons().len(), 5);
    assert_eq!(school.parents().len(), 3);
    assert_eq!(
        school.student("Alice").unwrap().grades().len(),
        3,
        "recorded grades are applied at setup"
    );
    assert_eq!(
        school.teacher("Mrs. Kind").unwrap().policy(),
        GradingPolicy::AlwaysFive
    );
    assert_eq!(
        school.teacher("Mr. Sleepy").unwrap().attendance().presence(),
        Some(0.5)
    );
}

#[test]
fn test_classroom_lessons_and_children() {
    let scenario = Scenario::classroom();
    let mut school = scenario.build().unwrap();

    let outcomes = school.conduct_all_lessons();
    assert_eq!(outcomes.len(), 5);

    let music = outcomes.iter().find(|o| o.lesson == "Music").unwrap();
    assert_eq!(music.missing, ["Frank"]);
    assert_eq!(music.total_grades(), 2);

    let chemistry = outcomes.iter().find(|o| o.lesson == "Chemistry").unwrap();
    assert!(chemistry.graded.iter().all(|g| g.grades.iter().all(|v| v.value() == 2)));

    assert_eq!(scenario.assign_children(&mut school), 5);
    assert_eq!(school.parent("Mr. Brown").unwrap().children().len(), 2);
}

#[test]
fn test_json_scenario_with_defaults() {
    let scenario = Scenario::from_json_str(SCENARIO_JSON).unwrap();

    assert_eq!(scenario.config.random_seed, Some(7));
    assert_eq!(
        scenario.config.excellence_rule,
        ExcellenceRule::AverageAbove { threshold: 4.5 }
    );
    assert_eq!(scenario.config.good_mood_grades, GradeRange::good_mood_default());
    assert_eq!(scenario.teachers[0].mood, Mood::Good);
    assert_eq!(scenario.teachers[0].policy, GradingPolicy::Random);
    assert_eq!(scenario.teachers[1].mood, Mood::Bad);
    assert_eq!(scenario.lessons[0].grades_per_student, 1);
    assert_eq!(scenario.lessons[1].grades_per_student, 3);
    assert_eq!(scenario.parents[0].mood, Mood::Good);
}

#[test]
fn test_json_scenario_builds_school() {
    let scenario = Scenario::from_json_str(SCENARIO_JSON).unwrap();
    let mut school = scenario.build().unwrap();

    // Alice's history is excellent under the average rule
    let excellent: Vec<&str> = school
        .excellent_students()
        .into_iter()
        .map(|s| school_sim::models::EntityModel::name(s))
        .collect();
    assert_eq!(excellent, ["Alice"]);

    let music = school.conduct_lesson("Music").unwrap();
    assert_eq!(music.total_grades(), 3);

    // Zoe is not enrolled and is skipped
    assert_eq!(scenario.assign_children(&mut school), 1);
}

#[test]
fn test_seeded_scenarios_are_reproducible() {
    let scenario = Scenario::from_json_str(SCENARIO_JSON).unwrap();

    let run = || {
        let mut school = scenario.build().unwrap();
        school.conduct_all_lessons();
        school.student("Bob").unwrap().grades().to_vec()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_invalid_scenarios() {
    let bad_presence = r#"{ "teachers": [{ "name": "Mr. Sleepy", "presence": 1.5 }] }"#;
    let scenario = Scenario::from_json_str(bad_presence).unwrap();
    assert!(matches!(scenario.build(), Err(SchoolError::InvalidConfig(_))));

    let duplicate = r#"{ "students": ["Alice", "Alice"] }"#;
    let scenario = Scenario::from_json_str(duplicate).unwrap();
    assert!(matches!(scenario.build(), Err(SchoolError::DuplicateName { .. })));

    let bad_grade = r#"{ "students": ["Alice"], "grades": [{ "student": "Alice", "grades": [9] }] }"#;
    let scenario = Scenario::from_json_str(bad_grade).unwrap();
    assert!(matches!(scenario.build(), Err(SchoolError::InvalidGrade(9))));

    assert!(matches!(
        Scenario::from_json_str("{ not json"),
        Err(SchoolError::Json(_))
    ));
}

#[test]
fn test_grades_for_unknown_students_are_skipped() {
    let scenario = Scenario {
        students: vec!["Alice".to_string()],
        grades: vec![GradeEntry {
            student: "Zoe".to_string(),
            grades: vec![5],
        }],
        parents: vec![ParentEntry {
            name: "Mr. Green".to_string(),
            mood: Mood::Bad,
            children: vec!["Zoe".to_string()],
        }],
        ..Scenario::default()
    };

    let mut school = scenario.build().unwrap();
    assert!(school.student("Alice").unwrap().grades().is_empty());
    assert_eq!(scenario.assign_children(&mut school), 0);
}

#[test]
fn test_missing_scenario_file() {
    let result = Scenario::from_json_file(std::path::Path::new("/nonexistent/scenario.json"));
    assert!(matches!(result, Err(SchoolError::Io(_))));
}

#[test]
fn test_default_scenario_config() {
    assert_eq!(Scenario::default().config, SchoolConfig::default());
}
