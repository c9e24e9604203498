#[cfg(test)]
mod tests {
    use crate::utils::{assert_close, grades};
    use school_sim::models::{
        ChildSnapshot, EntityModel, Mood, Parent, ParentId, Student, StudentId,
    };
    use school_sim::ExcellenceRule;

    fn create_student(id: usize, name: &str, values: &[u8]) -> Student {
        let mut student = Student::new(StudentId::from(id), name);
        student.add_grades(grades(values));
        student
    }

    #[test]
    fn test_parent_creation() {
        let parent = Parent::new(ParentId::from(0), "Mrs. Smith", Mood::Bad);

        assert_eq!(parent.name(), "Mrs. Smith");
        assert_eq!(parent.mood(), Mood::Bad);
        assert!(parent.children().is_empty());
        assert!(parent.children_average().is_none());
    }

    #[test]
    fn test_snapshot_copies_student_state() {
        let mut student = create_student(1, "Alice", &[5, 4]);
        let snapshot = ChildSnapshot::of(&student);

        student.add_grades(grades(&[2]));

        assert_eq!(snapshot.student, StudentId::from(1));
        assert_eq!(snapshot.name, "Alice");
        assert_eq!(snapshot.grades, grades(&[5, 4]));
        assert_close(snapshot.average(), 4.5);
        assert!(!snapshot.is_excellent(ExcellenceRule::AllTopGrades));
    }

    #[test]
    fn test_record_child_replaces_older_snapshot() {
        let mut parent = Parent::new(ParentId::from(0), "Mrs. Smith", Mood::Good);
        let mut alice = create_student(0, "Alice", &[3]);

        parent.record_child(ChildSnapshot::of(&alice));
        alice.add_grades(grades(&[5]));
        parent.record_child(ChildSnapshot::of(&alice));

        assert_eq!(parent.children().len(), 1);
        assert_eq!(parent.child("Alice").unwrap().grades, grades(&[3, 5]));
        assert_eq!(parent.children()[0].student, StudentId::from(0));
    }

    #[test]
    fn test_children_average_is_mean_of_averages() {
        let mut parent = Parent::new(ParentId::from(0), "Mr. Brown", Mood::Good);
        parent.record_child(ChildSnapshot::of(&create_student(0, "Alice", &[5, 5, 5, 5])));
        parent.record_child(ChildSnapshot::of(&create_student(1, "Bob", &[4])));

        // (5.0 + 4.0) / 2, not the mean over all five grades
        assert_close(parent.children_average().unwrap(), 4.5);
        assert!(parent.child("Charlie").is_none());
    }
}
