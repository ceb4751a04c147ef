//! Registry integration tests.
//!
//! Exercises the full orchestration surface: add/remove/search plus every
//! enumeration view, including the reference walkthrough scenario and the
//! eight-student sample roster.

use rosterdb::{Error, Grade, Registry, SortKey, SortOrder, DEFAULT_TOP_GRADE};

/// The sample roster used for larger scenarios.
const SAMPLE: &[(&str, &str, f64, &str)] = &[
    ("S001", "Alice Johnson", 92.5, "Computer Science"),
    ("S002", "Bob Smith", 78.3, "Mathematics"),
    ("S003", "Charlie Brown", 85.7, "Physics"),
    ("S004", "Diana Prince", 95.2, "Computer Science"),
    ("S005", "Eve Wilson", 72.8, "Chemistry"),
    ("S006", "Frank Miller", 88.4, "Mathematics"),
    ("S007", "Grace Lee", 91.0, "Computer Science"),
    ("S008", "Henry Davis", 76.5, "Physics"),
];

fn seeded() -> Registry {
    let registry = Registry::new();
    for &(id, name, grade, dept) in SAMPLE {
        registry.add(id, name, Grade::new(grade), dept).unwrap();
    }
    registry
}

fn ids(students: &[rosterdb::Student]) -> Vec<&str> {
    students.iter().map(|s| s.id.as_str()).collect()
}

// ============================================================================
// Reference walkthrough: Alice / Bob / Carl
// ============================================================================

#[test]
fn test_walkthrough_scenario() {
    let registry = Registry::new();
    registry.add("S001", "Alice", Grade::new(92.5), "CS").unwrap();
    registry.add("S002", "Bob", Grade::new(78.3), "Math").unwrap();
    registry.add("S003", "Carl", Grade::new(85.7), "Physics").unwrap();

    // Sorted by grade: Bob(78.3), Carl(85.7), Alice(92.5)
    assert_eq!(ids(&registry.all_sorted_by_grade()), vec!["S002", "S003", "S001"]);

    // Top performers at 80: Carl(85.7), Alice(92.5)
    let top = registry.top_performers(Grade::new(80.0));
    assert_eq!(ids(&top), vec!["S003", "S001"]);

    // Delete Bob, then every trace of him is gone.
    registry.remove("S002").unwrap();
    assert!(registry.search("S002").is_none());
    assert_eq!(ids(&registry.all_sorted_by_grade()), vec!["S003", "S001"]);
    assert_eq!(ids(&registry.all_in_insertion_order()), vec!["S001", "S003"]);
}

// ============================================================================
// Views over the sample roster
// ============================================================================

#[test]
fn test_insertion_order_view() {
    let registry = seeded();

    let order = registry.all_in_insertion_order();
    let expected: Vec<&str> = SAMPLE.iter().map(|&(id, ..)| id).collect();
    assert_eq!(ids(&order), expected);
}

#[test]
fn test_grade_view_is_non_decreasing() {
    let registry = seeded();

    let by_grade = registry.all_sorted_by_grade();
    assert_eq!(by_grade.len(), SAMPLE.len());
    for pair in by_grade.windows(2) {
        assert!(pair[0].grade <= pair[1].grade);
    }
    assert_eq!(by_grade[0].id, "S005"); // Eve, 72.8
    assert_eq!(by_grade[7].id, "S004"); // Diana, 95.2
}

#[test]
fn test_name_view_is_alphabetical() {
    let registry = seeded();

    let by_name = registry.all_sorted_by_name();
    for pair in by_name.windows(2) {
        assert!(pair[0].name <= pair[1].name);
    }
    assert_eq!(by_name[0].name, "Alice Johnson");
    assert_eq!(by_name[7].name, "Henry Davis");
}

#[test]
fn test_top_performers_default_threshold() {
    let registry = seeded();

    let top = registry.top_performers(Grade::new(DEFAULT_TOP_GRADE));
    // 85.7, 88.4, 91.0, 92.5, 95.2
    assert_eq!(ids(&top), vec!["S003", "S006", "S007", "S001", "S004"]);
    for s in &top {
        assert!(s.grade >= Grade::new(DEFAULT_TOP_GRADE));
    }
}

#[test]
fn test_ad_hoc_views() {
    let registry = seeded();

    let grade_desc = registry.all_sorted_by(SortKey::Grade, SortOrder::Descending);
    assert_eq!(grade_desc[0].id, "S004");
    assert_eq!(grade_desc[7].id, "S005");

    let by_dept = registry.all_sorted_by(SortKey::Department, SortOrder::Ascending);
    let depts: Vec<&str> = by_dept.iter().map(|s| s.department.as_str()).collect();
    let mut sorted_depts = depts.clone();
    sorted_depts.sort_unstable();
    assert_eq!(depts, sorted_depts);
}

// ============================================================================
// Mutation semantics
// ============================================================================

#[test]
fn test_duplicate_add_leaves_registry_unchanged() {
    let registry = seeded();

    let order_before = registry.all_in_insertion_order();
    let grade_before = registry.all_sorted_by_grade();

    let err = registry
        .add("S004", "Fake Diana", Grade::new(0.0), "None")
        .unwrap_err();
    assert_eq!(err, Error::DuplicateId("S004".to_string()));

    // Snapshot equality before/after: nothing moved.
    assert_eq!(registry.all_in_insertion_order(), order_before);
    assert_eq!(registry.all_sorted_by_grade(), grade_before);
    assert_eq!(registry.search("S004").unwrap().name, "Diana Prince");
}

#[test]
fn test_remove_then_views_shrink_consistently() {
    let registry = seeded();

    registry.remove("S003").unwrap();
    registry.remove("S007").unwrap();

    assert_eq!(registry.len(), 6);
    assert_eq!(registry.all_in_insertion_order().len(), 6);
    assert_eq!(registry.all_sorted_by_grade().len(), 6);
    assert!(registry.search("S003").is_none());
    assert!(registry.search("S007").is_none());

    // The grade view is still sorted after the rebuilds.
    for pair in registry.all_sorted_by_grade().windows(2) {
        assert!(pair[0].grade <= pair[1].grade);
    }
}

#[test]
fn test_remove_missing_id_fails_cleanly() {
    let registry = seeded();

    assert_eq!(
        registry.remove("S999").unwrap_err(),
        Error::NotFound("S999".to_string())
    );
    assert_eq!(registry.len(), SAMPLE.len());
}

#[test]
fn test_drain_and_refill() {
    let registry = seeded();

    for &(id, ..) in SAMPLE {
        registry.remove(id).unwrap();
    }
    assert!(registry.is_empty());
    assert!(registry.all_sorted_by_grade().is_empty());

    // Every ID is reusable after the drain.
    for &(id, name, grade, dept) in SAMPLE {
        registry.add(id, name, Grade::new(grade), dept).unwrap();
    }
    assert_eq!(registry.len(), SAMPLE.len());
    assert_eq!(registry.search("S005").unwrap().name, "Eve Wilson");
}

#[test]
fn test_equal_grades_keep_insertion_order_in_grade_view() {
    let registry = Registry::new();
    registry.add("S010", "First", Grade::new(80.0), "CS").unwrap();
    registry.add("S011", "Second", Grade::new(80.0), "CS").unwrap();
    registry.add("S012", "Lower", Grade::new(70.0), "CS").unwrap();
    registry.add("S013", "Third", Grade::new(80.0), "CS").unwrap();

    assert_eq!(
        ids(&registry.all_sorted_by_grade()),
        vec!["S012", "S010", "S011", "S013"]
    );

    // Still true after a removal forces a rebuild.
    registry.remove("S012").unwrap();
    assert_eq!(
        ids(&registry.all_sorted_by_grade()),
        vec!["S010", "S011", "S013"]
    );
}

// ============================================================================
// Stats
// ============================================================================

#[test]
fn test_stats_reflect_operations() {
    let registry = seeded();

    registry.search("S001");
    registry.search("S001");
    registry.search("NOPE");
    registry.remove("S008").unwrap();

    let stats = registry.stats();
    assert_eq!(stats.adds, 8);
    assert_eq!(stats.removals, 1);
    assert_eq!(stats.grade_rebuilds, 1);
    assert_eq!(stats.lookups, 3);
    assert_eq!(stats.lookup_hits, 2);
    let display = format!("{}", stats);
    assert!(display.contains("adds: 8"));
}
