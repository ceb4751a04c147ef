//! The student record type.

use std::fmt;

use crate::common::Grade;

/// A single student record.
///
/// Records have immutable identity: once created, a `Student` is never
/// mutated in place. The `id` is the only cross-structure key — every
/// secondary index refers back to a record through its store slot, and the
/// slot is located by `id`. An "update" is modeled as remove + add.
///
/// # Example
/// ```
/// use rosterdb::{Grade, Student};
///
/// let s = Student::new("S001", "Alice", Grade::new(92.5), "CS");
/// assert_eq!(s.id, "S001");
/// assert_eq!(s.grade, Grade::new(92.5));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    /// Unique student ID, the primary key.
    pub id: String,

    /// Full name.
    pub name: String,

    /// Grade in `[0.0, 100.0]` (validated by the caller).
    pub grade: Grade,

    /// Department the student belongs to.
    pub department: String,
}

impl Student {
    /// Create a new student record.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        grade: Grade,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            grade,
            department: department.into(),
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Grade goes through to_string so the column width applies to the
        // rendered "NN.NN" text, not to the f64.
        write!(
            f,
            "{:<10} {:<20} {:<8} {:<15}",
            self.id,
            self.name,
            self.grade.to_string(),
            self.department
        )
    }
}
