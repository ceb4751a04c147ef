//! Sort key and direction discriminants.

use std::cmp::Ordering;

use crate::common::Student;

/// Which record attribute to sort by.
///
/// A typed discriminant instead of a stringly-typed attribute name: the
/// compiler rules out "sort by a field that doesn't exist" and each key
/// carries its own comparison (numeric total order for grades,
/// lexicographic for strings).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Numeric comparison on `grade`.
    Grade,
    /// Lexicographic comparison on `name`.
    Name,
    /// Lexicographic comparison on `department`.
    Department,
}

impl SortKey {
    /// Compare two records by this key.
    pub fn compare(&self, a: &Student, b: &Student) -> Ordering {
        match self {
            SortKey::Grade => a.grade.cmp(&b.grade),
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Department => a.department.cmp(&b.department),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}
