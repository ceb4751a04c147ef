//! Stable merge sort.

use crate::common::Student;
use crate::sort::SortKey;

/// Sort a snapshot of records by the given key, preserving the relative
/// order of equal keys.
///
/// Pure function: the input slice is never mutated. Split at the midpoint,
/// recurse, then merge taking from the left run on ties — that tie rule is
/// what makes the sort stable, and the stability is relied on (equal-grade
/// listings keep their insertion order). O(n log n) always.
pub fn merge_sort(students: &[Student], key: SortKey) -> Vec<Student> {
    if students.len() <= 1 {
        return students.to_vec();
    }

    let mid = students.len() / 2;
    let left = merge_sort(&students[..mid], key);
    let right = merge_sort(&students[mid..], key);

    merge(left, right, key)
}

/// Merge two sorted runs, favoring the left run on equal keys.
fn merge(left: Vec<Student>, right: Vec<Student>, key: SortKey) -> Vec<Student> {
    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        if key.compare(l, r).is_le() {
            result.push(left.next().expect("peeked element exists"));
        } else {
            result.push(right.next().expect("peeked element exists"));
        }
    }

    result.extend(left);
    result.extend(right);
    result
}
