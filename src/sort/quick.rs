//! Deterministic partition sort (quicksort with a middle pivot).

use crate::common::Student;
use crate::sort::{SortKey, SortOrder};

/// Sort a snapshot of records by the given key and direction.
///
/// Pure function: the input slice is never mutated; a new `Vec` is
/// returned. The pivot is always the middle element and records are
/// partitioned three ways (strictly less / equal / strictly greater) by
/// the key, so runs of equal keys never recurse. Descending order swaps
/// the less/greater halves around the same pivot.
///
/// The deterministic pivot keeps runs reproducible for testing at the cost
/// of the classic O(n²) worst case on adversarial inputs; average is
/// O(n log n).
///
/// # Example
/// ```
/// use rosterdb::{quick_sort, Grade, SortKey, SortOrder, Student};
///
/// let roster = vec![
///     Student::new("S001", "Alice", Grade::new(92.5), "CS"),
///     Student::new("S002", "Bob", Grade::new(78.3), "Math"),
/// ];
/// let sorted = quick_sort(&roster, SortKey::Grade, SortOrder::Ascending);
/// assert_eq!(sorted[0].id, "S002");
/// ```
pub fn quick_sort(students: &[Student], key: SortKey, order: SortOrder) -> Vec<Student> {
    if students.len() <= 1 {
        return students.to_vec();
    }

    let pivot = &students[students.len() / 2];

    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();

    for s in students {
        match key.compare(s, pivot) {
            std::cmp::Ordering::Less => less.push(s.clone()),
            std::cmp::Ordering::Equal => equal.push(s.clone()),
            std::cmp::Ordering::Greater => greater.push(s.clone()),
        }
    }

    let (first, last) = match order {
        SortOrder::Ascending => (less, greater),
        SortOrder::Descending => (greater, less),
    };

    let mut result = quick_sort(&first, key, order);
    result.extend(equal);
    result.extend(quick_sort(&last, key, order));
    result
}
