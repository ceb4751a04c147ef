//! Stateless sorting algorithms over record snapshots.
//!
//! Both algorithms are pure: they take a slice, never mutate it, and
//! return a freshly ordered `Vec`. They exist alongside the grade tree so
//! ad-hoc views (sorted by name, by department, descending, ...) don't
//! need an index of their own.
//!
//! # Components
//! - [`SortKey`] / [`SortOrder`] - typed comparison discriminants
//! - [`quick_sort`] - deterministic middle-pivot partition sort
//! - [`merge_sort`] - stable merge sort

mod key;
mod merge;
mod quick;

pub use key::{SortKey, SortOrder};
pub use merge::merge_sort;
pub use quick::quick_sort;
