//! Secondary indexes over the record store.
//!
//! Both indexes are non-owning: they hold `(key copy, SlotId)` pairs and
//! resolve records through the [`OrderedStore`](crate::store::OrderedStore).
//! Neither index frees a record; the registry keeps them in step with the
//! store on every mutation.
//!
//! # Components
//! - [`GradeIndex`] - binary search tree for grade-sorted and range queries
//! - [`IdIndex`] - bucketed hash table for O(1) average lookup by ID

mod grade_tree;
mod id_table;

pub use grade_tree::GradeIndex;
pub use id_table::IdIndex;
