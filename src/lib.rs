//! rosterdb - an in-memory student registry over three synchronized indexes.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                           rosterdb                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Registry (registry/)                        │   │
//! │  │   one write lock, three structures, zero drift           │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │            ↓                 ↓                  ↓               │
//! │  ┌───────────────┐  ┌───────────────┐  ┌────────────────┐      │
//! │  │ OrderedStore  │  │  GradeIndex   │  │    IdIndex     │      │
//! │  │  (store/)     │  │  (index/)     │  │   (index/)     │      │
//! │  │ doubly linked │  │ BST on grade  │  │ hash table on  │      │
//! │  │ list, owns    │  │ sorted + range│  │ ID, O(1) avg   │      │
//! │  │ all records   │  │ queries       │  │ lookup         │      │
//! │  └───────────────┘  └───────────────┘  └────────────────┘      │
//! │                                                                 │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Sorter (sort/)                              │   │
//! │  │   pure partition/merge sorts over snapshots              │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store owns every record; the indexes hold `(key, SlotId)` handles
//! and resolve through the store. The registry is the only writer and
//! keeps all three in step inside one critical section per mutation.
//!
//! # Modules
//! - [`common`] - Shared primitives (Student, Grade, SlotId, Error, config)
//! - [`store`] - The insertion-ordered record owner
//! - [`index`] - Grade BST and ID hash table
//! - [`sort`] - Stateless sorting algorithms
//! - [`registry`] - The orchestrator and public API surface
//!
//! # Quick Start
//! ```
//! use rosterdb::{Grade, Registry};
//!
//! let registry = Registry::new();
//! registry.add("S001", "Alice", Grade::new(92.5), "CS").unwrap();
//! registry.add("S002", "Bob", Grade::new(78.3), "Math").unwrap();
//! registry.add("S003", "Carl", Grade::new(85.7), "Physics").unwrap();
//!
//! // Sorted enumeration comes from the grade BST.
//! let by_grade = registry.all_sorted_by_grade();
//! assert_eq!(by_grade[0].name, "Bob");
//!
//! // Range query: everyone at or above 80.
//! let top = registry.top_performers(Grade::new(80.0));
//! assert_eq!(top.len(), 2);
//! ```

// Core modules
pub mod common;
pub mod index;
pub mod registry;
pub mod sort;
pub mod store;

// Re-export commonly used items at crate root for convenience
pub use common::config::{BUCKET_COUNT, DEFAULT_TOP_GRADE, MAX_GRADE, MIN_GRADE};
pub use common::{Error, Grade, Result, SlotId, Student};

pub use index::{GradeIndex, IdIndex};
pub use registry::{Registry, RegistryStats, StatsSnapshot};
pub use sort::{merge_sort, quick_sort, SortKey, SortOrder};
pub use store::OrderedStore;
