//! Registry - the orchestrator keeping all three structures in step.

use std::sync::atomic::Ordering;

use log::{debug, trace};
use parking_lot::RwLock;

use crate::common::{Error, Grade, Result, SlotId, Student};
use crate::index::{GradeIndex, IdIndex};
use crate::registry::{RegistryStats, StatsSnapshot};
use crate::sort::{merge_sort, quick_sort, SortKey, SortOrder};
use crate::store::OrderedStore;

/// The three structures, mutated together or not at all.
struct RegistryInner {
    /// Owns every record; canonical insertion order.
    store: OrderedStore,

    /// Grade-sorted view. Rebuilt from the store after every removal.
    by_grade: GradeIndex,

    /// ID → slot lookup. The uniqueness gatekeeper for `add`.
    by_id: IdIndex,
}

/// The student registry.
///
/// # Architecture
/// ```text
/// ┌────────────────────────────────────────────────────────────┐
/// │                         Registry                           │
/// │  ┌───────────────────── RwLock ───────────────────────┐    │
/// │  │  ┌──────────────┐ ┌──────────────┐ ┌────────────┐  │    │
/// │  │  │ OrderedStore │ │  GradeIndex  │ │  IdIndex   │  │    │
/// │  │  │ (owns records│ │ (Grade,Slot) │ │ (id, Slot) │  │    │
/// │  │  │  + order)    │ │     BST      │ │ hash table │  │    │
/// │  │  └──────▲───────┘ └──────┬───────┘ └─────┬──────┘  │    │
/// │  │         └── SlotId handles ──────────────┘         │    │
/// │  └────────────────────────────────────────────────────┘    │
/// │  ┌──────────────┐                                          │
/// │  │RegistryStats │  (atomic counters, outside the lock)     │
/// │  └──────────────┘                                          │
/// └────────────────────────────────────────────────────────────┘
/// ```
///
/// # Routing
/// - ID lookup → [`IdIndex`]
/// - grade-sorted / range query → [`GradeIndex`]
/// - insertion order → [`OrderedStore`]
/// - any other key → snapshot + [`sort`](crate::sort)
///
/// # Thread Safety
/// The three structures form one unit of mutual exclusion: `add` and
/// `remove` take the write lock and update all of them in a single
/// critical section, so no reader can ever observe the store and an index
/// disagreeing. Reads take the read lock, copy what they need, and release
/// before returning — no lock is ever held across the API boundary.
///
/// # Usage
/// ```
/// use rosterdb::{Grade, Registry};
///
/// let registry = Registry::new();
/// registry.add("S001", "Alice", Grade::new(92.5), "CS").unwrap();
/// registry.add("S002", "Bob", Grade::new(78.3), "Math").unwrap();
///
/// let by_grade = registry.all_sorted_by_grade();
/// assert_eq!(by_grade[0].id, "S002");
///
/// assert!(registry.add("S001", "Alice II", Grade::new(50.0), "CS").is_err());
/// ```
pub struct Registry {
    /// All record state, behind one lock.
    inner: RwLock<RegistryInner>,

    /// Operation counters.
    stats: RegistryStats,
}

impl Registry {
    /// Create an empty registry with the default ID-table bucket count.
    pub fn new() -> Self {
        Self::with_inner(IdIndex::new())
    }

    /// Create an empty registry with an explicit ID-table bucket count.
    ///
    /// # Panics
    /// Panics if `bucket_count` is 0.
    pub fn with_buckets(bucket_count: usize) -> Self {
        Self::with_inner(IdIndex::with_buckets(bucket_count))
    }

    fn with_inner(by_id: IdIndex) -> Self {
        Self {
            inner: RwLock::new(RegistryInner {
                store: OrderedStore::new(),
                by_grade: GradeIndex::new(),
                by_id,
            }),
            stats: RegistryStats::new(),
        }
    }

    // ========================================================================
    // Public API: Mutations
    // ========================================================================

    /// Register a new student.
    ///
    /// The ID-table existence check runs first; a duplicate ID fails with
    /// [`Error::DuplicateId`] before any structure is touched. On success
    /// the record lands in the store and both indexes within one critical
    /// section, and a copy of the stored record is returned.
    ///
    /// # Errors
    /// - [`Error::DuplicateId`] if the ID is already registered
    pub fn add(
        &self,
        id: impl Into<String>,
        name: impl Into<String>,
        grade: Grade,
        department: impl Into<String>,
    ) -> Result<Student> {
        let student = Student::new(id, name, grade, department);
        let mut inner = self.inner.write();

        // Uniqueness gate: reject before mutating anything.
        if inner.by_id.contains(&student.id) {
            return Err(Error::DuplicateId(student.id));
        }

        let slot = inner.store.append(student.clone());
        inner.by_grade.insert(student.grade, slot);
        let inserted = inner.by_id.insert(&student.id, slot);
        debug_assert!(inserted, "ID table rejected an ID that passed the gate");

        self.stats.adds.fetch_add(1, Ordering::Relaxed);
        debug!("added student {} at {} (grade {})", student.id, slot, student.grade);

        Ok(student)
    }

    /// Remove a student by ID.
    ///
    /// The store removal runs first; a miss fails with [`Error::NotFound`]
    /// and touches nothing else. On a hit the ID-table entry is dropped
    /// and the grade index is rebuilt from the surviving records in
    /// insertion order — the deliberate O(n log n) alternative to BST node
    /// deletion. Returns the removed record.
    ///
    /// # Errors
    /// - [`Error::NotFound`] if no student has this ID
    pub fn remove(&self, id: &str) -> Result<Student> {
        let mut inner = self.inner.write();

        let Some(student) = inner.store.remove_by_id(id) else {
            return Err(Error::NotFound(id.to_string()));
        };

        let removed = inner.by_id.remove(id);
        debug_assert!(removed, "store held an ID the ID table did not");

        Self::rebuild_grade_index(&mut inner);

        self.stats.removals.fetch_add(1, Ordering::Relaxed);
        self.stats.grade_rebuilds.fetch_add(1, Ordering::Relaxed);
        debug!("removed student {} (grade index rebuilt)", id);

        Ok(student)
    }

    /// Re-insert every surviving record into a fresh grade index.
    ///
    /// Insertion order is preserved, so ties among equal grades keep their
    /// relative order in the rebuilt tree.
    fn rebuild_grade_index(inner: &mut RegistryInner) {
        inner.by_grade.clear();
        // Collect first: the iterator borrows the store while by_grade
        // needs a mutable borrow of the same struct.
        let entries: Vec<(SlotId, Grade)> = inner
            .store
            .iter()
            .map(|(slot, s)| (slot, s.grade))
            .collect();
        for (slot, grade) in entries {
            inner.by_grade.insert(grade, slot);
        }
    }

    // ========================================================================
    // Public API: Lookups
    // ========================================================================

    /// Look up a student by ID through the hash table. O(1) average.
    pub fn search(&self, id: &str) -> Option<Student> {
        let inner = self.inner.read();

        self.stats.lookups.fetch_add(1, Ordering::Relaxed);

        let found = inner
            .by_id
            .search(id)
            .map(|slot| Self::resolve(&inner, slot));

        if found.is_some() {
            self.stats.lookup_hits.fetch_add(1, Ordering::Relaxed);
        }
        trace!("search {} -> {}", id, if found.is_some() { "hit" } else { "miss" });

        found
    }

    /// Check whether a student ID is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.inner.read().by_id.contains(id)
    }

    /// Number of registered students.
    pub fn len(&self) -> usize {
        self.inner.read().store.len()
    }

    /// Check if the registry holds no students.
    pub fn is_empty(&self) -> bool {
        self.inner.read().store.is_empty()
    }

    // ========================================================================
    // Public API: Enumerations
    // ========================================================================

    /// All students in insertion order (store traversal).
    pub fn all_in_insertion_order(&self) -> Vec<Student> {
        let inner = self.inner.read();
        inner.store.iter().map(|(_, s)| s.clone()).collect()
    }

    /// All students in non-decreasing grade order (BST in-order walk).
    pub fn all_sorted_by_grade(&self) -> Vec<Student> {
        let inner = self.inner.read();
        inner
            .by_grade
            .in_order()
            .into_iter()
            .map(|slot| Self::resolve(&inner, slot))
            .collect()
    }

    /// All students sorted by name (snapshot + stable merge sort).
    pub fn all_sorted_by_name(&self) -> Vec<Student> {
        let snapshot = self.all_in_insertion_order();
        merge_sort(&snapshot, SortKey::Name)
    }

    /// All students sorted by an arbitrary key and direction
    /// (snapshot + partition sort).
    pub fn all_sorted_by(&self, key: SortKey, order: SortOrder) -> Vec<Student> {
        let snapshot = self.all_in_insertion_order();
        quick_sort(&snapshot, key, order)
    }

    /// All students with `grade >= min`, in non-decreasing grade order
    /// (pruned BST walk). The conventional threshold is
    /// [`DEFAULT_TOP_GRADE`](crate::common::config::DEFAULT_TOP_GRADE).
    pub fn top_performers(&self, min: Grade) -> Vec<Student> {
        let inner = self.inner.read();
        inner
            .by_grade
            .at_or_above(min)
            .into_iter()
            .map(|slot| Self::resolve(&inner, slot))
            .collect()
    }

    /// Get a snapshot of the operation counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    // ========================================================================
    // Internal helpers
    // ========================================================================

    /// Resolve an index handle against the store.
    ///
    /// # Panics
    /// A handle that fails to resolve means the indexes and the store have
    /// diverged, which the single-critical-section mutations rule out;
    /// that is a bug, not a recoverable condition.
    fn resolve(inner: &RegistryInner, slot: SlotId) -> Student {
        inner
            .store
            .get(slot)
            .expect("index handle resolves to a live record")
            .clone()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
