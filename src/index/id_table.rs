//! IdIndex - bucketed hash table for O(1) average lookup by student ID.

use crate::common::config::BUCKET_COUNT;
use crate::common::SlotId;

/// One entry in a bucket chain.
#[derive(Debug)]
struct Entry {
    id: String,
    slot: SlotId,
}

/// A fixed-bucket-count hash table mapping student IDs to store handles.
///
/// Collisions are resolved by a per-bucket linear scan; the bucket count
/// never changes after construction. All operations are O(1) average and
/// O(bucket depth) worst case.
///
/// The hash is the classic polynomial rolling hash, reduced modulo the
/// bucket count at every step:
///
/// ```text
/// h = 0
/// for each character c of the ID, left to right:
///     h = (h * 31 + codepoint(c)) % bucket_count
/// ```
///
/// This exact formula is part of the registry's compatibility surface
/// (tests pin bucket placements against it), so it must not be swapped for
/// `std::hash` or changed to reduce only at the end.
///
/// # Example
/// ```
/// use rosterdb::{IdIndex, SlotId};
///
/// let mut index = IdIndex::new();
/// assert!(index.insert("S001", SlotId::new(0)));
/// assert!(!index.insert("S001", SlotId::new(1))); // duplicate rejected
/// assert_eq!(index.search("S001"), Some(SlotId::new(0)));
/// ```
pub struct IdIndex {
    /// Bucket chains. Length is fixed at construction.
    buckets: Vec<Vec<Entry>>,

    /// Number of live entries across all buckets.
    len: usize,
}

impl IdIndex {
    /// Create an index with the default [`BUCKET_COUNT`] buckets.
    pub fn new() -> Self {
        Self::with_buckets(BUCKET_COUNT)
    }

    /// Create an index with an explicit bucket count.
    ///
    /// Small counts are useful in tests to force collisions.
    ///
    /// # Panics
    /// Panics if `bucket_count` is 0.
    pub fn with_buckets(bucket_count: usize) -> Self {
        assert!(bucket_count > 0, "bucket_count must be > 0");

        Self {
            buckets: (0..bucket_count).map(|_| Vec::new()).collect(),
            len: 0,
        }
    }

    /// Polynomial rolling hash of an ID, reduced to a bucket position.
    fn bucket_of(&self, id: &str) -> usize {
        let m = self.buckets.len() as u64;
        let mut hash: u64 = 0;
        for ch in id.chars() {
            hash = (hash * 31 + ch as u64) % m;
        }
        hash as usize
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Insert an ID → handle mapping.
    ///
    /// Returns `false` (with no mutation) if the ID is already present in
    /// its bucket.
    pub fn insert(&mut self, id: &str, slot: SlotId) -> bool {
        let bucket = self.bucket_of(id);

        if self.buckets[bucket].iter().any(|e| e.id == id) {
            return false;
        }

        self.buckets[bucket].push(Entry {
            id: id.to_string(),
            slot,
        });
        self.len += 1;
        true
    }

    /// Remove an ID's entry. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let bucket = self.bucket_of(id);

        match self.buckets[bucket].iter().position(|e| e.id == id) {
            Some(pos) => {
                self.buckets[bucket].remove(pos);
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Look up the handle stored for an ID.
    pub fn search(&self, id: &str) -> Option<SlotId> {
        let bucket = self.bucket_of(id);
        self.buckets[bucket]
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.slot)
    }

    /// Check whether an ID is present.
    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.search(id).is_some()
    }

    /// Full scan over every stored handle, bucket by bucket.
    ///
    /// Order is unspecified; the consistency checks compare this against
    /// the other structures as a set.
    pub fn iter(&self) -> impl Iterator<Item = SlotId> + '_ {
        self.buckets.iter().flatten().map(|e| e.slot)
    }

    /// Number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the index holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The fixed number of buckets.
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}

impl Default for IdIndex {
    fn default() -> Self {
        Self::new()
    }
}
