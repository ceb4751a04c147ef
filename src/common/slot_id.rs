//! Slot identifier type.

use std::fmt;

/// Identifies a slot in the [`OrderedStore`](crate::store::OrderedStore) arena.
///
/// Using `usize` because:
/// 1. Slots are stored in `Vec<Option<Node>>`
/// 2. Direct indexing without casting: `slots[slot_id.0]`
/// 3. Matches Rust idioms for array/vector indexing
///
/// The secondary indexes (grade tree, ID table) store `SlotId` handles
/// rather than references into the store, so a record can be freed without
/// any dangling-pointer risk — a stale handle simply fails to resolve.
///
/// # Example
/// ```
/// use rosterdb::SlotId;
///
/// let slot = SlotId::new(5);
/// assert!(slot.is_valid());
/// assert_eq!(slot.0, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(pub usize);

impl SlotId {
    /// Invalid/sentinel slot ID.
    ///
    /// Used for the `prev`/`next` links at the ends of the list and for an
    /// empty store's `head`/`tail`.
    pub const INVALID: SlotId = SlotId(usize::MAX);

    /// Create a new SlotId.
    #[inline]
    pub fn new(id: usize) -> Self {
        SlotId(id)
    }

    /// Check if this slot ID is valid (not the sentinel value).
    #[inline]
    pub fn is_valid(&self) -> bool {
        *self != Self::INVALID
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::INVALID {
            write!(f, "Slot(INVALID)")
        } else {
            write!(f, "Slot({})", self.0)
        }
    }
}
