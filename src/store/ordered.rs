//! OrderedStore - the insertion-ordered owner of all records.

use crate::common::{SlotId, Student};

/// A node in the doubly linked list.
///
/// Links are [`SlotId`]s rather than pointers; `SlotId::INVALID` marks the
/// ends of the list.
#[derive(Debug)]
struct Node {
    student: Student,
    prev: SlotId,
    next: SlotId,
}

/// The canonical, insertion-ordered collection of student records.
///
/// A doubly linked list whose nodes live in a slot arena:
///
/// ```text
/// ┌──────────────────────────────────────────────────────────┐
/// │                      OrderedStore                        │
/// │  head ─▶ [slot 0] ◀──▶ [slot 1] ◀──▶ [slot 2] ◀─ tail    │
/// │                                                          │
/// │  slots: Vec<Option<Node>>      free_list: Vec<SlotId>    │
/// │  (arena; None = free slot)     (LIFO reuse)              │
/// └──────────────────────────────────────────────────────────┘
/// ```
///
/// Storing nodes in a `Vec` and linking by [`SlotId`] sidesteps the
/// ownership knots of pointer-based linked lists in Rust, and gives the
/// secondary indexes a stable handle to hold: a freed slot makes stale
/// handles fail to resolve instead of dangling.
///
/// # Complexity
/// - `append`: O(1), slots reused from the free list
/// - `remove_by_id` / `find_by_id`: O(n) scan from the head
/// - `get`: O(1) handle resolution
/// - `iter`: O(n), insertion order
pub struct OrderedStore {
    /// Slot arena. `None` marks a free slot.
    slots: Vec<Option<Node>>,

    /// Freed slot IDs available for reuse (LIFO for locality).
    free_list: Vec<SlotId>,

    /// First node in insertion order, or INVALID when empty.
    head: SlotId,

    /// Last node in insertion order, or INVALID when empty.
    tail: SlotId,

    /// Number of live records.
    len: usize,
}

impl OrderedStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            head: SlotId::INVALID,
            tail: SlotId::INVALID,
            len: 0,
        }
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Append a record at the tail, preserving arrival order. O(1).
    ///
    /// Always succeeds; ID uniqueness is the registry's job, not the
    /// store's. Returns the slot now owning the record.
    pub fn append(&mut self, student: Student) -> SlotId {
        let node = Node {
            student,
            prev: self.tail,
            next: SlotId::INVALID,
        };

        // Reuse a freed slot if one exists, otherwise grow the arena.
        let slot = match self.free_list.pop() {
            Some(slot) => {
                debug_assert!(self.slots[slot.0].is_none(), "free slot occupied");
                self.slots[slot.0] = Some(node);
                slot
            }
            None => {
                self.slots.push(Some(node));
                SlotId::new(self.slots.len() - 1)
            }
        };

        if self.tail.is_valid() {
            self.node_mut(self.tail).next = slot;
        } else {
            // First record: it is both head and tail.
            self.head = slot;
        }
        self.tail = slot;
        self.len += 1;

        slot
    }

    /// Remove the record with the given ID, relinking its neighbors. O(n).
    ///
    /// Returns the removed record, or `None` if no record matches. The
    /// freed slot goes back on the free list for reuse.
    pub fn remove_by_id(&mut self, id: &str) -> Option<Student> {
        let slot = self.slot_of(id)?;
        let node = self.slots[slot.0].take().expect("slot_of returned a live slot");

        // Relink neighbors, handling head/tail edge cases.
        if node.prev.is_valid() {
            self.node_mut(node.prev).next = node.next;
        } else {
            self.head = node.next;
        }

        if node.next.is_valid() {
            self.node_mut(node.next).prev = node.prev;
        } else {
            self.tail = node.prev;
        }

        self.free_list.push(slot);
        self.len -= 1;

        Some(node.student)
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Linear search by student ID from the head. O(n).
    pub fn find_by_id(&self, id: &str) -> Option<&Student> {
        let slot = self.slot_of(id)?;
        Some(&self.node(slot).student)
    }

    /// Resolve a slot handle to its record. O(1).
    ///
    /// Returns `None` for freed or out-of-range slots.
    pub fn get(&self, slot: SlotId) -> Option<&Student> {
        self.slots
            .get(slot.0)?
            .as_ref()
            .map(|node| &node.student)
    }

    /// Number of live records.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the store holds no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // ========================================================================
    // Traversal
    // ========================================================================

    /// Iterate over all records in insertion order.
    ///
    /// The iterator is restartable: each call starts a fresh walk from the
    /// head and retains no state in the store.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            store: self,
            cursor: self.head,
        }
    }

    // ========================================================================
    // Internal helpers
    // ========================================================================

    /// Walk the list to find the slot holding `id`.
    fn slot_of(&self, id: &str) -> Option<SlotId> {
        let mut cursor = self.head;
        while cursor.is_valid() {
            let node = self.node(cursor);
            if node.student.id == id {
                return Some(cursor);
            }
            cursor = node.next;
        }
        None
    }

    /// Borrow a live node.
    ///
    /// # Panics
    /// Panics if the slot is free; callers only pass slots obtained from
    /// the live list links.
    fn node(&self, slot: SlotId) -> &Node {
        self.slots[slot.0].as_ref().expect("linked slot is live")
    }

    fn node_mut(&mut self, slot: SlotId) -> &mut Node {
        self.slots[slot.0].as_mut().expect("linked slot is live")
    }
}

impl Default for OrderedStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Insertion-order iterator over `(SlotId, &Student)` pairs.
pub struct Iter<'a> {
    store: &'a OrderedStore,
    cursor: SlotId,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (SlotId, &'a Student);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.cursor.is_valid() {
            return None;
        }
        let slot = self.cursor;
        let node = self.store.node(slot);
        self.cursor = node.next;
        Some((slot, &node.student))
    }
}
