//! GradeIndex - BST keyed on grade for sorted enumeration and range queries.

use crate::common::{Grade, SlotId};

/// Index of a tree node inside the node arena.
type NodeId = usize;

/// A BST node: the grade key, the store handle, and child links.
#[derive(Debug)]
struct TreeNode {
    grade: Grade,
    slot: SlotId,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

/// A binary search tree over `(Grade, SlotId)` pairs.
///
/// Nodes live in a `Vec` arena with `usize` child links, the same handle
/// trick as the store itself — no `Box`/`Rc` plumbing required.
///
/// Insertion sends a strictly smaller grade left and anything else right,
/// so equal grades stack up in the right subtree in their insertion order
/// and in-order traversal stays stable among ties.
///
/// The tree is deliberately unbalanced: inserts are O(log n) on average
/// but degrade to O(n) when grades arrive monotonically. That is an
/// accepted trade-off inherited from the reference design — this index is
/// rebuilt wholesale after every removal anyway (see
/// [`Registry::remove`](crate::Registry::remove)), so there is no node
/// deletion primitive here at all.
pub struct GradeIndex {
    /// Node arena. Never shrinks except through [`GradeIndex::clear`].
    nodes: Vec<TreeNode>,

    /// Arena index of the root, or `None` when empty.
    root: Option<NodeId>,
}

impl GradeIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Insert a record handle under its grade. O(log n) average.
    pub fn insert(&mut self, grade: Grade, slot: SlotId) {
        let new_id = self.nodes.len();
        self.nodes.push(TreeNode {
            grade,
            slot,
            left: None,
            right: None,
        });

        let Some(mut current) = self.root else {
            self.root = Some(new_id);
            return;
        };

        // Iterative descent to the first empty child position.
        loop {
            if grade < self.nodes[current].grade {
                match self.nodes[current].left {
                    Some(left) => current = left,
                    None => {
                        self.nodes[current].left = Some(new_id);
                        return;
                    }
                }
            } else {
                // Ties go right: equal grades keep their insertion order.
                match self.nodes[current].right {
                    Some(right) => current = right,
                    None => {
                        self.nodes[current].right = Some(new_id);
                        return;
                    }
                }
            }
        }
    }

    /// Discard every entry. Used by the registry before a rebuild.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    // ========================================================================
    // Traversal
    // ========================================================================

    /// In-order traversal: all handles in non-decreasing grade order. O(n).
    pub fn in_order(&self) -> Vec<SlotId> {
        let mut result = Vec::with_capacity(self.nodes.len());
        self.collect_in_order(self.root, &mut result);
        result
    }

    fn collect_in_order(&self, node: Option<NodeId>, result: &mut Vec<SlotId>) {
        let Some(id) = node else { return };
        let n = &self.nodes[id];
        self.collect_in_order(n.left, result);
        result.push(n.slot);
        self.collect_in_order(n.right, result);
    }

    /// Range query: all handles with `grade >= min`, in non-decreasing
    /// grade order. O(k + log n) amortized for k results.
    ///
    /// Pruning: at a node that qualifies, the left subtree may still hold
    /// qualifying entries, so recurse both sides. At a node that does not,
    /// its entire left subtree is disqualified too — only the right side
    /// can contribute.
    pub fn at_or_above(&self, min: Grade) -> Vec<SlotId> {
        let mut result = Vec::new();
        self.collect_at_or_above(self.root, min, &mut result);
        result
    }

    fn collect_at_or_above(&self, node: Option<NodeId>, min: Grade, result: &mut Vec<SlotId>) {
        let Some(id) = node else { return };
        let n = &self.nodes[id];
        if n.grade >= min {
            self.collect_at_or_above(n.left, min, result);
            result.push(n.slot);
            self.collect_at_or_above(n.right, min, result);
        } else {
            self.collect_at_or_above(n.right, min, result);
        }
    }

    // ========================================================================
    // State queries
    // ========================================================================

    /// Number of indexed entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the index holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Default for GradeIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build an index where slot i holds the i-th inserted grade, so tests
    /// can read traversal output as insertion positions.
    fn index_of(grades: &[f64]) -> GradeIndex {
        let mut index = GradeIndex::new();
        for (i, &g) in grades.iter().enumerate() {
            index.insert(Grade::new(g), SlotId::new(i));
        }
        index
    }

    #[test]
    fn test_grade_index_new_is_empty() {
        let index = GradeIndex::new();
        assert!(index.is_empty());
        assert!(index.in_order().is_empty());
        assert!(index.at_or_above(Grade::new(0.0)).is_empty());
    }

    #[test]
    fn test_in_order_sorts_by_grade() {
        let index = index_of(&[92.5, 78.3, 85.7]);

        // 78.3 (slot 1), 85.7 (slot 2), 92.5 (slot 0)
        assert_eq!(
            index.in_order(),
            vec![SlotId::new(1), SlotId::new(2), SlotId::new(0)]
        );
    }

    #[test]
    fn test_equal_grades_keep_insertion_order() {
        let index = index_of(&[80.0, 80.0, 75.0, 80.0]);

        // Ties go right, so equal grades come out in insertion order.
        assert_eq!(
            index.in_order(),
            vec![SlotId::new(2), SlotId::new(0), SlotId::new(1), SlotId::new(3)]
        );
    }

    #[test]
    fn test_at_or_above_filters_and_sorts() {
        let index = index_of(&[92.5, 78.3, 85.7, 72.8, 95.2]);

        // >= 80: 85.7 (slot 2), 92.5 (slot 0), 95.2 (slot 4)
        assert_eq!(
            index.at_or_above(Grade::new(80.0)),
            vec![SlotId::new(2), SlotId::new(0), SlotId::new(4)]
        );
    }

    #[test]
    fn test_at_or_above_boundary_is_inclusive() {
        let index = index_of(&[80.0, 79.9, 80.1]);

        assert_eq!(
            index.at_or_above(Grade::new(80.0)),
            vec![SlotId::new(0), SlotId::new(2)]
        );
    }

    #[test]
    fn test_at_or_above_all_and_none() {
        let index = index_of(&[60.0, 70.0, 80.0]);

        assert_eq!(index.at_or_above(Grade::new(0.0)).len(), 3);
        assert!(index.at_or_above(Grade::new(90.0)).is_empty());
    }

    #[test]
    fn test_monotonic_insertion_degenerates_but_stays_correct() {
        // Worst case shape: a right spine. Still must traverse correctly.
        let index = index_of(&[10.0, 20.0, 30.0, 40.0, 50.0]);

        assert_eq!(
            index.in_order(),
            (0..5).map(SlotId::new).collect::<Vec<_>>()
        );
        assert_eq!(index.at_or_above(Grade::new(35.0)).len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut index = index_of(&[92.5, 78.3]);
        assert_eq!(index.len(), 2);

        index.clear();
        assert!(index.is_empty());
        assert!(index.in_order().is_empty());

        // Usable again after clear (the rebuild path).
        index.insert(Grade::new(50.0), SlotId::new(7));
        assert_eq!(index.in_order(), vec![SlotId::new(7)]);
    }
}
