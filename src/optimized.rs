//! Indexed binary heap
//!
//! An array-backed binary min-heap augmented with a map from each element to
//! its current array position. The map turns membership tests into O(1)
//! lookups and lets `change_priority` find its node without a scan, so every
//! queue operation is O(log n) or better.
//!
//! # Layout
//!
//! The heap is zero-indexed: the parent of position `k` is `(k - 1) / 2` and
//! its children are `2k + 1` and `2k + 2`.
//!
//! # Invariants
//!
//! Between public calls:
//! - every non-root node has a priority no smaller than its parent's
//! - `index[element(k)] == k` for every occupied position `k`, and the index
//!   holds no other keys
//!
//! Both are restored by [`swim`](OptimizedIndexedHeapMinPQ::swim) and
//! [`sink`](OptimizedIndexedHeapMinPQ::sink), which move nodes only through
//! `swap` so that the array and the index are updated together.
//!
//! # Time Complexity
//!
//! | Operation         | Complexity |
//! |-------------------|------------|
//! | `add`             | O(log n)   |
//! | `contains`        | O(1)       |
//! | `peek_min`        | O(1)       |
//! | `remove_min`      | O(log n)   |
//! | `change_priority` | O(log n)   |
//!
//! # Example
//!
//! ```rust
//! use indexed_minpq::MinPriorityQueue;
//! use indexed_minpq::optimized::OptimizedIndexedHeapMinPQ;
//!
//! let mut pq = OptimizedIndexedHeapMinPQ::new();
//! pq.add("far", 100).unwrap();
//! pq.add("near", 5).unwrap();
//! pq.change_priority(&"far", 1).unwrap();
//!
//! assert_eq!(pq.remove_min(), Ok("far"));
//! assert_eq!(pq.remove_min(), Ok("near"));
//! ```

use crate::traits::{MinPriorityQueue, PqError, PriorityNode};
use rustc_hash::FxHashMap;
use std::hash::Hash;
use tracing::trace;

#[inline]
fn parent(k: usize) -> usize {
    (k - 1) / 2
}

#[inline]
fn left(k: usize) -> usize {
    2 * k + 1
}

/// A min-priority queue with O(log n) priority updates
#[derive(Debug, Clone)]
pub struct OptimizedIndexedHeapMinPQ<E, P> {
    /// Heap-ordered nodes
    nodes: Vec<PriorityNode<E, P>>,
    /// Current position of every queued element in `nodes`
    index: FxHashMap<E, usize>,
}

impl<E: Eq + Hash + Clone, P: Ord> OptimizedIndexedHeapMinPQ<E, P> {
    /// Creates an empty queue with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        let mut index = FxHashMap::default();
        index.reserve(capacity);
        Self {
            nodes: Vec::with_capacity(capacity),
            index,
        }
    }

    /// Returns true if every node's priority is no smaller than its parent's
    pub fn is_heap_ordered(&self) -> bool {
        (1..self.nodes.len())
            .all(|k| self.nodes[parent(k)].priority() <= self.nodes[k].priority())
    }

    /// Returns true if the index map and the array agree in both directions
    pub fn is_index_consistent(&self) -> bool {
        self.index.len() == self.nodes.len()
            && self
                .nodes
                .iter()
                .enumerate()
                .all(|(k, node)| self.index.get(node.element()) == Some(&k))
    }

    /// Exchanges two positions, keeping the index in step with the array
    fn swap(&mut self, a: usize, b: usize) {
        self.nodes.swap(a, b);
        for k in [a, b] {
            if let Some(slot) = self.index.get_mut(self.nodes[k].element()) {
                *slot = k;
            }
        }
    }

    /// Moves the node at `k` towards the root until its parent is no larger
    ///
    /// Returns the node's final position.
    fn swim(&mut self, mut k: usize) -> usize {
        while k > 0 {
            let p = parent(k);
            if self.nodes[k].priority() < self.nodes[p].priority() {
                self.swap(k, p);
                k = p;
            } else {
                break;
            }
        }
        k
    }

    /// Moves the node at `k` towards the leaves until no child is smaller
    ///
    /// Returns the node's final position.
    fn sink(&mut self, mut k: usize) -> usize {
        while let Some(child) = self.smaller_child(k) {
            if self.nodes[child].priority() < self.nodes[k].priority() {
                self.swap(k, child);
                k = child;
            } else {
                break;
            }
        }
        k
    }

    /// The child of `k` with the smaller priority; the left child wins ties
    fn smaller_child(&self, k: usize) -> Option<usize> {
        let l = left(k);
        if l >= self.nodes.len() {
            return None;
        }
        let r = l + 1;
        if r < self.nodes.len() && self.nodes[r].priority() < self.nodes[l].priority() {
            Some(r)
        } else {
            Some(l)
        }
    }
}

impl<E: Eq + Hash + Clone, P: Ord> MinPriorityQueue<E, P> for OptimizedIndexedHeapMinPQ<E, P> {
    fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    fn add(&mut self, element: E, priority: P) -> Result<(), PqError> {
        if self.index.contains_key(&element) {
            trace!("indexed heap: rejected duplicate add");
            return Err(PqError::DuplicateElement);
        }
        let k = self.nodes.len();
        self.index.insert(element.clone(), k);
        self.nodes.push(PriorityNode::new(element, priority));
        self.swim(k);
        Ok(())
    }

    fn contains(&self, element: &E) -> bool {
        self.index.contains_key(element)
    }

    fn peek_min(&self) -> Result<&E, PqError> {
        self.nodes
            .first()
            .map(PriorityNode::element)
            .ok_or(PqError::EmptyQueue)
    }

    fn peek_min_priority(&self) -> Result<&P, PqError> {
        self.nodes
            .first()
            .map(PriorityNode::priority)
            .ok_or(PqError::EmptyQueue)
    }

    fn remove_min(&mut self) -> Result<E, PqError> {
        if self.nodes.is_empty() {
            return Err(PqError::EmptyQueue);
        }

        // Move the root to the end, detach it, then drop its index entry.
        // The entry is removed by the detached node's own key, never by
        // whatever now occupies a slot.
        let last = self.nodes.len() - 1;
        self.swap(0, last);
        let min = self.nodes.pop().ok_or(PqError::EmptyQueue)?;
        self.index.remove(min.element());

        if !self.nodes.is_empty() {
            self.sink(0);
        }

        Ok(min.into_element())
    }

    fn change_priority(&mut self, element: &E, priority: P) -> Result<(), PqError> {
        let Some(&k) = self.index.get(element) else {
            trace!("indexed heap: change_priority on missing element");
            return Err(PqError::ElementNotFound);
        };
        self.nodes[k].set_priority(priority);

        // Only one direction can be out of order after a single update
        if self.sink(k) == k {
            self.swim(k);
        }
        Ok(())
    }

    fn priority_of(&self, element: &E) -> Option<&P> {
        self.index.get(element).map(|&k| self.nodes[k].priority())
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl<E: Eq + Hash + Clone, P: Ord> Default for OptimizedIndexedHeapMinPQ<E, P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invariants<E: Eq + Hash + Clone, P: Ord>(pq: &OptimizedIndexedHeapMinPQ<E, P>) {
        assert!(pq.is_heap_ordered(), "heap order violated");
        assert!(pq.is_index_consistent(), "index map out of sync");
    }

    #[test]
    fn test_scenario() {
        let mut pq = OptimizedIndexedHeapMinPQ::new();
        pq.add("B", 1).unwrap();
        pq.add("C", 2).unwrap();
        pq.add("A", 3).unwrap();
        assert_eq!(pq.peek_min(), Ok(&"B"));

        pq.change_priority(&"A", 0).unwrap();
        assert_invariants(&pq);

        assert_eq!(pq.remove_min(), Ok("A"));
        assert_eq!(pq.remove_min(), Ok("B"));
        assert_eq!(pq.remove_min(), Ok("C"));
        assert!(pq.is_empty());
        assert_eq!(pq.remove_min(), Err(PqError::EmptyQueue));
        assert_invariants(&pq);
    }

    #[test]
    fn test_remove_down_to_empty() {
        let mut pq = OptimizedIndexedHeapMinPQ::new();
        pq.add(1, 1).unwrap();
        pq.add(2, 2).unwrap();

        // Second-to-last removal: the survivor must stay indexed at the root
        assert_eq!(pq.remove_min(), Ok(1));
        assert!(!pq.contains(&1));
        assert!(pq.contains(&2));
        assert_invariants(&pq);

        assert_eq!(pq.remove_min(), Ok(2));
        assert!(!pq.contains(&2));
        assert_invariants(&pq);

        // The queue is reusable once drained
        pq.add(2, 7).unwrap();
        assert_eq!(pq.peek_min(), Ok(&2));
    }

    #[test]
    fn test_change_priority_both_directions() {
        let mut pq = OptimizedIndexedHeapMinPQ::new();
        for i in 0..31 {
            pq.add(i, i).unwrap();
        }

        // Increase the root so it has to sink to a leaf
        pq.change_priority(&0, 100).unwrap();
        assert_invariants(&pq);
        assert_eq!(pq.peek_min(), Ok(&1));

        // Decrease a leaf so it has to swim to the root
        pq.change_priority(&30, -5).unwrap();
        assert_invariants(&pq);
        assert_eq!(pq.peek_min(), Ok(&30));

        // Unchanged priority moves nothing
        pq.change_priority(&15, 15).unwrap();
        assert_invariants(&pq);

        let mut drained = Vec::new();
        while let Ok(e) = pq.remove_min() {
            drained.push(e);
            assert_invariants(&pq);
        }
        let mut expected = vec![30];
        expected.extend(1..30);
        expected.push(0);
        assert_eq!(drained, expected);
    }

    #[test]
    fn test_duplicate_rejected_without_mutation() {
        let mut pq = OptimizedIndexedHeapMinPQ::new();
        pq.add("a", 5).unwrap();
        pq.add("b", 6).unwrap();

        assert_eq!(pq.add("a", 0), Err(PqError::DuplicateElement));
        assert_eq!(pq.len(), 2);
        assert_eq!(pq.priority_of(&"a"), Some(&5));
        assert_eq!(pq.peek_min(), Ok(&"a"));
        assert_invariants(&pq);
    }

    #[test]
    fn test_equal_priorities_keep_invariants() {
        let mut pq = OptimizedIndexedHeapMinPQ::new();
        for i in 0..20 {
            pq.add(i, i % 3).unwrap();
            assert_invariants(&pq);
        }
        let mut last = i32::MIN;
        while let Ok(&p) = pq.peek_min_priority() {
            assert!(p >= last);
            last = p;
            pq.remove_min().unwrap();
            assert_invariants(&pq);
        }
    }

    #[test]
    fn test_with_capacity() {
        let mut pq: OptimizedIndexedHeapMinPQ<u32, u32> =
            OptimizedIndexedHeapMinPQ::with_capacity(64);
        assert!(pq.is_empty());
        pq.add(3, 3).unwrap();
        assert_eq!(pq.len(), 1);
    }
}
