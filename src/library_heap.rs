//! Priority queue on top of `std::collections::BinaryHeap`
//!
//! Insertion and extraction get the standard library's O(log n) binary heap,
//! but `BinaryHeap` has no position index, so finding an arbitrary element is a
//! linear scan. `change_priority` therefore removes the node, rebuilds the heap
//! and reinserts with the new priority.
//!
//! This queue exists to show what a missing index costs. Prefer
//! [`OptimizedIndexedHeapMinPQ`](crate::optimized::OptimizedIndexedHeapMinPQ)
//! whenever priorities change.
//!
//! # Time Complexity
//!
//! | Operation         | Complexity |
//! |-------------------|------------|
//! | `add`             | O(n)       |
//! | `contains`        | O(n)       |
//! | `peek_min`        | O(1)       |
//! | `remove_min`      | O(log n)   |
//! | `change_priority` | O(n)       |
//!
//! `add` is linear only because of the duplicate check; the push itself is O(log n).

use crate::traits::{MinPriorityQueue, PqError, PriorityNode};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::trace;

/// Heap entry ordered by priority alone, reversed so the max-heap yields the minimum
#[derive(Debug, Clone)]
struct MinEntry<E, P>(PriorityNode<E, P>);

impl<E, P: Ord> PartialEq for MinEntry<E, P> {
    fn eq(&self, other: &Self) -> bool {
        self.0.priority() == other.0.priority()
    }
}

impl<E, P: Ord> Eq for MinEntry<E, P> {}

impl<E, P: Ord> PartialOrd for MinEntry<E, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E, P: Ord> Ord for MinEntry<E, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.priority().cmp(self.0.priority())
    }
}

/// A min-priority queue wrapping the standard library's binary heap
#[derive(Debug, Clone)]
pub struct LibraryHeapMinPQ<E, P> {
    heap: BinaryHeap<MinEntry<E, P>>,
}

impl<E: Eq, P: Ord> LibraryHeapMinPQ<E, P> {
    /// Creates an empty queue with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Position of `element` in the heap's backing vector
    fn position_of(&self, element: &E) -> Option<usize> {
        self.heap
            .iter()
            .position(|entry| entry.0.element() == element)
    }
}

impl<E: Eq, P: Ord> MinPriorityQueue<E, P> for LibraryHeapMinPQ<E, P> {
    fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    fn add(&mut self, element: E, priority: P) -> Result<(), PqError> {
        if self.contains(&element) {
            trace!("library heap: rejected duplicate add");
            return Err(PqError::DuplicateElement);
        }
        self.heap.push(MinEntry(PriorityNode::new(element, priority)));
        Ok(())
    }

    fn contains(&self, element: &E) -> bool {
        self.heap.iter().any(|entry| entry.0.element() == element)
    }

    fn peek_min(&self) -> Result<&E, PqError> {
        self.heap
            .peek()
            .map(|entry| entry.0.element())
            .ok_or(PqError::EmptyQueue)
    }

    fn peek_min_priority(&self) -> Result<&P, PqError> {
        self.heap
            .peek()
            .map(|entry| entry.0.priority())
            .ok_or(PqError::EmptyQueue)
    }

    fn remove_min(&mut self) -> Result<E, PqError> {
        self.heap
            .pop()
            .map(|entry| entry.0.into_element())
            .ok_or(PqError::EmptyQueue)
    }

    fn change_priority(&mut self, element: &E, priority: P) -> Result<(), PqError> {
        let Some(k) = self.position_of(element) else {
            trace!("library heap: change_priority on missing element");
            return Err(PqError::ElementNotFound);
        };
        // `iter` walks the backing vector, so `k` is valid for `into_vec` too
        let mut entries = std::mem::take(&mut self.heap).into_vec();
        let MinEntry(mut node) = entries.swap_remove(k);
        self.heap = BinaryHeap::from(entries);
        node.set_priority(priority);
        self.heap.push(MinEntry(node));
        Ok(())
    }

    fn priority_of(&self, element: &E) -> Option<&P> {
        self.heap
            .iter()
            .find(|entry| entry.0.element() == element)
            .map(|entry| entry.0.priority())
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<E: Eq, P: Ord> Default for LibraryHeapMinPQ<E, P> {
    fn default() -> Self {
        Self::new()
    }
}
