//! Unsorted array priority queue
//!
//! The reference baseline: (element, priority) pairs kept in insertion order
//! with no auxiliary index. Every lookup is a linear scan, which makes this
//! queue trivially correct and a useful oracle for differential testing of
//! the heap-backed queues.
//!
//! # Time Complexity
//!
//! | Operation         | Complexity |
//! |-------------------|------------|
//! | `add`             | O(n)       |
//! | `contains`        | O(n)       |
//! | `peek_min`        | O(n)       |
//! | `remove_min`      | O(n)       |
//! | `change_priority` | O(n)       |
//!
//! `add` is linear only because of the duplicate check.
//!
//! # Ties
//!
//! Among equal minimum priorities the element inserted earliest (of those still
//! queued) wins, because scans run in insertion order and removal preserves it.

use crate::traits::{MinPriorityQueue, PqError, PriorityNode};
use tracing::trace;

/// A min-priority queue backed by an unordered vector
#[derive(Debug, Clone)]
pub struct UnsortedArrayMinPQ<E, P> {
    nodes: Vec<PriorityNode<E, P>>,
}

impl<E: Eq, P: Ord> UnsortedArrayMinPQ<E, P> {
    /// Creates an empty queue with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    fn position_of(&self, element: &E) -> Option<usize> {
        self.nodes.iter().position(|node| node.element() == element)
    }

    /// Position of the first node holding the minimum priority
    fn min_position(&self) -> Option<usize> {
        let mut nodes = self.nodes.iter().enumerate();
        let (mut best, mut best_node) = nodes.next()?;
        for (i, node) in nodes {
            if node.priority() < best_node.priority() {
                best = i;
                best_node = node;
            }
        }
        Some(best)
    }
}

impl<E: Eq, P: Ord> MinPriorityQueue<E, P> for UnsortedArrayMinPQ<E, P> {
    fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    fn add(&mut self, element: E, priority: P) -> Result<(), PqError> {
        if self.contains(&element) {
            trace!("unsorted array: rejected duplicate add");
            return Err(PqError::DuplicateElement);
        }
        self.nodes.push(PriorityNode::new(element, priority));
        Ok(())
    }

    fn contains(&self, element: &E) -> bool {
        self.position_of(element).is_some()
    }

    fn peek_min(&self) -> Result<&E, PqError> {
        let k = self.min_position().ok_or(PqError::EmptyQueue)?;
        Ok(self.nodes[k].element())
    }

    fn peek_min_priority(&self) -> Result<&P, PqError> {
        let k = self.min_position().ok_or(PqError::EmptyQueue)?;
        Ok(self.nodes[k].priority())
    }

    fn remove_min(&mut self) -> Result<E, PqError> {
        let k = self.min_position().ok_or(PqError::EmptyQueue)?;
        // `remove` rather than `swap_remove`: survivors must keep insertion order
        Ok(self.nodes.remove(k).into_element())
    }

    fn change_priority(&mut self, element: &E, priority: P) -> Result<(), PqError> {
        let Some(k) = self.position_of(element) else {
            trace!("unsorted array: change_priority on missing element");
            return Err(PqError::ElementNotFound);
        };
        self.nodes[k].set_priority(priority);
        Ok(())
    }

    fn priority_of(&self, element: &E) -> Option<&P> {
        self.position_of(element).map(|k| self.nodes[k].priority())
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl<E: Eq, P: Ord> Default for UnsortedArrayMinPQ<E, P> {
    fn default() -> Self {
        Self::new()
    }
}
