//! The shared min-priority queue contract
//!
//! Every queue in this crate implements [`MinPriorityQueue`]. Callers such as
//! [`dijkstra`](crate::pathfinding::dijkstra) hold a queue behind this trait and
//! get the same extraction order (up to ties) whichever implementation is used;
//! only the asymptotic cost differs.
//!
//! Unlike `std::collections::BinaryHeap`, which orders stored values directly,
//! these queues keep (element, priority) pairs. The element is the identity and
//! never changes while queued; only its priority may be updated.

use thiserror::Error;

/// Error type for priority queue operations
///
/// A failed operation never modifies the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PqError {
    /// `add` was called with an element that is already queued
    #[error("element is already present in the queue")]
    DuplicateElement,
    /// `change_priority` was called with an element that is not queued
    #[error("element is not present in the queue")]
    ElementNotFound,
    /// `peek_min` or `remove_min` was called on an empty queue
    #[error("priority queue is empty")]
    EmptyQueue,
}

/// An element together with its current priority
///
/// The element is fixed at insertion; only the priority is mutable, and only
/// from inside the owning queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityNode<E, P> {
    element: E,
    priority: P,
}

impl<E, P> PriorityNode<E, P> {
    pub(crate) fn new(element: E, priority: P) -> Self {
        Self { element, priority }
    }

    /// The queued element
    pub fn element(&self) -> &E {
        &self.element
    }

    /// The element's current priority
    pub fn priority(&self) -> &P {
        &self.priority
    }

    pub(crate) fn set_priority(&mut self, priority: P) {
        self.priority = priority;
    }

    pub(crate) fn into_element(self) -> E {
        self.element
    }
}

/// Min-priority queue keyed by element identity
///
/// # Example
///
/// ```rust
/// use indexed_minpq::{MinPriorityQueue, PqError};
/// use indexed_minpq::optimized::OptimizedIndexedHeapMinPQ;
///
/// let mut pq = OptimizedIndexedHeapMinPQ::new();
/// pq.add("B", 1).unwrap();
/// pq.add("C", 2).unwrap();
/// pq.add("A", 3).unwrap();
/// assert_eq!(pq.peek_min(), Ok(&"B"));
///
/// pq.change_priority(&"A", 0).unwrap();
/// assert_eq!(pq.remove_min(), Ok("A"));
/// assert_eq!(pq.remove_min(), Ok("B"));
/// assert_eq!(pq.remove_min(), Ok("C"));
/// assert!(pq.is_empty());
/// assert_eq!(pq.remove_min(), Err(PqError::EmptyQueue));
/// ```
pub trait MinPriorityQueue<E, P: Ord> {
    /// Creates a new empty queue
    fn new() -> Self
    where
        Self: Sized;

    /// Inserts `element` with the given priority
    ///
    /// # Errors
    /// Returns [`PqError::DuplicateElement`] if an equal element is already queued.
    fn add(&mut self, element: E, priority: P) -> Result<(), PqError>;

    /// Returns true if an equal element is queued
    fn contains(&self, element: &E) -> bool;

    /// Returns the element with the smallest priority without removing it
    ///
    /// # Errors
    /// Returns [`PqError::EmptyQueue`] if the queue is empty.
    fn peek_min(&self) -> Result<&E, PqError>;

    /// Returns the smallest priority currently queued
    ///
    /// # Errors
    /// Returns [`PqError::EmptyQueue`] if the queue is empty.
    fn peek_min_priority(&self) -> Result<&P, PqError>;

    /// Removes and returns the element with the smallest priority
    ///
    /// # Errors
    /// Returns [`PqError::EmptyQueue`] if the queue is empty.
    fn remove_min(&mut self) -> Result<E, PqError>;

    /// Replaces the priority of a queued element
    ///
    /// The new priority may be smaller or larger than the old one.
    ///
    /// # Errors
    /// Returns [`PqError::ElementNotFound`] if the element is not queued.
    fn change_priority(&mut self, element: &E, priority: P) -> Result<(), PqError>;

    /// Returns the current priority of a queued element
    fn priority_of(&self, element: &E) -> Option<&P>;

    /// Returns the number of queued elements
    fn len(&self) -> usize;

    /// Returns true if nothing is queued
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds `element`, or changes its priority if it is already queued
    fn add_or_change_priority(&mut self, element: E, priority: P) {
        let result = if self.contains(&element) {
            self.change_priority(&element, priority)
        } else {
            self.add(element, priority)
        };
        debug_assert!(result.is_ok());
    }
}
