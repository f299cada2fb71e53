//! Indexed min-priority queues for Rust
//!
//! This crate provides three interchangeable implementations of one
//! min-priority queue contract, [`MinPriorityQueue`]. Elements are identified
//! by equality; each carries a priority that can be changed while it is queued.
//!
//! # Implementations
//!
//! - **Unsorted array** ([`unsorted::UnsortedArrayMinPQ`]): O(n) everything; the correctness baseline
//! - **Library heap** ([`library_heap::LibraryHeapMinPQ`]): `std` binary heap; O(log n) extraction,
//!   but O(n) membership and priority change
//! - **Indexed heap** ([`optimized::OptimizedIndexedHeapMinPQ`]): binary heap plus an
//!   element-to-position map; O(log n) for every operation, O(1) `contains`
//!
//! All three return priorities in the same non-decreasing order for the same
//! input. Elements with equal priorities may come out in a different order
//! from each implementation, but always in the same order for the same
//! implementation and input.
//!
//! # Example
//!
//! ```rust
//! use indexed_minpq::{MinPriorityQueue, OrderedFloat};
//! use indexed_minpq::optimized::OptimizedIndexedHeapMinPQ;
//!
//! let mut pq = OptimizedIndexedHeapMinPQ::new();
//! pq.add("b", OrderedFloat(1.5)).unwrap();
//! pq.add("a", OrderedFloat(2.5)).unwrap();
//! pq.change_priority(&"a", OrderedFloat(0.5)).unwrap();
//! assert_eq!(pq.peek_min(), Ok(&"a"));
//! ```
//!
//! None of the queues are synchronized. Share one between threads behind a
//! single lock.

pub mod config;
pub mod library_heap;
pub mod optimized;
pub mod pathfinding;
pub mod traits;
pub mod unsorted;

pub use config::{ParseQueueKindError, QueueConfig, QueueKind};
pub use ordered_float::OrderedFloat;
pub use traits::{MinPriorityQueue, PqError, PriorityNode};

/// A totally ordered real-valued priority
pub type RealPriority = OrderedFloat<f64>;
