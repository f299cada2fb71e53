//! Runtime selection of a queue implementation
//!
//! Callers that are generic over [`MinPriorityQueue`] can pick the concrete
//! queue at compile time. `QueueKind` covers the other case: choosing it from
//! a string or a deserialized configuration, and getting a boxed trait object.
//!
//! ```rust
//! use indexed_minpq::{MinPriorityQueue, QueueKind};
//!
//! let kind: QueueKind = "library-heap".parse().unwrap();
//! let mut pq = kind.build::<&str, i32>();
//! pq.add("x", 2).unwrap();
//! pq.add("y", 1).unwrap();
//! assert_eq!(pq.remove_min(), Ok("y"));
//! ```

use crate::library_heap::LibraryHeapMinPQ;
use crate::optimized::OptimizedIndexedHeapMinPQ;
use crate::traits::MinPriorityQueue;
use crate::unsorted::UnsortedArrayMinPQ;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Which priority queue implementation to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QueueKind {
    /// [`UnsortedArrayMinPQ`]: linear scans, no index
    UnsortedArray,
    /// [`LibraryHeapMinPQ`]: `std` binary heap, linear lookups
    LibraryHeap,
    /// [`OptimizedIndexedHeapMinPQ`]: indexed binary heap
    #[default]
    OptimizedIndexedHeap,
}

/// Error returned when parsing an unknown [`QueueKind`] name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown queue kind `{0}` (expected unsorted-array, library-heap or optimized-indexed-heap)")]
pub struct ParseQueueKindError(String);

impl QueueKind {
    /// Every implementation, cheapest to build first
    pub const ALL: [QueueKind; 3] = [
        QueueKind::UnsortedArray,
        QueueKind::LibraryHeap,
        QueueKind::OptimizedIndexedHeap,
    ];

    /// The kebab-case name used by `FromStr`, `Display` and serde
    pub fn as_str(self) -> &'static str {
        match self {
            QueueKind::UnsortedArray => "unsorted-array",
            QueueKind::LibraryHeap => "library-heap",
            QueueKind::OptimizedIndexedHeap => "optimized-indexed-heap",
        }
    }

    /// Builds an empty queue of this kind
    pub fn build<E, P>(self) -> Box<dyn MinPriorityQueue<E, P>>
    where
        E: Eq + Hash + Clone + 'static,
        P: Ord + 'static,
    {
        self.build_with_capacity(0)
    }

    /// Builds an empty queue of this kind with room for `capacity` elements
    pub fn build_with_capacity<E, P>(self, capacity: usize) -> Box<dyn MinPriorityQueue<E, P>>
    where
        E: Eq + Hash + Clone + 'static,
        P: Ord + 'static,
    {
        debug!(kind = %self, capacity, "building priority queue");
        match self {
            QueueKind::UnsortedArray => {
                Box::new(UnsortedArrayMinPQ::<E, P>::with_capacity(capacity))
            }
            QueueKind::LibraryHeap => Box::new(LibraryHeapMinPQ::<E, P>::with_capacity(capacity)),
            QueueKind::OptimizedIndexedHeap => {
                Box::new(OptimizedIndexedHeapMinPQ::<E, P>::with_capacity(capacity))
            }
        }
    }
}

impl fmt::Display for QueueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueueKind {
    type Err = ParseQueueKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QueueKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseQueueKindError(s.to_string()))
    }
}

/// Deserializable queue settings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
    /// Implementation to build
    pub kind: QueueKind,
    /// Number of elements to reserve room for up front
    pub initial_capacity: usize,
}

impl QueueConfig {
    /// Builds an empty queue from these settings
    pub fn build<E, P>(&self) -> Box<dyn MinPriorityQueue<E, P>>
    where
        E: Eq + Hash + Clone + 'static,
        P: Ord + 'static,
    {
        self.kind.build_with_capacity(self.initial_capacity)
    }
}
