//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and verify that the
//! queue invariants hold after every step.

use proptest::prelude::*;
use indexed_minpq::library_heap::LibraryHeapMinPQ;
use indexed_minpq::optimized::OptimizedIndexedHeapMinPQ;
use indexed_minpq::unsorted::UnsortedArrayMinPQ;
use indexed_minpq::{MinPriorityQueue, PqError};

use std::collections::HashMap;

/// Apply one encoded operation to a queue and a model of its contents
///
/// `op % 3` selects add, remove_min or change_priority.
fn apply<Q: MinPriorityQueue<u8, i32>>(
    pq: &mut Q,
    model: &mut HashMap<u8, i32>,
    op: u8,
    element: u8,
    priority: i32,
) -> Result<(), TestCaseError> {
    match op % 3 {
        0 => {
            let result = pq.add(element, priority);
            if model.contains_key(&element) {
                prop_assert_eq!(result, Err(PqError::DuplicateElement));
            } else {
                prop_assert_eq!(result, Ok(()));
                model.insert(element, priority);
            }
        }
        1 => {
            let result = pq.remove_min();
            match model.values().min().copied() {
                None => {
                    prop_assert_eq!(result, Err(PqError::EmptyQueue));
                }
                Some(min) => {
                    let removed = result.map_err(|e| TestCaseError::fail(e.to_string()))?;
                    let removed_priority = model.remove(&removed);
                    prop_assert_eq!(removed_priority, Some(min));
                }
            }
        }
        _ => {
            let result = pq.change_priority(&element, priority);
            if model.contains_key(&element) {
                prop_assert_eq!(result, Ok(()));
                model.insert(element, priority);
            } else {
                prop_assert_eq!(result, Err(PqError::ElementNotFound));
            }
        }
    }
    Ok(())
}

/// Test that the queue agrees with a map model after every operation
fn test_model_agreement<Q: MinPriorityQueue<u8, i32>>(
    ops: Vec<(u8, u8, i32)>,
) -> Result<(), TestCaseError> {
    let mut pq = Q::new();
    let mut model = HashMap::new();

    for (op, element, priority) in ops {
        apply(&mut pq, &mut model, op, element, priority)?;

        prop_assert_eq!(pq.len(), model.len());
        prop_assert_eq!(pq.is_empty(), model.is_empty());
        prop_assert_eq!(pq.peek_min_priority().ok().copied(), model.values().min().copied());
        for (e, p) in &model {
            prop_assert!(pq.contains(e));
            prop_assert_eq!(pq.priority_of(e), Some(p));
        }
    }

    Ok(())
}

/// Test that all popped priorities are in non-decreasing order
fn test_pop_order<Q: MinPriorityQueue<usize, i32>>(values: Vec<i32>) -> Result<(), TestCaseError> {
    let mut pq = Q::new();
    for (element, &p) in values.iter().enumerate() {
        pq.add(element, p).map_err(|e| TestCaseError::fail(e.to_string()))?;
    }

    let mut drained = Vec::new();
    while let Ok(element) = pq.remove_min() {
        drained.push(values[element]);
    }

    let mut expected = values;
    expected.sort();
    prop_assert_eq!(drained, expected);
    Ok(())
}

/// Test that the indexed heap's structural invariants survive every step
fn test_indexed_invariants(ops: Vec<(u8, u8, i32)>) -> Result<(), TestCaseError> {
    let mut pq: OptimizedIndexedHeapMinPQ<u8, i32> = OptimizedIndexedHeapMinPQ::new();
    let mut model = HashMap::new();

    for (op, element, priority) in ops {
        apply(&mut pq, &mut model, op, element, priority)?;
        prop_assert!(pq.is_heap_ordered());
        prop_assert!(pq.is_index_consistent());
    }

    Ok(())
}

fn ops_strategy() -> impl Strategy<Value = Vec<(u8, u8, i32)>> {
    prop::collection::vec((0u8..3, 0u8..24, -50i32..50), 0..200)
}

proptest! {
    #[test]
    fn test_unsorted_model_agreement(ops in ops_strategy()) {
        test_model_agreement::<UnsortedArrayMinPQ<u8, i32>>(ops)?;
    }

    #[test]
    fn test_library_heap_model_agreement(ops in ops_strategy()) {
        test_model_agreement::<LibraryHeapMinPQ<u8, i32>>(ops)?;
    }

    #[test]
    fn test_indexed_model_agreement(ops in ops_strategy()) {
        test_model_agreement::<OptimizedIndexedHeapMinPQ<u8, i32>>(ops)?;
    }

    #[test]
    fn test_indexed_heap_and_index_invariants(ops in ops_strategy()) {
        test_indexed_invariants(ops)?;
    }

    #[test]
    fn test_unsorted_pop_order(values in prop::collection::vec(-100i32..100, 0..100)) {
        test_pop_order::<UnsortedArrayMinPQ<usize, i32>>(values)?;
    }

    #[test]
    fn test_library_heap_pop_order(values in prop::collection::vec(-100i32..100, 0..100)) {
        test_pop_order::<LibraryHeapMinPQ<usize, i32>>(values)?;
    }

    #[test]
    fn test_indexed_pop_order(values in prop::collection::vec(-100i32..100, 0..100)) {
        test_pop_order::<OptimizedIndexedHeapMinPQ<usize, i32>>(values)?;
    }
}
