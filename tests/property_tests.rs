//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and verify that the
//! min-max ordering, the reported extremes and the length bookkeeping hold
//! after every single step.

use proptest::prelude::*;
use minmax_heap::bounded::{BoundedMinMaxHeap, Retain};
use minmax_heap::median::RunningMedian;
use minmax_heap::{HeapError, MinMaxHeap};

/// One step of a generated workload
#[derive(Debug, Clone)]
enum Op {
    Insert(i32),
    DeleteMin,
    DeleteMax,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (-100i32..100).prop_map(Op::Insert),
        1 => Just(Op::DeleteMin),
        1 => Just(Op::DeleteMax),
    ]
}

/// Apply `ops` to a heap and to a sorted reference vector, checking that they
/// agree after every operation
fn check_against_model(ops: Vec<Op>) -> Result<(), TestCaseError> {
    let mut heap = MinMaxHeap::new();
    let mut model: Vec<i32> = Vec::new();

    for op in ops {
        match op {
            Op::Insert(value) => {
                heap.insert(value);
                let pos = model.partition_point(|&v| v < value);
                model.insert(pos, value);
            }
            Op::DeleteMin => {
                let expected = if model.is_empty() {
                    Err(HeapError::EmptyContainer)
                } else {
                    Ok(model.remove(0))
                };
                prop_assert_eq!(heap.delete_min(), expected);
            }
            Op::DeleteMax => {
                let expected = model.pop().ok_or(HeapError::EmptyContainer);
                prop_assert_eq!(heap.delete_max(), expected);
            }
        }

        prop_assert!(heap.check_invariant(), "invariant broken: {:?}", heap);
        prop_assert_eq!(heap.len(), model.len());
        prop_assert_eq!(heap.is_empty(), model.is_empty());
        prop_assert_eq!(heap.get_min().ok(), model.first().copied());
        prop_assert_eq!(heap.get_max().ok(), model.last().copied());
    }

    Ok(())
}

/// Drain from one end and verify monotone order
fn check_sorted_extraction(values: Vec<i32>) -> Result<(), TestCaseError> {
    let mut sorted = values.clone();
    sorted.sort();

    let mut heap: MinMaxHeap<i32> = values.iter().copied().collect();
    let mut ascending = Vec::new();
    while let Ok(min) = heap.get_min() {
        heap.delete_min().unwrap();
        ascending.push(min);
    }
    prop_assert_eq!(&ascending, &sorted);

    let mut heap = MinMaxHeap::new();
    for &v in &values {
        heap.insert(v);
    }
    let mut descending = Vec::new();
    while let Ok(max) = heap.get_max() {
        heap.delete_max().unwrap();
        descending.push(max);
    }
    sorted.reverse();
    prop_assert_eq!(&descending, &sorted);

    Ok(())
}

proptest! {
    #[test]
    fn test_operations_match_sorted_model(ops in prop::collection::vec(op_strategy(), 0..200)) {
        check_against_model(ops)?;
    }

    #[test]
    fn test_sorted_extraction_both_ends(values in prop::collection::vec(-1000i32..1000, 0..150)) {
        check_sorted_extraction(values)?;
    }

    #[test]
    fn test_bulk_build_satisfies_invariant(values in prop::collection::vec(any::<i32>(), 0..300)) {
        let heap = MinMaxHeap::from(values.clone());
        prop_assert!(heap.check_invariant());
        prop_assert_eq!(heap.peek_min(), values.iter().min());
        prop_assert_eq!(heap.peek_max(), values.iter().max());
    }

    #[test]
    fn test_push_pop_matches_insert_then_delete(
        values in prop::collection::vec(-50i32..50, 1..60),
        extra in -60i32..60,
    ) {
        let mut fused = MinMaxHeap::from(values.clone());
        let mut split = MinMaxHeap::from(values.clone());
        let got = fused.push_pop_min(extra);
        split.insert(extra);
        prop_assert_eq!(Ok(got), split.delete_min());
        prop_assert!(fused.check_invariant());
        prop_assert_eq!(fused.into_sorted_vec(), split.into_sorted_vec());

        let mut fused = MinMaxHeap::from(values.clone());
        let mut split = MinMaxHeap::from(values);
        let got = fused.push_pop_max(extra);
        split.insert(extra);
        prop_assert_eq!(Ok(got), split.delete_max());
        prop_assert!(fused.check_invariant());
        prop_assert_eq!(fused.into_sorted_vec(), split.into_sorted_vec());
    }

    #[test]
    fn test_replace_max_keeps_invariant(
        values in prop::collection::vec(-50i32..50, 0..60),
        replacements in prop::collection::vec(-60i32..60, 0..20),
    ) {
        let mut heap = MinMaxHeap::from(values);
        for r in replacements {
            heap.replace_max(r);
            prop_assert!(heap.check_invariant());
            heap.replace_min(r);
            prop_assert!(heap.check_invariant());
        }
    }

    #[test]
    fn test_bounded_keeps_k_smallest(
        values in prop::collection::vec(-500i32..500, 0..200),
        capacity in 0usize..20,
    ) {
        let mut buf = BoundedMinMaxHeap::new(capacity, Retain::Smallest);
        for &v in &values {
            buf.push(v);
            prop_assert!(buf.check_invariant());
        }
        let mut sorted = values;
        sorted.sort();
        sorted.truncate(capacity);
        prop_assert_eq!(buf.into_sorted_vec(), sorted);
    }

    #[test]
    fn test_running_median(values in prop::collection::vec(-500i32..500, 1..120)) {
        let mut median = RunningMedian::new();
        let mut seen = Vec::new();
        for v in values {
            median.push(v);
            seen.push(v);
            let mut sorted = seen.clone();
            sorted.sort();
            let n = sorted.len();
            prop_assert_eq!(median.median_low(), Some(&sorted[(n - 1) / 2]));
            prop_assert_eq!(median.median_high(), Some(&sorted[n / 2]));
        }
    }
}
