//! Common traits for double-ended heap data structures
//!
//! This module provides the error type shared by every fallible heap
//! operation, and the [`DoubleEndedHeap`] trait that generic code (and the
//! integration tests) use to drive a heap without naming its concrete type.
//!
//! The trait mirrors the `peek`/`pop` shape of `std::collections::BinaryHeap`,
//! doubled: each query exists once for the minimum end and once for the
//! maximum end.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The operation needs at least one element but the heap is empty
    EmptyContainer,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyContainer => write!(f, "heap is empty"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for double-ended priority queues
///
/// Elements are their own priority (`T: Ord`), as in `BinaryHeap`. Both
/// extremes are reachable without removing anything.
///
/// # Example
///
/// ```rust
/// use minmax_heap::DoubleEndedHeap;
/// use minmax_heap::min_max::MinMaxHeap;
///
/// let mut heap = MinMaxHeap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek_min(), Some(&1));
/// assert_eq!(heap.peek_max(), Some(&3));
/// assert_eq!(heap.pop_max(), Some(3));
/// assert_eq!(heap.pop_min(), Some(1));
/// ```
pub trait DoubleEndedHeap<T: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, item: T);

    /// Returns the smallest element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek_min(&self) -> Option<&T>;

    /// Returns the largest element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek_max(&self) -> Option<&T>;

    /// Removes and returns the smallest element
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop_min(&mut self) -> Option<T>;

    /// Removes and returns the largest element
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop_max(&mut self) -> Option<T>;
}
