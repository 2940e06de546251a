//! Bounded top-K / bottom-K buffer
//!
//! [`BoundedMinMaxHeap`] keeps at most `capacity` elements. Once full, every
//! push competes against the element at the end being evicted: with
//! [`Retain::Smallest`] the maximum is evicted, with [`Retain::Largest`] the
//! minimum is. Because a min-max heap exposes both ends, the buffer can still
//! answer "best" and "worst kept" queries in O(1).
//!
//! # Example
//!
//! ```rust
//! use minmax_heap::bounded::{BoundedMinMaxHeap, Retain};
//!
//! let mut top3 = BoundedMinMaxHeap::new(3, Retain::Largest);
//! for score in [12, 7, 30, 1, 25, 18] {
//!     top3.push(score);
//! }
//! assert_eq!(top3.into_sorted_vec(), vec![18, 25, 30]);
//! ```

use crate::min_max::MinMaxHeap;

/// Which end of the order a [`BoundedMinMaxHeap`] keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retain {
    /// Keep the `capacity` smallest elements (bottom-K)
    Smallest,
    /// Keep the `capacity` largest elements (top-K)
    Largest,
}

/// A min-max heap that never grows past a fixed capacity
#[derive(Debug, Clone)]
pub struct BoundedMinMaxHeap<T> {
    heap: MinMaxHeap<T>,
    capacity: usize,
    retain: Retain,
}

impl<T: Ord> BoundedMinMaxHeap<T> {
    /// Creates an empty buffer holding at most `capacity` elements
    ///
    /// A capacity of zero is allowed; every push is then handed back.
    pub fn new(capacity: usize, retain: Retain) -> Self {
        Self {
            heap: MinMaxHeap::with_capacity(capacity),
            capacity,
            retain,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn retain(&self) -> Retain {
        self.retain
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.heap.len() >= self.capacity
    }

    /// Offers `value` to the buffer
    ///
    /// Returns `None` when the value was stored without displacing anything.
    /// When the buffer is full, returns whichever element lost: the evicted
    /// element, or `value` itself if it does not beat the current worst kept
    /// element. Ties keep the element already stored.
    pub fn push(&mut self, value: T) -> Option<T> {
        if !self.is_full() {
            self.heap.insert(value);
            return None;
        }

        let displaced = match self.retain {
            Retain::Smallest => self.heap.push_pop_max(value),
            Retain::Largest => self.heap.push_pop_min(value),
        };
        tracing::trace!(
            capacity = self.capacity,
            retain = ?self.retain,
            "bounded heap displaced an element"
        );
        Some(displaced)
    }

    pub fn peek_min(&self) -> Option<&T> {
        self.heap.peek_min()
    }

    pub fn peek_max(&self) -> Option<&T> {
        self.heap.peek_max()
    }

    pub fn pop_min(&mut self) -> Option<T> {
        self.heap.pop_min()
    }

    pub fn pop_max(&mut self) -> Option<T> {
        self.heap.pop_max()
    }

    /// Consumes the buffer, returning the kept elements in ascending order
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.heap.into_sorted_vec()
    }

    pub fn check_invariant(&self) -> bool {
        self.heap.check_invariant() && self.heap.len() <= self.capacity
    }
}
