//! Running median over a stream
//!
//! The stream is split into a lower half and an upper half, each held in a
//! [`MinMaxHeap`]. The lower half's maximum and the upper half's minimum are
//! the two middle elements. Unlike the classic max-heap/min-heap pair, both
//! halves also expose their outer end, so the overall minimum and maximum
//! come for free.
//!
//! The lower half always holds either as many elements as the upper half or
//! exactly one more.
//!
//! # Example
//!
//! ```rust
//! use minmax_heap::median::RunningMedian;
//!
//! let mut median = RunningMedian::new();
//! for latency in [40, 10, 30, 20] {
//!     median.push(latency);
//! }
//! assert_eq!(median.median_low(), Some(&20));
//! assert_eq!(median.median_high(), Some(&30));
//! assert_eq!(median.min(), Some(&10));
//! assert_eq!(median.max(), Some(&40));
//! ```

use crate::min_max::MinMaxHeap;

#[derive(Debug, Clone)]
pub struct RunningMedian<T> {
    lower: MinMaxHeap<T>,
    upper: MinMaxHeap<T>,
}

impl<T: Ord> RunningMedian<T> {
    pub fn new() -> Self {
        Self {
            lower: MinMaxHeap::new(),
            upper: MinMaxHeap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.lower.len() + self.upper.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }

    /// Adds a value to the stream
    pub fn push(&mut self, value: T) {
        match self.lower.peek_max() {
            Some(lower_max) if value > *lower_max => self.upper.insert(value),
            _ => self.lower.insert(value),
        }
        self.rebalance();
    }

    /// The lower middle element; the median itself for odd lengths
    pub fn median_low(&self) -> Option<&T> {
        self.lower.peek_max()
    }

    /// The upper middle element; the median itself for odd lengths
    pub fn median_high(&self) -> Option<&T> {
        if self.lower.len() > self.upper.len() {
            self.lower.peek_max()
        } else {
            self.upper.peek_min()
        }
    }

    /// Smallest value seen so far (and not popped)
    pub fn min(&self) -> Option<&T> {
        self.lower.peek_min()
    }

    /// Largest value seen so far (and not popped)
    pub fn max(&self) -> Option<&T> {
        self.upper.peek_max().or_else(|| self.lower.peek_max())
    }

    /// Removes and returns the lower median
    pub fn pop_median_low(&mut self) -> Option<T> {
        let median = self.lower.pop_max()?;
        self.rebalance();
        Some(median)
    }

    fn rebalance(&mut self) {
        if self.lower.len() > self.upper.len() + 1 {
            if let Some(moved) = self.lower.pop_max() {
                self.upper.insert(moved);
            }
        } else if self.upper.len() > self.lower.len() {
            if let Some(moved) = self.upper.pop_min() {
                self.lower.insert(moved);
            }
        }
    }
}

impl<T: Ord> Default for RunningMedian<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for RunningMedian<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}
