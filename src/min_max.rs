//! Min-Max Heap implementation
//!
//! A min-max heap is an implicit binary tree stored in a `Vec` whose levels
//! alternate between *min* levels (even depth) and *max* levels (odd depth).
//! An element on a min level is `<=` every descendant, an element on a max
//! level is `>=` every descendant. The root is therefore the minimum and the
//! larger of the root's two children is the maximum.
//!
//! Repairs compare across two levels at a time: a node on a min level is
//! ordered against its grandparent and grandchildren (same discipline) and
//! only occasionally against its parent or children (opposite discipline).
//!
//! # Time Complexity
//!
//! | Operation                 | Complexity |
//! |---------------------------|------------|
//! | `insert`                  | O(log n)   |
//! | `get_min` / `get_max`     | O(1)       |
//! | `delete_min`/`delete_max` | O(log n)   |
//! | `from(Vec<T>)`            | O(n)       |
//! | `check_invariant`         | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use minmax_heap::min_max::MinMaxHeap;
//!
//! let mut heap = MinMaxHeap::new();
//! for value in [4, 3, 1, 5, 2] {
//!     heap.insert(value);
//! }
//!
//! assert_eq!(heap.get_min(), Ok(1));
//! assert_eq!(heap.get_max(), Ok(5));
//! assert_eq!(heap.delete_max(), Ok(5));
//! assert_eq!(heap.get_max(), Ok(4));
//! assert!(heap.check_invariant());
//! ```

use crate::layout::{descendants, first_grandchild, grandparent, parent, Level};
use crate::traits::{DoubleEndedHeap, HeapError};

/// A double-ended priority queue over a single array
///
/// Elements are their own priority. Ties are allowed; equal elements come out
/// in an unspecified order.
#[derive(Debug, Clone)]
pub struct MinMaxHeap<T> {
    /// The tree in breadth-first order; index 0 is the root
    data: Vec<T>,
}

impl<T: Ord> MinMaxHeap<T> {
    /// Creates an empty heap
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty heap with room for `capacity` elements before it
    /// reallocates
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Inserts an element
    ///
    /// The element is appended as the new last leaf and bubbled up through
    /// the ancestors that share its level discipline.
    pub fn insert(&mut self, value: T) {
        self.data.push(value);
        self.bubble_up(self.data.len() - 1);
    }

    /// Returns the smallest element without removing it
    pub fn peek_min(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns the largest element without removing it
    pub fn peek_max(&self) -> Option<&T> {
        self.max_index().map(|i| &self.data[i])
    }

    /// Returns a copy of the smallest element
    ///
    /// # Errors
    /// Returns `HeapError::EmptyContainer` if the heap is empty.
    pub fn get_min(&self) -> Result<T, HeapError>
    where
        T: Clone,
    {
        self.peek_min().cloned().ok_or(HeapError::EmptyContainer)
    }

    /// Returns a copy of the largest element
    ///
    /// # Errors
    /// Returns `HeapError::EmptyContainer` if the heap is empty.
    pub fn get_max(&self) -> Result<T, HeapError>
    where
        T: Clone,
    {
        self.peek_max().cloned().ok_or(HeapError::EmptyContainer)
    }

    /// Removes the smallest element and returns it
    ///
    /// # Errors
    /// Returns `HeapError::EmptyContainer` if the heap is empty; the heap is
    /// left untouched.
    pub fn delete_min(&mut self) -> Result<T, HeapError> {
        self.pop_min().ok_or(HeapError::EmptyContainer)
    }

    /// Removes the largest element and returns it
    ///
    /// # Errors
    /// Returns `HeapError::EmptyContainer` if the heap is empty; the heap is
    /// left untouched.
    pub fn delete_max(&mut self) -> Result<T, HeapError> {
        self.pop_max().ok_or(HeapError::EmptyContainer)
    }

    /// Removes and returns the smallest element, or `None` if empty
    pub fn pop_min(&mut self) -> Option<T> {
        self.remove_at(0)
    }

    /// Removes and returns the largest element, or `None` if empty
    pub fn pop_max(&mut self) -> Option<T> {
        let index = self.max_index()?;
        self.remove_at(index)
    }

    /// Inserts `value` then removes and returns the smallest element
    ///
    /// When `value` is no larger than the current minimum it is handed back
    /// directly and the heap is not touched.
    pub fn push_pop_min(&mut self, value: T) -> T {
        if self.data.first().map_or(true, |min| value <= *min) {
            return value;
        }
        let min = std::mem::replace(&mut self.data[0], value);
        self.percolate_down(0);
        min
    }

    /// Inserts `value` then removes and returns the largest element
    ///
    /// When `value` is no smaller than the current maximum it is handed back
    /// directly and the heap is not touched.
    pub fn push_pop_max(&mut self, value: T) -> T {
        match self.max_index() {
            Some(index) if self.data[index] > value => {
                let max = std::mem::replace(&mut self.data[index], value);
                self.repair_replaced_max(index);
                max
            }
            _ => value,
        }
    }

    /// Removes the smallest element and inserts `value` in a single repair
    /// pass. Returns the removed element, or `None` if the heap was empty
    /// (in which case `value` is simply inserted).
    pub fn replace_min(&mut self, value: T) -> Option<T> {
        if self.data.is_empty() {
            self.data.push(value);
            return None;
        }
        let min = std::mem::replace(&mut self.data[0], value);
        self.percolate_down(0);
        Some(min)
    }

    /// Removes the largest element and inserts `value` in a single repair
    /// pass. Returns the removed element, or `None` if the heap was empty
    /// (in which case `value` is simply inserted).
    pub fn replace_max(&mut self, value: T) -> Option<T> {
        let Some(index) = self.max_index() else {
            self.data.push(value);
            return None;
        };
        let max = std::mem::replace(&mut self.data[index], value);
        self.repair_replaced_max(index);
        Some(max)
    }

    /// Removes every element, keeping the allocation
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Iterates over the elements in arbitrary (storage) order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the heap, returning the backing vector in storage order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning its elements in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(min) = self.pop_min() {
            sorted.push(min);
        }
        sorted
    }

    /// Returns an iterator that pops elements from the minimum end
    ///
    /// Dropping the iterator early leaves the remaining elements in the heap.
    pub fn drain_asc(&mut self) -> DrainAsc<'_, T> {
        DrainAsc { heap: self }
    }

    /// Returns an iterator that pops elements from the maximum end
    ///
    /// Dropping the iterator early leaves the remaining elements in the heap.
    pub fn drain_desc(&mut self) -> DrainDesc<'_, T> {
        DrainDesc { heap: self }
    }

    /// Verifies the min-max ordering of every internal node
    ///
    /// Each node is compared against the most extreme of its children and
    /// grandchildren; by transitivity that covers every descendant. Intended
    /// for tests and debugging, not for the hot path.
    pub fn check_invariant(&self) -> bool {
        (0..self.data.len() / 2).all(|index| {
            let level = Level::of(index);
            match self.best_descendant(index, level) {
                Some(best) if level.precedes(&self.data[best], &self.data[index]) => {
                    tracing::debug!(
                        index,
                        descendant = best,
                        ?level,
                        "min-max heap order violated"
                    );
                    false
                }
                _ => true,
            }
        })
    }

    /// Index of the maximum: the root when alone, otherwise the larger of
    /// the root's children (the left one on a tie)
    fn max_index(&self) -> Option<usize> {
        match self.data.len() {
            0 => None,
            1 => Some(0),
            2 => Some(1),
            _ => Some(if self.data[2] > self.data[1] { 2 } else { 1 }),
        }
    }

    /// Restore order after overwriting the maximum slot at `index`
    fn repair_replaced_max(&mut self, index: usize) {
        if index == 0 {
            return;
        }
        // The new value may undercut the root.
        if self.data[index] < self.data[0] {
            self.data.swap(0, index);
        }
        self.percolate_down(index);
    }

    /// Removes the element at `index` (0, 1 or 2), filling the hole with the
    /// last element and percolating it down
    ///
    /// The last element is always a descendant of the root, so refilling
    /// slot 1 or 2 can never undercut the minimum.
    fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.data.len() {
            return None;
        }
        let removed = self.data.swap_remove(index);
        if index < self.data.len() {
            self.percolate_down(index);
        }
        Some(removed)
    }

    /// Restore order after appending a leaf at `index`
    fn bubble_up(&mut self, index: usize) {
        if index == 0 {
            return;
        }
        let level = Level::of(index);
        let parent = parent(index);
        // The parent sits on the opposite level. If the new element belongs
        // on the parent's side of it, trade places and climb that chain.
        if level.flip().precedes(&self.data[index], &self.data[parent]) {
            self.data.swap(index, parent);
            self.bubble_up_grandparents(parent, level.flip());
        } else {
            self.bubble_up_grandparents(index, level);
        }
    }

    /// Climb the same-level ancestor chain two levels at a time, stopping at
    /// depth 0 or 1
    fn bubble_up_grandparents(&mut self, mut index: usize, level: Level) {
        while index > 2 {
            let grandparent = grandparent(index);
            if !level.precedes(&self.data[index], &self.data[grandparent]) {
                break;
            }
            self.data.swap(index, grandparent);
            index = grandparent;
        }
    }

    /// Restore order below `index` after its element has been replaced
    fn percolate_down(&mut self, mut index: usize) {
        let level = Level::of(index);
        while let Some(best) = self.best_descendant(index, level) {
            if !level.precedes(&self.data[best], &self.data[index]) {
                return;
            }
            self.data.swap(index, best);

            // A child that is the extreme of the whole subtree has nothing
            // below it that can be out of order.
            if best < first_grandchild(index) {
                return;
            }

            // The grandchild now holds the displaced element, which may belong
            // on the intervening (opposite) level instead.
            let parent = parent(best);
            if level.precedes(&self.data[parent], &self.data[best]) {
                self.data.swap(parent, best);
            }
            index = best;
        }
    }

    /// Most extreme element (for `level`) among the children and
    /// grandchildren of `index`; the earliest index wins ties
    fn best_descendant(&self, index: usize, level: Level) -> Option<usize> {
        descendants(index, self.data.len()).reduce(|best, candidate| {
            if level.precedes(&self.data[candidate], &self.data[best]) {
                candidate
            } else {
                best
            }
        })
    }

    /// Floyd-style bulk build: percolate every internal node, bottom up
    fn heapify(&mut self) {
        for index in (0..self.data.len() / 2).rev() {
            self.percolate_down(index);
        }
        tracing::trace!(len = self.data.len(), "built min-max heap in bulk");
    }
}

impl<T: Ord> Default for MinMaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<Vec<T>> for MinMaxHeap<T> {
    fn from(data: Vec<T>) -> Self {
        let mut heap = Self { data };
        heap.heapify();
        heap
    }
}

impl<T: Ord> FromIterator<T> for MinMaxHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Ord> Extend<T> for MinMaxHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> IntoIterator for MinMaxHeap<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Consumes the heap in arbitrary (storage) order
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a MinMaxHeap<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: Ord> DoubleEndedHeap<T> for MinMaxHeap<T> {
    fn new() -> Self {
        MinMaxHeap::new()
    }

    fn is_empty(&self) -> bool {
        MinMaxHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        MinMaxHeap::len(self)
    }

    fn push(&mut self, item: T) {
        self.insert(item);
    }

    fn peek_min(&self) -> Option<&T> {
        MinMaxHeap::peek_min(self)
    }

    fn peek_max(&self) -> Option<&T> {
        MinMaxHeap::peek_max(self)
    }

    fn pop_min(&mut self) -> Option<T> {
        MinMaxHeap::pop_min(self)
    }

    fn pop_max(&mut self) -> Option<T> {
        MinMaxHeap::pop_max(self)
    }
}

/// Iterator returned by [`MinMaxHeap::drain_asc`]
#[derive(Debug)]
pub struct DrainAsc<'a, T: Ord> {
    heap: &'a mut MinMaxHeap<T>,
}

impl<T: Ord> Iterator for DrainAsc<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop_min()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}

impl<T: Ord> ExactSizeIterator for DrainAsc<'_, T> {}

/// Iterator returned by [`MinMaxHeap::drain_desc`]
#[derive(Debug)]
pub struct DrainDesc<'a, T: Ord> {
    heap: &'a mut MinMaxHeap<T>,
}

impl<T: Ord> Iterator for DrainDesc<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop_max()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}

impl<T: Ord> ExactSizeIterator for DrainDesc<'_, T> {}
