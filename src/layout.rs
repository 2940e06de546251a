//! Implicit tree layout
//!
//! A min-max heap is a complete binary tree stored breadth-first in a slice:
//! index 0 is the root and the children of `i` sit at `2i + 1` and `2i + 2`.
//! Depth alternates between min levels (even, root included) and max levels
//! (odd). Nothing here is stored; every relation is derived from the index.

/// Ordering discipline of one tree level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Even depth: each element is <= all of its descendants
    Min,
    /// Odd depth: each element is >= all of its descendants
    Max,
}

impl Level {
    /// Level of the node stored at `index`
    ///
    /// Depth is `floor(log2(index + 1))`, taken with integer `ilog2` so that
    /// huge indices never go through a float.
    #[inline]
    pub fn of(index: usize) -> Self {
        if (index + 1).ilog2() % 2 == 0 {
            Level::Min
        } else {
            Level::Max
        }
    }

    /// The other level
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Level::Min => Level::Max,
            Level::Max => Level::Min,
        }
    }

    /// True when `a` belongs strictly closer to this level's end of the order
    /// than `b` (`a < b` on a min level, `a > b` on a max level).
    #[inline]
    pub fn precedes<T: Ord>(self, a: &T, b: &T) -> bool {
        match self {
            Level::Min => a < b,
            Level::Max => a > b,
        }
    }
}

#[inline]
pub fn parent(index: usize) -> usize {
    debug_assert!(index > 0, "the root has no parent");
    (index - 1) / 2
}

#[inline]
pub fn grandparent(index: usize) -> usize {
    debug_assert!(index > 2, "depth < 2 has no grandparent");
    (index - 3) / 4
}

#[inline]
pub fn left(index: usize) -> usize {
    2 * index + 1
}

#[inline]
pub fn right(index: usize) -> usize {
    2 * index + 2
}

/// First index of the grandchild range of `index`
#[inline]
pub fn first_grandchild(index: usize) -> usize {
    4 * index + 3
}

/// Children then grandchildren of `index` that exist in a heap of `len`
/// elements, in index order. At most six indices.
#[inline]
pub fn descendants(index: usize, len: usize) -> impl Iterator<Item = usize> {
    let children = left(index)..=right(index);
    let grandchildren = first_grandchild(index)..=first_grandchild(index) + 3;
    children.chain(grandchildren).take_while(move |&j| j < len)
}
