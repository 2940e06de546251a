//! Min-Max Heap for Rust
//!
//! This crate provides an array-backed min-max heap: a double-ended priority
//! queue with O(1) access to both the minimum and the maximum and O(log n)
//! insertion and removal at either end, all inside a single `Vec`.
//!
//! # Features
//!
//! - **MinMaxHeap**: the core structure; alternating min/max levels over an implicit binary tree
//! - **BoundedMinMaxHeap**: fixed-capacity top-K / bottom-K buffer that evicts from the losing end
//! - **RunningMedian**: streaming median built from two min-max heaps, with O(1) min and max
//!
//! # Example
//!
//! ```rust
//! use minmax_heap::MinMaxHeap;
//!
//! let mut heap = MinMaxHeap::new();
//! heap.insert(4);
//! heap.insert(1);
//! heap.insert(5);
//!
//! assert_eq!(heap.get_min(), Ok(1));
//! assert_eq!(heap.get_max(), Ok(5));
//! heap.delete_min().unwrap();
//! assert_eq!(heap.get_min(), Ok(4));
//! ```
//!
//! # Logging
//!
//! Diagnostic events go through [`tracing`]; install a subscriber in the
//! application to see them. Nothing is logged on the per-comparison path.

pub mod bounded;
mod layout;
pub mod median;
pub mod min_max;
pub mod traits;

// Re-export the main types for convenience
pub use min_max::MinMaxHeap;
pub use traits::{DoubleEndedHeap, HeapError};
