//! Binary Min-Heap for Rust
//!
//! This crate provides [`MinHeap`], an array-backed binary min-heap over any
//! [`PartialOrd`] element type.
//!
//! # Features
//!
//! - **O(1)** access to the minimum with [`MinHeap::peek`]
//! - **O(log n)** [`insert`](MinHeap::insert) and [`pop`](MinHeap::pop)
//! - **O(n)** bulk construction from a `Vec` or slice
//! - Indexed read access to the implicit tree with [`MinHeap::at`]
//! - Fallible accessors: an empty heap or a bad index is reported as a
//!   [`HeapError`], never a panic
//! - Optional `serde` support (feature `serde`)
//!
//! # Example
//!
//! ```rust
//! use min_heap::MinHeap;
//!
//! let mut heap = MinHeap::from(vec![5, 4, 3, 2, 1]);
//! assert_eq!(heap.to_text(), "MinHeap [1, 2, 3, 5, 4]");
//!
//! heap.insert(0);
//! assert_eq!(heap.pop(), Ok(0));
//! assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3, 4, 5]);
//! ```

pub mod error;
pub mod min_heap;
#[cfg(feature = "serde")]
mod serde_impl;

pub use error::{HeapError, Result};
pub use min_heap::{DrainSorted, MinHeap, DEFAULT_CAPACITY};
