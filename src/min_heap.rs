//! Array-backed binary min-heap
//!
//! [`MinHeap`] stores its elements in a single `Vec` laid out as an implicit
//! complete binary tree: the children of index `i` live at `2i + 1` and
//! `2i + 2`, and its parent at `(i - 1) / 2`. Every parent compares less than
//! or equal to its children, so the minimum is always at index 0.
//!
//! # Time Complexity
//!
//! | Operation        | Complexity      |
//! |------------------|-----------------|
//! | `insert`         | O(log n), amortized O(1) growth |
//! | `pop`            | O(log n)        |
//! | `peek`           | O(1)            |
//! | `at`             | O(1)            |
//! | `from_vec`       | O(n)            |
//! | `clear`          | O(n) drops      |
//!
//! # Example
//!
//! ```rust
//! use min_heap::MinHeap;
//!
//! let mut heap = MinHeap::new();
//! heap.insert(3);
//! heap.insert(1);
//! heap.insert(2);
//!
//! assert_eq!(heap.peek(), Ok(&1));
//! assert_eq!(heap.pop(), Ok(1));
//! assert_eq!(heap.pop(), Ok(2));
//! assert_eq!(heap.pop(), Ok(3));
//! assert!(heap.pop().is_err());
//! ```

use std::fmt;
use std::ops::Index;

use tracing::trace;

use crate::error::{HeapError, Result};

/// Capacity reserved by [`MinHeap::new`], and the first capacity an
/// unallocated heap grows to.
pub const DEFAULT_CAPACITY: usize = 2;

#[inline]
fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline]
fn left_child(index: usize) -> usize {
    2 * index + 1
}

#[inline]
fn right_child(index: usize) -> usize {
    2 * index + 2
}

/// A binary min-heap
///
/// Elements only need [`PartialOrd`]; the heap never evaluates anything but
/// `<`, so floating point values work. Feeding values that do not compare
/// (such as `NaN`) is a caller error: nothing panics, but the minimum is no
/// longer well defined.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    /// Implicit tree; `elements.len()` is the number of live elements
    elements: Vec<T>,
}

impl<T> MinHeap<T> {
    /// Creates an empty heap with room for [`DEFAULT_CAPACITY`] elements
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty heap whose backing store is pre-sized to `capacity`
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Same as [`len`](Self::len)
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the capacity of the backing store
    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Returns the minimum element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Underflow`] if the heap is empty.
    pub fn peek(&self) -> Result<&T> {
        self.elements
            .first()
            .ok_or_else(|| HeapError::underflow("peek"))
    }

    /// Same as [`peek`](Self::peek)
    pub fn top(&self) -> Result<&T> {
        self.peek()
    }

    /// Returns the element stored at `index` of the implicit tree
    ///
    /// Index 0 is the root; the children of `i` are at `2i + 1` and `2i + 2`.
    ///
    /// # Errors
    /// Returns [`HeapError::IndexOutOfBounds`] if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T> {
        self.elements.get(index).ok_or(HeapError::IndexOutOfBounds {
            index,
            len: self.elements.len(),
        })
    }

    /// Iterates over the elements in backing-store (heap) order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns the elements in backing-store (heap) order
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Consumes the heap and returns its backing store in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Removes every element, keeping the allocated capacity
    pub fn clear(&mut self) {
        trace!(dropped = self.elements.len(), "clearing heap");
        self.elements.clear();
    }
}

impl<T: PartialOrd> MinHeap<T> {
    /// Builds a heap from `elements` in O(n), taking ownership of the vector
    pub fn from_vec(elements: Vec<T>) -> Self {
        let mut heap = Self { elements };
        heap.make_heap();
        heap
    }

    /// Builds a heap from a copy of `elements` in O(n)
    pub fn from_slice(elements: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from_vec(elements.to_vec())
    }

    /// Inserts an element, restoring the heap property by sifting it up
    ///
    /// A full backing store doubles its capacity first (an unallocated one
    /// grows to [`DEFAULT_CAPACITY`]).
    pub fn insert(&mut self, element: T) {
        if self.elements.len() == self.elements.capacity() {
            self.grow();
        }
        self.elements.push(element);
        self.sift_up(self.elements.len() - 1);
    }

    /// Removes and returns the minimum element
    ///
    /// The last element takes the root's place and is sifted down.
    ///
    /// # Errors
    /// Returns [`HeapError::Underflow`] if the heap is empty.
    pub fn pop(&mut self) -> Result<T> {
        if self.elements.is_empty() {
            return Err(HeapError::underflow("pop"));
        }

        let min = self.elements.swap_remove(0);
        if !self.elements.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    /// Same as [`pop`](Self::pop)
    pub fn extract_min(&mut self) -> Result<T> {
        self.pop()
    }

    /// Removes the minimum element and moves it into `slot`
    ///
    /// # Errors
    /// Returns [`HeapError::Underflow`] if the heap is empty; `slot` is left
    /// as it was.
    pub fn pop_into(&mut self, slot: &mut T) -> Result<()> {
        *slot = self.pop()?;
        Ok(())
    }

    /// Returns an iterator that pops elements in ascending order
    ///
    /// Elements not yet yielded when the iterator is dropped stay in the heap.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T> {
        DrainSorted { heap: self }
    }

    /// Consumes the heap and returns its elements in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        sorted.extend(self.drain_sorted());
        sorted
    }

    /// Checks every parent/child pair of the implicit tree
    pub fn is_heap(&self) -> bool {
        (1..self.elements.len()).all(|i| self.elements[parent(i)] <= self.elements[i])
    }

    fn grow(&mut self) {
        let old_capacity = self.elements.capacity();
        let additional = if old_capacity == 0 {
            DEFAULT_CAPACITY
        } else {
            old_capacity
        };
        self.elements.reserve_exact(additional);
        trace!(
            old_capacity,
            new_capacity = self.elements.capacity(),
            "grew heap storage"
        );
    }

    /// Sifts every internal node down, last one first
    fn make_heap(&mut self) {
        let len = self.elements.len();
        trace!(len, "building heap in place");
        if len < 2 {
            return;
        }
        for index in (0..=parent(len - 1)).rev() {
            self.sift_down(index);
        }
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent(index);
            if self.elements[index] < self.elements[parent] {
                self.elements.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    ///
    /// Ties keep the parent in place and prefer the left child over the right.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.elements.len();
        loop {
            let left = left_child(index);
            let right = right_child(index);
            let mut smallest = index;

            if left < len && self.elements[left] < self.elements[smallest] {
                smallest = left;
            }
            if right < len && self.elements[right] < self.elements[smallest] {
                smallest = right;
            }

            if smallest == index {
                break;
            }
            self.elements.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T: fmt::Display> MinHeap<T> {
    /// Writes `MinHeap [e0, e1, ...]` in backing-store order, not sorted order
    pub fn render<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        out.write_str("MinHeap [")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                out.write_str(", ")?;
            }
            write!(out, "{element}")?;
        }
        out.write_str("]")
    }

    /// Renders the heap into a new `String`
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        // Writing into a String cannot fail.
        let _ = self.render(&mut text);
        text
    }
}

impl<T: fmt::Display> fmt::Display for MinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// # Panics
/// Panics if `index >= len()`; use [`MinHeap::at`] for a fallible lookup.
impl<T> Index<usize> for MinHeap<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(element) => element,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: PartialOrd> From<Vec<T>> for MinHeap<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T: PartialOrd + Clone> From<&[T]> for MinHeap<T> {
    fn from(elements: &[T]) -> Self {
        Self::from_slice(elements)
    }
}

impl<T: PartialOrd> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: PartialOrd> Extend<T> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<'a, T> IntoIterator for &'a MinHeap<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for MinHeap<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Yields the elements in heap order; see [`MinHeap::into_sorted_vec`]
    /// for ascending order.
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

/// Iterator returned by [`MinHeap::drain_sorted`]
#[derive(Debug)]
pub struct DrainSorted<'a, T: PartialOrd> {
    heap: &'a mut MinHeap<T>,
}

impl<T: PartialOrd> Iterator for DrainSorted<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T: PartialOrd> ExactSizeIterator for DrainSorted<'_, T> {}
