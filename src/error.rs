//! Error type for heap operations

use thiserror::Error;

/// Error type for heap operations
///
/// Both variants describe a caller precondition that was not met. A failed
/// call leaves the heap untouched and still valid.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The heap holds no elements
    #[error("cannot {operation} an empty heap")]
    Underflow {
        /// Name of the operation that needed an element
        operation: &'static str,
    },
    /// The index is not below the number of elements in the heap
    #[error("index {index} out of bounds for heap of size {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl HeapError {
    pub(crate) fn underflow(operation: &'static str) -> Self {
        HeapError::Underflow { operation }
    }

    /// Returns true for [`HeapError::Underflow`]
    pub fn is_underflow(&self) -> bool {
        matches!(self, HeapError::Underflow { .. })
    }

    /// Returns true for [`HeapError::IndexOutOfBounds`]
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, HeapError::IndexOutOfBounds { .. })
    }
}

/// Result alias used throughout the crate
pub type Result<T, E = HeapError> = std::result::Result<T, E>;
