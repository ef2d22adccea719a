//! Error types for byte-view operations.

use thiserror::Error;

/// Errors that can occur when reading typed values back out of a view.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ViewError {
    /// The view length does not match the size of the requested type.
    #[error("size mismatch: expected {expected} bytes, view holds {actual}")]
    SizeMismatch {
        /// `size_of::<T>()` of the requested type.
        expected: usize,
        /// Length of the view.
        actual: usize,
    },
}
