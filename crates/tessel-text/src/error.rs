//! Codec error types.

use thiserror::Error;

/// Errors that can occur while rendering bytes as text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The caller-supplied output buffer cannot hold the rendered text.
    ///
    /// Nothing is written to the buffer when this is returned. Retry with
    /// a buffer of at least `required` bytes, or use the allocating call.
    #[error("output buffer too small: need {required} bytes, have {available}")]
    Capacity {
        /// Bytes needed for the full rendering.
        required: usize,
        /// Length of the supplied buffer.
        available: usize,
    },
}
