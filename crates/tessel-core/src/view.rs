//! Non-owning views over contiguous bytes.
//!
//! A [`ByteView`] is a shared, fixed-length window onto bytes owned by
//! something else. A [`ByteViewMut`] is the exclusive variant. Neither
//! owns memory; both are plain borrows, so they cannot outlive the
//! storage they were created from.

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::error::ViewError;
use crate::reinterpret::Scalar;

/// Shared, non-owning view over a contiguous byte region.
///
/// `ByteView` is `Copy` and as cheap to pass around as a `&[u8]`. It
/// dereferences to `[u8]` so slice methods are available directly.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ByteView<'a> {
    bytes: &'a [u8],
}

impl<'a> ByteView<'a> {
    /// Create a view over `bytes`.
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// A zero-length view.
    pub const fn empty() -> Self {
        Self { bytes: &[] }
    }

    /// Number of bytes in the view.
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the view covers zero bytes.
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The underlying bytes, with the full lifetime of the view.
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// A view over the first `min(n, len)` bytes.
    pub fn prefix(&self, n: usize) -> ByteView<'a> {
        let end = n.min(self.bytes.len());
        ByteView::new(&self.bytes[..end])
    }

    /// Read the viewed bytes back as a `T`.
    ///
    /// The read is unaligned, so views over arbitrary byte offsets are
    /// accepted. Fails if the view length is not exactly `size_of::<T>()`.
    pub fn read_as<T: Scalar>(&self) -> Result<T, ViewError> {
        let expected = std::mem::size_of::<T>();
        if self.bytes.len() != expected {
            return Err(ViewError::SizeMismatch {
                expected,
                actual: self.bytes.len(),
            });
        }
        bytemuck::try_pod_read_unaligned(self.bytes).map_err(|_| ViewError::SizeMismatch {
            expected,
            actual: self.bytes.len(),
        })
    }
}

impl Deref for ByteView<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.bytes
    }
}

impl AsRef<[u8]> for ByteView<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}

impl<'a> From<&'a [u8]> for ByteView<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for ByteView<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Self::new(bytes.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for ByteView<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Self::new(bytes.as_slice())
    }
}

impl fmt::Debug for ByteView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteView")
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Exclusive, non-owning view over a contiguous byte region.
///
/// Writes through a `ByteViewMut` land directly in the aliased storage.
/// When produced by [`reinterpret_mut`](crate::reinterpret_mut) this
/// means writing the bytes rewrites the original value.
#[derive(PartialEq, Eq, Hash)]
pub struct ByteViewMut<'a> {
    bytes: &'a mut [u8],
}

impl<'a> ByteViewMut<'a> {
    /// Create an exclusive view over `bytes`.
    pub fn new(bytes: &'a mut [u8]) -> Self {
        Self { bytes }
    }

    /// Number of bytes in the view.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the view covers zero bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Shared access to the viewed bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes
    }

    /// Mutable access to the viewed bytes.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        self.bytes
    }

    /// Reborrow as a shared [`ByteView`].
    pub fn as_view(&self) -> ByteView<'_> {
        ByteView::new(self.bytes)
    }

    /// Consume the view, returning the underlying slice with its full lifetime.
    pub fn into_bytes(self) -> &'a mut [u8] {
        self.bytes
    }
}

impl Deref for ByteViewMut<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.bytes
    }
}

impl DerefMut for ByteViewMut<'_> {
    fn deref_mut(&mut self) -> &mut [u8] {
        self.bytes
    }
}

impl<'a> From<&'a mut [u8]> for ByteViewMut<'a> {
    fn from(bytes: &'a mut [u8]) -> Self {
        Self::new(bytes)
    }
}

impl fmt::Debug for ByteViewMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteViewMut")
            .field("len", &self.bytes.len())
            .finish()
    }
}
