//! Method-call sugar over the free rendering functions.

use tessel_core::ByteView;

use crate::bin::bin_from_view;
use crate::gzip;
use crate::hex::{hex_from_view, DEFAULT_MAX_BYTES};

/// Text rendering for contiguous byte sources.
///
/// Implemented for `[u8]` (and so, through deref, for `Vec<u8>` and
/// arrays) and for [`ByteView`]. Hex methods use the capped view tier;
/// binary text is never capped.
pub trait ByteText {
    /// Spaced hex text, capped at [`DEFAULT_MAX_BYTES`].
    fn hex_text(&self) -> String {
        self.hex_text_capped(DEFAULT_MAX_BYTES)
    }

    /// Spaced hex text, capped at `max_bytes`.
    fn hex_text_capped(&self, max_bytes: usize) -> String;

    /// Spaced zero-padded binary text of every byte.
    fn bin_text(&self) -> String;

    /// Whether the bytes start with the gzip magic `1F 8B`.
    fn is_gzip_header(&self) -> bool;
}

impl ByteText for [u8] {
    fn hex_text_capped(&self, max_bytes: usize) -> String {
        hex_from_view(ByteView::new(self), max_bytes)
    }

    fn bin_text(&self) -> String {
        bin_from_view(ByteView::new(self), None)
    }

    fn is_gzip_header(&self) -> bool {
        gzip::is_gzip_header(self)
    }
}

impl ByteText for ByteView<'_> {
    fn hex_text_capped(&self, max_bytes: usize) -> String {
        hex_from_view(*self, max_bytes)
    }

    fn bin_text(&self) -> String {
        bin_from_view(*self, None)
    }

    fn is_gzip_header(&self) -> bool {
        gzip::is_gzip_header(self.as_bytes())
    }
}
