//! Hexadecimal rendering: `"1F 8B 08"`.
//!
//! The view tier caps its input at `max_bytes` and replaces the tail of a
//! capped rendering with `"..."`. The sequence tier renders everything.

use tessel_core::{reinterpret, ByteView, Scalar};

use crate::builder::render_with;
use crate::digits::byte_hex_digits;
use crate::error::CodecError;
use crate::raw;

/// Default cap on the number of bytes rendered by the view tier.
pub const DEFAULT_MAX_BYTES: usize = 500;

/// Written over the tail of a capped rendering.
const TRUNCATION_MARKER: &[u8; 3] = b"...";

/// Characters per rendered byte: two digits plus one separator.
const CHARS_PER_BYTE: usize = 3;

/// Output length of the view tier for an input of `len` bytes.
///
/// `3 * min(len, max_bytes) - 1`, or `0` when nothing is rendered.
pub const fn hex_len(len: usize, max_bytes: usize) -> usize {
    let shown = if len < max_bytes { len } else { max_bytes };
    if shown == 0 {
        0
    } else {
        shown.saturating_mul(CHARS_PER_BYTE) - 1
    }
}

/// Encode `bytes` into `out`, which must be exactly `hex_len` long.
fn encode_into(bytes: &[u8], out: &mut [u8], truncated: bool) {
    for (i, &byte) in bytes.iter().enumerate() {
        let at = i * CHARS_PER_BYTE;
        if i > 0 {
            out[at - 1] = b' ';
        }
        let [hi, lo] = byte_hex_digits(byte);
        out[at] = hi;
        out[at + 1] = lo;
    }
    if truncated {
        // Short renderings (max_bytes == 1) keep only as much of the
        // marker as fits.
        let keep = out.len().saturating_sub(TRUNCATION_MARKER.len());
        let marker_len = out.len() - keep;
        out[keep..].copy_from_slice(&TRUNCATION_MARKER[..marker_len]);
    }
}

/// Render at most `max_bytes` bytes of `view` as spaced uppercase hex.
///
/// Allocates exactly the required length. If `view` is longer than
/// `max_bytes` the result is still `3 * max_bytes - 1` characters long and
/// ends in `"..."`.
///
/// ```rust
/// use tessel_core::ByteView;
/// use tessel_text::hex_from_view;
///
/// let data = [0xDEu8, 0xAD, 0xBE, 0xEF];
/// assert_eq!(hex_from_view(ByteView::from(&data), 500), "DE AD BE EF");
/// assert_eq!(hex_from_view(ByteView::from(&data), 3), "DE AD...");
/// ```
pub fn hex_from_view(view: ByteView<'_>, max_bytes: usize) -> String {
    let mut out = vec![0u8; hex_len(view.len(), max_bytes)];
    encode_into(view.prefix(max_bytes).as_bytes(), &mut out, view.len() > max_bytes);
    raw::ascii_string(out)
}

/// Render into a caller-supplied buffer without allocating.
///
/// Returns the rendered text borrowed from the front of `buf`. Fails with
/// [`CodecError::Capacity`] when `buf` is shorter than
/// [`hex_len`]`(view.len(), max_bytes)`; in that case `buf` is untouched.
pub fn hex_from_view_into<'b>(
    view: ByteView<'_>,
    buf: &'b mut [u8],
    max_bytes: usize,
) -> Result<&'b str, CodecError> {
    let required = hex_len(view.len(), max_bytes);
    if buf.len() < required {
        return Err(CodecError::Capacity {
            required,
            available: buf.len(),
        });
    }
    let out = &mut buf[..required];
    encode_into(view.prefix(max_bytes).as_bytes(), out, view.len() > max_bytes);
    Ok(raw::ascii_str(out))
}

/// Render every byte of `bytes` as spaced uppercase hex, with no cap.
///
/// Works with any iterable byte source. When `builder` is supplied it is
/// used as scratch space and left empty (capacity retained) on return.
/// Time and memory grow linearly with the input; callers are expected to
/// know their input is small.
pub fn hex_from_sequence<I>(bytes: I, builder: Option<&mut String>) -> String
where
    I: IntoIterator<Item = u8>,
{
    let iter = bytes.into_iter();
    let hint = iter.size_hint().0.saturating_mul(CHARS_PER_BYTE);
    render_with(builder, hint, |sb| {
        for (i, byte) in iter.enumerate() {
            if i > 0 {
                sb.push(' ');
            }
            let [hi, lo] = byte_hex_digits(byte);
            sb.push(char::from(hi));
            sb.push(char::from(lo));
        }
    })
}

/// Hex text of a scalar value's in-memory bytes, in native byte order.
///
/// ```rust
/// use tessel_text::memory_hex_text;
///
/// let text = memory_hex_text(&1u32, 500);
/// if cfg!(target_endian = "little") {
///     assert_eq!(text, "01 00 00 00");
/// }
/// ```
pub fn memory_hex_text<T: Scalar>(value: &T, max_bytes: usize) -> String {
    hex_from_view(reinterpret(value), max_bytes)
}
