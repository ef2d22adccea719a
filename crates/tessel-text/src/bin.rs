//! Binary rendering: `"00000101 11111111"`.
//!
//! Both entry points render every byte. There is no truncation policy for
//! binary text.

use tessel_core::ByteView;

use crate::builder::render_with;
use crate::digits::byte_bin_digits;

/// Characters per rendered byte: eight digits plus one separator.
const CHARS_PER_BYTE: usize = 9;

/// Render every byte of `view` as zero-padded binary, space separated.
pub fn bin_from_view(view: ByteView<'_>, builder: Option<&mut String>) -> String {
    bin_from_sequence(view.iter().copied(), builder)
}

/// Render every byte of `bytes` as zero-padded binary, space separated.
///
/// When `builder` is supplied it is used as scratch space and left empty
/// (capacity retained) on return.
pub fn bin_from_sequence<I>(bytes: I, builder: Option<&mut String>) -> String
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
            sb.extend(byte_bin_digits(byte).iter().map(|&d| char::from(d)));
        }
    })
}
