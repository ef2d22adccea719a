//! ASCII buffer to `str` conversions.
//!
//! Every renderer in this crate only ever writes bytes from
//! `b'0'..=b'9'`, `b'A'..=b'F'`, `b' '` and `b'.'`, so its output is valid
//! UTF-8 by construction. These helpers skip the redundant validation
//! pass. Each caller must uphold the ASCII-only contract.

#![allow(unsafe_code)]

/// Borrow an ASCII-only buffer as `&str`.
pub(crate) fn ascii_str(bytes: &[u8]) -> &str {
    debug_assert!(bytes.is_ascii(), "renderer produced non-ASCII output");
    // SAFETY: callers only pass buffers written by the digit and separator
    // encoders, which emit ASCII exclusively. ASCII is valid UTF-8.
    unsafe { std::str::from_utf8_unchecked(bytes) }
}

/// Convert an ASCII-only buffer into an owned `String` without copying.
pub(crate) fn ascii_string(bytes: Vec<u8>) -> String {
    debug_assert!(bytes.is_ascii(), "renderer produced non-ASCII output");
    // SAFETY: as for `ascii_str`; the buffer holds ASCII only.
    unsafe { String::from_utf8_unchecked(bytes) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_round_trips() {
        assert_eq!(ascii_str(b"1F 8B"), "1F 8B");
        assert_eq!(ascii_string(b"...".to_vec()), "...");
        assert_eq!(ascii_str(b""), "");
    }
}
