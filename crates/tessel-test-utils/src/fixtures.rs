//! Deterministic byte fixtures.

use tessel_core::ByteView;

/// The gzip magic followed by the deflate method byte.
pub const GZIP_PREFIX: [u8; 3] = [0x1f, 0x8b, 0x08];

/// Every byte value once, in ascending order.
pub fn all_bytes() -> Vec<u8> {
    (0..=u8::MAX).collect()
}

/// `len` zero bytes.
pub fn zeros(len: usize) -> Vec<u8> {
    vec![0; len]
}

/// `len` bytes counting up from zero and wrapping at 256.
pub fn ramp(len: usize) -> Vec<u8> {
    (0..len).map(|i| i as u8).collect()
}

/// Borrow a fixture as a view.
pub fn view(bytes: &[u8]) -> ByteView<'_> {
    ByteView::new(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_wraps() {
        let r = ramp(258);
        assert_eq!(r[255], 255);
        assert_eq!(r[256], 0);
        assert_eq!(r[257], 1);
    }

    #[test]
    fn all_bytes_covers_range() {
        assert_eq!(all_bytes().len(), 256);
        assert_eq!(view(&zeros(4)).len(), 4);
    }
}
