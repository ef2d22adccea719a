//! Single-byte digit encoders.
//!
//! Hex digits are computed with ASCII arithmetic rather than a lookup
//! table: `0..=9` map to `b'0'..=b'9'` and `10..=15` to `b'A'..=b'F'`.

/// Encode one nibble (`0..=15`) as an uppercase hex digit.
#[inline]
pub(crate) const fn nibble_digit(nibble: u8) -> u8 {
    if nibble < 0x0A {
        b'0' + nibble
    } else {
        b'A' + (nibble - 0x0A)
    }
}

/// The two uppercase hex digits of `byte`, high nibble first.
#[inline]
pub const fn byte_hex_digits(byte: u8) -> [u8; 2] {
    [nibble_digit(byte >> 4), nibble_digit(byte & 0x0F)]
}

/// The eight binary digits of `byte`, most significant bit first.
#[inline]
pub const fn byte_bin_digits(byte: u8) -> [u8; 8] {
    let mut digits = [b'0'; 8];
    let mut i = 0;
    while i < 8 {
        if byte & (0x80 >> i) != 0 {
            digits[i] = b'1';
        }
        i += 1;
    }
    digits
}

/// Uppercase two-digit hex text of one byte, e.g. `"A1"`, `"01"`.
pub fn byte_hex_text(byte: u8) -> String {
    byte_hex_digits(byte).iter().map(|&d| char::from(d)).collect()
}

/// Zero-padded eight-digit binary text of one byte, e.g. `"00010000"`.
pub fn byte_bin_text(byte: u8) -> String {
    byte_bin_digits(byte).iter().map(|&d| char::from(d)).collect()
}
