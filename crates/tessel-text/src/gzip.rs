//! Gzip magic-number detection.

/// The two leading bytes of every gzip member (RFC 1952).
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Whether `bytes` starts with the gzip magic `1F 8B`.
#[inline]
pub fn is_gzip_header(bytes: &[u8]) -> bool {
    bytes.starts_with(&GZIP_MAGIC)
}

/// Whether a byte sequence starts with the gzip magic `1F 8B`.
///
/// Consumes at most two items from the source.
pub fn is_gzip_header_iter<I>(bytes: I) -> bool
where
    I: IntoIterator<Item = u8>,
{
    let mut iter = bytes.into_iter();
    GZIP_MAGIC.iter().all(|&expected| iter.next() == Some(expected))
}
