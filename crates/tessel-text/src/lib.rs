//! Hexadecimal and binary text rendering of bytes.
//!
//! Two tiers, with deliberately different policies:
//!
//! - **View tier** ([`hex_from_view`], [`hex_from_view_into`]): renders
//!   at most `max_bytes` bytes and marks the cut with `"..."`. Intended
//!   for debug display of buffers whose size is not known in advance.
//!   The `_into` variant writes into a caller-supplied buffer and never
//!   allocates.
//! - **Sequence tier** ([`hex_from_sequence`], [`bin_from_sequence`],
//!   [`bin_from_view`]): renders every byte of any iterable source, with
//!   no cap. An optional reusable `String` builder avoids reallocating
//!   across calls.
//!
//! ```rust
//! use tessel_text::{bin_from_sequence, hex_from_view, DEFAULT_MAX_BYTES};
//! use tessel_core::ByteView;
//!
//! let header = [0x1f, 0x8b];
//! assert_eq!(hex_from_view(ByteView::from(&header), DEFAULT_MAX_BYTES), "1F 8B");
//! assert_eq!(bin_from_sequence([0x05], None), "00000101");
//! ```
//!
//! This crate contains a single bounded `unsafe` block, in `raw.rs`, for
//! turning ASCII-only output buffers into `str` without re-validation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod bin;
mod builder;
pub mod digits;
pub mod error;
pub mod ext;
pub mod gzip;
pub mod hex;
mod raw;

pub use bin::{bin_from_sequence, bin_from_view};
pub use digits::{byte_bin_digits, byte_bin_text, byte_hex_digits, byte_hex_text};
pub use error::CodecError;
pub use ext::ByteText;
pub use gzip::{is_gzip_header, is_gzip_header_iter, GZIP_MAGIC};
pub use hex::{
    hex_from_sequence, hex_from_view, hex_from_view_into, hex_len, memory_hex_text,
    DEFAULT_MAX_BYTES,
};
