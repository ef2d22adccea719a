//! Test utilities and shared strategies for Tessel development.
//!
//! Provides deterministic byte fixtures and `proptest` strategies used by
//! the property tests of several Tessel crates, plus small checkers for
//! the hex and binary text layouts.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use proptest::collection::vec;
use proptest::prelude::*;

/// Arbitrary byte vectors of length `0..max_len`.
pub fn arb_bytes(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    vec(any::<u8>(), 0..max_len)
}

/// Non-empty arbitrary byte vectors of length `1..max_len`.
pub fn arb_nonempty_bytes(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    vec(any::<u8>(), 1..max_len.max(2))
}

/// A byte vector together with a cap strictly smaller than its length.
///
/// Yields `(bytes, cap)` with `1 <= cap < bytes.len()`.
pub fn arb_over_cap(max_len: usize) -> impl Strategy<Value = (Vec<u8>, usize)> {
    vec(any::<u8>(), 2..max_len.max(3)).prop_flat_map(|bytes| {
        let len = bytes.len();
        (Just(bytes), 1..len)
    })
}

/// A byte vector together with a cap at least as large as its length.
pub fn arb_within_cap(max_len: usize) -> impl Strategy<Value = (Vec<u8>, usize)> {
    vec(any::<u8>(), 0..max_len).prop_flat_map(|bytes| {
        let len = bytes.len();
        (Just(bytes), len..len + 16)
    })
}

/// Whether `text` is `([0-9A-F]{2} )*[0-9A-F]{2}`.
pub fn is_spaced_hex(text: &str) -> bool {
    is_spaced_groups(text, 2, |c| matches!(c, b'0'..=b'9' | b'A'..=b'F'))
}

/// Whether `text` is `([01]{8} )*[01]{8}`.
pub fn is_spaced_bin(text: &str) -> bool {
    is_spaced_groups(text, 8, |c| matches!(c, b'0' | b'1'))
}

fn is_spaced_groups(text: &str, width: usize, digit: impl Fn(u8) -> bool) -> bool {
    !text.is_empty()
        && text
            .split(' ')
            .all(|group| group.len() == width && group.bytes().all(&digit))
}
