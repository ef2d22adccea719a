//! Tessel: pooled byte buffers with stale-handle detection, zero-copy byte
//! views, and hexadecimal/binary text rendering.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Tessel sub-crates. For most users, adding `tessel` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tessel::prelude::*;
//!
//! let mut pool: BufferPool<u8> = BufferPool::new(PoolConfig::default()).unwrap();
//! let handle = pool.checkout().unwrap();
//! pool.access(handle).unwrap().extend_from_slice(&[0x1f, 0x8b, 0x08]);
//!
//! let view = pool.view(handle).unwrap();
//! assert!(view.is_gzip_header());
//! assert_eq!(view.hex_text(), "1F 8B 08");
//!
//! pool.release(handle).unwrap();
//! assert!(matches!(pool.access(handle), Err(PoolError::StaleHandle { .. })));
//!
//! // Plain values can be viewed as their bytes without copying.
//! let word: u16 = 0x0102;
//! assert_eq!(reinterpret(&word).len(), 2);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`view`] | `tessel-core` | `ByteView`, `ByteViewMut`, `Scalar`, typed reinterpretation |
//! | [`text`] | `tessel-text` | Hex and binary rendering, gzip magic check |
//! | [`pool`] | `tessel-pool` | `BufferPool`, `BufferHandle`, `Lease`, pool errors |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Byte views and typed reinterpretation (`tessel-core`).
///
/// [`view::ByteView`] is a borrowed, read-only window over contiguous bytes;
/// [`view::reinterpret`] exposes a [`view::Scalar`] value's storage as one.
pub use tessel_core as view;

/// Text rendering of byte views (`tessel-text`).
///
/// The capped hex tier ([`text::hex_from_view`],
/// [`text::hex_from_view_into`]) and the uncapped sequence tier
/// ([`text::hex_from_sequence`], [`text::bin_from_sequence`]).
pub use tessel_text as text;

/// Generation-counted buffer pool (`tessel-pool`).
///
/// Check buffers out with [`pool::BufferPool::checkout`], or scope them
/// with [`pool::BufferPool::lease`].
pub use tessel_pool as pool;

/// Common imports for typical Tessel usage.
///
/// ```rust
/// use tessel::prelude::*;
/// ```
///
/// This imports the pool and its handle types, the view types, and the
/// [`ByteText`](tessel_text::ByteText) extension trait.
pub mod prelude {
    // Views
    pub use tessel_core::{reinterpret, reinterpret_mut, ByteView, ByteViewMut, Scalar};

    // Text
    pub use tessel_text::{ByteText, DEFAULT_MAX_BYTES};

    // Pool
    pub use tessel_pool::{BufferHandle, BufferPool, Lease, PoolConfig, PoolStats};

    // Errors
    pub use tessel_core::ViewError;
    pub use tessel_pool::PoolError;
    pub use tessel_text::CodecError;
}
