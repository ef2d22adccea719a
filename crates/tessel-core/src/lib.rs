//! Core byte-view types for the Tessel workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the non-owning [`ByteView`] every other Tessel crate consumes, its
//! exclusive counterpart [`ByteViewMut`], and the zero-copy
//! reinterpretation of fixed-layout scalar values as raw bytes.
//!
//! # Lifetimes instead of pinning
//!
//! A view borrows the storage it was derived from. While the view is
//! alive the borrow checker forbids moving, resizing or dropping that
//! storage, so a view can never observe relocated or freed memory. The
//! [`Scalar`] bound restricts reinterpretation to padding-free,
//! reference-free types whose every bit pattern is valid.
//!
//! ```rust
//! use tessel_core::{reinterpret, reinterpret_mut};
//!
//! let mut value = 0x0102_0304u32;
//! assert_eq!(reinterpret(&value).len(), 4);
//!
//! reinterpret_mut(&mut value).as_bytes_mut().fill(0xFF);
//! assert_eq!(value, u32::MAX);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod reinterpret;
pub mod view;

pub use error::ViewError;
pub use reinterpret::{reinterpret, reinterpret_mut, Scalar};
pub use view::{ByteView, ByteViewMut};
