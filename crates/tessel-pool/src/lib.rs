//! Generation-counted pooled buffers.
//!
//! A [`BufferPool`] owns a set of reusable growable buffers ("slots").
//! Callers never receive a reference that outlives their checkout: they
//! receive an opaque, copyable [`BufferHandle`] carrying the slot index
//! and the slot's generation at checkout time. Every access compares the
//! two generations first, so using a buffer after it has been recycled is
//! an explicit [`PoolError::StaleHandle`] instead of silent corruption.
//!
//! # Architecture
//!
//! ```text
//! BufferPool<T> (owner, one PoolId per instance)
//! ├── BufferSlot<T>[]  (generation + Vec<T>, never removed)
//! ├── free_list: Vec<u32> (slot indices ready for checkout)
//! └── PoolStats counters
//!
//! checkout() ──► BufferHandle { pool, slot, generation }
//! access(h)  ──► generation check ──► &mut Vec<T>
//! release(h) ──► clear storage, generation += 1, index → free_list
//! ```
//!
//! Generations start at 1. A slot whose generation would wrap is retired
//! rather than recycled, so a handle can never be resurrected.
//!
//! # Threading
//!
//! No operation synchronizes internally. All mutating operations take
//! `&mut self`; share a pool across threads behind a `Mutex`.
//!
//! ```rust
//! use tessel_pool::{BufferPool, PoolConfig, PoolError};
//!
//! let mut pool: BufferPool<u8> = BufferPool::new(PoolConfig::default()).unwrap();
//! let h = pool.checkout().unwrap();
//! pool.access(h).unwrap().extend_from_slice(b"hello");
//! pool.release(h).unwrap();
//! assert!(matches!(pool.access(h), Err(PoolError::StaleHandle { .. })));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod handle;
pub mod lease;
pub mod pool;
mod slot;

pub use config::PoolConfig;
pub use error::PoolError;
pub use handle::{BufferHandle, PoolId};
pub use lease::Lease;
pub use pool::{BufferPool, PoolStats};
