//! Pool-specific error types.

use thiserror::Error;

use crate::handle::PoolId;

/// Errors that can occur during pool operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PoolError {
    /// A `BufferHandle` whose slot has been recycled since checkout.
    ///
    /// Always a caller bug: the handle was used after `release`, or
    /// released twice.
    #[error(
        "stale handle: slot {slot} generation {handle_generation}, current generation {current_generation}"
    )]
    StaleHandle {
        /// Slot index encoded in the handle.
        slot: u32,
        /// The generation encoded in the handle.
        handle_generation: u32,
        /// The slot's current generation (0 once the slot is retired).
        current_generation: u32,
    },
    /// A `BufferHandle` issued by a different pool.
    #[error("handle from pool {handle_pool} used with pool {pool}")]
    ForeignHandle {
        /// Pool that issued the handle.
        handle_pool: PoolId,
        /// Pool the handle was presented to.
        pool: PoolId,
    },
    /// The pool holds `max_slots` slots and none are free.
    #[error("pool exhausted: all {capacity} slots checked out or retired")]
    Exhausted {
        /// The configured slot limit.
        capacity: u32,
    },
    /// The allocator refused to grow the slot table or a slot's storage.
    #[error("allocation failed: could not reserve {requested} elements")]
    AllocationFailed {
        /// Number of elements requested.
        requested: usize,
    },
    /// A [`PoolConfig`](crate::PoolConfig) field is out of range.
    #[error("invalid pool config: {reason}")]
    InvalidConfig {
        /// Which constraint was violated.
        reason: String,
    },
}

impl PoolError {
    /// Whether this error reports a stale or foreign handle.
    pub fn is_handle_error(&self) -> bool {
        matches!(self, Self::StaleHandle { .. } | Self::ForeignHandle { .. })
    }
}
