//! Pool configuration parameters.

use crate::error::PoolError;

/// Configuration for a [`BufferPool`](crate::BufferPool).
///
/// Controls per-slot sizing and the slot-count limit. Validated by
/// [`BufferPool::new`](crate::BufferPool::new); immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    /// Capacity, in elements, reserved for each slot when it is created.
    ///
    /// Default: 256.
    pub initial_capacity: usize,

    /// Maximum number of slots the pool may create.
    ///
    /// Checkout fails with [`PoolError::Exhausted`] once this many slots
    /// exist and none are free. Default: `u32::MAX`, the size of the slot
    /// index space, so only the allocator bounds a default pool. Must be at
    /// least 1.
    pub max_slots: u32,

    /// Largest capacity, in elements, a slot keeps across a release.
    ///
    /// A released buffer that grew beyond this is shrunk back to
    /// `initial_capacity`. Default: 65_536. Must be at least
    /// `initial_capacity`.
    pub max_retained_capacity: usize,
}

impl PoolConfig {
    /// Default per-slot initial capacity.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 256;

    /// Default slot-count limit: every index a handle can address.
    pub const DEFAULT_MAX_SLOTS: u32 = u32::MAX;

    /// Default retained-capacity ceiling.
    pub const DEFAULT_MAX_RETAINED_CAPACITY: usize = 64 * 1024;

    /// Create a config with default values for all parameters.
    pub fn new() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            max_slots: Self::DEFAULT_MAX_SLOTS,
            max_retained_capacity: Self::DEFAULT_MAX_RETAINED_CAPACITY,
        }
    }

    /// Check the invariants between fields.
    pub fn validate(&self) -> Result<(), PoolError> {
        if self.max_slots == 0 {
            return Err(PoolError::InvalidConfig {
                reason: "max_slots must be at least 1".into(),
            });
        }
        if self.max_retained_capacity < self.initial_capacity {
            return Err(PoolError::InvalidConfig {
                reason: format!(
                    "max_retained_capacity ({}) is below initial_capacity ({})",
                    self.max_retained_capacity, self.initial_capacity
                ),
            });
        }
        Ok(())
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new()
    }
}
