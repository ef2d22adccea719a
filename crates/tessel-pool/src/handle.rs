//! Buffer handles and pool identifiers.
//!
//! A [`BufferHandle`] names a slot and the generation it had at checkout.
//! The generation allows O(1) staleness checks without a lookup table.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`PoolId`] allocation.
static POOL_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a [`BufferPool`](crate::BufferPool).
///
/// Two pools never share an ID within a process, so a handle presented to
/// the wrong pool is reported instead of resolving to an unrelated slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PoolId(u64);

impl PoolId {
    /// Allocate a fresh, unique pool ID. Thread-safe.
    pub(crate) fn next() -> Self {
        Self(POOL_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw numeric ID.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque, copyable reference to a checked-out pool slot.
///
/// Valid only while the slot's generation equals the handle's. Once the
/// slot is released every copy of the handle is permanently stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct BufferHandle {
    pub(crate) pool: PoolId,
    pub(crate) slot: u32,
    pub(crate) generation: u32,
}

impl BufferHandle {
    pub(crate) fn new(pool: PoolId, slot: u32, generation: u32) -> Self {
        Self {
            pool,
            slot,
            generation,
        }
    }

    /// The pool that issued this handle.
    pub fn pool(&self) -> PoolId {
        self.pool
    }

    /// Index of the slot within its pool.
    pub fn slot(&self) -> u32 {
        self.slot
    }

    /// The slot generation at checkout time. Never 0.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for BufferHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BufferHandle(pool={}, slot={}, gen={})",
            self.pool, self.slot, self.generation
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_ids_are_unique() {
        let a = PoolId::next();
        let b = PoolId::next();
        assert_ne!(a, b);
        assert!(b.get() > a.get());
    }

    #[test]
    fn handle_accessors() {
        let pool = PoolId::next();
        let h = BufferHandle::new(pool, 3, 7);
        assert_eq!(h.pool(), pool);
        assert_eq!(h.slot(), 3);
        assert_eq!(h.generation(), 7);
    }

    #[test]
    fn handle_display() {
        let h = BufferHandle::new(PoolId(9), 1, 2);
        assert_eq!(h.to_string(), "BufferHandle(pool=9, slot=1, gen=2)");
    }

    #[test]
    fn copies_compare_equal() {
        let h = BufferHandle::new(PoolId::next(), 0, 1);
        let copy = h;
        assert_eq!(h, copy);
    }
}
