//! Scoped checkout that releases its buffer on drop.

use std::ops::{Deref, DerefMut};

use crate::handle::BufferHandle;
use crate::pool::BufferPool;

/// A checked-out buffer that is released when the guard is dropped.
///
/// The lease holds the pool's exclusive borrow, so no other code can
/// release its slot while it lives; dereferencing therefore skips the
/// generation check. After the drop, [`handle`](Self::handle) values
/// copied out of the lease are stale.
///
/// ```rust
/// use tessel_pool::BufferPool;
///
/// let mut pool: BufferPool<u8> = BufferPool::default();
/// let copied = {
///     let mut buf = pool.lease().unwrap();
///     buf.extend_from_slice(b"scoped");
///     buf.handle()
/// };
/// assert!(!pool.is_live(copied));
/// ```
pub struct Lease<'p, T> {
    pool: &'p mut BufferPool<T>,
    handle: BufferHandle,
    detached: bool,
}

impl<'p, T> Lease<'p, T> {
    pub(crate) fn new(pool: &'p mut BufferPool<T>, handle: BufferHandle) -> Self {
        Self {
            pool,
            handle,
            detached: false,
        }
    }

    /// The handle of the leased slot.
    pub fn handle(&self) -> BufferHandle {
        self.handle
    }

    /// End the lease without releasing, returning the still-live handle.
    ///
    /// The caller becomes responsible for calling
    /// [`BufferPool::release`].
    pub fn into_handle(mut self) -> BufferHandle {
        self.detached = true;
        self.handle
    }
}

impl<T> Deref for Lease<'_, T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Vec<T> {
        self.pool.leased(self.handle.slot)
    }
}

impl<T> DerefMut for Lease<'_, T> {
    fn deref_mut(&mut self) -> &mut Vec<T> {
        self.pool.leased_mut(self.handle.slot)
    }
}

impl<T> Drop for Lease<'_, T> {
    fn drop(&mut self) {
        if self.detached {
            return;
        }
        // Cannot fail: the handle was live at creation and nothing else can
        // reach the pool while the lease exists.
        let _ = self.pool.release(self.handle);
    }
}

#[cfg(test)]
mod tests {
    use crate::{BufferPool, PoolError};

    #[test]
    fn drop_releases_slot() {
        let mut pool: BufferPool<u8> = BufferPool::default();
        let handle = {
            let mut lease = pool.lease().unwrap();
            lease.push(42u8);
            assert_eq!(lease.as_slice(), &[42u8]);
            lease.handle()
        };
        assert_eq!(pool.free(), 1);
        assert!(matches!(pool.access(handle), Err(PoolError::StaleHandle { .. })));
    }

    #[test]
    fn into_handle_keeps_slot_checked_out() {
        let mut pool: BufferPool<u8> = BufferPool::default();
        let handle = {
            let mut lease = pool.lease().unwrap();
            lease.extend_from_slice(b"kept");
            lease.into_handle()
        };
        assert_eq!(pool.get(handle).unwrap(), b"kept");
        assert_eq!(pool.checked_out(), 1);
        pool.release(handle).unwrap();
        assert_eq!(pool.checked_out(), 0);
    }

    #[test]
    fn successive_leases_reuse_one_slot() {
        let mut pool: BufferPool<u32> = BufferPool::default();
        for i in 0..5 {
            let mut lease = pool.lease().unwrap();
            assert!(lease.is_empty());
            lease.push(i);
        }
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.stats().releases, 5);
    }
}
