//! Benchmark profiles and utilities for Tessel.
//!
//! - [`reference_pool`]: pool sized for steady-state checkout/release loops
//! - [`filled_pool`]: pool with every slot checked out and holding a payload
//! - [`PAYLOAD_SIZES`]: byte lengths the codec benches sweep

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tessel_pool::{BufferHandle, BufferPool, PoolConfig};

/// Payload lengths exercised by the codec benches. 500 sits exactly on the
/// default hex cap and 4096 is well past it.
pub const PAYLOAD_SIZES: [usize; 4] = [16, 256, 500, 4096];

/// Build a pool with room for `max_slots` buffers of up to 4 KiB each.
pub fn reference_pool(max_slots: u32) -> BufferPool<u8> {
    let config = PoolConfig {
        initial_capacity: 1024,
        max_slots,
        max_retained_capacity: 4096,
    };
    match BufferPool::new(config) {
        Ok(pool) => pool,
        Err(err) => panic!("reference pool config rejected: {err}"),
    }
}

/// Check out `count` buffers and fill each with `payload`.
///
/// Returns the pool and the live handles in checkout order.
pub fn filled_pool(count: u32, payload: &[u8]) -> (BufferPool<u8>, Vec<BufferHandle>) {
    let mut pool = reference_pool(count);
    let mut handles = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let handle = match pool.checkout() {
            Ok(h) => h,
            Err(err) => panic!("filled pool checkout failed: {err}"),
        };
        match pool.access(handle) {
            Ok(buf) => buf.extend_from_slice(payload),
            Err(err) => panic!("filled pool write rejected: {err}"),
        }
        handles.push(handle);
    }
    (pool, handles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_pool_has_every_slot_checked_out() {
        let (pool, handles) = filled_pool(8, b"payload");
        assert_eq!(handles.len(), 8);
        assert_eq!(pool.checked_out(), 8);
        assert_eq!(pool.free(), 0);
        for h in handles {
            assert_eq!(pool.get(h).unwrap(), b"payload");
        }
    }

    #[test]
    fn reference_pool_starts_empty() {
        let pool = reference_pool(4);
        assert!(pool.is_empty());
        assert_eq!(pool.config().max_slots, 4);
    }
}
