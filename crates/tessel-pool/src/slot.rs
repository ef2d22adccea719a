//! Pool-private buffer slots.
//!
//! A [`BufferSlot`] pairs a reusable `Vec<T>` with a generation counter.
//! Slots are created on pool growth and never removed individually.

use crate::error::PoolError;

/// Generation of a freshly created slot. Handles never carry 0.
pub(crate) const FIRST_GENERATION: u32 = 1;

/// Generation of a slot that has been permanently retired.
pub(crate) const RETIRED_GENERATION: u32 = 0;

/// What happened to a slot on release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Recycled {
    /// The storage exceeded the retained ceiling and was shrunk.
    pub(crate) shrunk: bool,
    /// The generation counter wrapped; the slot must not be reused.
    pub(crate) retired: bool,
}

pub(crate) struct BufferSlot<T> {
    generation: u32,
    storage: Vec<T>,
}

impl<T> BufferSlot<T> {
    /// Create a slot with `capacity` elements reserved.
    pub(crate) fn with_capacity(capacity: usize) -> Result<Self, PoolError> {
        let mut storage = Vec::new();
        storage
            .try_reserve_exact(capacity)
            .map_err(|_| PoolError::AllocationFailed {
                requested: capacity,
            })?;
        Ok(Self {
            generation: FIRST_GENERATION,
            storage,
        })
    }

    pub(crate) fn generation(&self) -> u32 {
        self.generation
    }

    pub(crate) fn storage(&self) -> &Vec<T> {
        &self.storage
    }

    pub(crate) fn storage_mut(&mut self) -> &mut Vec<T> {
        &mut self.storage
    }

    /// Clear the storage and advance the generation.
    ///
    /// Capacity is kept unless it exceeds `max_retained`, in which case the
    /// buffer is shrunk to `initial`. When the generation wraps to
    /// [`RETIRED_GENERATION`] the storage is freed entirely.
    pub(crate) fn recycle(&mut self, max_retained: usize, initial: usize) -> Recycled {
        self.storage.clear();
        let shrunk = self.storage.capacity() > max_retained;
        if shrunk {
            self.storage.shrink_to(initial);
        }
        self.generation = self.generation.wrapping_add(1);
        let retired = self.generation == RETIRED_GENERATION;
        if retired {
            self.storage = Vec::new();
        }
        Recycled { shrunk, retired }
    }

    #[cfg(test)]
    pub(crate) fn set_generation(&mut self, generation: u32) {
        self.generation = generation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_slot_starts_at_first_generation() {
        let slot: BufferSlot<u8> = BufferSlot::with_capacity(16).unwrap();
        assert_eq!(slot.generation(), FIRST_GENERATION);
        assert!(slot.storage().is_empty());
        assert!(slot.storage().capacity() >= 16);
    }

    #[test]
    fn recycle_clears_and_bumps_generation() {
        let mut slot: BufferSlot<u8> = BufferSlot::with_capacity(16).unwrap();
        slot.storage_mut().extend_from_slice(b"abc");
        let outcome = slot.recycle(1024, 16);
        assert_eq!(
            outcome,
            Recycled {
                shrunk: false,
                retired: false
            }
        );
        assert!(slot.storage().is_empty());
        assert!(slot.storage().capacity() >= 16);
        assert_eq!(slot.generation(), FIRST_GENERATION + 1);
    }

    #[test]
    fn recycle_shrinks_oversized_storage() {
        let mut slot: BufferSlot<u8> = BufferSlot::with_capacity(8).unwrap();
        slot.storage_mut().resize(4096, 0);
        let outcome = slot.recycle(64, 8);
        assert!(outcome.shrunk);
        assert!(slot.storage().capacity() <= 64);
    }

    #[test]
    fn wrapping_generation_retires_slot() {
        let mut slot: BufferSlot<u32> = BufferSlot::with_capacity(4).unwrap();
        slot.set_generation(u32::MAX);
        slot.storage_mut().push(1);
        let outcome = slot.recycle(64, 4);
        assert!(outcome.retired);
        assert_eq!(slot.generation(), RETIRED_GENERATION);
        assert_eq!(slot.storage().capacity(), 0);
    }
}
