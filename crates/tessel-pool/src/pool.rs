//! The generation-counted buffer pool.
//!
//! [`BufferPool`] hands out [`BufferHandle`]s instead of references. Slots
//! are reused via a free list. Generation counters increment on release,
//! which makes every outstanding copy of a released handle detectably
//! stale.

use tessel_core::ByteView;
use tracing::{debug, trace, warn};

use crate::config::PoolConfig;
use crate::error::PoolError;
use crate::handle::{BufferHandle, PoolId};
use crate::lease::Lease;
use crate::slot::{BufferSlot, RETIRED_GENERATION};

/// Counters describing pool usage since creation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Slots created so far (including retired ones).
    pub slots: usize,
    /// Slots currently checked out.
    pub checked_out: usize,
    /// Slots on the free list.
    pub free: usize,
    /// Slots permanently retired after generation exhaustion.
    pub retired: usize,
    /// Checkouts served from the free list.
    pub hits: u64,
    /// Checkouts that had to create a new slot.
    pub misses: u64,
    /// Successful releases.
    pub releases: u64,
    /// Releases that shrank an oversized buffer.
    pub shrinks: u64,
}

impl PoolStats {
    /// Fraction of checkouts served by reuse (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// A pool of reusable growable buffers addressed by generation-checked
/// handles.
///
/// Invariant: every slot index is either checked out, on the free list, or
/// retired, never two of these at once. The free list's capacity is kept
/// at least the slot count so `release` never allocates.
pub struct BufferPool<T = u8> {
    id: PoolId,
    config: PoolConfig,
    slots: Vec<BufferSlot<T>>,
    free_list: Vec<u32>,
    retired: usize,
    hits: u64,
    misses: u64,
    releases: u64,
    shrinks: u64,
}

impl<T> BufferPool<T> {
    /// Create an empty pool. Fails if `config` does not validate.
    pub fn new(config: PoolConfig) -> Result<Self, PoolError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: PoolConfig) -> Self {
        let id = PoolId::next();
        debug!(pool = %id, max_slots = config.max_slots, "buffer pool created");
        Self {
            id,
            config,
            slots: Vec::new(),
            free_list: Vec::new(),
            retired: 0,
            hits: 0,
            misses: 0,
            releases: 0,
            shrinks: 0,
        }
    }

    /// Check out an empty buffer.
    ///
    /// Reuses a free slot when one exists, otherwise grows the pool by one
    /// slot. Fails with [`PoolError::Exhausted`] at the slot limit, or
    /// [`PoolError::AllocationFailed`] if the allocator refuses to grow.
    pub fn checkout(&mut self) -> Result<BufferHandle, PoolError> {
        if let Some(slot_idx) = self.free_list.pop() {
            let generation = self.slots[slot_idx as usize].generation();
            self.hits += 1;
            trace!(pool = %self.id, slot = slot_idx, generation, "checkout reused slot");
            return Ok(BufferHandle::new(self.id, slot_idx, generation));
        }
        self.grow()
    }

    fn grow(&mut self) -> Result<BufferHandle, PoolError> {
        let slot_count = self.slots.len();
        if slot_count >= self.config.max_slots as usize {
            warn!(pool = %self.id, capacity = self.config.max_slots, "buffer pool exhausted");
            return Err(PoolError::Exhausted {
                capacity: self.config.max_slots,
            });
        }
        self.slots
            .try_reserve(1)
            .map_err(|_| PoolError::AllocationFailed { requested: 1 })?;
        self.free_list
            .try_reserve(slot_count + 1 - self.free_list.len())
            .map_err(|_| PoolError::AllocationFailed { requested: 1 })?;
        let slot = BufferSlot::with_capacity(self.config.initial_capacity)?;

        // slot_count < max_slots <= u32::MAX
        let slot_idx = slot_count as u32;
        let generation = slot.generation();
        self.slots.push(slot);
        self.misses += 1;
        debug!(pool = %self.id, slot = slot_idx, slots = self.slots.len(), "buffer pool grew");
        Ok(BufferHandle::new(self.id, slot_idx, generation))
    }

    /// Resolve a handle to its slot after the pool and generation checks.
    fn slot_mut(&mut self, handle: BufferHandle) -> Result<&mut BufferSlot<T>, PoolError> {
        let slot = self.check(handle)?;
        Ok(&mut self.slots[slot])
    }

    /// O(1) validity check. Returns the slot index on success.
    fn check(&self, handle: BufferHandle) -> Result<usize, PoolError> {
        if handle.pool != self.id {
            debug!(pool = %self.id, handle_pool = %handle.pool, "foreign buffer handle rejected");
            return Err(PoolError::ForeignHandle {
                handle_pool: handle.pool,
                pool: self.id,
            });
        }
        // Handles are only minted for existing slots and slots are never
        // removed, so a missing slot is reported like a retired one.
        let current_generation = self
            .slots
            .get(handle.slot as usize)
            .map_or(RETIRED_GENERATION, |slot| slot.generation());
        if current_generation != handle.generation {
            debug!(
                pool = %self.id,
                slot = handle.slot,
                handle_generation = handle.generation,
                current_generation,
                "stale buffer handle rejected"
            );
            return Err(PoolError::StaleHandle {
                slot: handle.slot,
                handle_generation: handle.generation,
                current_generation,
            });
        }
        Ok(handle.slot as usize)
    }

    /// Mutable access to the buffer behind `handle`.
    ///
    /// Fails with [`PoolError::StaleHandle`] if the slot has been released
    /// since checkout, or [`PoolError::ForeignHandle`] for another pool's
    /// handle. The check happens before any access.
    pub fn access(&mut self, handle: BufferHandle) -> Result<&mut Vec<T>, PoolError> {
        Ok(self.slot_mut(handle)?.storage_mut())
    }

    /// Shared access to the contents of the buffer behind `handle`.
    pub fn get(&self, handle: BufferHandle) -> Result<&[T], PoolError> {
        let slot = self.check(handle)?;
        Ok(self.slots[slot].storage().as_slice())
    }

    /// Whether `handle` currently refers to a checked-out buffer of this pool.
    ///
    /// Unlike [`access`](Self::access) this does not log a rejection.
    pub fn is_live(&self, handle: BufferHandle) -> bool {
        handle.pool == self.id
            && self
                .slots
                .get(handle.slot as usize)
                .is_some_and(|slot| slot.generation() == handle.generation)
    }

    /// Return the buffer behind `handle` to the pool.
    ///
    /// Clears the storage, increments the slot generation and puts the
    /// slot on the free list. Afterwards `handle` and all its copies are
    /// permanently stale. Releasing a stale handle (including a second
    /// release of the same handle) fails with [`PoolError::StaleHandle`]
    /// and changes nothing.
    ///
    /// If the generation reaches `u32::MAX` and would wrap, the slot is
    /// retired instead of recycled to rule out handle resurrection.
    pub fn release(&mut self, handle: BufferHandle) -> Result<(), PoolError> {
        let max_retained = self.config.max_retained_capacity;
        let initial = self.config.initial_capacity;
        let outcome = self.slot_mut(handle)?.recycle(max_retained, initial);

        self.releases += 1;
        if outcome.shrunk {
            self.shrinks += 1;
        }
        if outcome.retired {
            self.retired += 1;
            debug!(pool = %self.id, slot = handle.slot, "slot generation exhausted, slot retired");
        } else {
            self.free_list.push(handle.slot);
        }
        trace!(pool = %self.id, slot = handle.slot, generation = handle.generation, "buffer released");
        Ok(())
    }

    /// Check out a buffer wrapped in a scope guard that releases it on drop.
    pub fn lease(&mut self) -> Result<Lease<'_, T>, PoolError> {
        let handle = self.checkout()?;
        Ok(Lease::new(self, handle))
    }

    /// Unchecked slot storage for [`Lease`], which holds the only borrow of
    /// the pool and therefore a handle that cannot go stale.
    pub(crate) fn leased(&self, slot: u32) -> &Vec<T> {
        self.slots[slot as usize].storage()
    }

    pub(crate) fn leased_mut(&mut self, slot: u32) -> &mut Vec<T> {
        self.slots[slot as usize].storage_mut()
    }

    /// This pool's unique ID.
    pub fn id(&self) -> PoolId {
        self.id
    }

    /// The configuration the pool was created with.
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Number of slots created so far.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slot has been created yet.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots currently checked out.
    pub fn checked_out(&self) -> usize {
        self.slots.len() - self.free_list.len() - self.retired
    }

    /// Number of slots on the free list.
    pub fn free(&self) -> usize {
        self.free_list.len()
    }

    /// Snapshot of the usage counters.
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            slots: self.slots.len(),
            checked_out: self.checked_out(),
            free: self.free_list.len(),
            retired: self.retired,
            hits: self.hits,
            misses: self.misses,
            releases: self.releases,
            shrinks: self.shrinks,
        }
    }
}

impl BufferPool<u8> {
    /// A byte view over the buffer behind `handle`, for text rendering.
    pub fn view(&self, handle: BufferHandle) -> Result<ByteView<'_>, PoolError> {
        self.get(handle).map(ByteView::new)
    }
}

impl<T> Default for BufferPool<T> {
    fn default() -> Self {
        Self::with_valid_config(PoolConfig::default())
    }
}

impl<T> std::fmt::Debug for BufferPool<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BufferPool")
            .field("id", &self.id)
            .field("slots", &self.slots.len())
            .field("free", &self.free_list.len())
            .field("retired", &self.retired)
            .finish()
    }
}
