//! Bounded bump arena that logs every allocator operation.
//!
//! An [`Arena`] owns one fixed-size pool of `capacity` elements, created on
//! the first `allocate` call. Allocation advances a high-water offset;
//! `release` is recorded but never reclaims anything. The pool is freed
//! only when the arena itself is dropped, which for a [`SharedArena`]
//! happens once the last container holding a handle is gone.
//!
//! Suited to short-lived bulk workloads. A container that keeps growing
//! inside an arena consumes `1 + 2 + 4 + ... + capacity` elements, not
//! `capacity`, because the blocks it outgrows are never returned.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::ptr::NonNull;
use std::rc::Rc;

use crate::config::ArenaConfig;
use crate::error::AllocError;
use crate::event::{AllocEvent, AllocOp, ArenaStats};
use crate::raw::{alloc_array, dealloc_array};
use crate::strategy::AllocStrategy;

/// Shared handle to an arena.
///
/// Every container built from a clone of this handle draws from the same
/// pool. `Rc` keeps the handle on one thread.
pub type SharedArena<T> = Rc<Arena<T>>;

/// A fixed-capacity, non-reclaiming pool of `T` slots.
pub struct Arena<T> {
    config: ArenaConfig,
    /// Base of the pool. `None` until the first allocation.
    pool: Cell<Option<NonNull<T>>>,
    /// High-water offset in elements. Never decreases.
    offset: Cell<usize>,
    stats: Cell<ArenaStats>,
    /// Populated only when `config.record_events` is set.
    journal: RefCell<Vec<AllocEvent>>,
}

impl<T> Arena<T> {
    /// Create an arena. No memory is reserved until the first allocation.
    pub fn new(config: ArenaConfig) -> Self {
        Self {
            config,
            pool: Cell::new(None),
            offset: Cell::new(0),
            stats: Cell::new(ArenaStats::default()),
            journal: RefCell::new(Vec::new()),
        }
    }

    /// Create an arena for `capacity` elements with default settings.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(ArenaConfig::new(capacity))
    }

    /// Wrap this arena in an `Rc` for sharing between containers.
    pub fn into_shared(self) -> SharedArena<T> {
        Rc::new(self)
    }

    /// The configuration this arena was built with.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Pool size in elements.
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Elements handed out so far (the high-water offset).
    pub fn used(&self) -> usize {
        self.offset.get()
    }

    /// Elements still available.
    pub fn remaining(&self) -> usize {
        self.config.capacity - self.offset.get()
    }

    /// Whether the pool has been reserved yet.
    pub fn is_materialized(&self) -> bool {
        self.pool.get().is_some()
    }

    /// Cumulative operation counters.
    pub fn stats(&self) -> ArenaStats {
        self.stats.get()
    }

    /// Journaled events, oldest first.
    ///
    /// Empty unless the arena was configured with
    /// [`ArenaConfig::with_event_journal`].
    pub fn events(&self) -> Vec<AllocEvent> {
        self.journal.borrow().clone()
    }

    /// Drain the journal, returning its events oldest first.
    ///
    /// The journal grows with every construct and destroy even after the
    /// pool stops advancing; long-running callers drain it periodically.
    pub fn take_events(&self) -> Vec<AllocEvent> {
        self.journal.take()
    }

    /// Memory reserved for the pool in bytes. Zero before materialization.
    pub fn memory_bytes(&self) -> usize {
        if self.is_materialized() {
            self.config.pool_bytes::<T>().unwrap_or(usize::MAX)
        } else {
            0
        }
    }

    /// Whether `ptr` points into this arena's pool.
    pub fn owns(&self, ptr: NonNull<T>) -> bool {
        let Some(base) = self.pool.get() else {
            return false;
        };
        let start = base.as_ptr().addr();
        let addr = ptr.as_ptr().addr();
        match self.config.pool_bytes::<T>() {
            Some(0) => addr == start,
            Some(bytes) => addr >= start && addr < start + bytes,
            None => false,
        }
    }

    /// Reserve the pool on first use.
    fn pool(&self) -> Result<NonNull<T>, AllocError> {
        if let Some(base) = self.pool.get() {
            return Ok(base);
        }

        let base = alloc_array::<T>(self.config.capacity)?;
        self.pool.set(Some(base));
        tracing::debug!(
            elem = std::any::type_name::<T>(),
            capacity = self.config.capacity,
            addr = base.as_ptr().addr(),
            "arena pool materialized"
        );
        Ok(base)
    }

    fn record(&self, op: AllocOp, count: usize, ptr: NonNull<T>) {
        let event = AllocEvent {
            op,
            count,
            addr: ptr.as_ptr().addr(),
        };
        tracing::debug!(
            elem = std::any::type_name::<T>(),
            op = op.as_str(),
            count,
            addr = event.addr,
            "{event}"
        );

        let mut stats = self.stats.get();
        stats.record(&event);
        self.stats.set(stats);

        if self.config.record_events {
            self.journal.borrow_mut().push(event);
        }
    }
}

impl<T> AllocStrategy<T> for Arena<T> {
    fn allocate(&self, count: usize) -> Result<NonNull<T>, AllocError> {
        let base = self.pool()?;
        let offset = self.offset.get();
        let remaining = self.remaining();

        // Never falls back to the system heap.
        if count > remaining {
            let mut stats = self.stats.get();
            stats.failed_allocations += 1;
            self.stats.set(stats);
            tracing::warn!(
                elem = std::any::type_name::<T>(),
                requested = count,
                remaining,
                capacity = self.config.capacity,
                "arena pool exhausted"
            );
            return Err(AllocError::PoolExhausted {
                requested: count,
                remaining,
            });
        }

        // SAFETY: `offset + count <= capacity`, so the block starts inside the
        // pool or exactly one past its end (for a zero-length request).
        let block = unsafe { base.add(offset) };
        self.offset.set(offset + count);
        self.record(AllocOp::Allocate, count, block);
        Ok(block)
    }

    unsafe fn release(&self, ptr: NonNull<T>, count: usize) {
        debug_assert!(
            count == 0 || self.owns(ptr),
            "released block does not belong to this arena"
        );
        // Recorded only. The pool is reclaimed as a whole when the arena drops.
        self.record(AllocOp::Release, count, ptr);
    }

    unsafe fn construct(&self, slot: NonNull<T>, value: T) {
        self.record(AllocOp::Construct, 1, slot);
        // SAFETY: The caller guarantees `slot` is an allocated, vacant slot.
        unsafe { slot.write(value) }
    }

    unsafe fn destroy(&self, slot: NonNull<T>) {
        self.record(AllocOp::Destroy, 1, slot);
        // SAFETY: The caller guarantees `slot` holds a live value that is not used again.
        unsafe { slot.drop_in_place() }
    }
}

impl<T> Drop for Arena<T> {
    fn drop(&mut self) {
        if let Some(base) = self.pool.get() {
            tracing::debug!(
                elem = std::any::type_name::<T>(),
                used = self.offset.get(),
                capacity = self.config.capacity,
                "arena pool torn down"
            );
            // SAFETY: `base` came from `alloc_array(capacity)` in `pool()` and is freed
            // only here. Values still inside are not dropped; their owners must have
            // destroyed them, which holding an `Rc` handle until then guarantees.
            unsafe { dealloc_array(base, self.config.capacity) }
        }
    }
}

impl<T> fmt::Debug for Arena<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("capacity", &self.config.capacity)
            .field("used", &self.offset.get())
            .field("materialized", &self.is_materialized())
            .field("stats", &self.stats.get())
            .finish()
    }
}
