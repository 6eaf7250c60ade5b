//! The allocator capability contract and the tagged strategy handle.
//!
//! [`AllocStrategy`] is the seam between a container and its memory
//! source. Containers do not name a concrete strategy in their type;
//! they hold a [`Strategy`] handle chosen by the caller at construction.

use std::fmt;
use std::ptr::NonNull;
use std::rc::Rc;

use crate::arena::{Arena, SharedArena};
use crate::error::AllocError;
use crate::heap::DefaultHeap;

/// Allocate / release / construct / destroy for values of type `T`.
///
/// `allocate` and `release` manage uninitialized storage measured in
/// elements. `construct` and `destroy` manage the lifetime of individual
/// values inside that storage. Implementations may log or count each call
/// but must not otherwise observe or move the values.
pub trait AllocStrategy<T> {
    /// Obtain uninitialized storage for `count` values.
    ///
    /// The returned pointer is aligned for `T` and valid for `count`
    /// elements until passed to [`release`](Self::release).
    fn allocate(&self, count: usize) -> Result<NonNull<T>, AllocError>;

    /// Hand back storage obtained from [`allocate`](Self::allocate).
    ///
    /// # Safety
    ///
    /// `ptr` must come from `allocate(count)` on this strategy (or a clone
    /// of its handle) with the same `count`, must not have been released
    /// already, and must hold no live values.
    unsafe fn release(&self, ptr: NonNull<T>, count: usize);

    /// Move `value` into the uninitialized slot at `slot`.
    ///
    /// # Safety
    ///
    /// `slot` must point into storage from [`allocate`](Self::allocate)
    /// and must not hold a live value.
    unsafe fn construct(&self, slot: NonNull<T>, value: T);

    /// Finalize the value at `slot`, leaving its storage uninitialized.
    ///
    /// # Safety
    ///
    /// `slot` must hold a live value previously placed by
    /// [`construct`](Self::construct). The value must not be used again.
    unsafe fn destroy(&self, slot: NonNull<T>);
}

/// A strategy handle held by containers.
///
/// Cloning a `Strategy` clones the handle, not the memory source: two
/// containers holding clones of the same `Arena` variant draw from one pool.
pub enum Strategy<T> {
    /// The system allocator.
    Heap(DefaultHeap),
    /// A shared bump arena.
    Arena(SharedArena<T>),
}

impl<T> Strategy<T> {
    /// A handle to the system allocator.
    pub fn heap() -> Self {
        Self::Heap(DefaultHeap)
    }

    /// The arena behind this handle, if any.
    pub fn as_arena(&self) -> Option<&Arena<T>> {
        match self {
            Self::Heap(_) => None,
            Self::Arena(arena) => Some(arena),
        }
    }

    /// Whether both handles draw from the same memory source.
    pub fn same_source(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Heap(_), Self::Heap(_)) => true,
            (Self::Arena(a), Self::Arena(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<T> AllocStrategy<T> for Strategy<T> {
    fn allocate(&self, count: usize) -> Result<NonNull<T>, AllocError> {
        match self {
            Self::Heap(heap) => heap.allocate(count),
            Self::Arena(arena) => arena.allocate(count),
        }
    }

    unsafe fn release(&self, ptr: NonNull<T>, count: usize) {
        match self {
            // SAFETY: Forwarded from the caller.
            Self::Heap(heap) => unsafe { AllocStrategy::<T>::release(heap, ptr, count) },
            // SAFETY: Forwarded from the caller.
            Self::Arena(arena) => unsafe { arena.release(ptr, count) },
        }
    }

    unsafe fn construct(&self, slot: NonNull<T>, value: T) {
        match self {
            // SAFETY: Forwarded from the caller.
            Self::Heap(heap) => unsafe { heap.construct(slot, value) },
            // SAFETY: Forwarded from the caller.
            Self::Arena(arena) => unsafe { arena.construct(slot, value) },
        }
    }

    unsafe fn destroy(&self, slot: NonNull<T>) {
        match self {
            // SAFETY: Forwarded from the caller.
            Self::Heap(heap) => unsafe { AllocStrategy::<T>::destroy(heap, slot) },
            // SAFETY: Forwarded from the caller.
            Self::Arena(arena) => unsafe { arena.destroy(slot) },
        }
    }
}

impl<T> Clone for Strategy<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Heap(heap) => Self::Heap(*heap),
            Self::Arena(arena) => Self::Arena(Rc::clone(arena)),
        }
    }
}

impl<T> Default for Strategy<T> {
    fn default() -> Self {
        Self::heap()
    }
}

impl<T> From<DefaultHeap> for Strategy<T> {
    fn from(heap: DefaultHeap) -> Self {
        Self::Heap(heap)
    }
}

impl<T> From<SharedArena<T>> for Strategy<T> {
    fn from(arena: SharedArena<T>) -> Self {
        Self::Arena(arena)
    }
}

impl<T> From<&SharedArena<T>> for Strategy<T> {
    fn from(arena: &SharedArena<T>) -> Self {
        Self::Arena(Rc::clone(arena))
    }
}

impl<T> fmt::Debug for Strategy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heap(_) => f.write_str("Strategy::Heap"),
            Self::Arena(arena) => f
                .debug_struct("Strategy::Arena")
                .field("used", &arena.used())
                .field("capacity", &arena.capacity())
                .finish(),
        }
    }
}
