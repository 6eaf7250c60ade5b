//! The system-backed allocation strategy.

use std::ptr::NonNull;

use crate::error::AllocError;
use crate::raw::{alloc_array, dealloc_array};
use crate::strategy::AllocStrategy;

/// Allocates from the global system allocator.
///
/// Stateless; every handle is interchangeable. Released blocks go straight
/// back to the system.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DefaultHeap;

impl<T> AllocStrategy<T> for DefaultHeap {
    fn allocate(&self, count: usize) -> Result<NonNull<T>, AllocError> {
        alloc_array(count)
    }

    unsafe fn release(&self, ptr: NonNull<T>, count: usize) {
        // SAFETY: The caller guarantees `ptr` came from `allocate(count)`, which
        // is `alloc_array(count)`, and has not been released yet.
        unsafe { dealloc_array(ptr, count) }
    }

    unsafe fn construct(&self, slot: NonNull<T>, value: T) {
        // SAFETY: The caller guarantees `slot` is allocated, aligned and vacant.
        unsafe { slot.write(value) }
    }

    unsafe fn destroy(&self, slot: NonNull<T>) {
        // SAFETY: The caller guarantees `slot` holds a live value that is not used again.
        unsafe { slot.drop_in_place() }
    }
}
