//! Low-level array allocation against the global allocator.
//!
//! Both strategies obtain their backing memory here. Zero-sized requests
//! (zero elements or a zero-sized `T`) never reach the global allocator and
//! are served by a dangling, well-aligned pointer.

use std::alloc::{alloc, dealloc, Layout};
use std::ptr::NonNull;

use crate::error::AllocError;

/// Allocate uninitialized storage for `count` values of `T`.
pub(crate) fn alloc_array<T>(count: usize) -> Result<NonNull<T>, AllocError> {
    let layout =
        Layout::array::<T>(count).map_err(|_| AllocError::LayoutOverflow { requested: count })?;
    if layout.size() == 0 {
        return Ok(NonNull::dangling());
    }

    // SAFETY: The layout has a non-zero size, checked above.
    let raw = unsafe { alloc(layout) };
    NonNull::new(raw.cast::<T>()).ok_or(AllocError::HeapExhausted {
        bytes: layout.size(),
    })
}

/// Return storage obtained from [`alloc_array`] to the global allocator.
///
/// # Safety
///
/// `ptr` must have been returned by `alloc_array::<T>(count)` with the same
/// `count` and must not have been passed to this function before.
pub(crate) unsafe fn dealloc_array<T>(ptr: NonNull<T>, count: usize) {
    let layout = Layout::array::<T>(count)
        .expect("layout was valid when the block was allocated, so it is valid now");
    if layout.size() == 0 {
        return;
    }

    // SAFETY: Forwarded from the caller: the block came from `alloc` with this layout.
    unsafe { dealloc(ptr.as_ptr().cast(), layout) }
}
