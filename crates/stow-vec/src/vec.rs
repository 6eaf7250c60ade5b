//! The growable container.
//!
//! [`StowVec`] owns one buffer obtained from its [`Strategy`] and tracks
//! three counts:
//!
//! ```text
//! [0, len)            live elements
//! [len, initialized)  logically removed, still constructed
//! [initialized, cap)  uninitialized
//! ```
//!
//! Every slot is filled through `Strategy::construct` and finalized through
//! `Strategy::destroy`, so an arena logs the lifetime of every element, not
//! just the buffers.

use std::fmt;
use std::mem;
use std::ptr::NonNull;
use std::slice;

use stow_alloc::{AllocError, AllocStrategy, Strategy};

use crate::cursor::{Cursor, CursorMut};
use crate::error::SeqError;
use crate::growth::next_capacity;

/// A growable sequence bound to an allocation strategy.
///
/// Amortized O(1) `push`, O(1) bounds-checked access. Growth doubles the
/// capacity and copies (clones) the live elements into the new buffer,
/// then finalizes and releases the old one. A failed growth leaves the
/// container untouched.
pub struct StowVec<T> {
    /// Buffer base. Dangling while `capacity == 0`.
    ptr: NonNull<T>,
    len: usize,
    capacity: usize,
    /// Slots below this index hold constructed values.
    initialized: usize,
    strategy: Strategy<T>,
}

impl<T> StowVec<T> {
    /// Create an empty container backed by the system heap.
    ///
    /// Does not allocate.
    pub fn new() -> Self {
        Self::new_in(Strategy::heap())
    }

    /// Create an empty container bound to `strategy`.
    ///
    /// Does not allocate. Pass a [`SharedArena`](stow_alloc::SharedArena)
    /// (or a reference to one) to draw from an arena.
    pub fn new_in(strategy: impl Into<Strategy<T>>) -> Self {
        Self {
            ptr: NonNull::dangling(),
            len: 0,
            capacity: 0,
            initialized: 0,
            strategy: strategy.into(),
        }
    }

    /// The strategy this container allocates from.
    pub fn strategy(&self) -> &Strategy<T> {
        &self.strategy
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no live elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of elements the current buffer can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Remove the last element logically.
    ///
    /// Only the length shrinks. The value stays constructed in its slot
    /// until a later `push` overwrites it or the container is dropped.
    /// Returns `false` (and does nothing) on an empty container.
    pub fn remove_last(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }
        self.len -= 1;
        true
    }

    /// Bounds-checked shared access.
    pub fn at(&self, index: usize) -> Result<&T, SeqError> {
        self.as_slice().get(index).ok_or(SeqError::OutOfRange {
            index,
            len: self.len,
        })
    }

    /// Bounds-checked mutable access.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, SeqError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(SeqError::OutOfRange { index, len })
    }

    /// The live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `ptr` is aligned and non-null (dangling only when `len == 0`),
        // and slots [0, len) hold constructed values owned by `self`.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// The live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: As in `as_slice`; `&mut self` guarantees exclusive access.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Iterate over the live elements.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterate mutably over the live elements.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Cursor at the first live element.
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), 0)
    }

    /// Cursor one past the last live element.
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), self.len)
    }

    /// Writable cursor at the first live element.
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self.as_mut_slice())
    }

    fn slot(&self, index: usize) -> NonNull<T> {
        debug_assert!(index < self.capacity);
        // SAFETY: `index < capacity`, so the slot lies inside the buffer.
        unsafe { self.ptr.add(index) }
    }
}

impl<T: Clone> StowVec<T> {
    /// Append `value`, growing the buffer first if it is full.
    ///
    /// On failure the container keeps its previous buffer, length and
    /// capacity, and `value` is dropped.
    pub fn push(&mut self, value: T) -> Result<(), SeqError> {
        if self.len == self.capacity {
            self.grow()?;
        }

        let slot = self.slot(self.len);
        if self.len < self.initialized {
            // The slot still holds a logically removed value. Shrink the
            // constructed range first so a panicking drop cannot lead to a
            // second finalization; the stale tail is restored afterwards.
            let stale_end = self.initialized;
            self.initialized = self.len;
            // SAFETY: `len < stale_end`, so the slot holds a constructed value.
            unsafe { self.strategy.destroy(slot) };
            // SAFETY: The slot was finalized just above.
            unsafe { self.strategy.construct(slot, value) };
            self.len += 1;
            self.initialized = stale_end;
        } else {
            // SAFETY: `len == initialized < capacity`, so the slot is allocated and vacant.
            unsafe { self.strategy.construct(slot, value) };
            self.len += 1;
            self.initialized = self.len;
        }
        Ok(())
    }

    /// Push every item from `items`, stopping at the first failure.
    ///
    /// Items pushed before the failure stay in the container.
    pub fn try_extend<I>(&mut self, items: I) -> Result<(), SeqError>
    where
        I: IntoIterator<Item = T>,
    {
        for item in items {
            self.push(item)?;
        }
        Ok(())
    }

    /// Deep copy bound to the same strategy handle.
    ///
    /// The copy gets a buffer of the same capacity (drawn from the same
    /// arena, if any) holding clones of the live elements. Logically
    /// removed values are not copied.
    pub fn try_clone(&self) -> Result<Self, SeqError> {
        self.try_clone_in(self.strategy.clone())
    }

    /// Deep copy bound to a different strategy.
    pub fn try_clone_in(&self, strategy: impl Into<Strategy<T>>) -> Result<Self, SeqError> {
        let mut copy = Self::new_in(strategy);
        if self.capacity == 0 {
            return Ok(copy);
        }

        copy.ptr = copy.strategy.allocate(self.capacity)?;
        copy.capacity = self.capacity;
        for value in self.iter() {
            let slot = copy.slot(copy.len);
            // SAFETY: `copy.len < self.len <= capacity` and the slot is vacant.
            unsafe { copy.strategy.construct(slot, value.clone()) };
            copy.len += 1;
            copy.initialized = copy.len;
        }
        Ok(copy)
    }

    /// Move to a buffer of twice the capacity (or one, from empty).
    ///
    /// Nothing is mutated until the new buffer is allocated and filled. The
    /// new buffer is installed before the old one is retired, so a panicking
    /// destructor leaks old values but never leaves live indices over
    /// finalized slots.
    fn grow(&mut self) -> Result<(), SeqError> {
        let new_capacity = next_capacity(self.capacity).ok_or(AllocError::LayoutOverflow {
            requested: usize::MAX,
        })?;
        let new_ptr = self.strategy.allocate(new_capacity)?;

        for (i, value) in self.iter().enumerate() {
            // SAFETY: `i < len <= capacity < new_capacity`; the new slot is vacant.
            unsafe { self.strategy.construct(new_ptr.add(i), value.clone()) };
        }

        // Growth only happens when full, so every constructed slot is live.
        debug_assert_eq!(self.initialized, self.len);
        let old_ptr = mem::replace(&mut self.ptr, new_ptr);
        let old_capacity = mem::replace(&mut self.capacity, new_capacity);
        let old_constructed = mem::replace(&mut self.initialized, self.len);

        tracing::trace!(
            from = old_capacity,
            to = new_capacity,
            len = self.len,
            "stow buffer grew"
        );
        // SAFETY: The old buffer is detached from `self`; its first
        // `old_constructed` slots hold values nothing else will touch.
        unsafe { self.retire(old_ptr, old_capacity, old_constructed) };
        Ok(())
    }
}

impl<T> StowVec<T> {
    /// Destroy the first `constructed` values of a buffer, then release it.
    ///
    /// If a destructor panics, the remaining values and the buffer leak.
    ///
    /// # Safety
    ///
    /// `ptr` must come from `allocate(capacity)` on this container's
    /// strategy, slots `[0, constructed)` must hold constructed values, and
    /// no live index of `self` may refer to the buffer.
    unsafe fn retire(&self, ptr: NonNull<T>, capacity: usize, constructed: usize) {
        for i in 0..constructed {
            // SAFETY: `i < constructed <= capacity`; each slot is destroyed once.
            unsafe { self.strategy.destroy(ptr.add(i)) };
        }
        if capacity > 0 {
            // SAFETY: The buffer is empty and detached, so it is released once.
            unsafe { self.strategy.release(ptr, capacity) };
        }
    }
}

impl<T> Drop for StowVec<T> {
    fn drop(&mut self) {
        let constructed = mem::replace(&mut self.initialized, 0);
        // SAFETY: `self` is being dropped, so no index refers to the buffer
        // any more; `[0, constructed)` held every constructed value.
        unsafe { self.retire(self.ptr, self.capacity, constructed) };
    }
}

impl<T> Default for StowVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for StowVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for StowVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for StowVec<T> {}

impl<'a, T> IntoIterator for &'a StowVec<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut StowVec<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
