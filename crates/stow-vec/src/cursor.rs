//! Random-access cursors over a container's live elements.
//!
//! A cursor borrows its container, so any operation that could move or
//! shrink the buffer (push, remove_last, drop) is rejected by the compiler
//! while the cursor is alive. Reading past the end yields `None`.

use std::mem;
use std::ptr;

/// Read-only cursor. Produced in pairs by
/// [`StowVec::begin`](crate::StowVec::begin) and
/// [`StowVec::end`](crate::StowVec::end).
#[derive(Debug)]
pub struct Cursor<'a, T> {
    items: &'a [T],
    pos: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(items: &'a [T], pos: usize) -> Self {
        Self { items, pos }
    }

    /// The element under the cursor, or `None` at or past the end.
    pub fn get(&self) -> Option<&'a T> {
        self.items.get(self.pos)
    }

    /// Offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Whether the cursor is at or past the end.
    pub fn is_end(&self) -> bool {
        self.pos >= self.items.len()
    }

    /// Move forward one element and return the moved cursor.
    pub fn advance(&mut self) -> &mut Self {
        self.pos = self.pos.saturating_add(1);
        self
    }

    /// Move forward one element and return the cursor as it was before.
    pub fn post_advance(&mut self) -> Self {
        let before = *self;
        self.advance();
        before
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

/// Equal when both cursors point at the same position of the same buffer.
///
/// Buffers are identified by base address. Empty containers and containers
/// of zero-sized types share a dangling base, so cursors taken from two
/// such containers compare equal at equal positions; only compare cursors
/// of one container.
impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.items.as_ptr(), other.items.as_ptr()) && self.pos == other.pos
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let item = self.get()?;
        self.advance();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.items.len().saturating_sub(self.pos);
        (left, Some(left))
    }
}

impl<T> ExactSizeIterator for Cursor<'_, T> {}

/// Cursor with write access, produced by
/// [`StowVec::begin_mut`](crate::StowVec::begin_mut).
///
/// Holds only the not-yet-visited tail, so it can hand out `&mut T` for
/// the element under it without aliasing earlier ones. There is no
/// `post_advance`: a copy of the previous position would alias the element
/// under it. [`Iterator::next`] yields the current element and moves on,
/// which covers the same use.
#[derive(Debug)]
pub struct CursorMut<'a, T> {
    rest: &'a mut [T],
    pos: usize,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(items: &'a mut [T]) -> Self {
        Self {
            rest: items,
            pos: 0,
        }
    }

    /// The element under the cursor, or `None` at or past the end.
    pub fn get(&self) -> Option<&T> {
        self.rest.first()
    }

    /// Mutable access to the element under the cursor.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.rest.first_mut()
    }

    /// Offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Whether the cursor is at or past the end.
    pub fn is_end(&self) -> bool {
        self.rest.is_empty()
    }

    /// Move forward one element.
    pub fn advance(&mut self) -> &mut Self {
        let rest = mem::take(&mut self.rest);
        self.rest = if rest.is_empty() {
            rest
        } else {
            &mut rest[1..]
        };
        self.pos = self.pos.saturating_add(1);
        self
    }
}

/// Equal when both cursors have the same position and the same unvisited
/// tail. The same zero-sized and empty buffer caveat as [`Cursor`] applies.
impl<T> PartialEq for CursorMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.rest.as_ptr(), other.rest.as_ptr()) && self.pos == other.pos
    }
}

impl<T> Eq for CursorMut<'_, T> {}

impl<'a, T> Iterator for CursorMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        let (first, tail) = mem::take(&mut self.rest).split_first_mut()?;
        self.rest = tail;
        self.pos += 1;
        Some(first)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.rest.len(), Some(self.rest.len()))
    }
}

impl<T> ExactSizeIterator for CursorMut<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_walks_to_end() {
        let data = [10, 20, 30];
        let mut begin = Cursor::new(&data, 0);
        let end = Cursor::new(&data, data.len());

        let mut seen = Vec::new();
        while begin != end {
            seen.push(*begin.get().unwrap());
            begin.advance();
        }
        assert_eq!(seen, vec![10, 20, 30]);
        assert!(begin.is_end());
        assert_eq!(begin.get(), None);
    }

    #[test]
    fn post_advance_returns_previous_position() {
        let data = [1, 2];
        let mut c = Cursor::new(&data, 0);
        let before = c.post_advance();
        assert_eq!(before.get(), Some(&1));
        assert_eq!(c.get(), Some(&2));
        assert_eq!(before.position(), 0);
        assert_eq!(c.position(), 1);
    }

    #[test]
    fn cursors_over_different_buffers_differ() {
        let a = [1, 2];
        let b = [1, 2];
        assert_ne!(Cursor::new(&a, 0), Cursor::new(&b, 0));
        assert_eq!(Cursor::new(&a, 1), Cursor::new(&a, 1));
    }

    #[test]
    fn advancing_past_end_is_harmless() {
        let data = [1];
        let mut c = Cursor::new(&data, 0);
        c.advance().advance().advance();
        assert_eq!(c.get(), None);
        assert_eq!(c.position(), 3);
        assert_eq!(c.size_hint(), (0, Some(0)));
    }

    #[test]
    fn cursor_iterates_remaining_elements() {
        let data = [1, 2, 3, 4];
        let c = Cursor::new(&data, 1);
        assert_eq!(c.len(), 3);
        assert_eq!(c.copied().collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn cursor_mut_writes_in_place() {
        let mut data = [1, 2, 3];
        {
            let mut c = CursorMut::new(&mut data);
            while let Some(v) = c.get_mut() {
                *v *= 10;
                c.advance();
            }
            assert!(c.is_end());
            assert_eq!(c.position(), 3);
        }
        assert_eq!(data, [10, 20, 30]);
    }

    #[test]
    fn cursor_mut_equality_tracks_tail_and_position() {
        let mut a = [1, 2, 3];
        let mut b = [1, 2, 3];
        let mut c = CursorMut::new(&mut a);
        let d = CursorMut::new(&mut b);
        assert_ne!(c, d);
        assert_eq!(c, c);

        assert_eq!(c.next(), Some(&mut 1));
        assert_eq!(c.position(), 1);
        assert_eq!(c.get(), Some(&2));
    }

    #[test]
    fn cursor_mut_iterates_mutably() {
        let mut data = [1, 2, 3];
        for v in CursorMut::new(&mut data) {
            *v += 1;
        }
        assert_eq!(data, [2, 3, 4]);
    }
}
