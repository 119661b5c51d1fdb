// This file is part of inline-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`InlineVec`](crate::InlineVec).
//!
//! - `IntoIter<T, N>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`. Elements it never yields are
//!   dropped with the iterator.
//! - `&InlineVec` and `&mut InlineVec` iterate as slices.

mod from_iterator;

// Crate imports
use crate::vec::InlineVec;

// Core imports
use core::{fmt, iter::FusedIterator, ptr, slice};

/// Owned iterator returned by `InlineVec::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration via [`DoubleEndedIterator`].
pub struct IntoIter<T, const N: usize> {
    // Holds the storage with `len == 0`; ownership of `[front, back)` lives
    // with the iterator.
    pub(crate) v: InlineVec<T, N>,
    pub(crate) front: usize,
    pub(crate) back: usize, // exclusive
}

impl<T, const N: usize> IntoIter<T, N> {
    /// Returns the elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[front, back)` is initialized and not yet moved out.
        unsafe { slice::from_raw_parts(self.v.as_ptr().add(self.front), self.back - self.front) }
    }

    /// Returns the elements not yet yielded, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`; `&mut self` guarantees uniqueness.
        unsafe {
            slice::from_raw_parts_mut(self.v.as_mut_ptr().add(self.front), self.back - self.front)
        }
    }

    /// Moves out the element at `i`.
    ///
    /// # Safety
    ///
    /// `i` must lie in `[front, back)` and the caller must remove it from that
    /// range before anything else observes it.
    #[inline]
    unsafe fn read_at(&mut self, i: usize) -> T {
        // SAFETY: guaranteed by the caller.
        unsafe { self.v.buf[i].assume_init_read() }
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: `i` was the front of the remaining range and has just
            // been excluded from it.
            Some(unsafe { self.read_at(i) })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        let skip = n.min(rem);
        let skipped = ptr::slice_from_raw_parts_mut(
            // SAFETY: `front <= N`, so the offset stays within the buffer.
            unsafe { self.v.as_mut_ptr().add(self.front) },
            skip,
        );
        self.front += skip;
        // SAFETY: the skipped elements were initialized and are now outside
        // `[front, back)`, so they are dropped exactly once.
        unsafe { ptr::drop_in_place(skipped) };
        self.next()
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: the old last element has just been excluded from the range.
            Some(unsafe { self.read_at(self.back) })
        } else {
            None
        }
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        let skip = n.min(rem);
        self.back -= skip;
        let skipped = ptr::slice_from_raw_parts_mut(
            // SAFETY: `back <= N`, so the offset stays within the buffer.
            unsafe { self.v.as_mut_ptr().add(self.back) },
            skip,
        );
        // SAFETY: as in `nth`.
        unsafe { ptr::drop_in_place(skipped) };
        self.next_back()
    }
}
impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}
impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        let rest = ptr::slice_from_raw_parts_mut(
            // SAFETY: `front <= N`.
            unsafe { self.v.as_mut_ptr().add(self.front) },
            self.back - self.front,
        );
        self.front = self.back;
        // SAFETY: `[front, back)` held the only live elements.
        unsafe { ptr::drop_in_place(rest) };
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for IntoIter<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a InlineVec<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T, const N: usize> IntoIterator for &'a mut InlineVec<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T, const N: usize> IntoIterator for InlineVec<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;
    fn into_iter(mut self) -> Self::IntoIter {
        let back = self.len;
        // The iterator takes over the elements; the vector's own drop must not.
        self.len = 0;
        IntoIter {
            front: 0,
            back,
            v: self,
        }
    }
}
