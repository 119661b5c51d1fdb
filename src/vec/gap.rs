// This file is part of inline-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A run of uninitialized slots in the middle of the live region.
//!
//! Insertion opens a gap by sliding the tail right and then fills it; erasure
//! punches a gap by dropping a range and leaves it empty. Either way the
//! [`Gap`] guard closes whatever is left unfilled when it goes out of scope,
//! sliding the tail back and restoring `len`, including while unwinding.

// Crate imports
use crate::vec::InlineVec;

// Core imports
use core::ptr;

pub(crate) struct Gap<'a, T, const N: usize> {
    vec: &'a mut InlineVec<T, N>,
    // first slot of the gap
    start: usize,
    // slots at `start..` written so far
    filled: usize,
    width: usize,
    // live elements parked right after the gap
    tail: usize,
}

impl<'a, T, const N: usize> Gap<'a, T, N> {
    /// Slides `[index, len)` right by `width` slots, leaving `width`
    /// uninitialized slots at `index`.
    ///
    /// The caller must have checked `index <= len` and `len + width <= N`.
    pub(crate) fn open(vec: &'a mut InlineVec<T, N>, index: usize, width: usize) -> Self {
        let len = vec.len;
        debug_assert!(index <= len && len + width <= N);
        let tail = len - index;
        // While the gap exists only the prefix before it counts as live.
        vec.len = index;
        if width > 0 && tail > 0 {
            unsafe {
                // SAFETY: source `[index, len)` and destination
                // `[index + width, len + width)` both lie within the `N`
                // slots; `ptr::copy` handles the overlap.
                let base = vec.as_mut_ptr();
                ptr::copy(base.add(index), base.add(index + width), tail);
            }
        }
        Self {
            vec,
            start: index,
            filled: 0,
            width,
            tail,
        }
    }

    /// Treats `[start, end)` as a gap whose contents the caller will drop
    /// with [`drop_contents`](Gap::drop_contents).
    ///
    /// The caller must have checked `start <= end <= len`.
    pub(crate) fn punch(vec: &'a mut InlineVec<T, N>, start: usize, end: usize) -> Self {
        let len = vec.len;
        debug_assert!(start <= end && end <= len);
        vec.len = start;
        Self {
            vec,
            start,
            filled: 0,
            width: end - start,
            tail: len - end,
        }
    }

    /// Drops the elements still sitting in a punched gap.
    pub(crate) fn drop_contents(&mut self) {
        unsafe {
            // SAFETY: `punch` left `[start, start + width)` initialized and
            // outside the live prefix, so nothing else will drop them. If a
            // destructor panics the rest of the slice is still dropped and the
            // guard then closes the gap.
            let hole = ptr::slice_from_raw_parts_mut(
                self.vec.as_mut_ptr().add(self.start),
                self.width,
            );
            ptr::drop_in_place(hole);
        }
    }

    /// Returns `true` once every slot of the gap has been written.
    #[inline]
    pub(crate) fn is_filled(&self) -> bool {
        self.filled == self.width
    }

    /// Moves `value` into the next unfilled slot of the gap.
    #[inline]
    pub(crate) fn write(&mut self, value: T) {
        debug_assert!(!self.is_filled());
        let slot = self.start + self.filled;
        self.vec.buf[slot].write(value);
        self.filled += 1;
    }
}

impl<T, const N: usize> Drop for Gap<'_, T, N> {
    fn drop(&mut self) {
        let unfilled = self.width - self.filled;
        if unfilled > 0 && self.tail > 0 {
            unsafe {
                // SAFETY: the tail sits at `[start + width, start + width + tail)`;
                // sliding it left onto the first unfilled slot keeps it within
                // the `N` slots. `ptr::copy` handles the overlap.
                let base = self.vec.as_mut_ptr();
                ptr::copy(
                    base.add(self.start + self.width),
                    base.add(self.start + self.filled),
                    self.tail,
                );
            }
        }
        self.vec.len = self.start + self.filled + self.tail;
    }
}
