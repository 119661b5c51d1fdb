// This file is part of inline-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::InlineVec;

// Core imports
use core::ptr;

/// Compacts the survivors of a `retain` pass, even on unwind.
///
/// `[0, processed - deleted)` holds kept elements, `[processed, original_len)`
/// holds elements not yet visited, and the slots in between are holes.
struct Compact<'a, T, const N: usize> {
    vec: &'a mut InlineVec<T, N>,
    processed: usize,
    deleted: usize,
    original_len: usize,
}

impl<T, const N: usize> Drop for Compact<'_, T, N> {
    fn drop(&mut self) {
        if self.deleted > 0 {
            unsafe {
                // SAFETY: the unvisited run `[processed, original_len)` is
                // initialized and slides onto the first hole; both ranges are
                // within the buffer and `ptr::copy` handles overlap.
                let base = self.vec.as_mut_ptr();
                ptr::copy(
                    base.add(self.processed),
                    base.add(self.processed - self.deleted),
                    self.original_len - self.processed,
                );
            }
        }
        self.vec.len = self.original_len - self.deleted;
    }
}

impl<T, const N: usize> InlineVec<T, N> {
    /// Retains only the elements specified by the predicate `f`, preserving order.
    ///
    /// The predicate is applied to each element exactly once, front to back.
    #[inline]
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        self.retain_mut(|x| f(x));
    }

    /// Like [`retain`](InlineVec::retain), but the predicate may mutate the
    /// elements it keeps.
    ///
    /// If `f` or a destructor panics, every element not yet removed stays in
    /// the vector, in order.
    pub fn retain_mut<F: FnMut(&mut T) -> bool>(&mut self, mut f: F) {
        let original_len = self.len;
        // Nothing is live for the duration; the guard sets the final length.
        self.len = 0;
        let mut g = Compact {
            vec: self,
            processed: 0,
            deleted: 0,
            original_len,
        };

        while g.processed != original_len {
            // The element and the hole are both derived from `base`.
            let base = g.vec.as_mut_ptr();
            // SAFETY: `processed < original_len <= N`.
            let current = unsafe { base.add(g.processed) };
            // SAFETY: the slot is initialized and has not been moved or
            // dropped yet.
            if !f(unsafe { &mut *current }) {
                g.processed += 1;
                g.deleted += 1;
                // SAFETY: counted as processed first, so a panicking destructor
                // leaves it behind as a hole rather than a live element.
                unsafe { ptr::drop_in_place(current) };
                continue;
            }
            if g.deleted > 0 {
                unsafe {
                    // SAFETY: the hole at `processed - deleted` is uninitialized
                    // and distinct from `current`.
                    let hole = base.add(g.processed - g.deleted);
                    ptr::copy_nonoverlapping(current, hole, 1);
                }
            }
            g.processed += 1;
        }
    }
}
