// This file is part of inline-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::InlineVec;

// Core imports
use core::mem;

impl<T, const N: usize> InlineVec<T, N> {
    /// Exchanges the contents of `self` and `other`.
    ///
    /// Both buffers stay where they are; the elements and lengths move, so
    /// this costs `O(N)` rather than a pointer swap.
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }
}
