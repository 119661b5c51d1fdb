// This file is part of inline-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`InlineVec`](crate::InlineVec).
//!
//! `Index` and `IndexMut` forward to the live slice, so they mirror slice
//! behavior:
//! - panics on out-of-bounds;
//! - supports `usize` and every standard range form, including inclusive ranges;
//! - views are restricted to the initialized prefix `[0..len)`.
//!
//! Use [`InlineVec::at`](crate::InlineVec::at) for a checked lookup that
//! reports an error instead of panicking.

// Crate imports
use crate::vec::InlineVec;

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, I: SliceIndex<[T]>, const N: usize> Index<I> for InlineVec<T, N> {
    type Output = I::Output;
    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>, const N: usize> IndexMut<I> for InlineVec<T, N> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}
