// This file is part of inline-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::{report, Error},
    vec::InlineVec,
};

impl<T, const N: usize> InlineVec<T, N> {
    /// Checked access: returns [`Error::IndexOutOfRange`] if `i >= len`.
    #[inline]
    pub fn at(&self, i: usize) -> Result<&T, Error> {
        self.as_slice().get(i).ok_or_else(|| report(Error::IndexOutOfRange))
    }

    /// Checked mutable access: returns [`Error::IndexOutOfRange`] if `i >= len`.
    #[inline]
    pub fn at_mut(&mut self, i: usize) -> Result<&mut T, Error> {
        self.as_mut_slice()
            .get_mut(i)
            .ok_or_else(|| report(Error::IndexOutOfRange))
    }
}
