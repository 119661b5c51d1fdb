// This file is part of inline-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::{report, Error},
    vec::InlineVec,
};

impl<T, const N: usize> InlineVec<T, N> {
    /// Appends `value` if not full; returns [`Error::CapacityExceeded`]
    /// otherwise, dropping `value` and leaving the vector unchanged.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        self.push_with(|| value).map(|_| ())
    }

    /// Appends the value built by `f` and returns a reference to it.
    ///
    /// The capacity is checked first; `f` is not called when the vector is full.
    #[inline]
    pub fn push_with<F>(&mut self, f: F) -> Result<&mut T, Error>
    where
        F: FnOnce() -> T,
    {
        if self.len == N {
            return Err(report(Error::CapacityExceeded));
        }
        let slot = self.len;
        let value = self.buf[slot].write(f());
        self.len = slot + 1;
        Ok(value)
    }
}
