// This file is part of inline-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::{report, Error},
    vec::InlineVec,
};

impl<T, const N: usize> Extend<T> for InlineVec<T, N> {
    /// Appends items until the vector is full; further items are left in the
    /// iterator unconsumed.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let remaining = N - self.len;
        if remaining == 0 {
            return;
        }

        for item in iter.into_iter().take(remaining) {
            self.buf[self.len].write(item);
            self.len += 1;
        }
    }
}

impl<'a, T: Clone + 'a, const N: usize> Extend<&'a T> for InlineVec<T, N> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T, const N: usize> InlineVec<T, N> {
    /// Appends clones of `src` if they all fit; otherwise no-op and returns
    /// [`Error::CapacityExceeded`].
    ///
    /// If a `clone` panics, the clones made so far stay appended.
    #[inline]
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        if src.len() > N - self.len {
            return Err(report(Error::CapacityExceeded));
        }
        for item in src {
            self.buf[self.len].write(item.clone());
            self.len += 1;
        }
        Ok(())
    }

    /// Tries to extend `self` from an iterator **without truncation**.
    ///
    /// Semantics:
    /// - All-or-nothing:
    ///   - If the iterator yields at most `spare_capacity()` items, they are
    ///     appended in order and `Ok(())` is returned.
    ///   - If it yields more than `spare_capacity()`, this returns
    ///     `Err(Error::CapacityExceeded)` and `self` is left unchanged; the
    ///     items taken so far are dropped.
    /// - The source iterator may be partially consumed on error.
    pub fn try_extend_from_iter<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), Error> {
        let spare = N - self.len;

        // Staging buffer so that `self` is unchanged on error.
        let mut tmp: InlineVec<T, N> = InlineVec::new();
        for item in iter {
            if tmp.len() == spare {
                return Err(report(Error::CapacityExceeded));
            }
            tmp.push(item)?;
        }

        self.extend(tmp);
        Ok(())
    }
}
