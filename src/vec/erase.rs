// This file is part of inline-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::{report, Error},
    vec::{gap::Gap, range_bounds, InlineVec},
};

// Core imports
use core::ops::RangeBounds;

impl<T, const N: usize> InlineVec<T, N> {
    /// Drops the elements in `range` and shifts the tail left to close the hole.
    ///
    /// Returns the index of the first element after the erased run, which is
    /// `start` once the tail has moved down.
    ///
    /// - Returns [`Error::IndexOutOfRange`] if the range ends past `len`.
    /// - An empty or reversed range (`start >= end`) erases nothing and
    ///   returns `end`.
    ///
    /// # Examples
    /// ```
    /// # use inline_vec::InlineVec;
    /// let mut v: InlineVec<i32, 8> = [1, 2, 3, 4, 5, 6].into_iter().collect();
    /// assert_eq!(v.erase(1..4), Ok(1));
    /// assert_eq!(v.as_slice(), &[1, 5, 6]);
    /// ```
    pub fn erase<R>(&mut self, range: R) -> Result<usize, Error>
    where
        R: RangeBounds<usize>,
    {
        let (start, end) = range_bounds(&range, self.len);
        if end > self.len {
            return Err(report(Error::IndexOutOfRange));
        }
        if start >= end {
            return Ok(end);
        }
        let mut gap = Gap::punch(self, start, end);
        gap.drop_contents();
        Ok(start)
    }

    /// Erases the single element at `index`.
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    #[inline]
    pub fn erase_at(&mut self, index: usize) -> Result<usize, Error> {
        if index >= self.len {
            return Err(report(Error::IndexOutOfRange));
        }
        self.erase(index..=index)
    }
}
