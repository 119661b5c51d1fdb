// This file is part of inline-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Whole-content replacement.
//!
//! Each `assign_*` builds the replacement first and only then drops the old
//! elements, so on error the vector keeps its previous contents.

// Crate imports
use crate::{error::Error, vec::InlineVec};

impl<T, const N: usize> InlineVec<T, N> {
    /// Replaces the contents with `count` clones of `value`.
    ///
    /// Returns [`Error::CapacityExceeded`] if `count > N`.
    pub fn assign_fill(&mut self, count: usize, value: T) -> Result<(), Error>
    where
        T: Clone,
    {
        *self = Self::from_elem(count, value)?;
        Ok(())
    }

    /// Replaces the contents with clones of `src`.
    ///
    /// Returns [`Error::CapacityExceeded`] if `src.len() > N`.
    pub fn assign_from_slice(&mut self, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        *self = Self::try_from(src)?;
        Ok(())
    }

    /// Replaces the contents with the items of `iter`.
    ///
    /// Returns [`Error::CapacityExceeded`] if `iter` yields more than `N`
    /// items; the items taken so far are dropped.
    pub fn assign_iter<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), Error> {
        *self = Self::try_from_iter(iter)?;
        Ok(())
    }
}
