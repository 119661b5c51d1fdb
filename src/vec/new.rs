// This file is part of inline-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::InlineVec};

// Core imports
use core::mem::{self, MaybeUninit};

impl<T, const N: usize> InlineVec<T, N> {
    /// Constructs an empty vector. No element is constructed.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: [const { MaybeUninit::uninit() }; N],
            len: 0,
        }
    }

    /// Constructs a vector holding `count` clones of `value`.
    ///
    /// Returns [`Error::CapacityExceeded`] if `count > N`.
    pub fn from_elem(count: usize, value: T) -> Result<Self, Error>
    where
        T: Clone,
    {
        let mut v = Self::new();
        v.resize(count, value)?;
        Ok(v)
    }

    /// Constructs a vector holding `count` default values.
    ///
    /// Returns [`Error::CapacityExceeded`] if `count > N`.
    pub fn from_default(count: usize) -> Result<Self, Error>
    where
        T: Default,
    {
        let mut v = Self::new();
        v.resize_with(count, T::default)?;
        Ok(v)
    }

    /// Moves every element out into a new vector, leaving `self` empty.
    ///
    /// Ownership of each element passes to the returned vector exactly once;
    /// `self` stays usable.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::new())
    }
}

impl<T, const N: usize> Default for InlineVec<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
