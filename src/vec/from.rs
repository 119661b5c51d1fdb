// This file is part of inline-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::{report, Error},
    vec::InlineVec,
};

impl<T, const N: usize> From<[T; N]> for InlineVec<T, N> {
    /// Moves every element of `src` in; the result is full.
    fn from(src: [T; N]) -> Self {
        let mut v = Self::new();
        v.extend(src);
        v
    }
}

impl<T: Clone, const N: usize> From<&[T; N]> for InlineVec<T, N> {
    fn from(src: &[T; N]) -> Self {
        src.iter().cloned().collect()
    }
}

impl<T, const N: usize> InlineVec<T, N> {
    /// Builds a vector from an array of any length `M`.
    ///
    /// Returns [`Error::CapacityExceeded`] if `M > N`; `src` is dropped in
    /// that case.
    ///
    /// # Examples
    /// ```
    /// # use inline_vec::InlineVec;
    /// let v = InlineVec::<u8, 4>::try_from_array([1, 2]).unwrap();
    /// assert_eq!(v.as_slice(), &[1, 2]);
    /// # #[cfg(not(feature = "abort-on-error"))]
    /// assert!(InlineVec::<u8, 1>::try_from_array([1, 2]).is_err());
    /// ```
    pub fn try_from_array<const M: usize>(src: [T; M]) -> Result<Self, Error> {
        if M > N {
            return Err(report(Error::CapacityExceeded));
        }
        let mut v = Self::new();
        v.extend(src);
        Ok(v)
    }
}
