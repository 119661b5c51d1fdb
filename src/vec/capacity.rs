// This file is part of inline-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::{report, Error},
    vec::InlineVec,
};

impl<T, const N: usize> InlineVec<T, N> {
    /// Checks that a total capacity of `new_cap` is available.
    ///
    /// Storage is fixed, so this never changes anything: it succeeds when
    /// `new_cap <= N` and returns [`Error::CapacityExceeded`] otherwise.
    #[inline]
    pub fn reserve(&mut self, new_cap: usize) -> Result<(), Error> {
        if new_cap > N {
            return Err(report(Error::CapacityExceeded));
        }
        Ok(())
    }

    /// Does nothing; the storage is inline and always `N` slots.
    #[inline]
    pub fn shrink_to_fit(&mut self) {}
}

#[cfg(test)]
mod tests {
    use crate::InlineVec;

    #[test]
    #[cfg(not(feature = "abort-on-error"))]
    fn test_reserve_up_to_capacity() {
        use crate::Error;

        let mut v: InlineVec<i32, 10> = InlineVec::new();
        assert_eq!(v.reserve(5), Ok(()));
        assert_eq!(v.reserve(10), Ok(()));
        assert_eq!(v.reserve(11), Err(Error::CapacityExceeded));
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 10);
    }

    #[test]
    fn test_shrink_to_fit_keeps_contents_and_capacity() {
        let mut v: InlineVec<i32, 10> = InlineVec::try_from(&[1, 2][..]).unwrap();
        v.shrink_to_fit();
        assert_eq!(v.as_slice(), &[1, 2]);
        assert_eq!(v.capacity(), 10);
        assert_eq!(InlineVec::<i32, 10>::CAPACITY, 10);
    }
}
