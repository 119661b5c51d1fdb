// This file is part of inline-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::{report, Error},
    vec::InlineVec,
};

// Core imports
use core::ptr;

impl<T, const N: usize> InlineVec<T, N> {
    /// Removes and returns the element at `index`, shifting subsequent elements left.
    ///
    /// Returns `None` if `index >= len`.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let len = self.len;
        if index >= len {
            return None;
        }
        unsafe {
            // SAFETY: `index < len`, so `buf[index]` is initialized. After the
            // read its slot is overwritten by the shifted tail (or falls out of
            // the live prefix when `index == len - 1`), so it is never dropped
            // twice. Source `[index + 1, len)` and destination `[index, len - 1)`
            // lie within the buffer; `ptr::copy` handles the overlap.
            let base = self.as_mut_ptr();
            let out = ptr::read(base.add(index));
            ptr::copy(base.add(index + 1), base.add(index), len - index - 1);
            self.len = len - 1;
            Some(out)
        }
    }

    /// Like [`remove`](InlineVec::remove), but returns
    /// [`Error::IndexOutOfRange`] instead of `None`.
    #[inline]
    pub fn try_remove(&mut self, index: usize) -> Result<T, Error> {
        self.remove(index).ok_or_else(|| report(Error::IndexOutOfRange))
    }
}

#[cfg(test)]
mod tests {
    use crate::vec::testing::{values, Tracker};
    use crate::InlineVec;

    #[test]
    fn test_remove_shifts_left() {
        let mut v: InlineVec<i32, 5> = InlineVec::try_from(&[1, 2, 3, 4][..]).unwrap();
        assert_eq!(v.remove(1), Some(2));
        assert_eq!(v.as_slice(), &[1, 3, 4]);
        assert_eq!(v.remove(2), Some(4));
        assert_eq!(v.as_slice(), &[1, 3]);
        assert_eq!(v.remove(2), None);
        assert_eq!(v.remove(0), Some(1));
        assert_eq!(v.as_slice(), &[3]);
    }

    #[test]
    #[cfg(not(feature = "abort-on-error"))]
    fn test_try_remove_out_of_range() {
        use crate::Error;

        let mut v: InlineVec<i32, 5> = InlineVec::try_from(&[1][..]).unwrap();
        assert_eq!(v.try_remove(1), Err(Error::IndexOutOfRange));
        assert_eq!(v.try_remove(0), Ok(1));
        assert_eq!(v.try_remove(0), Err(Error::IndexOutOfRange));
    }

    #[test]
    fn test_remove_drops_nothing_it_returns() {
        let tracker = Tracker::new();
        let mut v: InlineVec<_, 4> = InlineVec::new();
        for i in 0..4 {
            v.push(tracker.make(i)).unwrap();
        }
        let removed = v.remove(1).unwrap();
        assert_eq!(removed.value, 1);
        assert_eq!(values(&v), [0, 2, 3]);
        assert_eq!(tracker.drops(), 0);
        drop(removed);
        drop(v);
        assert_eq!(tracker.drops(), 4);
    }
}
