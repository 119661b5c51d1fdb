// This file is part of inline-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    iter::IntoIter,
    vec::{range_bounds, InlineVec},
};

// Core imports
use core::{iter::FusedIterator, ops::RangeBounds, ptr};

/// Owned iterator returned by [`InlineVec::drain`].
///
/// - Holds a mutable borrow of the parent vector for the iterator's lifetime.
/// - Internally wraps an `IntoIter` over a temporary `InlineVec` the drained
///   elements were moved into; whatever is not consumed is dropped with it.
pub struct Drain<'a, T, const N: usize> {
    pub(crate) _parent: &'a mut InlineVec<T, N>,
    pub(crate) iter: IntoIter<T, N>,
}

impl<T, const N: usize> Iterator for Drain<'_, T, N> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<T> {
        self.iter.nth(n)
    }
}
impl<T, const N: usize> DoubleEndedIterator for Drain<'_, T, N> {
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back()
    }

    fn nth_back(&mut self, n: usize) -> Option<T> {
        self.iter.nth_back(n)
    }
}
impl<T, const N: usize> ExactSizeIterator for Drain<'_, T, N> {}
impl<T, const N: usize> FusedIterator for Drain<'_, T, N> {}

impl<T, const N: usize> InlineVec<T, N> {
    /// Removes the specified range from the vector and returns its elements
    /// as an iterator.
    ///
    /// Elements in `range` are moved out into a temporary `InlineVec` and
    /// yielded by value. The remainder of the vector is shifted left before
    /// this returns, so dropping the iterator early only drops the elements it
    /// did not yield.
    ///
    /// This matches the behavior of [`Vec::drain`].
    ///
    /// # Panics
    ///
    /// Panics if the specified range is invalid:
    /// - `start > end`
    /// - `end > self.len()`
    ///
    /// (A range with `start == end` yields an empty iterator and leaves
    /// the vector unchanged.) Use [`erase`](InlineVec::erase) for a checked
    /// removal that does not hand the elements back.
    ///
    /// # Examples
    /// ```
    /// # use inline_vec::InlineVec;
    /// let mut v: InlineVec<_, 4> = [1, 2, 3, 4].into();
    /// let drained: InlineVec<_, 4> = v.drain(1..3).collect();
    /// assert_eq!(drained.as_slice(), &[2, 3]);
    /// assert_eq!(v.as_slice(), &[1, 4]);
    /// ```
    pub fn drain<R>(&mut self, range: R) -> Drain<'_, T, N>
    where
        R: RangeBounds<usize>,
    {
        let len = self.len;
        let (start, end) = range_bounds(&range, len);

        if start > end {
            panic!("drain range start > end: {} > {}", start, end);
        }
        if end > len {
            panic!("drain range end {} exceeds length {}", end, len);
        }

        let count = end - start;
        let mut tmp: InlineVec<T, N> = InlineVec::new();
        if count > 0 {
            unsafe {
                // SAFETY: `[start, end)` is initialized and lands in the empty
                // `tmp`, which then owns it. The tail `[end, len)` slides onto
                // `start`; both ranges are in bounds and `ptr::copy` handles
                // overlap. No panic can happen between the moves and the
                // length updates.
                let base = self.as_mut_ptr();
                ptr::copy_nonoverlapping(base.add(start), tmp.as_mut_ptr(), count);
                tmp.set_len(count);
                ptr::copy(base.add(end), base.add(start), len - end);
            }
            self.len = len - count;
        }

        Drain {
            _parent: self,
            iter: tmp.into_iter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::vec::testing::{values, Tracker};
    use crate::InlineVec;

    #[test]
    fn test_drain_middle_of_non_copy_type() {
        let mut v: InlineVec<String, 5> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();

        let drained: Vec<_> = v.drain(1..3).collect();
        assert_eq!(drained, ["b", "c"]);

        assert_eq!(v.len(), 2);
        assert_eq!(v.as_slice(), &["a", "d"]);
    }

    #[test]
    fn test_drain_all_and_empty() {
        let mut v: InlineVec<i32, 4> = InlineVec::try_from(&[1, 2, 3][..]).unwrap();
        assert_eq!(v.drain(1..1).count(), 0);
        assert_eq!(v.as_slice(), &[1, 2, 3]);

        let back: Vec<_> = v.drain(..).rev().collect();
        assert_eq!(back, [3, 2, 1]);
        assert!(v.is_empty());
    }

    #[test]
    fn test_drain_dropped_early_drops_rest() {
        let tracker = Tracker::new();
        let mut v: InlineVec<_, 6> = InlineVec::new();
        for i in 0..6 {
            v.push(tracker.make(i)).unwrap();
        }
        {
            let mut d = v.drain(1..5);
            assert_eq!(d.len(), 4);
            assert_eq!(d.next().map(|t| t.value), Some(1));
        }
        assert_eq!(tracker.drops(), 4);
        assert_eq!(values(&v), [0, 5]);
    }

    #[test]
    #[should_panic]
    fn test_drain_past_end_panics() {
        let mut v: InlineVec<i32, 4> = InlineVec::try_from(&[1, 2][..]).unwrap();
        let _ = v.drain(1..3);
    }

    #[test]
    #[should_panic]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_drain_inverted_range_panics() {
        let mut v: InlineVec<i32, 4> = InlineVec::try_from(&[1, 2][..]).unwrap();
        let _ = v.drain(2..1);
    }
}
