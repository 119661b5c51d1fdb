// This file is part of inline-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::{report, Error},
    vec::{gap::Gap, InlineVec},
};

impl<T, const N: usize> InlineVec<T, N> {
    /// Checks that `count` elements can be inserted before `index`.
    fn check_insert(&self, index: usize, count: usize) -> Result<(), Error> {
        if count > N - self.len {
            return Err(report(Error::CapacityExceeded));
        }
        if index > self.len {
            return Err(report(Error::IndexOutOfRange));
        }
        Ok(())
    }

    /// Inserts `value` before `index`, shifting `[index, len)` right by one.
    ///
    /// `index == len` appends. Returns the index of the inserted element.
    ///
    /// - Returns [`Error::CapacityExceeded`] if the vector is full.
    /// - Returns [`Error::IndexOutOfRange`] if `index > len`.
    ///
    /// On error `value` is dropped and the vector is unchanged.
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> Result<usize, Error> {
        self.insert_with(index, || value)
    }

    /// Constructs an element with `f` and inserts it before `index`.
    ///
    /// The checks run before `f` is called, so `f` is never invoked when the
    /// insertion would fail. Errors as [`insert`](InlineVec::insert).
    pub fn insert_with<F>(&mut self, index: usize, f: F) -> Result<usize, Error>
    where
        F: FnOnce() -> T,
    {
        self.check_insert(index, 1)?;
        let value = f();
        let mut gap = Gap::open(self, index, 1);
        gap.write(value);
        Ok(index)
    }

    /// Inserts `count` clones of `value` before `index`.
    ///
    /// Returns the index of the first inserted element (`index` itself when
    /// `count == 0`).
    ///
    /// - Returns [`Error::CapacityExceeded`] if `len + count > N`.
    /// - Returns [`Error::IndexOutOfRange`] if `index > len`.
    ///
    /// If a `clone` panics, the clones made so far stay inserted and the
    /// original tail follows them.
    pub fn insert_n(&mut self, index: usize, count: usize, value: T) -> Result<usize, Error>
    where
        T: Clone,
    {
        self.check_insert(index, count)?;
        if count == 0 {
            return Ok(index);
        }
        let mut gap = Gap::open(self, index, count);
        for _ in 1..count {
            gap.write(value.clone());
        }
        gap.write(value);
        Ok(index)
    }

    /// Inserts clones of the elements of `src` before `index`.
    ///
    /// Errors as [`insert_n`](InlineVec::insert_n), with `count = src.len()`.
    #[inline]
    pub fn insert_from_slice(&mut self, index: usize, src: &[T]) -> Result<usize, Error>
    where
        T: Clone,
    {
        self.insert_iter(index, src.iter().cloned())
    }

    /// Inserts the items of an exact-size iterator before `index`.
    ///
    /// The capacity is checked against `iter.len()` before anything moves.
    /// At most `iter.len()` items are taken; if the iterator ends early, only
    /// the items it produced are inserted.
    ///
    /// Errors as [`insert_n`](InlineVec::insert_n), with `count = iter.len()`.
    pub fn insert_iter<I>(&mut self, index: usize, iter: I) -> Result<usize, Error>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = iter.into_iter();
        let count = iter.len();
        self.check_insert(index, count)?;
        let mut gap = Gap::open(self, index, count);
        for item in iter.take(count) {
            gap.write(item);
        }
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use crate::vec::testing::{values, Tracker};
    use crate::InlineVec;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn test_insert_front_end_and_between() {
        let mut v: InlineVec<i32, 10> = InlineVec::new();
        assert!(v.is_empty());

        let pos1 = v.insert(0, 42).unwrap();
        assert_eq!(pos1, 0);
        assert_eq!(v.len(), 1);
        assert_eq!(v[pos1], 42);

        let pos2 = v.insert(v.len(), 44).unwrap();
        assert_eq!(pos2, 1);
        assert_eq!(v[pos2], 44);

        let pos3 = v.insert(pos2, 43).unwrap();
        assert_eq!(pos3, 1);
        assert_eq!(v.as_slice(), &[42, 43, 44]);
        assert_eq!(v.first(), Some(&42));
        assert_eq!(v.last(), Some(&44));

        let pos4 = v.insert(0, 41).unwrap();
        assert_eq!(pos4, 0);
        assert_eq!(v.as_slice(), &[41, 42, 43, 44]);
    }

    #[test]
    #[cfg(not(feature = "abort-on-error"))]
    fn test_insert_into_full_vector_errors_and_is_noop() {
        use crate::Error;

        let mut v: InlineVec<i32, 4> = InlineVec::new();
        while !v.is_full() {
            v.insert(v.len(), 0).unwrap();
        }
        assert_eq!(v.insert(v.len(), 1), Err(Error::CapacityExceeded));
        assert_eq!(v.insert(0, 1), Err(Error::CapacityExceeded));
        assert_eq!(v.as_slice(), &[0, 0, 0, 0]);
    }

    #[test]
    #[cfg(not(feature = "abort-on-error"))]
    fn test_insert_past_end_errors_and_is_noop() {
        use crate::Error;

        let mut v: InlineVec<i32, 4> = InlineVec::try_from(&[1, 2][..]).unwrap();
        assert_eq!(v.insert(3, 9), Err(Error::IndexOutOfRange));
        assert_eq!(v.insert_n(3, 1, 9), Err(Error::IndexOutOfRange));
        assert_eq!(v.insert_from_slice(5, &[9]), Err(Error::IndexOutOfRange));
        assert_eq!(v.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_insert_with_constructs_in_place() {
        let mut v: InlineVec<(i32, char), 4> = InlineVec::new();
        v.push((1, 'a')).unwrap();
        v.push((3, 'c')).unwrap();
        let at = v.insert_with(1, || (2, 'b')).unwrap();
        assert_eq!(at, 1);
        assert_eq!(v.as_slice(), &[(1, 'a'), (2, 'b'), (3, 'c')]);
    }

    #[test]
    #[cfg(not(feature = "abort-on-error"))]
    fn test_insert_with_does_not_call_constructor_when_full() {
        use crate::Error;

        let mut v: InlineVec<i32, 1> = InlineVec::from_elem(1, 0).unwrap();
        let mut called = false;
        let res = v.insert_with(0, || {
            called = true;
            5
        });
        assert_eq!(res, Err(Error::CapacityExceeded));
        assert!(!called);
    }

    #[test]
    fn test_insert_n_longer_than_tail() {
        let mut v: InlineVec<i32, 8> = InlineVec::try_from(&[1, 2, 3][..]).unwrap();
        assert_eq!(v.insert_n(2, 4, 0), Ok(2));
        assert_eq!(v.as_slice(), &[1, 2, 0, 0, 0, 0, 3]);
    }

    #[test]
    fn test_insert_n_shorter_than_tail() {
        let mut v: InlineVec<i32, 8> = InlineVec::try_from(&[1, 2, 3, 4, 5][..]).unwrap();
        assert_eq!(v.insert_n(1, 2, 9), Ok(1));
        assert_eq!(v.as_slice(), &[1, 9, 9, 2, 3, 4, 5]);
    }

    #[test]
    fn test_insert_n_at_end_and_zero_count() {
        let mut v: InlineVec<i32, 5> = InlineVec::try_from(&[1][..]).unwrap();
        assert_eq!(v.insert_n(1, 2, 7), Ok(1));
        assert_eq!(v.as_slice(), &[1, 7, 7]);
        assert_eq!(v.insert_n(0, 0, 8), Ok(0));
        assert_eq!(v.as_slice(), &[1, 7, 7]);
    }

    #[test]
    #[cfg(not(feature = "abort-on-error"))]
    fn test_insert_n_over_capacity_errors_and_is_noop() {
        use crate::Error;

        let mut v: InlineVec<i32, 4> = InlineVec::try_from(&[1, 2][..]).unwrap();
        assert_eq!(v.insert_n(1, 3, 0), Err(Error::CapacityExceeded));
        assert_eq!(v.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_insert_from_slice_overlapping_and_beyond_old_end() {
        let mut v: InlineVec<i32, 8> = InlineVec::try_from(&[1, 2][..]).unwrap();
        assert_eq!(v.insert_from_slice(1, &[7, 8, 9]), Ok(1));
        assert_eq!(v.as_slice(), &[1, 7, 8, 9, 2]);
        assert_eq!(v.insert_from_slice(0, &[]), Ok(0));
        assert_eq!(v.insert_from_slice(5, &[3]), Ok(5));
        assert_eq!(v.as_slice(), &[1, 7, 8, 9, 2, 3]);
    }

    #[test]
    fn test_insert_iter_short_iterator_closes_gap() {
        struct Liar(core::ops::Range<i32>);
        impl Iterator for Liar {
            type Item = i32;
            fn next(&mut self) -> Option<i32> {
                self.0.next()
            }
            fn size_hint(&self) -> (usize, Option<usize>) {
                (3, Some(3))
            }
        }
        impl ExactSizeIterator for Liar {}

        let mut v: InlineVec<i32, 8> = InlineVec::try_from(&[1, 2][..]).unwrap();
        // Claims three items, produces one.
        assert_eq!(v.insert_iter(1, Liar(5..6)), Ok(1));
        assert_eq!(v.as_slice(), &[1, 5, 2]);
    }

    #[test]
    fn test_insert_moves_non_copy_values_without_extra_drops() {
        let tracker = Tracker::new();
        let mut v: InlineVec<_, 6> = InlineVec::new();
        for i in 0..4 {
            v.push(tracker.make(i)).unwrap();
        }
        v.insert(2, tracker.make(10)).unwrap();
        v.insert_iter(0, [tracker.make(20)]).unwrap();
        assert_eq!(values(&v), [20, 0, 1, 10, 2, 3]);
        assert_eq!(tracker.drops(), 0);
        drop(v);
        assert_eq!(tracker.drops(), 6);
    }

    #[test]
    fn test_insert_n_panicking_clone_keeps_vector_consistent() {
        let tracker = Tracker::new();
        let mut v: InlineVec<_, 8> = InlineVec::new();
        for i in 0..4 {
            v.push(tracker.make(i)).unwrap();
        }
        let value = tracker.make(9);
        tracker.panic_after_clones(1);

        let res = catch_unwind(AssertUnwindSafe(|| {
            let _ = v.insert_n(1, 3, value);
        }));
        assert!(res.is_err());

        // One clone landed, the tail followed it, `value` itself was dropped.
        assert_eq!(values(&v), [0, 9, 1, 2, 3]);
        assert_eq!(tracker.drops(), 1);
        drop(v);
        assert_eq!(tracker.drops(), 6);
    }
}
