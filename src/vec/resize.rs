// This file is part of inline-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::{report, Error},
    vec::InlineVec,
};

impl<T, const N: usize> InlineVec<T, N> {
    /// Resizes to `new_len`, filling new slots with clones of `value`.
    ///
    /// Shrinking drops the trailing elements (and `value`). Growing clones
    /// `value` for all but the last new slot, which receives `value` itself.
    ///
    /// Returns [`Error::CapacityExceeded`] if `new_len > N`, leaving the
    /// vector unchanged.
    pub fn resize(&mut self, new_len: usize, value: T) -> Result<(), Error>
    where
        T: Clone,
    {
        if new_len > N {
            return Err(report(Error::CapacityExceeded));
        }
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        for _ in self.len + 1..new_len {
            self.buf[self.len].write(value.clone());
            self.len += 1;
        }
        self.buf[self.len].write(value);
        self.len += 1;
        Ok(())
    }

    /// Resizes to `new_len`, filling new slots with values returned by `f`.
    ///
    /// Errors as [`resize`](InlineVec::resize); `f` is not called on error.
    pub fn resize_with<F>(&mut self, new_len: usize, mut f: F) -> Result<(), Error>
    where
        F: FnMut() -> T,
    {
        if new_len > N {
            return Err(report(Error::CapacityExceeded));
        }
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        while self.len < new_len {
            self.buf[self.len].write(f());
            self.len += 1;
        }
        Ok(())
    }

    /// Resizes to `new_len`, filling new slots with `T::default()`.
    #[inline]
    pub fn resize_default(&mut self, new_len: usize) -> Result<(), Error>
    where
        T: Default,
    {
        self.resize_with(new_len, T::default)
    }
}

#[cfg(test)]
mod tests {
    use crate::vec::testing::{values, Tracker};
    use crate::InlineVec;

    #[test]
    fn test_resize_grow_and_shrink() {
        let mut v: InlineVec<i32, 6> = InlineVec::try_from(&[1, 2][..]).unwrap();
        v.resize(5, 7).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 7, 7, 7]);
        v.resize(1, 0).unwrap();
        assert_eq!(v.as_slice(), &[1]);
        v.resize(1, 0).unwrap();
        assert_eq!(v.as_slice(), &[1]);
    }

    #[test]
    fn test_resize_default_and_with() {
        let mut v: InlineVec<String, 4> = InlineVec::new();
        v.resize_default(2).unwrap();
        assert_eq!(v.as_slice(), &["", ""]);

        let mut n = 0;
        v.resize_with(4, || {
            n += 1;
            n.to_string()
        })
        .unwrap();
        assert_eq!(v.as_slice(), &["", "", "1", "2"]);
    }

    #[test]
    #[cfg(not(feature = "abort-on-error"))]
    fn test_resize_over_capacity_is_noop() {
        use crate::Error;

        let mut v: InlineVec<i32, 3> = InlineVec::try_from(&[1][..]).unwrap();
        assert_eq!(v.resize(4, 0), Err(Error::CapacityExceeded));
        assert_eq!(v.resize_default(4), Err(Error::CapacityExceeded));
        let mut called = false;
        let res = v.resize_with(4, || {
            called = true;
            0
        });
        assert_eq!(res, Err(Error::CapacityExceeded));
        assert!(!called);
        assert_eq!(v.as_slice(), &[1]);
    }

    #[test]
    fn test_resize_drop_accounting() {
        let tracker = Tracker::new();
        let mut v: InlineVec<_, 5> = InlineVec::new();
        v.resize(4, tracker.make(3)).unwrap();
        assert_eq!(values(&v), [3, 3, 3, 3]);
        assert_eq!(tracker.drops(), 0);

        // Shrinking drops the tail and the unused fill value.
        v.resize(1, tracker.make(9)).unwrap();
        assert_eq!(tracker.drops(), 4);
        drop(v);
        assert_eq!(tracker.drops(), 5);
    }
}
