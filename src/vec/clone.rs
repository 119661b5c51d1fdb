// This file is part of inline-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::InlineVec;

impl<T: Clone, const N: usize> Clone for InlineVec<T, N> {
    fn clone(&self) -> Self {
        let mut out = Self::new();
        out.extend(self.iter().cloned());
        out
    }

    /// Reuses the existing elements of `self` through `T::clone_from`,
    /// then truncates or appends to match `source`.
    fn clone_from(&mut self, source: &Self) {
        let common = self.len.min(source.len);
        self.truncate(common);
        for (dst, src) in self.iter_mut().zip(source.iter()) {
            dst.clone_from(src);
        }
        self.extend(source.as_slice()[common..].iter().cloned());
    }
}

#[cfg(test)]
mod tests {
    use crate::vec::testing::{values, Tracker};
    use crate::InlineVec;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn test_clone_is_equal_and_independent() {
        let a: InlineVec<String, 4> = ["p", "q"].iter().map(|s| s.to_string()).collect();
        let mut b = a.clone();
        assert_eq!(a, b);
        b[0].push('!');
        assert_eq!(a[0], "p");
        assert_eq!(b[0], "p!");
    }

    #[test]
    fn test_clone_from_grows_and_shrinks() {
        let long: InlineVec<i32, 5> = InlineVec::try_from(&[1, 2, 3, 4][..]).unwrap();
        let short: InlineVec<i32, 5> = InlineVec::try_from(&[7][..]).unwrap();

        let mut v = short.clone();
        v.clone_from(&long);
        assert_eq!(v, long);
        v.clone_from(&short);
        assert_eq!(v, short);
    }

    #[test]
    fn test_clone_panic_drops_partial_copy() {
        let tracker = Tracker::new();
        let mut v: InlineVec<_, 4> = InlineVec::new();
        for i in 0..3 {
            v.push(tracker.make(i)).unwrap();
        }
        tracker.panic_after_clones(2);
        let res = catch_unwind(AssertUnwindSafe(|| v.clone()));
        assert!(res.is_err());
        // The two finished clones were dropped while unwinding.
        assert_eq!(tracker.drops(), 2);
        assert_eq!(values(&v), [0, 1, 2]);
    }
}
