// This file is part of inline-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::InlineVec;

impl<T, const N: usize> InlineVec<T, N> {
    /// Removes and returns the last element, or `None` if empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            // SAFETY: Before decrementing, all elements in `buf[..old_len]` are
            // initialized by invariant, so `buf[self.len]` (the old last slot)
            // still contains a `T`. It is now outside the live prefix, so the
            // value is moved out exactly once.
            let out = unsafe { self.buf[self.len].assume_init_read() };
            Some(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::vec::testing::Tracker;
    use crate::InlineVec;

    #[test]
    fn test_pop_order_and_empty() {
        let mut v: InlineVec<i32, 3> = InlineVec::try_from(&[1, 2, 3][..]).unwrap();
        assert_eq!(v.pop(), Some(3));
        assert_eq!(v.pop(), Some(2));
        assert_eq!(v.pop(), Some(1));
        assert_eq!(v.pop(), None);
        assert!(v.is_empty());
    }

    #[test]
    fn test_pop_moves_value_out() {
        let tracker = Tracker::new();
        let mut v: InlineVec<_, 2> = InlineVec::new();
        v.push(tracker.make(1)).unwrap();
        v.push(tracker.make(2)).unwrap();
        let last = v.pop().unwrap();
        assert_eq!(last.value, 2);
        assert_eq!(tracker.drops(), 0);
        drop(last);
        drop(v);
        assert_eq!(tracker.drops(), 2);
    }
}
