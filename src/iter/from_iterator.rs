// This file is part of inline-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::InlineVec;

impl<T, const N: usize> FromIterator<T> for InlineVec<T, N> {
    /// Collecting into `InlineVec<T, N>` takes at most the first `N` elements
    /// from the iterator and does not consume any further elements.
    ///
    /// Use [`InlineVec::try_from_iter`] to treat overflow as an error.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}

#[cfg(test)]
mod tests {
    use crate::InlineVec;

    #[test]
    fn test_collect_truncates_at_capacity() {
        let mut source = 0..10;
        let v: InlineVec<i32, 4> = source.by_ref().collect();
        assert_eq!(v.as_slice(), &[0, 1, 2, 3]);
        assert_eq!(source.next(), Some(4));
    }

    #[test]
    fn test_collect_short_iterator() {
        let v: InlineVec<String, 4> = ["a", "b"].iter().map(|s| s.to_string()).collect();
        assert_eq!(v.len(), 2);
        assert_eq!(v[1], "b");
    }
}
