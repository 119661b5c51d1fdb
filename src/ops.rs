// This file is part of inline-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Free-function adapters over [`InlineVec`].

// Crate imports
use crate::vec::InlineVec;

/// Exchanges the contents of `a` and `b`. Never fails.
#[inline]
pub fn swap<T, const N: usize>(a: &mut InlineVec<T, N>, b: &mut InlineVec<T, N>) {
    a.swap_with(b);
}

/// Removes every element equal to `value`, preserving the order of the rest.
///
/// Returns the number of elements removed.
pub fn erase<T, U, const N: usize>(v: &mut InlineVec<T, N>, value: &U) -> usize
where
    T: PartialEq<U>,
    U: ?Sized,
{
    erase_if(v, |x| x == value)
}

/// Removes every element for which `pred` returns `true`, preserving the
/// order of the rest.
///
/// Returns the number of elements removed.
///
/// ```
/// use inline_vec::{erase_if, inline_vec};
///
/// let mut v = inline_vec![10; 1, 0, 1, 0, 1, 0, 2, 2, 1, 3];
/// assert_eq!(erase_if(&mut v, |&x| x == 0), 3);
/// assert_eq!(v, [1, 1, 1, 2, 2, 1, 3]);
/// ```
pub fn erase_if<T, F, const N: usize>(v: &mut InlineVec<T, N>, mut pred: F) -> usize
where
    F: FnMut(&T) -> bool,
{
    let before = v.len();
    v.retain(|x| !pred(x));
    before - v.len()
}
