// This file is part of inline-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `InlineVec` type and its inherent API.
//!
//! `InlineVec<T, N>` is a fixed-capacity vector whose storage is an inline
//! array of `N` uninitialized slots. Methods mirror slice/`Vec` semantics, with
//! explicit capacity checks and fallible variants where the capacity could be
//! exceeded.
//!
//! No heap allocations are performed.

// Invariants:
// - `0 <= len <= N` always holds.
// - Slots in `buf[..len]` hold initialized `T` values.
// - Slots in `buf[len..N]` are logically uninitialized and must never be
//   read or dropped as `T`.
// - Every slot transition (uninit -> live, live -> uninit) happens through an
//   explicit write / read / drop_in_place, never through array-wide drop glue.
// - All public methods maintain these invariants, including on unwind.

mod access;
mod as_ptr;
mod assign;
mod capacity;
mod clone;
mod drain;
mod erase;
mod extend;
mod from;
mod gap;
mod insert;
mod new;
mod pop;
mod push;
mod remove;
mod resize;
mod retain;
mod slice;
mod swap;
mod try_from;
mod try_from_iter;

pub use drain::Drain;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    mem::MaybeUninit,
    ops::{Bound, Deref, DerefMut, RangeBounds},
    ptr,
};

/// A fixed-capacity vector with inline storage.
///
/// `InlineVec<T, N>` owns `N` slots of storage as part of the value and tracks
/// a logical length `len ∈ 0..=N`:
///
/// - capacity is known at compile time (`N`) and never changes;
/// - the storage never moves while the vector is borrowed, and nothing ever
///   reallocates, so pointers into it are only invalidated by operations that
///   shift or drop the elements they point at;
/// - elements are constructed into and dropped out of their slots one by one,
///   so any `T` is supported;
/// - no heap allocations are performed.
///
/// # Layout and invariants
///
/// Internally the vector holds:
///
/// - a buffer `[MaybeUninit<T>; N]`; and
/// - a logical length `len` with `0 <= len <= N`.
///
/// Only the prefix `buf[..len]` is initialized and visible through safe APIs.
/// [`as_slice`](InlineVec::as_slice), [`as_mut_slice`](InlineVec::as_mut_slice),
/// indexing and iteration are all restricted to this prefix. Dropping the
/// vector drops exactly the live prefix.
///
/// # Fallible operations
///
/// Anything that could grow the vector beyond `N` returns
/// [`Error::CapacityExceeded`](crate::Error::CapacityExceeded); checked
/// positions return [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange).
/// On error the vector is left unchanged. With the `abort-on-error` feature
/// the process is terminated instead.
///
/// [`Extend`] and [`FromIterator`] cannot report errors; they take at most the
/// spare capacity from the iterator and leave the rest unconsumed.
///
/// # Complexity
///
/// - `push`, `pop`, `push_with`: `O(1)`.
/// - `insert*`, `remove`, `erase`, `drain`: `O(len)` in the number of shifted
///   elements.
/// - `clear`, `truncate`: `O(k)` in the number of dropped elements.
/// - Moving the vector by value copies all `N` slots.
///
/// # Examples
///
/// ```rust
/// use inline_vec::{Error, InlineVec};
///
/// let mut v: InlineVec<i32, 3> = InlineVec::new();
/// v.push(1).unwrap();
/// v.push(3).unwrap();
/// assert_eq!(v.insert(1, 2), Ok(1));
/// assert_eq!(v.as_slice(), &[1, 2, 3]);
/// # #[cfg(not(feature = "abort-on-error"))]
/// assert_eq!(v.push(4), Err(Error::CapacityExceeded));
/// # #[cfg(not(feature = "abort-on-error"))]
/// assert_eq!(v.at(3), Err(Error::IndexOutOfRange));
/// ```
pub struct InlineVec<T, const N: usize> {
    pub(crate) buf: [MaybeUninit<T>; N],
    pub(crate) len: usize,
}

impl<T, const N: usize> InlineVec<T, N> {
    /// The fixed capacity of this vector. This is also the maximum length.
    pub const CAPACITY: usize = N;

    /// Returns the capacity of this vector (always `N`).
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the maximum number of elements the vector can hold.
    ///
    /// Same as [`capacity`](InlineVec::capacity): storage never grows.
    #[inline]
    pub const fn max_size(&self) -> usize {
        N
    }

    /// Returns the current logical length (`0..=N`).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `len == N`.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns `N - len`, the number of additional elements that fit.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        N - self.len
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the first element mutably, if any.
    #[inline]
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Returns the last element mutably, if any.
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Drops every live element, front to back, and sets `len = 0`.
    ///
    /// The capacity is unaffected.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Drops the elements in `[new_len, len)` if `new_len < len`; otherwise a
    /// no-op.
    pub fn truncate(&mut self, new_len: usize) {
        let len = self.len;
        if new_len >= len {
            return;
        }
        // Shrink first: if a destructor panics, the remaining elements of the
        // tail are still dropped by `drop_in_place` and none is dropped twice.
        self.len = new_len;
        unsafe {
            // SAFETY: `buf[new_len..len]` was inside the live prefix and is no
            // longer reachable now that `len == new_len`.
            let tail = ptr::slice_from_raw_parts_mut(self.as_mut_ptr().add(new_len), len - new_len);
            ptr::drop_in_place(tail);
        }
    }

    /// Returns `true` if the vector contains `x` (linear search on the live prefix).
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }
}

/// Resolves `range` against a vector of length `len` into `(start, end)`.
///
/// The result is not validated; callers decide how to treat `start > end` or
/// `end > len`.
pub(crate) fn range_bounds<R: RangeBounds<usize>>(range: &R, len: usize) -> (usize, usize) {
    let start = match range.start_bound() {
        Bound::Included(&i) => i,
        Bound::Excluded(&i) => i.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&i) => i.saturating_add(1),
        Bound::Excluded(&i) => i,
        Bound::Unbounded => len,
    };
    (start, end)
}

impl<T, const N: usize> Drop for InlineVec<T, N> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for InlineVec<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InlineVec")
            .field("len", &self.len)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for InlineVec<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: PartialEq, const N: usize> PartialEq<[T]> for InlineVec<T, N> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}
impl<T: PartialEq, const N: usize, const M: usize> PartialEq<[T; M]> for InlineVec<T, N> {
    fn eq(&self, other: &[T; M]) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq, const N: usize> Eq for InlineVec<T, N> {}
// Lexicographic over the live elements; a strict prefix orders first.
impl<T: Ord, const N: usize> Ord for InlineVec<T, N> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd, const N: usize> PartialOrd for InlineVec<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash, const N: usize> Hash for InlineVec<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T, const N: usize> Deref for InlineVec<T, N> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T, const N: usize> DerefMut for InlineVec<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> AsRef<[T]> for InlineVec<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> AsMut<[T]> for InlineVec<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T, const N: usize> Borrow<[T]> for InlineVec<T, N> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> BorrowMut<[T]> for InlineVec<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
