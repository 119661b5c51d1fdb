// This file is part of inline-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::InlineVec;

impl<T, const N: usize> InlineVec<T, N> {
    /// Returns a raw pointer to the start of the backing storage.
    ///
    /// The pointer is non-null and aligned even when the vector is empty (or
    /// `N == 0`), so `[ptr, ptr + len)` is always a valid range; it is only
    /// dereferenceable for indices `< len`.
    ///
    /// The pointer is derived afresh from the buffer on every call; do not
    /// cache it across operations that construct or drop elements.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr().cast::<T>()
    }

    /// Returns a mutable raw pointer to the start of the backing storage.
    ///
    /// Only the first `len` elements are initialized. Writing to slots past
    /// `len` is allowed, but does **not** make them part of the vector; use
    /// [`set_len`](InlineVec::set_len) for that.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr().cast::<T>()
    }

    /// Forces the length of the vector to `new_len`.
    ///
    /// No element is constructed or dropped.
    ///
    /// # Safety
    ///
    /// - `new_len` must be less than or equal to `N`.
    /// - The elements at `old_len..new_len` must be initialized.
    /// - When shrinking, the elements at `new_len..old_len` are forgotten
    ///   (not dropped); the caller takes responsibility for them.
    #[inline]
    pub unsafe fn set_len(&mut self, new_len: usize) {
        debug_assert!(new_len <= N);
        self.len = new_len;
    }
}
