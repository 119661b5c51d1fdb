// This file is part of inline-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `inline_vec!` constructor macro.

/// Counts comma-separated expressions at expansion time, without evaluating
/// them. Used by [`inline_vec!`].
#[doc(hidden)]
#[macro_export]
macro_rules! __count {
    () => { 0usize };
    ($head:expr $(, $tail:expr)*) => {
        1usize + $crate::__count!($($tail),*)
    };
}

/// Creates an [`InlineVec`](crate::InlineVec).
///
/// ## Forms
///
/// - `inline_vec![]`: empty; capacity and element type are inferred.
/// - `inline_vec![8;]`: empty with capacity 8.
/// - `inline_vec![a, b, c]`: full vector whose capacity is the element count.
/// - `inline_vec![8; a, b, c]`: capacity 8 holding `a, b, c`.
///
/// In the last form the capacity is checked against the number of elements
/// at compile time, so the macro never fails at runtime.
///
/// ```
/// use inline_vec::{inline_vec, InlineVec};
///
/// let v = inline_vec![4; "a", "b", "c"];
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.capacity(), 4);
///
/// let w: InlineVec<u8, 2> = inline_vec![];
/// assert!(w.is_empty());
/// ```
///
/// ```compile_fail
/// use inline_vec::inline_vec;
/// let v = inline_vec![2; 1, 2, 3]; // capacity too small
/// ```
#[macro_export]
macro_rules! inline_vec {
    () => {
        $crate::InlineVec::new()
    };

    ($cap:expr;) => {
        $crate::InlineVec::<_, { $cap }>::new()
    };

    ($($elem:expr),+ $(,)?) => {
        $crate::InlineVec::from([$($elem),+])
    };

    ($cap:expr; $($elem:expr),+ $(,)?) => {{
        const _: () = assert!(
            $cap >= $crate::__count!($($elem),+),
            concat!(
                "inline_vec!: capacity ",
                stringify!($cap),
                " is smaller than the number of elements"
            )
        );
        let v: $crate::InlineVec<_, { $cap }> =
            ::core::iter::IntoIterator::into_iter([$($elem),+]).collect();
        v
    }};
}
