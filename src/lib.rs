// This file is part of inline-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `inline-vec`
//!
//! A `no_std`, fixed-capacity vector that stores its elements inline and
//! never touches a heap allocator.
//!
//! The core type, [`InlineVec<T, N>`], owns `N` slots of uninitialized storage
//! as part of the value itself and tracks a logical length `len ∈ 0..=N`.
//! Slots `[0, len)` always hold live `T` values; slots `[len, N)` never do.
//! Elements are constructed into and dropped out of the slots explicitly, so
//! any `T` works: no `Copy`, `Default` or `Clone` bound is needed for the
//! basic operations.
//!
//! ## When to use this crate
//!
//! - You are in a `no_std` or embedded environment, or on an allocation-free
//!   hot path.
//! - You know the maximum element count at compile time.
//! - You want `Vec`-like ergonomics (indexing, slices, insertion, removal,
//!   comparison) with a hard upper bound.
//!
//! Moving an `InlineVec<T, N>` moves the whole `N`-slot buffer, so large
//! capacities are best passed by reference.
//!
//! ## Capacity and bounds failures
//!
//! Operations that could exceed the capacity or that take a checked position
//! return [`Result<_, Error>`](Error):
//!
//! - [`Error::CapacityExceeded`] when the resulting length would exceed `N`
//!   (e.g. [`InlineVec::push`], [`InlineVec::insert`], [`InlineVec::resize`],
//!   [`InlineVec::reserve`], [`InlineVec::assign_fill`]).
//! - [`Error::IndexOutOfRange`] for positions outside the live region
//!   (e.g. [`InlineVec::at`], [`InlineVec::try_remove`], [`InlineVec::erase`]).
//!
//! A failed operation leaves the vector exactly as it was.
//!
//! Indexing (`v[i]`, `v[a..b]`) follows slice semantics and panics.
//!
//! ## Features
//!
//! - `abort-on-error`: for targets without unwinding-based error handling.
//!   Every capacity or bounds failure terminates the process instead of
//!   returning `Err`. The signatures stay the same; the `Err` arm is simply
//!   never produced.
//! - `std`: links the standard library; with `abort-on-error` the process is
//!   terminated through `std::process::abort`.
//! - `serde`: `Serialize` / `Deserialize` for `InlineVec<T, N>`.
//! - `log`: emits diagnostics through the `log` facade whenever a failure is
//!   reported.
//!
//! ## Example
//!
//! ```rust
//! use inline_vec::InlineVec;
//!
//! let mut v: InlineVec<String, 4> = InlineVec::new();
//! v.push("a".to_owned()).unwrap();
//! v.push("c".to_owned()).unwrap();
//! v.insert(1, "b".to_owned()).unwrap();
//! assert_eq!(v.as_slice(), &["a", "b", "c"]);
//!
//! # #[cfg(not(feature = "abort-on-error"))]
//! assert!(v.reserve(5).is_err());
//! assert_eq!(v.capacity(), 4);
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
extern crate alloc;

// Modules
mod error;
mod index;
mod iter;
mod macros;
mod ops;
#[cfg(feature = "serde")]
mod serde;
mod vec;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::IntoIter;
pub use ops::{erase, erase_if, swap};
pub use vec::{Drain, InlineVec};
