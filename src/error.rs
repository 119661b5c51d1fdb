// This file is part of inline-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `InlineVec`, and the single point through which every
//! capacity and bounds failure is reported.
//!
//! The errors are `Copy` and implement `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`InlineVec`](crate::InlineVec).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// The operation would leave more than `N` live elements.
    CapacityExceeded,
    /// A checked position does not address a live element (or, for
    /// insertion, lies past the end).
    IndexOutOfRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded => f.write_str("capacity exceeded"),
            Self::IndexOutOfRange => f.write_str("index out of range"),
        }
    }
}

impl CoreError for Error {}

/// Reports a failed capacity or bounds check.
///
/// Without `abort-on-error` this hands `err` back so the caller can return
/// it. With `abort-on-error` the process is terminated and this never
/// returns. Every check in the crate funnels through here, so callers never
/// look at the mode themselves.
#[cold]
#[inline(never)]
#[cfg_attr(feature = "abort-on-error", allow(unreachable_code))]
pub(crate) fn report(err: Error) -> Error {
    #[cfg(feature = "log")]
    log::debug!("inline-vec: {err}");

    #[cfg(feature = "abort-on-error")]
    abort(err);

    err
}

#[cfg(feature = "abort-on-error")]
#[cfg_attr(all(feature = "std", not(feature = "log")), allow(unused_variables))]
fn abort(err: Error) -> ! {
    #[cfg(feature = "log")]
    log::error!("inline-vec: {err}, aborting");

    #[cfg(feature = "std")]
    std::process::abort();

    #[cfg(not(feature = "std"))]
    panic_twice(err);
}

/// Aborts without `std`: the panic unwinds into a guard that panics again,
/// and a panic during unwinding is always fatal. With `panic = "abort"` the
/// first panic already ends the process.
#[cfg(all(feature = "abort-on-error", not(feature = "std")))]
fn panic_twice(err: Error) -> ! {
    struct Fatal;

    impl Drop for Fatal {
        fn drop(&mut self) {
            panic!("inline-vec: aborting");
        }
    }

    let _fatal = Fatal;
    panic!("inline-vec: {err}");
}
