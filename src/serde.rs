// This file is part of inline-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`InlineVec`](crate::InlineVec).
//!
//! - **Serialize**: as a sequence of the live elements (length `len`).
//! - **Deserialize**: from any sequence of at most `N` elements. Elements are
//!   written into the uninitialized buffer as they are deserialized, so `T`
//!   needs neither `Default` nor `Clone`.
//!
//! An input longer than `N` is reported as a deserialization error
//! ("too many elements (capacity N)"), never through the crate's
//! capacity-error path, so it does not abort under `abort-on-error`.

// Crate imports
use crate::vec::InlineVec;

// Core imports
use core::{fmt, iter, marker::PhantomData};

// External imports - serde
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

impl<T: Serialize, const N: usize> Serialize for InlineVec<T, N> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct VecVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T, const N: usize> de::Visitor<'de> for VecVisitor<T, N>
where
    T: Deserialize<'de>,
{
    type Value = InlineVec<T, N>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "array or sequence with at most {} elements", N)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = InlineVec::<T, N>::new();
        while let Some(elem) = a.next_element::<T>()? {
            if out.is_full() {
                return Err(de::Error::custom(format_args!(
                    "too many elements (capacity {N})"
                )));
            }
            out.extend(iter::once(elem));
        }
        Ok(out)
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for InlineVec<T, N>
where
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor::<T, N>(PhantomData))
    }
}
