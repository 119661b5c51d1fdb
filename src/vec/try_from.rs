// This file is part of inline-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::InlineVec};

impl<T: Clone, const N: usize> TryFrom<&[T]> for InlineVec<T, N> {
    type Error = Error;

    /// Clones `src` into a new vector, or returns
    /// [`Error::CapacityExceeded`] if `src.len() > N`.
    fn try_from(src: &[T]) -> Result<Self, Error> {
        let mut v = Self::new();
        v.extend_from_slice(src)?;
        Ok(v)
    }
}

#[cfg(test)]
mod tests {
    use crate::InlineVec;

    #[test]
    fn test_try_from_slice_fits() {
        let src = ["x".to_string(), "y".to_string()];
        let v = InlineVec::<String, 4>::try_from(&src[..]).unwrap();
        assert_eq!(v.as_slice(), &src);

        let empty = InlineVec::<String, 0>::try_from(&[] as &[String]).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    #[cfg(not(feature = "abort-on-error"))]
    fn test_try_from_slice_too_long() {
        use crate::Error;

        let err = InlineVec::<i32, 2>::try_from(&[1, 2, 3][..]).unwrap_err();
        assert_eq!(err, Error::CapacityExceeded);
    }
}
