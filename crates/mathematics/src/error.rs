use thiserror::Error;

/// Errors reported by the fallible constructors of this crate.
///
/// Every infallible constructor that can reject its input (eg. [`Vector::from_slice`] or
/// [`Matrix4::perspective`]) panics with the [`Display`] text of one of these variants instead.
///
/// [`Vector::from_slice`]: crate::Vector::from_slice
/// [`Matrix4::perspective`]: crate::Matrix4::perspective
/// [`Display`]: std::fmt::Display
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A slice did not contain exactly as many elements as the constructed value.
    #[error("array must contain {expected} elements, contained {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Perspective projection parameters that don't describe a viewing frustum.
    #[error("degenerate frustum: {0}")]
    DegenerateFrustum(&'static str),
}

/// Result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Checks that `slice` holds exactly `expected` elements.
pub(crate) fn check_len<T>(slice: &[T], expected: usize) -> Result<()> {
    if slice.len() == expected {
        Ok(())
    } else {
        Err(Error::LengthMismatch {
            expected,
            actual: slice.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = check_len(&[1.0, 2.0], 3).unwrap_err();
        assert_eq!(err.to_string(), "array must contain 3 elements, contained 2");
        assert_eq!(
            Error::DegenerateFrustum("far value must be greater than near").to_string(),
            "degenerate frustum: far value must be greater than near"
        );
        assert!(check_len(&[0u8; 16], 16).is_ok());
    }
}
