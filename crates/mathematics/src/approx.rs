//! Approximate equality.

mod impls;

use std::{fmt, panic::Location};

use crate::{Scalar, EPSILON};

/// Types that can be compared for *approximate equality*.
///
/// Compound types implementing this trait are considered *equal* if all of their components are.
/// Matrix and quaternion math accumulates floating-point error, so computed values should be
/// compared with this trait rather than with `==`.
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Compares every component of `self` and `other`, treating them as equal if their absolute
    /// difference is strictly less than `precision`.
    fn approx_eq_within(&self, other: &Rhs, precision: Scalar) -> bool;

    /// Compares `self` and `other` with the crate-wide tolerance [`EPSILON`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathematics::*;
    /// let one: Scalar = (0..10).fold(0.0, |acc, _| acc + 0.1);
    /// assert!(one != 1.0);
    /// assert!(one.approx_eq(&1.0));
    /// ```
    #[inline]
    fn approx_eq(&self, other: &Rhs) -> bool {
        self.approx_eq_within(other, EPSILON)
    }
}

/// Assertion guard returned by the [`assert_approx_eq!`][crate::assert_approx_eq]
/// and [`assert_approx_ne!`][crate::assert_approx_ne] macros.
///
/// This type will check the assertion when dropped. By default, values are compared with
/// [`ApproxEq::approx_eq`], which uses a tolerance of [`EPSILON`]. Calling
/// [`Asserter::precision`] switches to [`ApproxEq::approx_eq_within`] with a custom tolerance.
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    kind: AssertionKind,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    precision: Scalar,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        kind: AssertionKind,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            kind,
            location: Location::caller(),
            msg,
            precision: EPSILON,
        }
    }

    /// Compare the values with the given absolute tolerance instead of [`EPSILON`].
    ///
    /// Values are considered equal if the absolute difference of every pair of components is less
    /// than `precision`.
    pub fn precision(&mut self, precision: Scalar) -> &mut Self {
        self.precision = precision;
        self
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    // FIXME: `#[track_caller]` does not work on destructors, so the location is captured in `new`
    fn drop(&mut self) {
        let equal = self.left.approx_eq_within(self.right, self.precision);
        if (!equal && self.kind == AssertionKind::Eq) || (equal && self.kind == AssertionKind::Ne) {
            assert_failed_inner(self.left, self.right, self.kind, self.location, self.msg);
        }
    }
}

fn assert_failed_inner(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    kind: AssertionKind,
    location: &Location<'_>,
    args: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = match kind {
        AssertionKind::Eq => "~=",
        AssertionKind::Ne => "!~=",
    };
    match args {
        // If the panic output takes you here, you've probably clicked on the wrong location.
        // The correct location of the assertion is part of the message.
        Some(args) => panic!(
            r#"assertion `left {op} right` failed at {location}: {args}
  left: {left:?}
 right: {right:?}"#
        ),
        None => panic!(
            r#"assertion `left {op} right` failed at {location}
  left: {left:?}
 right: {right:?}"#
        ),
    }
}

#[doc(hidden)]
#[derive(Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssertionKind {
    Eq,
    Ne,
}

/// Asserts that two expressions are approximately equal to each other (using [`ApproxEq`]).
///
/// This macro functions like [`assert_eq!`], except in that it uses the [`ApproxEq`] trait to
/// perform the comparison, and returns an [`Asserter`] that can be used to configure the
/// tolerance.
///
/// Also see [`assert_approx_ne!`].
///
/// # Examples
///
/// ```
/// # use mathematics::*;
/// assert_approx_eq!(vec2(1.0, 2.0), vec2(1.00001, 2.0));
/// assert_approx_eq!(100.0, 99.0).precision(1.5);
/// assert_approx_eq!(Matrix3::IDENTITY.inversed(), Matrix3::IDENTITY, "identity is self-inverse");
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Eq, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Eq, ::core::option::Option::Some(::core::format_args!($($arg)+)))
    };
}

/// Asserts that two expressions are *not* approximately equal to each other (using [`ApproxEq`]).
///
/// Also see [`assert_approx_eq!`].
///
/// # Examples
///
/// ```
/// # use mathematics::*;
/// assert_approx_ne!(1.0, 1.001);
/// assert_approx_ne!(100.0, 99.0).precision(0.5);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::None
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::Some(::core::format_args!($($arg)+))
        )
    };
}

#[cfg(test)]
mod tests {
    use crate::{vec3, Scalar};

    #[test]
    #[should_panic(expected = "assertion `left !~= right` failed")]
    fn fail_ne() {
        assert_approx_ne!(1.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "assertion `left ~= right` failed")]
    fn fail_eq() {
        assert_approx_eq!(1.0, 2.0);
    }

    #[test]
    #[should_panic(expected = "my message")]
    fn assertion_message() {
        assert_approx_eq!(1.0, 2.0, "my message");
    }

    #[test]
    #[should_panic(expected = "vectors differ")]
    fn ne_assertion_message() {
        assert_approx_ne!(vec3(1.0, 2.0, 3.0), vec3(1.0, 2.0, 3.0), "vectors {}", "differ");
    }

    #[test]
    fn precision() {
        assert_approx_eq!(1.0, 1.001).precision(0.01);
        assert_approx_ne!(1.0, 1.001);
        assert_approx_eq!(1.0, -1.0).precision(2.5);
        assert_approx_ne!(1.0, -1.0).precision(2.0);
    }

    #[test]
    fn negative() {
        assert_approx_ne!(1.0, -1.0);
        assert_approx_eq!(-1.0, -1.0);
        assert_approx_eq!(-1.0, -1.00001);
    }

    #[test]
    fn nan() {
        assert_approx_ne!(Scalar::NAN, Scalar::NAN);
        assert_approx_ne!(Scalar::NAN, 0.0);
        assert_approx_ne!(Scalar::NAN, Scalar::NAN).precision(Scalar::INFINITY);
    }

    #[test]
    fn inf() {
        // `inf - inf` is NaN, which is never below the tolerance.
        assert_approx_ne!(Scalar::INFINITY, Scalar::INFINITY);
        assert_approx_ne!(Scalar::INFINITY, Scalar::MAX);
        assert_approx_ne!(Scalar::INFINITY, Scalar::NEG_INFINITY);
    }

    #[test]
    fn compound() {
        assert_approx_eq!(vec3(1.0, 2.0, 3.0), vec3(1.00001, 1.99999, 3.0));
        assert_approx_ne!(vec3(1.0, 2.0, 3.0), vec3(1.0, 2.0, 3.001));
    }
}
