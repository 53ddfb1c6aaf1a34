/// The element type of every vector, matrix and quaternion.
pub type Scalar = f64;

/// Archimedes' constant (π).
pub const PI: Scalar = std::f64::consts::PI;

/// Absolute tolerance used by [`ApproxEq::approx_eq`][crate::ApproxEq::approx_eq].
///
/// Two scalars `a` and `b` are approximately equal if `|a - b| < EPSILON`.
pub const EPSILON: Scalar = 0.0001;

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, assert_approx_ne, ApproxEq};

    use super::*;

    #[test]
    fn epsilon_is_exclusive() {
        let (zero, one): (Scalar, Scalar) = (0.0, 1.0);
        assert!(one.approx_eq(&(1.0 + EPSILON / 2.0)));
        assert!(!zero.approx_eq(&EPSILON));
        assert!(!zero.approx_eq(&-EPSILON));
    }

    #[test]
    fn precision() {
        let one: Scalar = 1.0;
        assert!(one.approx_eq_within(&1.4, 0.5));
        assert!(!one.approx_eq_within(&1.5, 0.5));
        assert_approx_eq!(100.0, 99.0).precision(1.5);
        assert_approx_ne!(100.0, 99.0).precision(1.0);
    }

    #[test]
    fn pi() {
        assert_approx_eq!(PI, 3.14159265);
    }
}
