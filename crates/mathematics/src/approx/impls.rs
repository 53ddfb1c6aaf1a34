use super::ApproxEq;
use crate::Scalar;

impl ApproxEq for Scalar {
    #[inline]
    fn approx_eq_within(&self, other: &Self, precision: Scalar) -> bool {
        (self - other).abs() < precision
    }
}

impl<'a, T: ApproxEq<U> + ?Sized, U: ?Sized> ApproxEq<U> for &'a T {
    fn approx_eq_within(&self, other: &U, precision: Scalar) -> bool {
        T::approx_eq_within(self, other, precision)
    }
}

impl<T: ApproxEq<U>, U> ApproxEq<[U]> for [T] {
    fn approx_eq_within(&self, other: &[U], precision: Scalar) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.approx_eq_within(b, precision))
    }
}

impl<T: ApproxEq<U>, U, const N: usize> ApproxEq<[U; N]> for [T; N] {
    fn approx_eq_within(&self, other: &[U; N], precision: Scalar) -> bool {
        self.as_slice().approx_eq_within(other.as_slice(), precision)
    }
}
