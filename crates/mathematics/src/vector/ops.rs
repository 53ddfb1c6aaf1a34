//! Implementations of `std::ops`.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{approx::ApproxEq, Scalar};

use super::Vector;

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = Scalar;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<const N: usize> IndexMut<usize> for Vector<N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<const N: usize> PartialEq<[Scalar; N]> for Vector<N> {
    fn eq(&self, other: &[Scalar; N]) -> bool {
        self.0.eq(other)
    }
}

impl<const N: usize> PartialEq<Vector<N>> for [Scalar; N] {
    fn eq(&self, other: &Vector<N>) -> bool {
        *self == other.0
    }
}

impl<const N: usize> ApproxEq for Vector<N> {
    fn approx_eq_within(&self, other: &Self, precision: Scalar) -> bool {
        self.0.approx_eq_within(&other.0, precision)
    }
}

/// Element-wise negation.
impl<const N: usize> Neg for Vector<N> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(Scalar::neg)
    }
}

/// Element-wise addition.
impl<const N: usize> Add for Vector<N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.zip_map(rhs, |l, r| l + r)
    }
}

/// Element-wise addition.
impl<const N: usize> AddAssign for Vector<N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Element-wise subtraction.
impl<const N: usize> Sub for Vector<N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_map(rhs, |l, r| l - r)
    }
}

/// Element-wise subtraction.
impl<const N: usize> SubAssign for Vector<N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// Element-wise multiplication.
impl<const N: usize> Mul for Vector<N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.zip_map(rhs, |l, r| l * r)
    }
}

/// Element-wise multiplication.
impl<const N: usize> MulAssign for Vector<N> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Vector-Scalar multiplication (scaling).
impl<const N: usize> Mul<Scalar> for Vector<N> {
    type Output = Self;

    fn mul(self, rhs: Scalar) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

/// Vector-Scalar multiplication (scaling).
impl<const N: usize> MulAssign<Scalar> for Vector<N> {
    fn mul_assign(&mut self, rhs: Scalar) {
        *self = *self * rhs;
    }
}

/// Element-wise division.
impl<const N: usize> Div for Vector<N> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self.zip_map(rhs, |l, r| l / r)
    }
}

/// Element-wise division.
impl<const N: usize> DivAssign for Vector<N> {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

/// Vector-Scalar division (scaling).
impl<const N: usize> Div<Scalar> for Vector<N> {
    type Output = Self;

    fn div(self, rhs: Scalar) -> Self::Output {
        self.map(|elem| elem / rhs)
    }
}

/// Vector-Scalar division (scaling).
impl<const N: usize> DivAssign<Scalar> for Vector<N> {
    fn div_assign(&mut self, rhs: Scalar) {
        *self = *self / rhs;
    }
}
