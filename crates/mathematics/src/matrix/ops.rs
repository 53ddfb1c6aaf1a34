use std::ops::{Index, IndexMut, Mul, MulAssign, Neg};

use crate::{
    approx::ApproxEq, vec2, vec3, Matrix, Matrix3, Matrix4, Scalar, Vector, Vector2, Vector3,
};

impl<const N: usize> Index<(usize, usize)> for Matrix<N> {
    type Output = Scalar;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}

impl<const N: usize> IndexMut<(usize, usize)> for Matrix<N> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[row][col]
    }
}

impl<const N: usize> ApproxEq for Matrix<N> {
    fn approx_eq_within(&self, other: &Self, precision: Scalar) -> bool {
        self.0.approx_eq_within(&other.0, precision)
    }
}

/// Matrix * Matrix.
///
/// The product applies `self` first and `rhs` second to a row vector.
impl<const N: usize> Mul for Matrix<N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Matrix::from_fn(|i, j| (0..N).fold(0.0, |acc, k| acc + self[(i, k)] * rhs[(k, j)]))
    }
}

impl<const N: usize> MulAssign for Matrix<N> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Matrix * Scalar.
impl<const N: usize> Mul<Scalar> for Matrix<N> {
    type Output = Self;

    fn mul(self, rhs: Scalar) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

impl<const N: usize> MulAssign<Scalar> for Matrix<N> {
    fn mul_assign(&mut self, rhs: Scalar) {
        *self = *self * rhs;
    }
}

/// Row Vector * Matrix.
impl<const N: usize> Mul<Matrix<N>> for Vector<N> {
    type Output = Self;

    fn mul(self, rhs: Matrix<N>) -> Self::Output {
        Vector::from_fn(|col| (0..N).fold(0.0, |acc, row| acc + self[row] * rhs[(row, col)]))
    }
}

impl<const N: usize> MulAssign<Matrix<N>> for Vector<N> {
    fn mul_assign(&mut self, rhs: Matrix<N>) {
        *self = *self * rhs;
    }
}

/// Same as `rhs * self`.
impl<const N: usize> Mul<Vector<N>> for Matrix<N> {
    type Output = Vector<N>;

    fn mul(self, rhs: Vector<N>) -> Self::Output {
        rhs * self
    }
}

/// Transforms a 2D point by an affine [`Matrix3`], applying the translation in its last row.
impl Mul<Matrix3> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: Matrix3) -> Self::Output {
        vec2(
            self.x * rhs.m11 + self.y * rhs.m21 + rhs.m31,
            self.x * rhs.m12 + self.y * rhs.m22 + rhs.m32,
        )
    }
}

/// Same as `rhs * self`.
impl Mul<Vector2> for Matrix3 {
    type Output = Vector2;

    fn mul(self, rhs: Vector2) -> Self::Output {
        rhs * self
    }
}

/// Transforms a 3D point by an affine [`Matrix4`].
///
/// The translation in the last row is applied and the last column is ignored, so no perspective
/// divide happens. Extend the vector with `w = 1` to apply projections.
impl Mul<Matrix4> for Vector3 {
    type Output = Self;

    fn mul(self, rhs: Matrix4) -> Self::Output {
        vec3(
            self.x * rhs.m11 + self.y * rhs.m21 + self.z * rhs.m31 + rhs.m41,
            self.x * rhs.m12 + self.y * rhs.m22 + self.z * rhs.m32 + rhs.m42,
            self.x * rhs.m13 + self.y * rhs.m23 + self.z * rhs.m33 + rhs.m43,
        )
    }
}

/// Same as `rhs * self`.
impl Mul<Vector3> for Matrix4 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Self::Output {
        rhs * self
    }
}

/// Returns the inverse matrix, *not* the element-wise negation.
impl Neg for Matrix3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.inversed()
    }
}

/// Returns the inverse matrix, *not* the element-wise negation.
impl Neg for Matrix4 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.inversed()
    }
}
