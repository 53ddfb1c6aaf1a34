use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{approx::ApproxEq, Scalar, Vector3};

use super::Quaternion;

impl ApproxEq for Quaternion {
    fn approx_eq_within(&self, other: &Self, precision: Scalar) -> bool {
        self.vec.approx_eq_within(&other.vec, precision)
    }
}

/// Negates all 4 components.
///
/// The result represents the same rotation. See [`Quaternion::conjugate`] for the inverse.
impl Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { vec: -self.vec }
    }
}

impl Add for Quaternion {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            vec: self.vec + rhs.vec,
        }
    }
}

impl AddAssign for Quaternion {
    fn add_assign(&mut self, rhs: Self) {
        self.vec += rhs.vec;
    }
}

impl Sub for Quaternion {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            vec: self.vec - rhs.vec,
        }
    }
}

impl SubAssign for Quaternion {
    fn sub_assign(&mut self, rhs: Self) {
        self.vec -= rhs.vec;
    }
}

/// Hamilton product.
///
/// When applied to a vector, the resulting rotation performs `rhs` first, then `self`.
impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let [lx, ly, lz, lw] = self.vec.into_array();
        let [rx, ry, rz, rw] = rhs.vec.into_array();
        Self::new(
            lw * rx + lx * rw + ly * rz - lz * ry,
            lw * ry + ly * rw + lz * rx - lx * rz,
            lw * rz + lz * rw + lx * ry - ly * rx,
            lw * rw - lx * rx - ly * ry - lz * rz,
        )
    }
}

impl MulAssign for Quaternion {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<Scalar> for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Scalar) -> Self::Output {
        Self {
            vec: self.vec * rhs,
        }
    }
}

impl MulAssign<Scalar> for Quaternion {
    fn mul_assign(&mut self, rhs: Scalar) {
        self.vec *= rhs;
    }
}

impl Div<Scalar> for Quaternion {
    type Output = Self;

    fn div(self, rhs: Scalar) -> Self::Output {
        Self {
            vec: self.vec / rhs,
        }
    }
}

impl DivAssign<Scalar> for Quaternion {
    fn div_assign(&mut self, rhs: Scalar) {
        self.vec /= rhs;
    }
}

/// Rotates a [`Vector3`] by a unit quaternion.
impl Mul<Quaternion> for Vector3 {
    type Output = Self;

    fn mul(self, rhs: Quaternion) -> Self::Output {
        let u = rhs.xyz();
        let uv = u.cross(self);
        let uuv = u.cross(uv);
        self + uv * (2.0 * rhs.w) + uuv * 2.0
    }
}

/// Same as `rhs * self`.
impl Mul<Vector3> for Quaternion {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Self::Output {
        rhs * self
    }
}
