use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::{Matrix, Scalar};

/// Named elements of a [`Matrix3`][crate::Matrix3], `m{row}{column}`.
#[repr(C)]
pub struct M3 {
    pub m11: Scalar,
    pub m12: Scalar,
    pub m13: Scalar,
    pub m21: Scalar,
    pub m22: Scalar,
    pub m23: Scalar,
    pub m31: Scalar,
    pub m32: Scalar,
    pub m33: Scalar,
    _priv: (), // prevent external construction
}

/// Named elements of a [`Matrix4`][crate::Matrix4], `m{row}{column}`.
#[repr(C)]
pub struct M4 {
    pub m11: Scalar,
    pub m12: Scalar,
    pub m13: Scalar,
    pub m14: Scalar,
    pub m21: Scalar,
    pub m22: Scalar,
    pub m23: Scalar,
    pub m24: Scalar,
    pub m31: Scalar,
    pub m32: Scalar,
    pub m33: Scalar,
    pub m34: Scalar,
    pub m41: Scalar,
    pub m42: Scalar,
    pub m43: Scalar,
    pub m44: Scalar,
    _priv: (), // prevent external construction
}

impl Deref for Matrix<3> {
    type Target = M3;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl DerefMut for Matrix<3> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl Deref for Matrix<4> {
    type Target = M4;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl DerefMut for Matrix<4> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { mem::transmute(self) }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Matrix3, Matrix4};

    #[test]
    fn fields_follow_row_major_order() {
        let mut mat = Matrix4::from_fn(|row, col| (row * 4 + col) as f64);
        assert_eq!(mat.m11, 0.0);
        assert_eq!(mat.m12, 1.0);
        assert_eq!(mat.m21, 4.0);
        assert_eq!(mat.m34, 11.0);
        assert_eq!(mat.m43, 14.0);
        assert_eq!(mat.m44, 15.0);

        mat.m23 = -1.0;
        assert_eq!(mat[(1, 2)], -1.0);

        let mat = Matrix3::from_fn(|row, col| (row * 3 + col) as f64);
        assert_eq!(mat.m13, 2.0);
        assert_eq!(mat.m31, 6.0);
        assert_eq!(mat.m33, 8.0);
    }
}
