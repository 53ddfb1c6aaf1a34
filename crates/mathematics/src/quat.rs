mod ops;
mod view;

use std::fmt;

use crate::{approx::ApproxEq, error, vec4, Matrix4, Scalar, Vector3, Vector4, PI};

/// A quaternion consisting of 3 imaginary numbers and a real number.
///
/// Unit-length quaternions ("*versors*") are commonly used to represent rotations in 3D space.
///
/// Quaternions are represented similar to a 4-dimensional vector, with an `x`, `y`, `z` and `w`
/// component, where `w` is the real part.
///
/// Rotations compose like transforms: `v * (a * b)` rotates `v` by `b` first and then by `a`
/// (the Hamilton product).
#[derive(Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Quaternion {
    vec: Vector4,
}

unsafe impl bytemuck::Zeroable for Quaternion {}
unsafe impl bytemuck::Pod for Quaternion {}

impl Quaternion {
    /// The quaternion with every component set to 0.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// The multiplicative identity.
    ///
    /// This is a unit quaternion that will not change a vector it is multiplied with.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a quaternion from its components.
    #[inline]
    pub const fn new(x: Scalar, y: Scalar, z: Scalar, w: Scalar) -> Self {
        Self {
            vec: vec4(x, y, z, w),
        }
    }

    /// Creates a quaternion from a 4-dimensional [`Vector`][crate::Vector].
    ///
    /// The `x`, `y`, and `z` coordinates correspond to the `i`, `j`, and `k` imaginary parts, while
    /// the `w` component corresponds to the real number part of the quaternion.
    #[inline]
    pub const fn from_vector(vec: Vector4) -> Self {
        Self { vec }
    }

    /// Returns the components as a [`Vector4`].
    #[inline]
    pub fn into_vector(self) -> Vector4 {
        self.vec
    }

    /// Creates a quaternion from a slice of exactly 4 elements, in `x, y, z, w` order.
    ///
    /// # Panics
    ///
    /// This method will panic if `slice` does not have exactly 4 elements. Use the [`TryFrom`]
    /// implementation to handle that case.
    #[track_caller]
    pub fn from_slice(slice: &[Scalar]) -> Self {
        Self::from_vector(Vector4::from_slice(slice))
    }

    /// Copies the components into a [`Vec`], in `x, y, z, w` order.
    pub fn to_vec(&self) -> Vec<Scalar> {
        self.vec.to_vec()
    }

    /// Creates a rotation of `radians` around the X axis.
    pub fn from_rotation_x(radians: Scalar) -> Self {
        let (sin, cos) = (radians * 0.5).sin_cos();
        Self::new(sin, 0.0, 0.0, cos)
    }

    /// Creates a rotation of `radians` around the Y axis.
    pub fn from_rotation_y(radians: Scalar) -> Self {
        let (sin, cos) = (radians * 0.5).sin_cos();
        Self::new(0.0, sin, 0.0, cos)
    }

    /// Creates a rotation of `radians` around the Z axis.
    pub fn from_rotation_z(radians: Scalar) -> Self {
        let (sin, cos) = (radians * 0.5).sin_cos();
        Self::new(0.0, 0.0, sin, cos)
    }

    /// Creates a rotation from an axis-angle [`Vector4`].
    ///
    /// `x`, `y` and `z` hold the rotation axis, which should be normalized, and `w` holds the
    /// angle in radians.
    pub fn from_axis_angle(axis_angle: Vector4) -> Self {
        Self::from_axis(axis_angle.xyz(), axis_angle.w)
    }

    /// Creates a rotation of `radians` around `axis`, which should be normalized.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathematics::*;
    /// let q = Quaternion::from_axis(Vector3::Z, PI / 2.0);
    /// assert_approx_eq!(Vector3::X * q, Vector3::Y);
    /// ```
    pub fn from_axis(axis: Vector3, radians: Scalar) -> Self {
        let (sin, cos) = (radians * 0.5).sin_cos();
        let v = axis * sin;
        Self::new(v.x, v.y, v.z, cos)
    }

    /// Creates a rotation from Euler angles, as the product of a rotation around the X axis, one
    /// around the Y axis and one around the Z axis, in that order.
    ///
    /// Because of the product order, the roll around Z is applied to vectors first.
    #[doc(alias = "euler")]
    pub fn from_pitch_yaw_roll(pitch: Scalar, yaw: Scalar, roll: Scalar) -> Self {
        Self::from_rotation_x(pitch) * Self::from_rotation_y(yaw) * Self::from_rotation_z(roll)
    }

    /// Extracts the rotation of a [`Matrix4`] (in its upper-left 3x3 block).
    ///
    /// The block must be a pure rotation, without scaling or shearing. Depending on which
    /// diagonal element dominates, one of four formulas is used. Rotations where that element is
    /// 1 (such as [`Matrix4::IDENTITY`]) and half turns divide zero by zero and produce NaNs.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathematics::*;
    /// let q = Quaternion::from_axis(vec3(0.0, 0.6, 0.8), 1.0);
    /// assert_approx_eq!(Quaternion::from_rotation_matrix(&q.matrix()), q);
    /// ```
    pub fn from_rotation_matrix(m: &Matrix4) -> Self {
        let diagonal = m.m11 + m.m22 + m.m33 + 1.0;
        if diagonal.approx_eq(&0.0) {
            let s = diagonal.sqrt() * 2.0;
            Self::new(
                (m.m23 - m.m32) / s,
                (m.m31 - m.m13) / s,
                (m.m12 - m.m21) / s,
                0.25 * s,
            )
        } else if m.m11 > m.m22.max(m.m33) {
            let s = (1.0 + m.m11 - m.m22 - m.m33).sqrt() * 2.0;
            Self::new(
                0.25 * s,
                (m.m12 + m.m21) / s,
                (m.m13 + m.m31) / s,
                (m.m23 - m.m32) / s,
            )
        } else if m.m22 > m.m33 {
            let s = (1.0 + m.m22 - m.m11 - m.m33).sqrt() * 2.0;
            Self::new(
                (m.m12 + m.m21) / s,
                0.25 * s,
                (m.m23 + m.m32) / s,
                (m.m31 - m.m13) / s,
            )
        } else {
            let s = (1.0 + m.m33 - m.m11 - m.m22).sqrt() * 2.0;
            Self::new(
                (m.m13 + m.m31) / s,
                (m.m23 + m.m32) / s,
                0.25 * s,
                (m.m12 - m.m21) / s,
            )
        }
    }

    /// Computes the shortest-arc rotation that turns the direction of `v1` into that of `v2`.
    ///
    /// If the vectors point in opposite directions, the result is a half turn around
    /// `fallback_axis`, or around an arbitrary axis perpendicular to `v1` if no (non-zero)
    /// fallback axis is given.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathematics::*;
    /// let q = Quaternion::rotation_between(Vector3::X, vec3(0.0, 5.0, 0.0), None);
    /// assert_approx_eq!(Vector3::X * q, Vector3::Y);
    ///
    /// let q = Quaternion::rotation_between(Vector3::X, -Vector3::X, Some(Vector3::Z));
    /// assert_approx_eq!(Vector3::Y * q, -Vector3::Y);
    /// ```
    pub fn rotation_between(v1: Vector3, v2: Vector3, fallback_axis: Option<Vector3>) -> Self {
        let vec1 = v1.normalized();
        let vec2 = v2.normalized();

        let d = vec1.dot(vec2);
        if d >= 1.0 {
            return Self::IDENTITY;
        }

        if d < 1e-6 - 1.0 {
            if let Some(axis) = fallback_axis.filter(|axis| *axis != Vector3::ZERO) {
                log::trace!("opposite vectors, rotating around fallback axis {:?}", axis);
                return Self::from_axis(axis, PI);
            }

            let mut axis = Vector3::X.cross(v1);
            if axis.length() == 0.0 {
                axis = Vector3::Y.cross(v1);
            }
            log::trace!("opposite vectors, rotating around generated axis {:?}", axis);
            return Self::from_axis(axis.normalized(), PI);
        }

        let s = ((1.0 + d) * 2.0).sqrt();
        let c = vec1.cross(vec2) / s;
        Self::new(c.x, c.y, c.z, s * 0.5).normalized()
    }

    /// Returns the squared length of this quaternion.
    ///
    /// If the squared length is not equal to one, multiplying a vector with this quaternion will
    /// scale the vector in addition to rotating it.
    pub fn length_squared(&self) -> Scalar {
        self.vec.length_squared()
    }

    /// Returns the length of this quaternion.
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> Scalar {
        self.vec.length()
    }

    /// Returns a normalized copy of this quaternion (whose length equals one).
    ///
    /// Like [`Vector::normalized`][crate::Vector::normalized], this returns `self` unchanged if
    /// its squared length is approximately 0 or 1.
    pub fn normalized(self) -> Self {
        Self {
            vec: self.vec.normalized(),
        }
    }

    /// Computes the 4-dimensional dot product of `self` and `other`.
    pub fn dot(self, other: Self) -> Scalar {
        self.vec.dot(other.vec)
    }

    /// Returns the conjugate, which negates the imaginary part (`x`, `y` and `z`).
    ///
    /// For unit quaternions, this is the inverse rotation.
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Returns `-self`, with every component negated.
    ///
    /// For unit quaternions this represents the *same* rotation as `self`. Use
    /// [`Quaternion::conjugate`] for the inverse rotation.
    #[inline]
    pub fn inversed(self) -> Self {
        -self
    }

    /// Returns the imaginary part (`x`, `y` and `z`).
    pub fn xyz(&self) -> Vector3 {
        self.vec.xyz()
    }

    /// Overwrites the imaginary part, leaving `w` untouched.
    pub fn set_xyz(&mut self, xyz: Vector3) {
        self.vec.set_xyz(xyz);
    }

    /// Returns the rotation around the X axis, in radians.
    pub fn pitch(&self) -> Scalar {
        let [x, y, z, w] = self.vec.into_array();
        (2.0 * (y * z + w * x)).atan2(w * w - x * x - y * y + z * z)
    }

    /// Returns the rotation around the Y axis, in radians.
    ///
    /// The argument of `asin` is not clamped, so non-unit quaternions may produce NaN.
    pub fn yaw(&self) -> Scalar {
        let [x, y, z, w] = self.vec.into_array();
        (-2.0 * (x * z - w * y)).asin()
    }

    /// Returns the rotation around the Z axis, in radians.
    pub fn roll(&self) -> Scalar {
        let [x, y, z, w] = self.vec.into_array();
        (2.0 * (x * y + w * z)).atan2(w * w + x * x - y * y - z * z)
    }

    /// Returns the Euler angles `(pitch, yaw, roll)` of this rotation.
    ///
    /// The angles describe a rotation around X, then Y, then Z, which corresponds to
    /// `from_rotation_z(roll) * from_rotation_y(yaw) * from_rotation_x(pitch)`.
    pub fn to_pitch_yaw_roll(&self) -> (Scalar, Scalar, Scalar) {
        (self.pitch(), self.yaw(), self.roll())
    }

    /// Converts this rotation to an axis-angle [`Vector4`] (`w` holds the angle in radians).
    ///
    /// Rotations without a well-defined axis return [`Vector4::Z`] (a zero-angle rotation).
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathematics::*;
    /// let axis_angle = vec4(0.0, 0.0, 1.0, 0.5);
    /// assert_approx_eq!(Quaternion::from_axis_angle(axis_angle).to_axis_angle(), axis_angle);
    /// assert_eq!(Quaternion::IDENTITY.to_axis_angle(), Vector4::Z);
    /// ```
    pub fn to_axis_angle(&self) -> Vector4 {
        let scale = self.xyz().length();
        if scale.approx_eq(&0.0) || scale.approx_eq(&(PI * 2.0)) {
            return Vector4::Z;
        }

        (self.xyz() / scale).extend(self.w.acos() * 2.0)
    }

    /// Converts this rotation to a [`Matrix4`] (with no translation).
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathematics::*;
    /// let q = Quaternion::from_axis(Vector3::Y, 1.0);
    /// assert_approx_eq!(Vector3::Z * q.matrix(), Vector3::Z * q);
    /// ```
    pub fn matrix(&self) -> Matrix4 {
        let [x, y, z, w] = self.vec.into_array();
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);

        #[rustfmt::skip]
        let mat = Matrix4::from_rows([
            [1.0 - 2.0 * (yy + zz), 2.0 * (xy + wz),       2.0 * (xz - wy),       0.0],
            [2.0 * (xy - wz),       1.0 - 2.0 * (xx + zz), 2.0 * (yz + wx),       0.0],
            [2.0 * (xz + wy),       2.0 * (yz - wx),       1.0 - 2.0 * (xx + yy), 0.0],
            [0.0,                   0.0,                   0.0,                   1.0],
        ]);
        mat
    }

    /// Spherically interpolates between `self` (at `t = 0`) and `other` (at `t = 1`).
    ///
    /// Both quaternions should be normalized. Nearly identical inputs fall back to a normalized
    /// linear interpolation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathematics::*;
    /// let a = Quaternion::IDENTITY;
    /// let b = Quaternion::from_rotation_z(PI / 2.0);
    /// assert_approx_eq!(a.interpolated(b, 0.5), Quaternion::from_rotation_z(PI / 4.0));
    /// ```
    #[doc(alias = "slerp")]
    pub fn interpolated(self, other: Self, t: Scalar) -> Self {
        let dot = self.dot(other).clamp(-1.0, 1.0);
        if dot.approx_eq(&1.0) {
            return (self + (other - self) * t).normalized();
        }

        let theta = dot.acos() * t;
        let (sin, cos) = theta.sin_cos();
        self * cos + (other - self * dot).normalized() * sin
    }
}

impl Default for Quaternion {
    /// Returns [`Quaternion::IDENTITY`].
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[Scalar; 4]> for Quaternion {
    #[inline]
    fn from(value: [Scalar; 4]) -> Self {
        Self::from_vector(value.into())
    }
}

impl From<Quaternion> for [Scalar; 4] {
    #[inline]
    fn from(value: Quaternion) -> Self {
        value.vec.into_array()
    }
}

impl From<Vector4> for Quaternion {
    #[inline]
    fn from(vec: Vector4) -> Self {
        Self::from_vector(vec)
    }
}

impl TryFrom<&[Scalar]> for Quaternion {
    type Error = error::Error;

    fn try_from(slice: &[Scalar]) -> error::Result<Self> {
        Vector4::try_from(slice).map(Self::from_vector)
    }
}

impl fmt::Debug for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quaternion")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .field("w", &self.w)
            .finish()
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.vec, f)
    }
}
