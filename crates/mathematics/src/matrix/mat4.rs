use crate::{vec3, Matrix4, Quaternion, Scalar, Vector3, Vector4};

impl Matrix4 {
    /// Creates a 3D scaling matrix.
    pub fn from_scale(scale: Vector3) -> Self {
        #[rustfmt::skip]
        let mat = Self::from_rows([
            [scale.x, 0.0,     0.0,     0.0],
            [0.0,     scale.y, 0.0,     0.0],
            [0.0,     0.0,     scale.z, 0.0],
            [0.0,     0.0,     0.0,     1.0],
        ]);
        mat
    }

    /// Creates a 3D translation matrix.
    ///
    /// The translation is stored in the last row (`m41`, `m42`, `m43`).
    pub fn from_translation(translation: Vector3) -> Self {
        Self::IDENTITY.translated(translation)
    }

    /// Creates a rotation matrix from an axis-angle [`Vector4`] (`w` is the angle in radians).
    ///
    /// This is the same as converting the rotation to a [`Quaternion`] first and then calling
    /// [`Quaternion::matrix`].
    pub fn from_axis_angle(axis_angle: Vector4) -> Self {
        Quaternion::from_axis_angle(axis_angle).matrix()
    }

    /// Creates a rotation matrix from a (unit) [`Quaternion`].
    #[inline]
    pub fn from_quaternion(q: Quaternion) -> Self {
        q.matrix()
    }

    /// Returns the [adjugate] of the matrix (the transpose of its cofactor matrix).
    ///
    /// [adjugate]: https://en.wikipedia.org/wiki/Adjugate_matrix
    pub fn adjugate(&self) -> Self {
        let [
            [m11, m12, m13, m14],
            [m21, m22, m23, m24],
            [m31, m32, m33, m34],
            [m41, m42, m43, m44],
        ] = self.0;

        let mut m = Self::IDENTITY;

        m.m11 = m22 * m33 * m44 - m22 * m34 * m43;
        m.m11 += -m32 * m23 * m44 + m32 * m24 * m43;
        m.m11 += m42 * m23 * m34 - m42 * m24 * m33;

        m.m21 = -m21 * m33 * m44 + m21 * m34 * m43;
        m.m21 += m31 * m23 * m44 - m31 * m24 * m43;
        m.m21 += -m41 * m23 * m34 + m41 * m24 * m33;

        m.m31 = m21 * m32 * m44 - m21 * m34 * m42;
        m.m31 += -m31 * m22 * m44 + m31 * m24 * m42;
        m.m31 += m41 * m22 * m34 - m41 * m24 * m32;

        m.m41 = -m21 * m32 * m43 + m21 * m33 * m42;
        m.m41 += m31 * m22 * m43 - m31 * m23 * m42;
        m.m41 += -m41 * m22 * m33 + m41 * m23 * m32;

        m.m12 = -m12 * m33 * m44 + m12 * m34 * m43;
        m.m12 += m32 * m13 * m44 - m32 * m14 * m43;
        m.m12 += -m42 * m13 * m34 + m42 * m14 * m33;

        m.m22 = m11 * m33 * m44 - m11 * m34 * m43;
        m.m22 += -m31 * m13 * m44 + m31 * m14 * m43;
        m.m22 += m41 * m13 * m34 - m41 * m14 * m33;

        m.m32 = -m11 * m32 * m44 + m11 * m34 * m42;
        m.m32 += m31 * m12 * m44 - m31 * m14 * m42;
        m.m32 += -m41 * m12 * m34 + m41 * m14 * m32;

        m.m42 = m11 * m32 * m43 - m11 * m33 * m42;
        m.m42 += -m31 * m12 * m43 + m31 * m13 * m42;
        m.m42 += m41 * m12 * m33 - m41 * m13 * m32;

        m.m13 = m12 * m23 * m44 - m12 * m24 * m43;
        m.m13 += -m22 * m13 * m44 + m22 * m14 * m43;
        m.m13 += m42 * m13 * m24 - m42 * m14 * m23;

        m.m23 = -m11 * m23 * m44 + m11 * m24 * m43;
        m.m23 += m21 * m13 * m44 - m21 * m14 * m43;
        m.m23 += -m41 * m13 * m24 + m41 * m14 * m23;

        m.m33 = m11 * m22 * m44 - m11 * m24 * m42;
        m.m33 += -m21 * m12 * m44 + m21 * m14 * m42;
        m.m33 += m41 * m12 * m24 - m41 * m14 * m22;

        m.m43 = -m11 * m22 * m43 + m11 * m23 * m42;
        m.m43 += m21 * m12 * m43 - m21 * m13 * m42;
        m.m43 += -m41 * m12 * m23 + m41 * m13 * m22;

        m.m14 = -m12 * m23 * m34 + m12 * m24 * m33;
        m.m14 += m22 * m13 * m34 - m22 * m14 * m33;
        m.m14 += -m32 * m13 * m24 + m32 * m14 * m23;

        m.m24 = m11 * m23 * m34 - m11 * m24 * m33;
        m.m24 += -m21 * m13 * m34 + m21 * m14 * m33;
        m.m24 += m31 * m13 * m24 - m31 * m14 * m23;

        m.m34 = -m11 * m22 * m34 + m11 * m24 * m32;
        m.m34 += m21 * m12 * m34 - m21 * m14 * m32;
        m.m34 += -m31 * m12 * m24 + m31 * m14 * m22;

        m.m44 = m11 * m22 * m33 - m11 * m23 * m32;
        m.m44 += -m21 * m12 * m33 + m21 * m13 * m32;
        m.m44 += m31 * m12 * m23 - m31 * m13 * m22;

        m
    }

    /// Computes the determinant from a precomputed adjugate (Laplace expansion along row 1).
    fn determinant_with(&self, adjugate: &Self) -> Scalar {
        self.m11 * adjugate.m11
            + self.m12 * adjugate.m21
            + self.m13 * adjugate.m31
            + self.m14 * adjugate.m41
    }

    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> Scalar {
        self.determinant_with(&self.adjugate())
    }

    /// Inverts this matrix.
    ///
    /// Singular matrices (with a [`determinant()`] of zero) are not rejected: the result will
    /// contain infinities or NaNs.
    ///
    /// [`determinant()`]: Self::determinant
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathematics::*;
    /// let view = Matrix4::look_at(vec3(1.0, 2.0, 3.0), Vector3::ZERO, Vector3::Y);
    /// assert_approx_eq!(view.inversed() * view, Matrix4::IDENTITY);
    /// ```
    pub fn inversed(&self) -> Self {
        let adjugate = self.adjugate();
        let det = self.determinant_with(&adjugate);
        if det == 0.0 {
            log::warn!("inverting singular matrix {:?}", self);
        }
        adjugate * (1.0 / det)
    }

    /// Returns a copy of `self` with `translation` added to its translation row.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathematics::*;
    /// let m = Matrix4::from_translation(vec3(5.0, 5.0, 5.0)).translated(vec3(2.0, 3.0, 4.0));
    /// assert_eq!(m.translation(), vec3(7.0, 8.0, 9.0));
    /// ```
    pub fn translated(mut self, translation: Vector3) -> Self {
        self.m41 += translation.x;
        self.m42 += translation.y;
        self.m43 += translation.z;
        self
    }

    /// Returns the translation stored in the last row.
    pub fn translation(&self) -> Vector3 {
        vec3(self.m41, self.m42, self.m43)
    }

    /// Extracts the rotation of an affine transform without scaling as a [`Quaternion`].
    ///
    /// See [`Quaternion::from_rotation_matrix`] for the inputs this can handle.
    pub fn rotation(&self) -> Quaternion {
        Quaternion::from_rotation_matrix(self)
    }
}
