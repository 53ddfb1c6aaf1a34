use crate::{Matrix3, Scalar, Vector2};

impl Matrix3 {
    /// Creates a 2D scaling matrix.
    pub fn from_scale(scale: Vector2) -> Self {
        #[rustfmt::skip]
        let mat = Self::from_rows([
            [scale.x, 0.0,     0.0],
            [0.0,     scale.y, 0.0],
            [0.0,     0.0,     1.0],
        ]);
        mat
    }

    /// Creates a 2D translation matrix.
    ///
    /// The translation is stored in the last row, so it applies to [`Vector2`]s multiplied with
    /// the matrix.
    pub fn from_translation(translation: Vector2) -> Self {
        #[rustfmt::skip]
        let mat = Self::from_rows([
            [1.0,           0.0,           0.0],
            [0.0,           1.0,           0.0],
            [translation.x, translation.y, 1.0],
        ]);
        mat
    }

    /// Creates a counterclockwise rotation around the Z axis (a rotation in the XY plane).
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathematics::*;
    /// let rot = Matrix3::from_rotation(PI / 2.0);
    /// assert_approx_eq!(Vector2::X * rot, Vector2::Y);
    /// assert_approx_eq!(Vector3::Y * rot, -Vector3::X);
    /// ```
    pub fn from_rotation(radians: Scalar) -> Self {
        let (sin, cos) = radians.sin_cos();
        #[rustfmt::skip]
        let mat = Self::from_rows([
            [cos,  sin, 0.0],
            [-sin, cos, 0.0],
            [0.0,  0.0, 1.0],
        ]);
        mat
    }

    /// Returns the [adjugate] of the matrix (the transpose of its cofactor matrix).
    ///
    /// [adjugate]: https://en.wikipedia.org/wiki/Adjugate_matrix
    pub fn adjugate(&self) -> Self {
        #[rustfmt::skip]
        let adj = Self::from_rows([
            [
                self.m22 * self.m33 - self.m23 * self.m32,
                self.m13 * self.m32 - self.m12 * self.m33,
                self.m12 * self.m23 - self.m13 * self.m22,
            ],
            [
                self.m23 * self.m31 - self.m21 * self.m33,
                self.m11 * self.m33 - self.m13 * self.m31,
                self.m13 * self.m21 - self.m11 * self.m23,
            ],
            [
                self.m21 * self.m32 - self.m22 * self.m31,
                self.m12 * self.m31 - self.m11 * self.m32,
                self.m11 * self.m22 - self.m12 * self.m21,
            ],
        ]);
        adj
    }

    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> Scalar {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.0;
        (a * e * i + b * f * g + c * d * h) - (c * e * g + a * f * h + b * d * i)
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
    /// let m = Matrix3::from_rotation(1.0) * Matrix3::from_translation(vec2(3.0, -1.0));
    /// assert_approx_eq!(m * m.inversed(), Matrix3::IDENTITY);
    /// ```
    pub fn inversed(&self) -> Self {
        let det = self.determinant();
        if det == 0.0 {
            log::warn!("inverting singular matrix {:?}", self);
        }
        self.adjugate() * (1.0 / det)
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, vec2, vec3, Matrix3, PI};

    #[test]
    fn determinant() {
        assert_eq!(Matrix3::ZERO.determinant(), 0.0);
        assert_eq!(Matrix3::IDENTITY.determinant(), 1.0);

        #[rustfmt::skip]
        let testmat = Matrix3::from_rows([
            [-2.0, -1.0,  2.0],
            [ 2.0,  1.0,  4.0],
            [-3.0,  3.0, -1.0],
        ]);
        assert_eq!(testmat.determinant(), 54.0);
        assert_eq!(testmat.transposed().determinant(), 54.0);
        assert_eq!(Matrix3::from_scale(vec2(2.0, 3.0)).determinant(), 6.0);
    }

    #[test]
    fn adjugate() {
        #[rustfmt::skip]
        let m = Matrix3::from_rows([
            [-3.0,  2.0, -5.0],
            [-1.0,  0.0, -2.0],
            [ 3.0, -4.0,  1.0],
        ]);
        #[rustfmt::skip]
        assert_eq!(m.adjugate(), Matrix3::from_rows([
            [-8.0, 18.0, -4.0],
            [-5.0, 12.0, -1.0],
            [ 4.0, -6.0,  2.0],
        ]));
        assert_approx_eq!(m * m.adjugate(), Matrix3::IDENTITY * m.determinant());
    }

    #[test]
    fn inverse() {
        assert_eq!(Matrix3::IDENTITY.inversed(), Matrix3::IDENTITY);

        let m = Matrix3::from_rotation(0.7) * Matrix3::from_scale(vec2(2.0, 0.5));
        assert_approx_eq!(m.inversed() * m, Matrix3::IDENTITY);
        assert_approx_eq!(m * m.inversed(), Matrix3::IDENTITY);
        assert_approx_eq!(m.inversed().inversed(), m);
    }

    #[test]
    fn singular_inverse_is_not_finite() {
        let inv = Matrix3::ZERO.inversed();
        assert!(inv.to_vec().iter().all(|e| !e.is_finite()));
    }

    #[test]
    fn transforms() {
        let m = Matrix3::from_scale(vec2(2.0, 3.0)) * Matrix3::from_translation(vec2(1.0, 1.0));
        assert_eq!(vec2(1.0, 1.0) * m, vec2(3.0, 4.0));

        let rot = Matrix3::from_rotation(PI);
        assert_approx_eq!(vec2(1.0, 2.0) * rot, vec2(-1.0, -2.0));
        assert_approx_eq!(vec3(0.0, 1.0, 5.0) * rot, vec3(0.0, -1.0, 5.0));
    }
}
