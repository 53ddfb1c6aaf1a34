//! View and projection matrices (OpenGL clip-space conventions).

use crate::{error, Error, Matrix4, Scalar, Vector3, Vector4};

impl Matrix4 {
    /// Creates a right-handed perspective projection matrix mapping depth to `[-1, 1]`.
    ///
    /// `fovy` is the vertical field of view in radians, `aspect` is the width divided by the
    /// height of the viewport.
    ///
    /// # Panics
    ///
    /// This method will panic unless `far > near`, `fovy > 0` and `aspect > 0`. Use
    /// [`Matrix4::try_perspective`] to handle that case.
    #[track_caller]
    pub fn perspective(fovy: Scalar, aspect: Scalar, near: Scalar, far: Scalar) -> Self {
        match Self::try_perspective(fovy, aspect, near, far) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }

    /// Creates a perspective projection matrix, or returns an error if the parameters don't
    /// describe a viewing frustum.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathematics::*;
    /// assert!(Matrix4::try_perspective(PI / 4.0, 1.5, 0.1, 100.0).is_ok());
    /// assert_eq!(
    ///     Matrix4::try_perspective(PI / 4.0, 1.5, 100.0, 0.1),
    ///     Err(Error::DegenerateFrustum("far value must be greater than near")),
    /// );
    /// ```
    pub fn try_perspective(
        fovy: Scalar,
        aspect: Scalar,
        near: Scalar,
        far: Scalar,
    ) -> error::Result<Self> {
        let dz = far - near;
        if !(dz > 0.0) {
            return Err(Error::DegenerateFrustum("far value must be greater than near"));
        }
        if !(fovy > 0.0) {
            return Err(Error::DegenerateFrustum(
                "field of view must be nonzero and positive",
            ));
        }
        if !(aspect > 0.0) {
            return Err(Error::DegenerateFrustum(
                "aspect ratio must be nonzero and positive",
            ));
        }

        let (sin, cos) = (fovy / 2.0).sin_cos();
        let cot = cos / sin;

        #[rustfmt::skip]
        let mat = Self::from_rows([
            [cot / aspect, 0.0, 0.0,                       0.0],
            [0.0,          cot, 0.0,                       0.0],
            [0.0,          0.0, -(far + near) / dz,        -1.0],
            [0.0,          0.0, -2.0 * near * far / dz,    0.0],
        ]);
        Ok(mat)
    }

    /// Creates a perspective projection matrix from a horizontal field of view.
    ///
    /// The vertical field of view is approximated as `fovx / aspect`.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`Matrix4::perspective`].
    #[track_caller]
    pub fn perspective_fovx(fovx: Scalar, aspect: Scalar, near: Scalar, far: Scalar) -> Self {
        Self::perspective(fovx / aspect, aspect, near, far)
    }

    /// Creates a perspective projection matrix from both fields of view.
    ///
    /// The aspect ratio is taken to be `fovx / fovy`.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`Matrix4::perspective`].
    #[track_caller]
    pub fn perspective_fovx_fovy(fovx: Scalar, fovy: Scalar, near: Scalar, far: Scalar) -> Self {
        Self::perspective(fovy, fovx / fovy, near, far)
    }

    /// Creates an orthographic projection matrix with a fixed depth mapping (`m33 = -1`).
    pub fn orthographic(top: Scalar, right: Scalar, bottom: Scalar, left: Scalar) -> Self {
        let dx = right - left;
        let dy = top - bottom;

        #[rustfmt::skip]
        let mat = Self::from_rows([
            [2.0 / dx,              0.0,                   0.0,  0.0],
            [0.0,                   2.0 / dy,              0.0,  0.0],
            [0.0,                   0.0,                   -1.0, 0.0],
            [-(right + left) / dx,  -(top + bottom) / dy,  0.0,  1.0],
        ]);
        mat
    }

    /// Creates an orthographic projection matrix mapping depths between `near` and `far` to
    /// `[-1, 1]`.
    pub fn orthographic_with_depth(
        top: Scalar,
        right: Scalar,
        bottom: Scalar,
        left: Scalar,
        near: Scalar,
        far: Scalar,
    ) -> Self {
        let dz = far - near;
        let mut mat = Self::orthographic(top, right, bottom, left);
        mat.m33 = -2.0 / dz;
        mat.m43 = -(far + near) / dz;
        mat
    }

    /// Creates a view matrix for a camera at `eye` looking towards `center`.
    ///
    /// `up` must not be parallel to the viewing direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathematics::*;
    /// let view = Matrix4::look_at(vec3(0.0, 0.0, 5.0), Vector3::ZERO, Vector3::Y);
    /// assert_approx_eq!(Vector3::ZERO * view, vec3(0.0, 0.0, -5.0));
    /// ```
    pub fn look_at(eye: Vector3, center: Vector3, up: Vector3) -> Self {
        let f = (center - eye).normalized();
        let s = f.cross(up).normalized();
        let u = s.cross(f);

        #[rustfmt::skip]
        let mat = Self::from_rows([
            [s.x,          u.x,          -f.x,       0.0],
            [s.y,          u.y,          -f.y,       0.0],
            [s.z,          u.z,          -f.z,       0.0],
            [-s.dot(eye),  -u.dot(eye),  f.dot(eye), 1.0],
        ]);
        mat
    }

    /// Maps an object-space location to window coordinates (world to screen).
    ///
    /// `viewport` holds the window origin in `x`/`y` and its size in `z`/`w`. The returned `z`
    /// coordinate is the depth in `[0, 1]`.
    ///
    /// This currently always returns [`Some`]. A location on the camera plane produces
    /// non-finite coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathematics::*;
    /// let model = Matrix4::from_translation(vec3(0.0, 0.0, -3.0));
    /// let proj = Matrix4::perspective(PI / 4.0, 1.0, 0.1, 10.0);
    /// let viewport = vec4(0.0, 0.0, 600.0, 600.0);
    /// let win = Matrix4::project(Vector3::ZERO, model, proj, viewport).unwrap();
    /// assert_approx_eq!(win.xy(), vec2(300.0, 300.0));
    /// ```
    pub fn project(
        location: Vector3,
        model: Matrix4,
        proj: Matrix4,
        viewport: Vector4,
    ) -> Option<Vector3> {
        let mut tmp = location.extend(1.0) * model * proj;
        if tmp.w == 0.0 {
            log::debug!("projecting {:?} onto the camera plane", location);
        }

        let w = tmp.w;
        tmp /= w;
        tmp.x = tmp.x * 0.5 + 0.5;
        tmp.y = tmp.y * 0.5 + 0.5;
        tmp.z = tmp.z * 0.5 + 0.5;

        tmp.x = tmp.x * viewport.z + viewport.x;
        tmp.y = tmp.y * viewport.w + viewport.y;

        Some(tmp.xyz())
    }

    /// Maps window coordinates back to an object-space location (screen to world).
    ///
    /// This is the inverse of [`Matrix4::project`] and takes the same arguments. The matrix
    /// `model * proj` is inverted, so a singular combination produces non-finite coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathematics::*;
    /// let model = Matrix4::from_translation(vec3(0.0, 0.0, -3.0));
    /// let proj = Matrix4::perspective(PI / 4.0, 1.0, 0.1, 10.0);
    /// let viewport = vec4(0.0, 0.0, 600.0, 600.0);
    /// let win = Matrix4::project(vec3(1.0, -1.0, 0.5), model, proj, viewport).unwrap();
    /// let obj = Matrix4::unproject(win, model, proj, viewport).unwrap();
    /// assert_approx_eq!(obj, vec3(1.0, -1.0, 0.5));
    /// ```
    pub fn unproject(
        window: Vector3,
        model: Matrix4,
        proj: Matrix4,
        viewport: Vector4,
    ) -> Option<Vector3> {
        let inversed = (model * proj).inversed();

        let mut tmp = window.extend(1.0);
        tmp.x = (tmp.x - viewport.x) / viewport.z;
        tmp.y = (tmp.y - viewport.y) / viewport.w;
        tmp.x = tmp.x * 2.0 - 1.0;
        tmp.y = tmp.y * 2.0 - 1.0;
        tmp.z = tmp.z * 2.0 - 1.0;

        let mut obj = tmp * inversed;
        let w = obj.w;
        if w == 0.0 {
            log::debug!("unprojecting {:?} to a point at infinity", window);
        }
        obj /= w;

        Some(obj.xyz())
    }
}
