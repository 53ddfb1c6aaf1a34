use std::{array, fmt};

use crate::{approx::ApproxEq, error, Scalar};

mod ops;
mod view;

pub use view::{XY, XYZ, XYZW};

/// A 2-dimensional vector.
pub type Vector2 = Vector<2>;
/// A 3-dimensional vector.
pub type Vector3 = Vector<3>;
/// A 4-dimensional vector, also used for homogeneous coordinates and axis-angle rotations.
pub type Vector4 = Vector<4>;

/// An `N`-element row vector of [`Scalar`]s.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   their components.
/// - Vectors can be created from arrays using their [`From`] implementation, and from slices via
///   [`Vector::from_slice`] or [`TryFrom`].
/// - [`Vector::ZERO`] is a vector containing all-zeroes, and `Vector::X`, `Vector::Y`,
///   `Vector::Z` and `Vector::W` are unit vectors pointing in the given direction.
///
/// # Element Access
///
/// - Elements can be accessed as fields `x`, `y`, `z`, or `w`.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays.
/// - [`Vector3`] and [`Vector4`] have swizzle accessors like [`Vector3::xz`] and
///   [`Vector3::set_xz`] that read or write a subset of their components.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`] expose the raw
///   elements.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Vector<const N: usize>([Scalar; N]);

unsafe impl<const N: usize> bytemuck::Zeroable for Vector<N> {}
unsafe impl<const N: usize> bytemuck::Pod for Vector<N> {}

impl<const N: usize> Vector<N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([0.0; N]);

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> Scalar,
    {
        Self(array::from_fn(cb))
    }

    /// Creates a vector from a slice that must contain exactly `N` elements.
    ///
    /// # Panics
    ///
    /// This method will panic if `slice` does not have exactly `N` elements. Use the [`TryFrom`]
    /// implementation to handle that case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathematics::*;
    /// let v = Vector3::from_slice(&[1.0, 2.0, 3.0]);
    /// assert_eq!(v, vec3(1.0, 2.0, 3.0));
    /// assert!(Vector3::try_from(&[1.0, 2.0][..]).is_err());
    /// ```
    #[track_caller]
    pub fn from_slice(slice: &[Scalar]) -> Self {
        match Self::try_from(slice) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }

    /// Applies a closure to each element, returning a new vector.
    pub fn map<F>(self, f: F) -> Self
    where
        F: FnMut(Scalar) -> Scalar,
    {
        Self(self.0.map(f))
    }

    /// Combines the elements of `self` and `other` pairwise with a closure.
    pub fn zip_map<F>(self, other: Self, mut f: F) -> Self
    where
        F: FnMut(Scalar, Scalar) -> Scalar,
    {
        Self::from_fn(|i| f(self.0[i], other.0[i]))
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[Scalar; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [Scalar; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[Scalar] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Scalar] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathematics::*;
    /// assert_eq!(vec3(1.0, 2.0, 3.0).into_array(), [1.0, 2.0, 3.0]);
    /// ```
    #[inline]
    pub fn into_array(self) -> [Scalar; N] {
        self.0
    }

    /// Copies the elements into a [`Vec`].
    pub fn to_vec(&self) -> Vec<Scalar> {
        self.0.to_vec()
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathematics::*;
    /// assert_eq!(vec2(4.0, 0.0).length_squared(), 16.0);
    /// ```
    pub fn length_squared(&self) -> Scalar {
        self.dot(*self)
    }

    /// Returns the (Euclidean) length of this [`Vector`].
    pub fn length(&self) -> Scalar {
        self.length_squared().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// Vectors whose squared length is approximately 0 or approximately 1 are returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathematics::*;
    /// assert_eq!(vec3(0.0, 0.0, 4.0).normalized(), vec3(0.0, 0.0, 1.0));
    /// assert_eq!(Vector3::ZERO.normalized(), Vector3::ZERO);
    /// ```
    pub fn normalized(self) -> Self {
        let length_squared = self.length_squared();
        if length_squared.approx_eq(&0.0) || length_squared.approx_eq(&1.0) {
            return self;
        }
        self / length_squared.sqrt()
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathematics::*;
    /// assert_eq!(vec3(1.0, 3.0, -5.0).dot(vec3(4.0, -2.0, -1.0)), 3.0);
    /// ```
    pub fn dot(self, other: Self) -> Scalar {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(0.0, |acc, (a, b)| acc + a * b)
    }

    /// Linearly interpolates between `self` (at `t = 0`) and `other` (at `t = 1`).
    ///
    /// `t` is not clamped, so values outside of `[0, 1]` extrapolate.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathematics::*;
    /// let a = vec2(0.0, 10.0);
    /// let b = vec2(10.0, 0.0);
    /// assert_eq!(a.interpolated(b, 0.5), vec2(5.0, 5.0));
    /// assert_eq!(a.interpolated(b, 2.0), vec2(20.0, -10.0));
    /// ```
    pub fn interpolated(self, other: Self, t: Scalar) -> Self {
        self + (other - self) * t
    }

    /// Returns the negated vector.
    #[inline]
    pub fn inversed(self) -> Self {
        -self
    }
}

impl Vector<2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([1.0, 0.0]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([0.0, 1.0]);

    /// Appends another value to the vector, yielding a [`Vector3`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathematics::*;
    /// assert_eq!(vec2(-1.0, 2.0).extend(5.0), vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, z: Scalar) -> Vector3 {
        let [x, y] = self.0;
        vec3(x, y, z)
    }

    /// Computes the 2D cross product (the determinant of the 2x2 matrix with `self` and `other`
    /// as its rows).
    ///
    /// This is the Z coordinate of the 3D cross product of both vectors extended with Z=0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathematics::*;
    /// assert_eq!(Vector2::X.cross(Vector2::Y), 1.0);
    /// assert_eq!(Vector2::Y.cross(Vector2::X), -1.0);
    /// ```
    #[doc(alias = "perp_dot")]
    pub fn cross(self, other: Self) -> Scalar {
        self.x * other.y - self.y * other.x
    }

    /// Computes the signed angle in radians needed to rotate `self` onto `other`.
    ///
    /// The result lies in `(-π, π]` and is positive when `other` is counterclockwise of `self`
    /// (with the Y axis pointing up). Exactly equal vectors yield 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathematics::*;
    /// assert_approx_eq!(Vector2::X.angle_to(Vector2::Y), PI / 2.0);
    /// assert_approx_eq!(Vector2::Y.angle_to(Vector2::X), -PI / 2.0);
    /// ```
    pub fn angle_to(self, other: Self) -> Scalar {
        if self == other {
            return 0.0;
        }

        let a = self.normalized();
        let b = other.normalized();
        let dot = a.dot(b).clamp(-1.0, 1.0);
        a.cross(b).atan2(dot)
    }

    /// Rotates `self` counterclockwise around the origin.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathematics::*;
    /// assert_approx_eq!(Vector2::X.rotated(PI / 2.0), Vector2::Y);
    /// ```
    pub fn rotated(self, radians: Scalar) -> Self {
        let (sin, cos) = radians.sin_cos();
        vec2(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Rotates `self` counterclockwise around `pivot`.
    pub fn rotated_around(self, radians: Scalar, pivot: Self) -> Self {
        (self - pivot).rotated(radians) + pivot
    }
}

impl Vector<3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([1.0, 0.0, 0.0]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([0.0, 1.0, 0.0]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([0.0, 0.0, 1.0]);

    /// Removes the last element of this vector, yielding a [`Vector2`].
    pub fn truncate(self) -> Vector2 {
        let [x, y, _] = self.0;
        vec2(x, y)
    }

    /// Appends another value to the vector, yielding a [`Vector4`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathematics::*;
    /// assert_eq!(vec3(-1.0, 2.0, 3.5).extend(1.0), vec4(-1.0, 2.0, 3.5, 1.0));
    /// ```
    pub fn extend(self, w: Scalar) -> Vector4 {
        let [x, y, z] = self.0;
        vec4(x, y, z, w)
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both inputs and follows the right-hand rule: swapping the
    /// arguments inverts its direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathematics::*;
    /// assert_eq!(Vector3::X.cross(Vector3::Y), Vector3::Z);
    /// assert_eq!(Vector3::Y.cross(Vector3::X), -Vector3::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self {
        let [a1, a2, a3] = self.0;
        let [b1, b2, b3] = other.0;

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }

    /// Computes the smallest positive angle between `self` and `other`, in radians.
    ///
    /// Both vectors must have non-zero length for the result to be meaningful. Exactly equal
    /// vectors yield 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathematics::*;
    /// assert_approx_eq!(Vector3::Y.angle_to(Vector3::X), PI / 2.0);
    /// assert_approx_eq!(Vector3::Y.angle_to(-Vector3::Y), PI);
    /// ```
    pub fn angle_to(self, other: Self) -> Scalar {
        if self == other {
            return 0.0;
        }

        // Rounding can push the ratio for (anti)parallel vectors outside of the `acos` domain.
        let cos = self.dot(other) / (self.length() * other.length());
        cos.clamp(-1.0, 1.0).acos()
    }
}

impl Vector<4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([1.0, 0.0, 0.0, 0.0]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([0.0, 1.0, 0.0, 0.0]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([0.0, 0.0, 1.0, 0.0]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([0.0, 0.0, 0.0, 1.0]);

    /// Removes the last element of this vector, yielding a [`Vector3`].
    ///
    /// Unlike [`Vector4::to_vector3`], this does not perform a perspective divide.
    pub fn truncate(self) -> Vector3 {
        let [x, y, z, _] = self.0;
        vec3(x, y, z)
    }

    /// Converts homogeneous coordinates to a Cartesian [`Vector3`].
    ///
    /// The `x`, `y` and `z` components are divided by `w`, unless `w` is approximately 0, in which
    /// case they are returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathematics::*;
    /// assert_eq!(vec4(2.0, 4.0, 6.0, 2.0).to_vector3(), vec3(1.0, 2.0, 3.0));
    /// assert_eq!(vec4(2.0, 4.0, 6.0, 0.0).to_vector3(), vec3(2.0, 4.0, 6.0));
    /// ```
    pub fn to_vector3(self) -> Vector3 {
        if self.w.approx_eq(&0.0) {
            self.xyz()
        } else {
            self.xyz() / self.w
        }
    }
}

impl<const N: usize> Default for Vector<N> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> From<[Scalar; N]> for Vector<N> {
    #[inline]
    fn from(value: [Scalar; N]) -> Self {
        Self(value)
    }
}

impl<const N: usize> From<Vector<N>> for [Scalar; N] {
    #[inline]
    fn from(value: Vector<N>) -> Self {
        value.0
    }
}

impl<const N: usize> TryFrom<&[Scalar]> for Vector<N> {
    type Error = error::Error;

    fn try_from(slice: &[Scalar]) -> error::Result<Self> {
        error::check_len(slice, N)?;
        Ok(Self::from_fn(|i| slice[i]))
    }
}

impl From<Vector4> for Vector3 {
    /// Performs the homogeneous divide described in [`Vector4::to_vector3`].
    fn from(value: Vector4) -> Self {
        value.to_vector3()
    }
}

impl<const N: usize> fmt::Debug for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<const N: usize> fmt::Display for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            fmt::Display::fmt(elem, f)?;
        }
        write!(f, ")")
    }
}

impl<const N: usize> AsRef<[Scalar]> for Vector<N> {
    #[inline]
    fn as_ref(&self) -> &[Scalar] {
        &self.0
    }
}

impl<const N: usize> AsMut<[Scalar]> for Vector<N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [Scalar] {
        &mut self.0
    }
}

/// Constructs a [`Vector2`] from its two elements.
#[inline]
pub const fn vec2(x: Scalar, y: Scalar) -> Vector2 {
    Vector([x, y])
}

/// Constructs a [`Vector3`] from its three elements.
#[inline]
pub const fn vec3(x: Scalar, y: Scalar, z: Scalar) -> Vector3 {
    Vector([x, y, z])
}

/// Constructs a [`Vector4`] from its four elements.
#[inline]
pub const fn vec4(x: Scalar, y: Scalar, z: Scalar, w: Scalar) -> Vector4 {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, PI};

    use super::*;

    #[test]
    fn access() {
        assert_eq!(Vector3::X.x, 1.0);
        assert_eq!(Vector3::X[0], 1.0);
        assert_eq!(Vector3::X[1], 0.0);
        assert_eq!(Vector3::Y.y, 1.0);
        assert_eq!(Vector3::Y.z, 0.0);
        assert_eq!(Vector4::W.w, 1.0);

        let mut v = vec2(0.0, 1.0);
        v.x = 777.0;
        assert_eq!(v, [777.0, 1.0]);
        v[1] = 9.0;
        assert_eq!(v.y, 9.0);
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vector4::W), "(0, 0, 0, 1)");
        assert_eq!(format!("{:?}", Vector4::W), "(0.0, 0.0, 0.0, 1.0)");
        assert_eq!(format!("{:.1}", vec2(0.26, 1.0)), "(0.3, 1.0)");
    }

    #[test]
    fn arrays() {
        assert_eq!(Vec::from(vec2(2.0, 3.0).as_slice()), vec![2.0, 3.0]);
        assert_eq!(vec3(2.0, 3.0, 4.0).to_vec(), vec![2.0, 3.0, 4.0]);
        assert_eq!(<[Scalar; 4]>::from(vec4(1.0, 2.0, 3.0, 4.0)), [1.0, 2.0, 3.0, 4.0]);

        let mut v = vec3(1.0, 2.0, 3.0);
        assert_eq!(v.as_array(), &[1.0, 2.0, 3.0]);
        let slice: &[Scalar] = v.as_ref();
        assert_eq!(slice, &[1.0, 2.0, 3.0]);
        v.as_mut_array()[0] = 4.0;
        v.as_mut_slice()[1] = 5.0;
        let slice: &mut [Scalar] = v.as_mut();
        slice[2] = 6.0;
        assert_eq!(v, vec3(4.0, 5.0, 6.0));

        let err = Vector4::try_from(&[1.0, 2.0, 3.0][..]).unwrap_err();
        assert_eq!(
            err,
            error::Error::LengthMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    #[should_panic(expected = "array must contain 2 elements, contained 3")]
    fn from_slice_wrong_length() {
        Vector2::from_slice(&[1.0, 2.0, 3.0]);
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1.0, 3.0, -5.0).dot(vec3(4.0, -2.0, -1.0)), 3.0);
        assert_eq!(vec3(1.0, 3.0, -5.0).dot(vec3(1.0, 3.0, -5.0)), 35.0);
        assert_eq!(Vector2::X.dot(Vector2::Y), 0.0);
        assert_eq!(vec4(1.0, 2.0, 3.0, 4.0).dot(Vector4::W), 4.0);
    }

    #[test]
    fn cross() {
        assert_eq!(vec2(2.0, 3.0).cross(vec2(4.0, 5.0)), 2.0 * 5.0 - 3.0 * 4.0);
        assert_eq!(Vector3::Z.cross(Vector3::X), Vector3::Y);
        assert_eq!(
            vec3(1.0, 2.0, 3.0).cross(vec3(4.0, 5.0, 6.0)),
            vec3(-3.0, 6.0, -3.0)
        );
    }

    #[test]
    fn normalized() {
        assert_approx_eq!(vec2(3.0, 4.0).normalized(), vec2(0.6, 0.8));
        assert_approx_eq!(vec4(0.0, 0.0, 0.0, -7.0).normalized(), -Vector4::W);

        // Near-unit and near-zero vectors are returned as-is.
        let almost_unit = vec3(1.00001, 0.0, 0.0);
        assert_eq!(almost_unit.normalized(), almost_unit);
        let tiny = vec3(0.001, 0.0, 0.0);
        assert_eq!(tiny.normalized(), tiny);
    }

    #[test]
    fn angle_2d() {
        assert_approx_eq!(vec2(1.0, 1.0).angle_to(vec2(0.0, 1.0)), 0.785398185);
        assert_approx_eq!(vec2(0.0, 1.0).angle_to(vec2(1.0, 1.0)), -0.785398185);
        assert_approx_eq!(Vector2::X.angle_to(-Vector2::X), PI);
        assert_eq!(vec2(3.0, 4.0).angle_to(vec2(3.0, 4.0)), 0.0);
    }

    #[test]
    fn angle_3d() {
        assert_approx_eq!(vec3(0.0, 5.0, 5.0).angle_to(vec3(5.0, 5.0, 5.0)), 0.615479767);
        assert_approx_eq!(vec3(1.0, 0.0, 0.0).angle_to(vec3(1.0, 1.0, 0.0)), 0.785398185);
        assert_approx_eq!(Vector3::Y.angle_to(-Vector3::X), PI / 2.0);
        assert_eq!(vec3(1.0, 2.0, 3.0).angle_to(vec3(1.0, 2.0, 3.0)), 0.0);
    }

    #[test]
    fn angle_3d_parallel_does_not_leave_acos_domain() {
        let a = vec3(0.1, 0.2, 0.3);
        let b = a * 3.0;
        assert!(!a.angle_to(b).is_nan());
        assert_approx_eq!(a.angle_to(b), 0.0);
        assert_approx_eq!(a.angle_to(-b), PI);
    }

    #[test]
    fn interpolated() {
        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(3.0, 2.0, 1.0);
        assert_eq!(a.interpolated(b, 0.0), a);
        assert_eq!(a.interpolated(b, 1.0), b);
        assert_eq!(a.interpolated(b, -1.0), vec3(-1.0, 2.0, 5.0));
    }

    #[test]
    fn rotate_2d() {
        assert_approx_eq!(Vector2::Y.rotated(PI / 2.0), -Vector2::X);
        assert_approx_eq!(Vector2::X.rotated(PI), -Vector2::X);
        assert_approx_eq!(
            vec2(2.0, 1.0).rotated_around(PI / 2.0, vec2(1.0, 1.0)),
            vec2(1.0, 2.0)
        );
    }

    #[test]
    fn homogeneous() {
        assert_eq!(Vector3::from(vec4(3.0, 6.0, 9.0, 3.0)), vec3(1.0, 2.0, 3.0));
        assert_eq!(Vector3::from(vec4(3.0, 6.0, 9.0, 0.00001)), vec3(3.0, 6.0, 9.0));
        assert_eq!(vec4(3.0, 6.0, 9.0, 3.0).truncate(), vec3(3.0, 6.0, 9.0));
        assert_eq!(vec3(1.0, 2.0, 3.0).truncate(), vec2(1.0, 2.0));
    }

    #[test]
    fn normalized_is_idempotent() {
        let mut rng = fastrand::Rng::with_seed(0x5eed_0f_ec70);
        for _ in 0..1000 {
            let v = vec3(rng.f64() - 0.5, rng.f64() - 0.5, rng.f64() - 0.5) * 100.0;
            if v.length_squared().approx_eq(&0.0) {
                continue;
            }
            let n = v.normalized();
            assert_approx_eq!(n.length(), 1.0, "{:?}", v);
            assert_approx_eq!(n.normalized(), n, "{:?}", v);
        }
    }
}
