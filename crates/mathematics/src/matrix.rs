use std::{array, fmt};

use itertools::Itertools;

use crate::{error, Scalar, Vector};

mod camera;
mod mat3;
mod mat4;
mod ops;
mod view;

pub use view::{M3, M4};

/// A 3x3 matrix, used for 2D affine transforms and 3D rotations and scales.
pub type Matrix3 = Matrix<3>;
/// A 4x4 matrix, used for 3D affine transforms and camera projections.
pub type Matrix4 = Matrix<4>;

/// A row-major square matrix with `N` rows and `N` columns of [`Scalar`]s.
///
/// # Construction
///
/// There are several ways to create a [`Matrix`]:
///
/// - [`Matrix::from_rows`] fills a matrix with raw elements, given in reading order.
/// - [`Matrix::from_fn`] will create each element by invoking a closure with its row and column.
/// - [`Matrix::from_slice`] and the [`TryFrom`] impl accept a flat row-major slice of `N * N`
///   elements.
/// - [`Matrix3`] and [`Matrix4`] have transform builders like [`Matrix4::from_translation`] and
///   camera builders like [`Matrix4::perspective`].
///
/// Additionally, some associated constants for commonly used matrices are defined:
///
/// - [`Matrix::ZERO`] is a matrix with every element set to 0.
/// - [`Matrix::IDENTITY`] is a matrix with 1 on its diagonal and 0 everywhere else.
///
/// # Element Access
///
/// Elements are available as fields named after their 1-based row and column, so `m.m12` is the
/// element in row 1, column 2.
///
/// [`Matrix`] also implements the [`Index`] and [`IndexMut`] traits for tuples of
/// `(usize, usize)`. The first element of the tuple is the *row*, the second is the *column*,
/// matching common mathematical notation. Indices are 0-based.
///
/// ```
/// # use mathematics::*;
/// let mut mat = Matrix3::IDENTITY;
/// mat[(0, 1)] = 4.0;
/// assert_eq!(mat.m12, 4.0);
/// mat.m33 = 2.0;
/// assert_eq!(mat[(2, 2)], 2.0);
/// ```
///
/// # Transforms
///
/// Vectors are treated as *row vectors* and transformed with `v * m`. A product `a * b` performs
/// `a` first and then `b`, and the translation of an affine transform is stored in the last row.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Matrix<const N: usize>([[Scalar; N]; N]);

unsafe impl<const N: usize> bytemuck::Zeroable for Matrix<N> {}
unsafe impl<const N: usize> bytemuck::Pod for Matrix<N> {}

impl<const N: usize> Matrix<N> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([[0.0; N]; N]);

    /// The identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else.
    ///
    /// Multiplying any vector or matrix with this matrix returns it unchanged.
    pub const IDENTITY: Self = {
        let mut rows = [[0.0; N]; N];
        let mut i = 0;
        while i < N {
            rows[i][i] = 1.0;
            i += 1;
        }
        Self(rows)
    };

    /// Creates a [`Matrix`] from its rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathematics::*;
    /// let mat = Matrix3::from_rows([
    ///     [1.0, 2.0, 3.0],
    ///     [4.0, 5.0, 6.0],
    ///     [7.0, 8.0, 9.0],
    /// ]);
    /// assert_eq!(mat.m23, 6.0);
    /// assert_eq!(mat.m32, 8.0);
    /// ```
    #[inline]
    pub const fn from_rows(rows: [[Scalar; N]; N]) -> Self {
        Self(rows)
    }

    /// Creates a [`Matrix`] by invoking a closure with the row and column of each element.
    ///
    /// This mirrors [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathematics::*;
    /// let mat = Matrix3::from_fn(|row, col| (row * 10 + col) as Scalar);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0.0,  1.0,  2.0],
    ///     [10.0, 11.0, 12.0],
    ///     [20.0, 21.0, 22.0],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> Scalar,
    {
        Self(array::from_fn(|row| array::from_fn(|col| cb(row, col))))
    }

    /// Creates a matrix from a row-major slice that must contain exactly `N * N` elements.
    ///
    /// # Panics
    ///
    /// This method will panic if `slice` has the wrong length. Use the [`TryFrom`] implementation
    /// to handle that case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathematics::*;
    /// let flat = Matrix3::IDENTITY.to_vec();
    /// assert_eq!(Matrix3::from_slice(&flat), Matrix3::IDENTITY);
    /// assert!(Matrix4::try_from(&flat[..]).is_err());
    /// ```
    #[track_caller]
    pub fn from_slice(slice: &[Scalar]) -> Self {
        match Self::try_from(slice) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F>(self, mut f: F) -> Self
    where
        F: FnMut(Scalar) -> Scalar,
    {
        Self(self.0.map(|row| row.map(&mut f)))
    }

    /// Combines the elements of `self` and `other` pairwise with a closure.
    pub fn zip_map<F>(self, other: Self, mut f: F) -> Self
    where
        F: FnMut(Scalar, Scalar) -> Scalar,
    {
        Self::from_fn(|row, col| f(self.0[row][col], other.0[row][col]))
    }

    /// Returns row `index` as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn row(&self, index: usize) -> Vector<N> {
        self.0[index].into()
    }

    /// Returns column `index` as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn column(&self, index: usize) -> Vector<N> {
        Vector::from_fn(|row| self.0[row][index])
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathematics::*;
    /// let mat = Matrix3::IDENTITY;
    /// assert_eq!(mat.get(0, 0), Some(&1.0));
    /// assert_eq!(mat.get(1, 0), Some(&0.0));
    /// assert_eq!(mat.get(3, 0), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&Scalar> {
        self.0.get(row).and_then(|row| row.get(col))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Scalar> {
        self.0.get_mut(row).and_then(|row| row.get_mut(col))
    }

    /// Returns the rows of this matrix as nested arrays.
    #[inline]
    pub fn into_rows(self) -> [[Scalar; N]; N] {
        self.0
    }

    /// Copies the elements into a [`Vec`] in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathematics::*;
    /// let mat = Matrix3::from_rows([
    ///     [1.0, 2.0, 3.0],
    ///     [4.0, 5.0, 6.0],
    ///     [7.0, 8.0, 9.0],
    /// ]);
    /// assert_eq!(mat.to_vec(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    /// ```
    pub fn to_vec(&self) -> Vec<Scalar> {
        self.0.iter().flatten().copied().collect()
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathematics::*;
    /// let mat = Matrix3::from_rows([
    ///     [0.0, 1.0, 2.0],
    ///     [3.0, 4.0, 5.0],
    ///     [6.0, 7.0, 8.0],
    /// ]).transposed();
    /// assert_eq!(mat, Matrix3::from_rows([
    ///     [0.0, 3.0, 6.0],
    ///     [1.0, 4.0, 7.0],
    ///     [2.0, 5.0, 8.0],
    /// ]));
    /// ```
    pub fn transposed(self) -> Self {
        Self::from_fn(|row, col| self.0[col][row])
    }

    /// Linearly interpolates every element between `self` (at `t = 0`) and `other` (at `t = 1`).
    ///
    /// `t` is not clamped. Interpolating rotation matrices this way does not yield a rotation;
    /// use [`Quaternion::interpolated`][crate::Quaternion::interpolated] for that.
    pub fn interpolated(self, other: Self, t: Scalar) -> Self {
        self.zip_map(other, |a, b| a + (b - a) * t)
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathematics::*;
    /// assert_eq!(Matrix3::IDENTITY.trace(), 3.0);
    /// assert_eq!(Matrix4::from_scale(vec3(1.0, 2.0, 3.0)).trace(), 7.0);
    /// ```
    pub fn trace(&self) -> Scalar {
        (0..N).fold(0.0, |acc, i| acc + self.0[i][i])
    }
}

impl<const N: usize> Default for Matrix<N> {
    /// Returns [`Matrix::IDENTITY`].
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<const N: usize> From<[[Scalar; N]; N]> for Matrix<N> {
    #[inline]
    fn from(rows: [[Scalar; N]; N]) -> Self {
        Self(rows)
    }
}

impl<const N: usize> TryFrom<&[Scalar]> for Matrix<N> {
    type Error = error::Error;

    fn try_from(slice: &[Scalar]) -> error::Result<Self> {
        error::check_len(slice, N * N)?;
        Ok(Self::from_fn(|row, col| slice[row * N + col]))
    }
}

impl<const N: usize> fmt::Debug for Matrix<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, const N: usize>(&'a [Scalar; N]);
        impl<'a, const N: usize> fmt::Debug for FormatRow<'a, N> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (col, elem) in self.0.iter().enumerate() {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", elem)?;
                }
                write!(f, "]")
            }
        }

        let mut list = f.debug_list();
        for row in &self.0 {
            list.entry(&FormatRow(row));
        }
        list.finish()
    }
}

/// Prints each row on its own line, with elements rounded to one decimal.
impl<const N: usize> fmt::Display for Matrix<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self
            .0
            .iter()
            .map(|row| row.iter().map(|elem| format!("{:.1}", elem)).join(", "))
            .join(",\n");
        f.write_str(&rows)
    }
}
