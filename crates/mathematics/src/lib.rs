//! Vectors, matrices and quaternions for graphics and simulation code.
//!
//! # Conventions
//!
//! - All values use [`Scalar`] (an alias of [`f64`]) elements and are plain [`Copy`] types. There
//!   is no shared state; every operation is a pure function of its inputs.
//! - Vectors are *row vectors*. Transforming a vector by a matrix is written `v * m`, and
//!   `v * (a * b) == (v * a) * b`, so in a product `a * b` the transform `a` is applied first.
//! - Matrices are stored row-major, and their elements can be accessed as fields named `m11`
//!   (row 1, column 1) through `m44`. Translation lives in the 4th row (`m41`, `m42`, `m43`).
//! - Comparisons of computed values should use [`ApproxEq`] instead of `==`, since rotations and
//!   inversions accumulate floating-point error. The default tolerance is [`EPSILON`].
//!
//! # Failure Modes
//!
//! Malformed input (slices of the wrong length, degenerate camera frustums) is a caller bug. The
//! infallible constructors panic on it, and each has a fallible twin returning [`Error`].
//!
//! Numerically degenerate input (singular matrices, gimbal lock) is *not* guarded against: the
//! result follows IEEE-754 and will contain infinities or NaNs.
//!
//! ```
//! # use mathematics::*;
//! let rotate = Matrix4::from_axis_angle(vec4(0.0, 1.0, 0.0, PI / 2.0));
//! let moved = rotate * Matrix4::from_translation(vec3(0.0, 0.0, 5.0));
//! assert_approx_eq!(Vector3::X * moved, vec3(0.0, 0.0, 4.0));
//! ```

pub mod approx;
mod error;
mod matrix;
mod quat;
mod scalar;
mod vector;

pub use approx::ApproxEq;
pub use error::*;
pub use matrix::*;
pub use quat::*;
pub use scalar::*;
pub use vector::*;
