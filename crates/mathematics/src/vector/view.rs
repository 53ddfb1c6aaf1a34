//! Named component access and swizzles.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::{vec2, vec3, Scalar, Vector, Vector2, Vector3, Vector4};

#[repr(C)]
pub struct XY {
    pub x: Scalar,
    pub y: Scalar,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZ {
    pub x: Scalar,
    pub y: Scalar,
    pub z: Scalar,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZW {
    pub x: Scalar,
    pub y: Scalar,
    pub z: Scalar,
    pub w: Scalar,
    _priv: (), // prevent external construction
}

impl Deref for Vector<2> {
    type Target = XY;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl DerefMut for Vector<2> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl Deref for Vector<3> {
    type Target = XYZ;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl DerefMut for Vector<3> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl Deref for Vector<4> {
    type Target = XYZW;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl DerefMut for Vector<4> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { mem::transmute(self) }
    }
}

/// Swizzles shared by [`Vector3`] and [`Vector4`].
macro_rules! swizzles {
    ($ty:ty) => {
        impl $ty {
            /// Returns the `x` and `y` components.
            pub fn xy(&self) -> Vector2 {
                vec2(self.x, self.y)
            }

            /// Returns the `x` and `z` components.
            pub fn xz(&self) -> Vector2 {
                vec2(self.x, self.z)
            }

            /// Returns the `y` and `z` components.
            pub fn yz(&self) -> Vector2 {
                vec2(self.y, self.z)
            }

            /// Overwrites the `x` and `y` components, leaving the others untouched.
            pub fn set_xy(&mut self, v: Vector2) {
                self.x = v.x;
                self.y = v.y;
            }

            /// Overwrites the `x` and `z` components, leaving the others untouched.
            pub fn set_xz(&mut self, v: Vector2) {
                self.x = v.x;
                self.z = v.y;
            }

            /// Overwrites the `y` and `z` components, leaving the others untouched.
            pub fn set_yz(&mut self, v: Vector2) {
                self.y = v.x;
                self.z = v.y;
            }
        }
    };
}

swizzles!(Vector3);
swizzles!(Vector4);

impl Vector4 {
    /// Returns the `x`, `y` and `z` components without dividing by `w`.
    pub fn xyz(&self) -> Vector3 {
        vec3(self.x, self.y, self.z)
    }

    /// Overwrites the `x`, `y` and `z` components, leaving `w` untouched.
    pub fn set_xyz(&mut self, v: Vector3) {
        self.x = v.x;
        self.y = v.y;
        self.z = v.z;
    }
}
