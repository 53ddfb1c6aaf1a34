use std::ops::{Deref, DerefMut};

use crate::XYZW;

use super::Quaternion;

impl Deref for Quaternion {
    type Target = XYZW;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.vec
    }
}

impl DerefMut for Quaternion {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.vec
    }
}
