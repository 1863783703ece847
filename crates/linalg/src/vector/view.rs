//! Named element access: `x`/`y`/`z`/`w` fields and the `xy`/`xyz` prefix accessors.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use bytemuck::TransparentWrapper;

use crate::Vector;

#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
    _priv: (), // prevent external construction
}

impl<T> Deref for Vector<T, 2> {
    type Target = XY<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl<T> DerefMut for Vector<T, 2> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl<T> Deref for Vector<T, 3> {
    type Target = XYZ<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl<T> DerefMut for Vector<T, 3> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl<T> Deref for Vector<T, 4> {
    type Target = XYZW<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl<T> DerefMut for Vector<T, 4> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { mem::transmute(self) }
    }
}

/// Borrows the first `M` elements of `v` as a shorter vector.
fn prefix<T, const N: usize, const M: usize>(v: &Vector<T, N>) -> &Vector<T, M> {
    match <&[T; M]>::try_from(&v.0[..M]) {
        Ok(array) => Vector::wrap_ref(array),
        Err(_) => unreachable!("a `..{M}` slice has {M} elements"),
    }
}

fn prefix_mut<T, const N: usize, const M: usize>(v: &mut Vector<T, N>) -> &mut Vector<T, M> {
    match <&mut [T; M]>::try_from(&mut v.0[..M]) {
        Ok(array) => Vector::wrap_mut(array),
        Err(_) => unreachable!("a `..{M}` slice has {M} elements"),
    }
}

impl<T> Vector<T, 3> {
    /// Borrows the X and Y elements as a [`Vector`] of length 2.
    ///
    /// Writes through [`Vector::xy_mut`] are visible in `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg::*;
    /// let mut v = vec3(1i32, 2, 3);
    /// assert_eq!(*v.xy(), vec2(1, 2));
    ///
    /// *v.xy_mut() *= 10i32;
    /// assert_eq!(v, vec3(10, 20, 3));
    /// ```
    #[inline]
    pub fn xy(&self) -> &Vector<T, 2> {
        prefix(self)
    }

    /// Mutably borrows the X and Y elements as a [`Vector`] of length 2.
    #[inline]
    pub fn xy_mut(&mut self) -> &mut Vector<T, 2> {
        prefix_mut(self)
    }
}

impl<T> Vector<T, 4> {
    /// Borrows the X and Y elements as a [`Vector`] of length 2.
    #[inline]
    pub fn xy(&self) -> &Vector<T, 2> {
        prefix(self)
    }

    /// Mutably borrows the X and Y elements as a [`Vector`] of length 2.
    #[inline]
    pub fn xy_mut(&mut self) -> &mut Vector<T, 2> {
        prefix_mut(self)
    }

    /// Borrows the X, Y and Z elements as a [`Vector`] of length 3.
    ///
    /// For quaternions, this is the vector part.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg::*;
    /// let mut q = vec4(1.0, 2.0, 3.0, 4.0);
    /// assert_eq!(q.xyz().length2(), 14.0);
    ///
    /// q.xyz_mut().z = -3.0;
    /// assert_eq!(q, vec4(1.0, 2.0, -3.0, 4.0));
    /// ```
    #[inline]
    pub fn xyz(&self) -> &Vector<T, 3> {
        prefix(self)
    }

    /// Mutably borrows the X, Y and Z elements as a [`Vector`] of length 3.
    #[inline]
    pub fn xyz_mut(&mut self) -> &mut Vector<T, 3> {
        prefix_mut(self)
    }
}
