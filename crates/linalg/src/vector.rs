use std::{array, fmt, slice};

use crate::{
    traits::{Float, Number, Sqrt},
    Cast, MinMax, Modular, Negate, One, Promote, Promoted, Trig, Zero,
};

mod ops;
mod view;

pub use view::{XY, XYZ, XYZW};

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;

/// An `N`-element column vector storing elements of type `T`.
///
/// # Construction
///
/// There is a variety of ways to create a [`Vector`]:
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - [`Vector::splat`] creates a vector by copying the given value into each element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - [`Vector::from_slice`] copies the first `N` elements out of a slice. The [`TryFrom`] impl for
///   slices is the checked variant, which requires the length to match exactly.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - [`Vector::cast`] converts the element type like C's `static_cast`.
/// - `extend` appends a trailing element to a vector with one dimension less.
/// - The [`Default`] implementation of [`Vector`] initializes each element with its default value,
///   which is zero for every numeric element type (and `false` for `bool`).
/// - [`Vector::ZERO`] is a vector containing all-zeroes.
/// - For vectors with up to 4 dimensions, `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W` can
///   be used to obtain unit vectors pointing in the given direction.
///
/// # Element Access
///
/// Vector elements can be accessed and inspected in a few different ways:
///
/// - For vectors with 2 to 4 dimensions, elements can be accessed as fields `x`, `y`, `z`, or `w`.
/// - The prefix accessors `xy`, `xyz` (and their `_mut` variants) borrow the leading elements of
///   a longer vector as a shorter [`Vector`].
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays. Out-of-bounds indices
///   panic; [`Vector::get`] and [`Vector::get_mut`] are the checked alternatives.
/// - The [`AsRef`] and [`AsMut`] impls can be used to access the underlying elements as a slice or
///   array.
/// - [`Vector::iter`], [`Vector::iter_mut`] and the [`IntoIterator`] impls visit the elements in
///   index order.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow safe transmutation when
///   the element type `T` also allows this.
///
/// # Operators
///
/// Arithmetic, bitwise and shift operators work element by element, either between two vectors of
/// the same length or between a vector and a scalar (on either side). The element type of the
/// result follows C's promotion rules, see the [`promote`][mod@crate::promote] module.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>(pub(crate) [T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}
// Safety: `Vector` is `#[repr(transparent)]` over its array.
unsafe impl<T, const N: usize> bytemuck::TransparentWrapper<[T; N]> for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    ///
    /// This uses [`T::ZERO`][Zero::ZERO] as the value for all elements.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    ///
    /// Interpreted as a quaternion, this is the identity rotation.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg::*;
    /// let v = Vector::from_fn(|i| i + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Creates a vector from the first `N` elements of `slice`.
    ///
    /// Extra elements are ignored. Use the [`TryFrom`] impl to require an exact length instead.
    ///
    /// # Panics
    ///
    /// Panics if `slice` has fewer than `N` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg::*;
    /// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
    /// let v: Vector<f32, 3> = Vector::from_slice(&data[1..]);
    /// assert_eq!(v, vec3(2.0, 3.0, 4.0));
    /// ```
    #[track_caller]
    pub fn from_slice(slice: &[T]) -> Self
    where
        T: Copy,
    {
        assert!(
            slice.len() >= N,
            "cannot create a {}-element vector from a slice of length {}",
            N,
            slice.len(),
        );
        Self::from_fn(|i| slice[i])
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg::*;
    /// let a = vec3(1, 2, 3);
    /// let b = vec3("1", "2", "3");
    /// let v = a.zip(b);
    /// assert_eq!(v, vec3((1, "1"), (2, "2"), (3, "3")));
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut other = other.0.into_iter();
        // Both arrays have exactly `N` elements, so `other` cannot run out.
        Vector(self.0.map(|a| match other.next() {
            Some(b) => (a, b),
            None => unreachable!(),
        }))
    }

    /// Converts every element to `U`, like a C `static_cast`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg::*;
    /// assert_eq!(vec3(1.9f32, -1.9, 300.0).cast::<u8>(), vec3(1, 0, 255));
    /// assert_eq!(vec2(-1i32, 7).cast::<f64>(), vec2(-1.0, 7.0));
    /// ```
    #[inline]
    pub fn cast<U>(self) -> Vector<U, N>
    where
        T: Cast<U>,
    {
        self.map(Cast::cast)
    }

    /// Returns a reference to the element at `index`, or [`None`] if it is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or [`None`] if it is out of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.0.get_mut(index)
    }

    /// Returns an iterator over references to the elements, in index order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Returns an iterator over mutable references to the elements, in index order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg::*;
    /// let mut v = vec3(1, 2, 3);
    /// for elem in v.iter_mut() {
    ///     *elem *= 2;
    /// }
    /// assert_eq!(v, vec3(2, 4, 6));
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.0.iter_mut()
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg::*;
    /// assert_eq!(vec3(1, 2, 3).as_array(), &[1, 2, 3]);
    /// ```
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg::*;
    /// let mut v = vec3(1, 2, 3);
    /// v.as_mut_slice()[1] = 777;
    /// assert_eq!(v, [1, 777, 3]);
    /// ```
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    ///
    /// There is an equivalent [`From`] impl that can also be used, but this method is often shorter
    /// and requires no type annotation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg::*;
    /// assert_eq!(vec3(1, 2, 3).into_array(), [1, 2, 3]);
    /// ```
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Applies integer promotion to every element (C's unary `+`).
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg::*;
    /// let v: Vector<i32, 2> = vec2(200u8, 7).promote();
    /// assert_eq!(v, vec2(200, 7));
    /// ```
    #[inline]
    pub fn promote(self) -> Vector<Promoted<T>, N>
    where
        T: Promote,
    {
        self.map(Promote::promote)
    }

    /// Bitwise complement of every (promoted) element (C's unary `~`).
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg::*;
    /// assert_eq!(vec2(0u8, 255).compl(), vec2(-1i32, -256));
    /// assert_eq!(vec2(0u32, 1).compl(), vec2(u32::MAX, u32::MAX - 1));
    /// ```
    #[inline]
    pub fn compl(self) -> Vector<Promoted<T>, N>
    where
        T: Promote,
        Promoted<T>: std::ops::Not<Output = Promoted<T>>,
    {
        self.map(|x| !x.promote())
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// Geometrically, the dot product provides information about the relative
    /// angle of the two vectors:
    /// - If the dot product is greater than zero, the angle between the vectors
    ///   is less than 90°.
    /// - If the dot product is equal to zero, their angle is exactly 90°.
    /// - If the dot product is negative, the angle is greater than 90°.
    ///
    /// Also see [`Vector::angle`] for computing the exact angle between them.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.zip(other).sum_by(|(a, b)| a.modular_mul(b))
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg::*;
    /// assert_eq!(vec2(4, 0).length2(), 16);
    /// ```
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg::*;
    /// assert_eq!(vec2(3.0, 4.0).length(), 5.0);
    /// ```
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Returns the squared distance between the points `self` and `other`.
    pub fn distance2(self, other: Self) -> T
    where
        T: Number,
    {
        self.zip(other).map(|(a, b)| b.modular_sub(a)).length2()
    }

    /// Returns the distance between the points `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg::*;
    /// assert_eq!(vec2(1.0, 1.0).distance(vec2(4.0, 5.0)), 5.0);
    /// ```
    pub fn distance(self, other: Self) -> T
    where
        T: Number + Sqrt,
    {
        self.distance2(other).sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// A zero-length vector produces non-finite elements for floating-point `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        let len = self.length();
        self.map(|x| x / len)
    }

    /// Computes the smallest positive angle between `self` and `other`, in radians.
    ///
    /// Both `self` and `other` must have non-zero length for the result to be meaningful.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg::*;
    /// # use approx::assert_relative_eq;
    /// use std::f32::consts::TAU;
    ///
    /// let a = vec3(0.0f32, 2.0, 0.0);
    /// let b = vec3(3.0f32, 0.0, 0.0);
    /// assert_relative_eq!(a.angle(b), TAU / 4.0);  // quarter turn
    /// assert_relative_eq!(a.angle(-a), TAU / 2.0); // half a turn
    /// ```
    pub fn angle(self, other: Self) -> T
    where
        T: Number + Trig + Sqrt,
    {
        let dot = self.dot(other);
        (dot / (self.length() * other.length())).acos()
    }

    /// Computes the angle between the *unit* vectors `self` and `other`, in radians.
    ///
    /// The dot product is clamped into `[-1, 1]` first, so rounding errors in the inputs never
    /// produce NaN.
    pub fn uangle(self, other: Self) -> T
    where
        T: Float,
    {
        let d = self.dot(other);
        if d > T::ONE {
            T::ZERO
        } else {
            MinMax::max(d, -T::ONE).acos()
        }
    }

    /// Linearly interpolates between `self` and `other`, computing `self + (other - self) * t`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg::*;
    /// let a = vec2(0.0, 10.0);
    /// let b = vec2(10.0, 20.0);
    /// assert_eq!(a.lerp(b, 0.25), vec2(2.5, 12.5));
    /// ```
    pub fn lerp(self, other: Self, t: T) -> Self
    where
        T: Number,
    {
        self.zip(other).map(|(a, b)| a + (b - a) * t)
    }

    /// Linearly interpolates between `self` and `other`, then normalizes the result.
    pub fn nlerp(self, other: Self, t: T) -> Self
    where
        T: Number + Sqrt,
    {
        self.lerp(other, t).normalize()
    }

    /// Spherical linear interpolation between the unit vectors `self` and `other`.
    ///
    /// Moves along the great circle connecting both vectors at constant angular speed. No sign
    /// correction is applied; see [`qslerp`][crate::qslerp] for the shortest-path variant used
    /// for quaternions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg::*;
    /// # use approx::assert_relative_eq;
    /// let x = vec2(1.0f32, 0.0);
    /// let y = vec2(0.0f32, 1.0);
    /// let half = std::f32::consts::FRAC_1_SQRT_2;
    /// assert_relative_eq!(x.slerp(y, 0.5), vec2(half, half));
    /// ```
    pub fn slerp(self, other: Self, t: T) -> Self
    where
        T: Float,
    {
        let th = self.uangle(other);
        if th == T::ZERO {
            return self;
        }
        let s = th.sin();
        let wa = (th * (T::ONE - t)).sin() / s;
        let wb = (th * t).sin() / s;
        self.zip(other).map(|(a, b)| a * wa + b * wb)
    }

    /// Adds up all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg::*;
    /// assert_eq!(vec4(1, 2, 3, 4).sum(), 10);
    /// ```
    pub fn sum(self) -> T
    where
        T: Number,
    {
        self.sum_by(|x| x)
    }

    /// Multiplies all elements together.
    pub fn product(self) -> T
    where
        T: Number,
    {
        self.0.into_iter().fold(T::ONE, Modular::modular_mul)
    }

    fn sum_by<U, F>(self, f: F) -> U
    where
        U: Number,
        F: FnMut(T) -> U,
    {
        self.0.into_iter().map(f).fold(U::ZERO, Modular::modular_add)
    }

    /// Returns the index of the smallest element.
    ///
    /// Ties resolve to the element with the lowest index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg::*;
    /// assert_eq!(vec4(3, 1, 1, 5).argmin(), 1);
    /// ```
    pub fn argmin(&self) -> usize
    where
        T: PartialOrd,
    {
        (1..N).fold(0, |best, i| if self[i] < self[best] { i } else { best })
    }

    /// Returns the index of the largest element.
    ///
    /// Ties resolve to the element with the lowest index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg::*;
    /// assert_eq!(vec4(3, 5, 1, 5).argmax(), 1);
    /// ```
    pub fn argmax(&self) -> usize
    where
        T: PartialOrd,
    {
        (1..N).fold(0, |best, i| if self[i] > self[best] { i } else { best })
    }

    /// Returns the smallest element.
    ///
    /// # Panics
    ///
    /// Panics if `N` is zero.
    pub fn min_elem(&self) -> T
    where
        T: PartialOrd + Copy,
    {
        self[self.argmin()]
    }

    /// Returns the largest element.
    ///
    /// # Panics
    ///
    /// Panics if `N` is zero.
    pub fn max_elem(&self) -> T
    where
        T: PartialOrd + Copy,
    {
        self[self.argmax()]
    }
}

impl<const N: usize> Vector<bool, N> {
    /// Returns `true` if at least one element is `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg::*;
    /// assert!(vec3(false, true, false).any());
    /// assert!(!Vector::<bool, 3>::default().any());
    /// ```
    #[inline]
    pub fn any(self) -> bool {
        self.0.into_iter().any(|b| b)
    }

    /// Returns `true` if every element is `true`.
    #[inline]
    pub fn all(self) -> bool {
        self.0.into_iter().all(|b| b)
    }
}

impl<T> Vector<T, 2> {
    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg::*;
    /// let v = vec2(-1.0, 2.0).extend(5.0);
    /// assert_eq!(v, vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.into_array();
        [x, y, value].into()
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg::*;
    /// let v = vec3(-1.0, 2.0, 3.5).truncate();
    /// assert_eq!(v, vec2(-1.0, 2.0));
    /// ```
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, ..] = self.into_array();
        [x, y].into()
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg::*;
    /// let v = vec3(-1.0, 2.0, 3.5).extend(99.0);
    /// assert_eq!(v, vec4(-1.0, 2.0, 3.5, 99.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.into_array();
        [x, y, z, value].into()
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element of this vector, yielding a vector with 3 elements.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, ..] = self.into_array();
        [x, y, z].into()
    }
}

/// The cross product.
///
/// For 3-dimensional vectors this is the usual cross product, a vector perpendicular to both
/// inputs. For 2-dimensional vectors, both inputs are embedded in the XY plane and only the Z
/// coordinate of their cross product (the [perpendicular dot product]) is returned.
///
/// # Examples
///
/// ```
/// # use linalg::*;
/// let x = vec3(1.0, 0.0, 0.0);
/// let y = vec3(0.0, 1.0, 0.0);
/// assert_eq!(x.cross(y), vec3(0.0, 0.0, 1.0));
/// assert_eq!(y.cross(x), vec3(0.0, 0.0, -1.0));
///
/// assert_eq!(vec2(1, 0).cross(vec2(0, 1)), 1);
/// assert_eq!(vec2(0, 1).cross(vec2(1, 0)), -1);
/// ```
///
/// [perpendicular dot product]: https://mathworld.wolfram.com/PerpDotProduct.html
pub trait Cross<Rhs = Self> {
    type Output;

    fn cross(self, rhs: Rhs) -> Self::Output;
}

impl<T: Number> Cross for Vector<T, 2> {
    type Output = T;

    fn cross(self, other: Self) -> T {
        self.extend(T::ZERO).cross(other.extend(T::ZERO)).z
    }
}

impl<T: Number> Cross for Vector<T, 3> {
    type Output = Self;

    fn cross(self, other: Self) -> Self {
        let [a1, a2, a3] = self.into_array();
        let [b1, b2, b3] = other.into_array();

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T: Copy, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = array::TryFromSliceError;

    #[inline]
    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        <[T; N]>::try_from(slice).map(Self)
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Vector<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            elem.fmt(f)?;
        }
        write!(f, ")")
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

// Unsigned negation wraps instead of overflowing, matching `-` on promoted C operands.
pub(crate) fn negate_promoted<T: Promote>(x: T) -> Promoted<T>
where
    Promoted<T>: Negate,
{
    x.promote().negate()
}
