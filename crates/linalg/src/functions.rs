//! Free functions mirroring the operator set: element-wise math, comparisons, reductions and
//! the vector and matrix algebra.
//!
//! The element-wise functions accept any [`Elementwise`] value (a scalar, a [`Vector`] or a
//! [`Matrix`]), and the binary ones any [`Broadcast`] pair, so a vector can be combined with a
//! scalar on either side:
//!
//! ```
//! # use linalg::*;
//! assert_eq!(max(vec3(1i32, -2, 3), 0i32), vec3(1, 0, 3));
//! assert_eq!(less(0.5f64, vec2(0.0f64, 1.0)), vec2(false, true));
//! assert_eq!(sqrt(vec2(4.0f64, 9.0)), vec2(2.0, 3.0));
//! ```

use std::ops::Rem;

use crate::{
    broadcast::{Broadcast, Broadcasted, Elementwise, Mapped},
    Abs, Common, CommonType, Cross, Exp, Float, FloatCommon, FloatCommonType, MatMul, Matrix, MinMax,
    Modular, Number, One, Promote, Promoted, Round, Select, SelectType, Sqrt, SquareMatrix, Trig,
    Vector, Zero,
};

/// Element type that a binary function over `A` and `B` computes in.
type CommonElem<A, B> = CommonType<<A as Broadcast<B>>::LhsElem, <A as Broadcast<B>>::RhsElem>;

/// Element type that `min` and `max` over `A` and `B` select in.
type SelectElem<A, B> = SelectType<<A as Broadcast<B>>::LhsElem, <A as Broadcast<B>>::RhsElem>;

/// Element type that a `<cmath>` function over `A` and `B` computes in.
type FloatElem<A, B> =
    FloatCommonType<<A as Broadcast<B>>::LhsElem, <A as Broadcast<B>>::RhsElem>;

/// Result of `min` or `max` over `A` and `B`.
type Selected<A, B> = Broadcasted<A, B, SelectElem<A, B>>;

macro_rules! unary_fns {
    ($($Trait:ident::$f:ident),+ $(,)?) => {
        $(
            #[doc = concat!("Applies [`", stringify!($Trait), "::", stringify!($f), "`] to every element.")]
            #[inline]
            pub fn $f<A>(a: A) -> Mapped<A, A::Elem>
            where
                A: Elementwise,
                A::Elem: $Trait,
            {
                a.map_elems($Trait::$f)
            }
        )+
    };
}

unary_fns!(
    Abs::abs,
    Round::floor,
    Round::ceil,
    Round::round,
    Exp::exp,
    Exp::log,
    Exp::log10,
    Sqrt::sqrt,
    Trig::sin,
    Trig::cos,
    Trig::tan,
    Trig::asin,
    Trig::acos,
    Trig::atan,
    Trig::sinh,
    Trig::cosh,
    Trig::tanh,
);

macro_rules! binary_fns {
    (
        $Convert:ident::$convert:ident => $Elem:ident;
        $($(#[$attr:meta])* $f:ident: $Bound:path => |$x:ident, $y:ident| $body:expr);+ $(;)?
    ) => {
        $(
            $(#[$attr])*
            #[inline]
            pub fn $f<A, B>(a: A, b: B) -> Broadcasted<A, B, $Elem<A, B>>
            where
                A: Broadcast<B>,
                A::LhsElem: $Convert<A::RhsElem>,
                $Elem<A, B>: $Bound,
            {
                a.broadcast(b, |$x, $y| {
                    let ($x, $y) = $Convert::$convert($x, $y);
                    $body
                })
            }
        )+
    };
}

binary_fns! {
    Select::select => SelectElem;
    /// Element-wise minimum.
    ///
    /// Operands of the same element type keep it (`u8` stays `u8`), mixed operands are compared
    /// in their common type.
    min: MinMax => |x, y| MinMax::min(x, y);
    /// Element-wise maximum, typed like [`min`].
    max: MinMax => |x, y| MinMax::max(x, y);
}

binary_fns! {
    FloatCommon::float_common => FloatElem;
    /// Element-wise remainder of a truncating division, like C's `fmod`.
    ///
    /// Integers are converted to `f64` first; two `f32` operands stay in `f32`.
    fmod: Rem<Output = FloatElem<A, B>> => |x, y| x % y;
    /// Raises every element of `a` to the corresponding power in `b`, typed like [`fmod`].
    pow: Exp => |x, y| Exp::pow(x, y);
    /// Element-wise four-quadrant arctangent of `a / b`, typed like [`fmod`].
    atan2: Trig => |x, y| Trig::atan2(x, y);
}

/// Restricts every element of `x` to the range `lo..=hi`.
///
/// Computes `min(max(x, lo), hi)`, so the bounds may be scalars or have the shape of `x`.
///
/// # Examples
///
/// ```
/// # use linalg::*;
/// assert_eq!(clamp(vec3(-1.0f32, 0.5, 2.0), 0.0f32, 1.0f32), vec3(0.0, 0.5, 1.0));
/// assert_eq!(clamp(vec2(5i32, 5), vec2(0i32, 6), 8i32), vec2(5, 6));
/// ```
#[inline]
pub fn clamp<A, L, H>(x: A, lo: L, hi: H) -> Selected<Selected<A, L>, H>
where
    A: Broadcast<L>,
    A::LhsElem: Select<A::RhsElem>,
    SelectElem<A, L>: MinMax,
    Selected<A, L>: Broadcast<H>,
    <Selected<A, L> as Broadcast<H>>::LhsElem:
        Select<<Selected<A, L> as Broadcast<H>>::RhsElem>,
    SelectElem<Selected<A, L>, H>: MinMax,
{
    min(max(x, lo), hi)
}

macro_rules! comparison_fns {
    ($($(#[$attr:meta])* $f:ident => $Trait:ident::$op:ident);+ $(;)?) => {
        $(
            $(#[$attr])*
            #[inline]
            pub fn $f<A, B>(a: A, b: B) -> Broadcasted<A, B, bool>
            where
                A: Broadcast<B>,
                A::LhsElem: Common<A::RhsElem>,
                CommonElem<A, B>: $Trait,
            {
                a.broadcast(b, |x, y| {
                    let (x, y) = x.common(y);
                    $Trait::$op(&x, &y)
                })
            }
        )+
    };
}

comparison_fns! {
    /// Element-wise `==`.
    equal => PartialEq::eq;
    /// Element-wise `!=`.
    nequal => PartialEq::ne;
    /// Element-wise `<`.
    less => PartialOrd::lt;
    /// Element-wise `>`.
    greater => PartialOrd::gt;
    /// Element-wise `<=`.
    lequal => PartialOrd::le;
    /// Element-wise `>=`.
    gequal => PartialOrd::ge;
}

/// Returns `true` if any element is `true`.
#[inline]
pub fn any<A: Elementwise<Elem = bool>>(a: A) -> bool {
    a.fold_elems(false, |acc, x| acc || x)
}

/// Returns `true` if every element is `true`.
///
/// ```
/// # use linalg::*;
/// assert!(all(less(vec3(1i32, 2, 3), 4i32)));
/// assert!(!all(equal(vec2(1i32, 2), vec2(1i32, 3))));
/// ```
#[inline]
pub fn all<A: Elementwise<Elem = bool>>(a: A) -> bool {
    a.fold_elems(true, |acc, x| acc && x)
}

/// Adds up all elements.
#[inline]
pub fn sum<A>(a: A) -> A::Elem
where
    A: Elementwise,
    A::Elem: Number,
{
    a.fold_elems(<A::Elem as Zero>::ZERO, Modular::modular_add)
}

/// Multiplies all elements together.
#[inline]
pub fn product<A>(a: A) -> A::Elem
where
    A: Elementwise,
    A::Elem: Number,
{
    a.fold_elems(<A::Elem as One>::ONE, Modular::modular_mul)
}

/// Returns the smallest element of `v`.
#[inline]
pub fn minelem<T: PartialOrd + Copy, const N: usize>(v: Vector<T, N>) -> T {
    v.min_elem()
}

/// Returns the largest element of `v`.
#[inline]
pub fn maxelem<T: PartialOrd + Copy, const N: usize>(v: Vector<T, N>) -> T {
    v.max_elem()
}

/// Returns the index of the smallest element of `v`, preferring the first on ties.
///
/// ```
/// # use linalg::*;
/// assert_eq!(argmin(vec4(3, 1, 1, 5)), 1);
/// ```
#[inline]
pub fn argmin<T: PartialOrd, const N: usize>(v: Vector<T, N>) -> usize {
    v.argmin()
}

/// Returns the index of the largest element of `v`, preferring the first on ties.
#[inline]
pub fn argmax<T: PartialOrd, const N: usize>(v: Vector<T, N>) -> usize {
    v.argmax()
}

/// Applies integer promotion to every element (C's unary `+`).
#[inline]
pub fn promote<A>(a: A) -> Mapped<A, Promoted<A::Elem>>
where
    A: Elementwise,
    A::Elem: Promote,
{
    a.map_elems(Promote::promote)
}

/// Bitwise complement of every promoted element (C's unary `~`).
#[inline]
pub fn compl<A>(a: A) -> Mapped<A, Promoted<A::Elem>>
where
    A: Elementwise,
    A::Elem: Promote,
    Promoted<A::Elem>: std::ops::Not<Output = Promoted<A::Elem>>,
{
    a.map_elems(|x| !x.promote())
}

/// Dot product of the [promoted][Promote] elements, so products of small integers do not overflow.
///
/// ```
/// # use linalg::*;
/// let d: i32 = dot(vec2(200u8, 100), vec2(200u8, 100));
/// assert_eq!(d, 50000);
/// ```
#[inline]
pub fn dot<T, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> Promoted<T>
where
    T: Promote,
    Promoted<T>: Number,
{
    a.promote().dot(b.promote())
}

/// Squared length, computed on the [promoted][Promote] elements like [`dot`].
#[inline]
pub fn length2<T, const N: usize>(v: Vector<T, N>) -> Promoted<T>
where
    T: Promote,
    Promoted<T>: Number,
{
    v.promote().length2()
}

/// See [`Vector::length`].
#[inline]
pub fn length<T: Number + Sqrt, const N: usize>(v: Vector<T, N>) -> T {
    v.length()
}

/// Squared distance, computed on the [promoted][Promote] elements like [`dot`].
#[inline]
pub fn distance2<T, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> Promoted<T>
where
    T: Promote,
    Promoted<T>: Number,
{
    a.promote().distance2(b.promote())
}

/// See [`Vector::distance`].
#[inline]
pub fn distance<T: Number + Sqrt, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> T {
    a.distance(b)
}

/// See [`Vector::normalize`].
#[inline]
pub fn normalize<T: Number + Sqrt, const N: usize>(v: Vector<T, N>) -> Vector<T, N> {
    v.normalize()
}

/// See [`Cross`].
#[inline]
pub fn cross<V: Cross>(a: V, b: V) -> V::Output {
    a.cross(b)
}

/// See [`Vector::angle`].
#[inline]
pub fn angle<T: Number + Trig + Sqrt, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> T {
    a.angle(b)
}

/// See [`Vector::uangle`].
#[inline]
pub fn uangle<T: Float, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> T {
    a.uangle(b)
}

/// See [`Vector::lerp`].
#[inline]
pub fn lerp<T: Number, const N: usize>(a: Vector<T, N>, b: Vector<T, N>, t: T) -> Vector<T, N> {
    a.lerp(b, t)
}

/// See [`Vector::nlerp`].
#[inline]
pub fn nlerp<T: Number + Sqrt, const N: usize>(
    a: Vector<T, N>,
    b: Vector<T, N>,
    t: T,
) -> Vector<T, N> {
    a.nlerp(b, t)
}

/// See [`Vector::slerp`].
#[inline]
pub fn slerp<T: Float, const N: usize>(a: Vector<T, N>, b: Vector<T, N>, t: T) -> Vector<T, N> {
    a.slerp(b, t)
}

/// The algebraic product of a matrix with a matrix or a column vector.
///
/// ```
/// # use linalg::*;
/// let swap = Matrix::from_rows([
///     [0, 1],
///     [1, 0],
/// ]);
/// assert_eq!(mul(swap, vec2(3, 4)), vec2(4, 3));
/// assert_eq!(mul(swap, swap), Mat2::identity());
/// ```
#[inline]
pub fn mul<A: MatMul<B>, B>(a: A, b: B) -> A::Output {
    a.mat_mul(b)
}

/// See [`Matrix::transpose`].
#[inline]
pub fn transpose<T, const R: usize, const C: usize>(m: Matrix<T, R, C>) -> Matrix<T, C, R>
where
    T: Copy,
{
    m.transpose()
}

/// See [`SquareMatrix::determinant`].
#[inline]
pub fn determinant<M: SquareMatrix>(m: M) -> M::Elem {
    m.determinant()
}

/// See [`SquareMatrix::adjugate`].
#[inline]
pub fn adjugate<M: SquareMatrix>(m: M) -> M {
    m.adjugate()
}

/// See [`SquareMatrix::inverse`].
#[inline]
pub fn inverse<M: SquareMatrix>(m: M) -> M {
    m.inverse()
}
