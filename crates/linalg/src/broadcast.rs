//! The element-wise engine behind every operator and most free functions.
//!
//! [`Elementwise`] applies a unary function to each element of a shape, [`Broadcast`] applies a
//! binary function to the elements of two operands. A plain [`Scalar`] operand is *broadcast*:
//! it is paired with every element of the other operand. A [`Matrix`] is processed one column at
//! a time using the [`Vector`] rules, so every shape shares the same definitions.
//!
//! Operands of mismatched shape (a `Vector<T, 3>` and a `Vector<T, 4>`, or a vector and a matrix)
//! have no [`Broadcast`] implementation and are rejected by the compiler.
//!
//! ```
//! # use linalg::*;
//! let v = vec3(1i32, 2, 3);
//! assert_eq!(v.broadcast(10i32, |a, b| a * b), vec3(10, 20, 30));
//! assert_eq!(10i32.broadcast(v, |a, b| a - b), vec3(9, 8, 7));
//! assert_eq!(v.broadcast(vec3(3i32, 2, 1), |a, b| a == b), vec3(false, true, false));
//! ```

use crate::{Matrix, Scalar, Vector};

/// Shapes whose elements can be visited one at a time.
pub trait Elementwise: Sized {
    /// The element type.
    type Elem;

    /// The same shape with element type `U`.
    type Output<U>;

    /// Applies `f` to every element, producing a new value of the same shape.
    fn map_elems<U, F>(self, f: F) -> Self::Output<U>
    where
        F: FnMut(Self::Elem) -> U;

    /// Folds every element into an accumulator, in index order (column by column for matrices).
    fn fold_elems<B, F>(self, init: B, f: F) -> B
    where
        F: FnMut(B, Self::Elem) -> B;
}

/// A pair of operands that can be combined element by element.
///
/// Implemented for two shapes of the same size, and for a shape combined with a [`Scalar`] on
/// either side.
pub trait Broadcast<Rhs> {
    /// Element type of the left operand.
    type LhsElem;
    /// Element type of the right operand.
    type RhsElem;
    /// The shape of the result, with element type `U`.
    type Output<U>;

    /// Applies `f` to each pair of corresponding elements.
    fn broadcast<U, F>(self, rhs: Rhs, f: F) -> Self::Output<U>
    where
        F: FnMut(Self::LhsElem, Self::RhsElem) -> U;
}

/// The result shape of broadcasting `A` with `B`, holding elements of type `U`.
pub type Broadcasted<A, B, U> = <A as Broadcast<B>>::Output<U>;

/// The result shape of mapping over `A`, holding elements of type `U`.
pub type Mapped<A, U> = <A as Elementwise>::Output<U>;

impl<S: Scalar> Elementwise for S {
    type Elem = S;
    type Output<U> = U;

    #[inline]
    fn map_elems<U, F>(self, mut f: F) -> U
    where
        F: FnMut(S) -> U,
    {
        f(self)
    }

    #[inline]
    fn fold_elems<B, F>(self, init: B, mut f: F) -> B
    where
        F: FnMut(B, S) -> B,
    {
        f(init, self)
    }
}

impl<T, const N: usize> Elementwise for Vector<T, N> {
    type Elem = T;
    type Output<U> = Vector<U, N>;

    #[inline]
    fn map_elems<U, F>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        self.map(f)
    }

    #[inline]
    fn fold_elems<B, F>(self, init: B, f: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.0.into_iter().fold(init, f)
    }
}

impl<T, const R: usize, const C: usize> Elementwise for Matrix<T, R, C> {
    type Elem = T;
    type Output<U> = Matrix<U, R, C>;

    #[inline]
    fn map_elems<U, F>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map_elems(&mut f)))
    }

    #[inline]
    fn fold_elems<B, F>(self, init: B, mut f: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.0
            .into_iter()
            .fold(init, |acc, column| column.fold_elems(acc, &mut f))
    }
}

impl<S: Scalar, S2: Scalar> Broadcast<S2> for S {
    type LhsElem = S;
    type RhsElem = S2;
    type Output<U> = U;

    #[inline]
    fn broadcast<U, F>(self, rhs: S2, mut f: F) -> U
    where
        F: FnMut(S, S2) -> U,
    {
        f(self, rhs)
    }
}

impl<T, U, const N: usize> Broadcast<Vector<U, N>> for Vector<T, N> {
    type LhsElem = T;
    type RhsElem = U;
    type Output<V> = Vector<V, N>;

    #[inline]
    fn broadcast<V, F>(self, rhs: Vector<U, N>, mut f: F) -> Vector<V, N>
    where
        F: FnMut(T, U) -> V,
    {
        self.zip(rhs).map(|(a, b)| f(a, b))
    }
}

impl<T, S: Scalar, const N: usize> Broadcast<S> for Vector<T, N> {
    type LhsElem = T;
    type RhsElem = S;
    type Output<V> = Vector<V, N>;

    #[inline]
    fn broadcast<V, F>(self, rhs: S, mut f: F) -> Vector<V, N>
    where
        F: FnMut(T, S) -> V,
    {
        self.map(|a| f(a, rhs))
    }
}

impl<S: Scalar, U, const N: usize> Broadcast<Vector<U, N>> for S {
    type LhsElem = S;
    type RhsElem = U;
    type Output<V> = Vector<V, N>;

    #[inline]
    fn broadcast<V, F>(self, rhs: Vector<U, N>, mut f: F) -> Vector<V, N>
    where
        F: FnMut(S, U) -> V,
    {
        rhs.map(|b| f(self, b))
    }
}

impl<T, U, const R: usize, const C: usize> Broadcast<Matrix<U, R, C>> for Matrix<T, R, C> {
    type LhsElem = T;
    type RhsElem = U;
    type Output<V> = Matrix<V, R, C>;

    #[inline]
    fn broadcast<V, F>(self, rhs: Matrix<U, R, C>, mut f: F) -> Matrix<V, R, C>
    where
        F: FnMut(T, U) -> V,
    {
        // The columns form a vector of vectors; broadcast over it recursively.
        let columns = Vector(self.0).zip(Vector(rhs.0));
        Matrix(columns.map(|(a, b)| a.broadcast(b, &mut f)).0)
    }
}

impl<T, S: Scalar, const R: usize, const C: usize> Broadcast<S> for Matrix<T, R, C> {
    type LhsElem = T;
    type RhsElem = S;
    type Output<V> = Matrix<V, R, C>;

    #[inline]
    fn broadcast<V, F>(self, rhs: S, mut f: F) -> Matrix<V, R, C>
    where
        F: FnMut(T, S) -> V,
    {
        Matrix(self.0.map(|column| column.broadcast(rhs, &mut f)))
    }
}

impl<S: Scalar, U, const R: usize, const C: usize> Broadcast<Matrix<U, R, C>> for S {
    type LhsElem = S;
    type RhsElem = U;
    type Output<V> = Matrix<V, R, C>;

    #[inline]
    fn broadcast<V, F>(self, rhs: Matrix<U, R, C>, mut f: F) -> Matrix<V, R, C>
    where
        F: FnMut(S, U) -> V,
    {
        Matrix(rhs.0.map(|column| self.broadcast(column, &mut f)))
    }
}

/// Implements the element-wise binary operators and their compound assignment forms for a
/// shape, against the same shape and against any [`Scalar`].
///
/// Arithmetic and bitwise operators compute in the [common type][crate::Common] of both element
/// types, with unsigned `+`, `-` and `*` wrapping around like C (see [`Modular`][crate::Modular]).
/// Shift operators compute in the [promoted][crate::Promote] type of the left operand.
/// Compound assignments convert the result back into the left operand's element type.
macro_rules! elementwise_ops {
    ($Shape:ident<$($dim:ident),+>) => {
        $crate::broadcast::elementwise_op!($Shape<$($dim),+>, Add::add, AddAssign::add_assign, Modular::modular_add);
        $crate::broadcast::elementwise_op!($Shape<$($dim),+>, Sub::sub, SubAssign::sub_assign, Modular::modular_sub);
        $crate::broadcast::elementwise_op!($Shape<$($dim),+>, Mul::mul, MulAssign::mul_assign, Modular::modular_mul);
        $crate::broadcast::elementwise_op!($Shape<$($dim),+>, Div::div, DivAssign::div_assign);
        $crate::broadcast::elementwise_op!($Shape<$($dim),+>, Rem::rem, RemAssign::rem_assign);
        $crate::broadcast::elementwise_op!($Shape<$($dim),+>, BitAnd::bitand, BitAndAssign::bitand_assign);
        $crate::broadcast::elementwise_op!($Shape<$($dim),+>, BitOr::bitor, BitOrAssign::bitor_assign);
        $crate::broadcast::elementwise_op!($Shape<$($dim),+>, BitXor::bitxor, BitXorAssign::bitxor_assign);
        $crate::broadcast::shift_op!($Shape<$($dim),+>, Shl::shl, ShlAssign::shl_assign);
        $crate::broadcast::shift_op!($Shape<$($dim),+>, Shr::shr, ShrAssign::shr_assign);
        $crate::broadcast::scalar_lhs_ops!($Shape<$($dim),+>; bool, i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);
    };
}

/// Applies an operator through the function it is computed with: the `std::ops` method itself, or the
/// [`Modular`][crate::Modular] variant that wraps unsigned results like C.
macro_rules! op_fn {
    ($Op:ident::$op:ident; $a:expr, $b:expr) => {
        ::std::ops::$Op::$op($a, $b)
    };
    ($Op:ident::$op:ident, $Wrap:ident::$wrap:ident; $a:expr, $b:expr) => {
        $crate::$Wrap::$wrap($a, $b)
    };
}

macro_rules! elementwise_op {
    (
        $Shape:ident<$($dim:ident),+>,
        $Op:ident::$op:ident,
        $OpAssign:ident::$op_assign:ident
        $(, $Wrap:ident::$wrap:ident)?
    ) => {
        impl<T, U, $(const $dim: usize),+> ::std::ops::$Op<$Shape<U, $($dim),+>> for $Shape<T, $($dim),+>
        where
            T: $crate::Common<U>,
            $crate::CommonType<T, U>:
                ::std::ops::$Op<Output = $crate::CommonType<T, U>> $(+ $crate::$Wrap)?,
        {
            type Output = $Shape<$crate::CommonType<T, U>, $($dim),+>;

            #[inline]
            fn $op(self, rhs: $Shape<U, $($dim),+>) -> Self::Output {
                $crate::Broadcast::broadcast(self, rhs, |a: T, b: U| {
                    let (a, b) = $crate::Common::common(a, b);
                    $crate::broadcast::op_fn!($Op::$op $(, $Wrap::$wrap)?; a, b)
                })
            }
        }

        impl<T, S, $(const $dim: usize),+> ::std::ops::$Op<S> for $Shape<T, $($dim),+>
        where
            S: $crate::Scalar,
            T: $crate::Common<S>,
            $crate::CommonType<T, S>:
                ::std::ops::$Op<Output = $crate::CommonType<T, S>> $(+ $crate::$Wrap)?,
        {
            type Output = $Shape<$crate::CommonType<T, S>, $($dim),+>;

            #[inline]
            fn $op(self, rhs: S) -> Self::Output {
                $crate::Broadcast::broadcast(self, rhs, |a: T, b: S| {
                    let (a, b) = $crate::Common::common(a, b);
                    $crate::broadcast::op_fn!($Op::$op $(, $Wrap::$wrap)?; a, b)
                })
            }
        }

        impl<T, U, $(const $dim: usize),+> ::std::ops::$OpAssign<$Shape<U, $($dim),+>> for $Shape<T, $($dim),+>
        where
            T: $crate::Common<U>,
            $crate::CommonType<T, U>:
                ::std::ops::$Op<Output = $crate::CommonType<T, U>>
                + $crate::Cast<T>
                $(+ $crate::$Wrap)?,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: $Shape<U, $($dim),+>) {
                *self = $crate::Broadcast::broadcast(*self, rhs, |a: T, b: U| {
                    let (a, b) = $crate::Common::common(a, b);
                    $crate::Cast::<T>::cast($crate::broadcast::op_fn!($Op::$op $(, $Wrap::$wrap)?; a, b))
                });
            }
        }

        impl<T, S, $(const $dim: usize),+> ::std::ops::$OpAssign<S> for $Shape<T, $($dim),+>
        where
            S: $crate::Scalar,
            T: $crate::Common<S>,
            $crate::CommonType<T, S>:
                ::std::ops::$Op<Output = $crate::CommonType<T, S>>
                + $crate::Cast<T>
                $(+ $crate::$Wrap)?,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: S) {
                *self = $crate::Broadcast::broadcast(*self, rhs, |a: T, b: S| {
                    let (a, b) = $crate::Common::common(a, b);
                    $crate::Cast::<T>::cast($crate::broadcast::op_fn!($Op::$op $(, $Wrap::$wrap)?; a, b))
                });
            }
        }
    };
}

macro_rules! shift_op {
    ($Shape:ident<$($dim:ident),+>, $Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident) => {
        impl<T, U, $(const $dim: usize),+> ::std::ops::$Op<$Shape<U, $($dim),+>> for $Shape<T, $($dim),+>
        where
            T: $crate::Promote,
            U: $crate::Promote,
            $crate::Promoted<T>: ::std::ops::$Op<$crate::Promoted<U>, Output = $crate::Promoted<T>>,
        {
            type Output = $Shape<$crate::Promoted<T>, $($dim),+>;

            #[inline]
            fn $op(self, rhs: $Shape<U, $($dim),+>) -> Self::Output {
                $crate::Broadcast::broadcast(self, rhs, |a: T, b: U| {
                    ::std::ops::$Op::$op($crate::Promote::promote(a), $crate::Promote::promote(b))
                })
            }
        }

        impl<T, S, $(const $dim: usize),+> ::std::ops::$Op<S> for $Shape<T, $($dim),+>
        where
            S: $crate::Scalar + $crate::Promote,
            T: $crate::Promote,
            $crate::Promoted<T>: ::std::ops::$Op<$crate::Promoted<S>, Output = $crate::Promoted<T>>,
        {
            type Output = $Shape<$crate::Promoted<T>, $($dim),+>;

            #[inline]
            fn $op(self, rhs: S) -> Self::Output {
                $crate::Broadcast::broadcast(self, rhs, |a: T, b: S| {
                    ::std::ops::$Op::$op($crate::Promote::promote(a), $crate::Promote::promote(b))
                })
            }
        }

        impl<T, U, $(const $dim: usize),+> ::std::ops::$OpAssign<$Shape<U, $($dim),+>> for $Shape<T, $($dim),+>
        where
            T: $crate::Promote,
            U: $crate::Promote,
            $crate::Promoted<T>: ::std::ops::$Op<$crate::Promoted<U>, Output = $crate::Promoted<T>>
                + $crate::Cast<T>,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: $Shape<U, $($dim),+>) {
                *self = $crate::Broadcast::broadcast(*self, rhs, |a: T, b: U| {
                    let shifted =
                        ::std::ops::$Op::$op($crate::Promote::promote(a), $crate::Promote::promote(b));
                    $crate::Cast::<T>::cast(shifted)
                });
            }
        }

        impl<T, S, $(const $dim: usize),+> ::std::ops::$OpAssign<S> for $Shape<T, $($dim),+>
        where
            S: $crate::Scalar + $crate::Promote,
            T: $crate::Promote,
            $crate::Promoted<T>: ::std::ops::$Op<$crate::Promoted<S>, Output = $crate::Promoted<T>>
                + $crate::Cast<T>,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: S) {
                *self = $crate::Broadcast::broadcast(*self, rhs, |a: T, b: S| {
                    let shifted =
                        ::std::ops::$Op::$op($crate::Promote::promote(a), $crate::Promote::promote(b));
                    $crate::Cast::<T>::cast(shifted)
                });
            }
        }
    };
}

// Rust's orphan rules rule out a single generic `impl<S: Scalar> Add<Vector<..>> for S`, so the
// scalar-on-the-left forms are stamped out once per scalar type.
macro_rules! scalar_lhs_ops {
    ($Shape:ident<$($dim:ident),+>;) => {};
    ($Shape:ident<$($dim:ident),+>; $S:ty $(, $rest:ty)*) => {
        $crate::broadcast::scalar_lhs_op!($Shape<$($dim),+>, $S, Add::add, Modular::modular_add);
        $crate::broadcast::scalar_lhs_op!($Shape<$($dim),+>, $S, Sub::sub, Modular::modular_sub);
        $crate::broadcast::scalar_lhs_op!($Shape<$($dim),+>, $S, Mul::mul, Modular::modular_mul);
        $crate::broadcast::scalar_lhs_op!($Shape<$($dim),+>, $S, Div::div);
        $crate::broadcast::scalar_lhs_op!($Shape<$($dim),+>, $S, Rem::rem);
        $crate::broadcast::scalar_lhs_op!($Shape<$($dim),+>, $S, BitAnd::bitand);
        $crate::broadcast::scalar_lhs_op!($Shape<$($dim),+>, $S, BitOr::bitor);
        $crate::broadcast::scalar_lhs_op!($Shape<$($dim),+>, $S, BitXor::bitxor);
        $crate::broadcast::scalar_lhs_shift!($Shape<$($dim),+>, $S, Shl::shl);
        $crate::broadcast::scalar_lhs_shift!($Shape<$($dim),+>, $S, Shr::shr);
        $crate::broadcast::scalar_lhs_ops!($Shape<$($dim),+>; $($rest),*);
    };
}

macro_rules! scalar_lhs_op {
    ($Shape:ident<$($dim:ident),+>, $S:ty, $Op:ident::$op:ident $(, $Wrap:ident::$wrap:ident)?) => {
        impl<U, $(const $dim: usize),+> ::std::ops::$Op<$Shape<U, $($dim),+>> for $S
        where
            $S: $crate::Common<U>,
            $crate::CommonType<$S, U>:
                ::std::ops::$Op<Output = $crate::CommonType<$S, U>> $(+ $crate::$Wrap)?,
        {
            type Output = $Shape<$crate::CommonType<$S, U>, $($dim),+>;

            #[inline]
            fn $op(self, rhs: $Shape<U, $($dim),+>) -> Self::Output {
                $crate::Broadcast::broadcast(self, rhs, |a: $S, b: U| {
                    let (a, b) = $crate::Common::common(a, b);
                    $crate::broadcast::op_fn!($Op::$op $(, $Wrap::$wrap)?; a, b)
                })
            }
        }
    };
}

macro_rules! scalar_lhs_shift {
    ($Shape:ident<$($dim:ident),+>, $S:ty, $Op:ident::$op:ident) => {
        impl<U, P, $(const $dim: usize),+> ::std::ops::$Op<$Shape<U, $($dim),+>> for $S
        where
            U: $crate::Promote<Output = P>,
            $crate::Promoted<$S>: ::std::ops::$Op<P, Output = $crate::Promoted<$S>>,
        {
            type Output = $Shape<$crate::Promoted<$S>, $($dim),+>;

            #[inline]
            fn $op(self, rhs: $Shape<U, $($dim),+>) -> Self::Output {
                $crate::Broadcast::broadcast(self, rhs, |a: $S, b: U| {
                    <$crate::Promoted<$S> as ::std::ops::$Op<P>>::$op(
                        $crate::Promote::promote(a),
                        $crate::Promote::promote(b),
                    )
                })
            }
        }
    };
}

pub(crate) use elementwise_op;
pub(crate) use elementwise_ops;
pub(crate) use op_fn;
pub(crate) use scalar_lhs_op;
pub(crate) use scalar_lhs_ops;
pub(crate) use scalar_lhs_shift;
pub(crate) use shift_op;
