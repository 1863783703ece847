//! Type-level numeric promotion.
//!
//! C performs *integer promotion* on every operand of an arithmetic, bitwise or shift operator,
//! and then applies the *usual arithmetic conversions* to bring both operands to a common type.
//! Rust does neither, so the element-wise operators on [`Vector`] and [`Matrix`] reproduce these
//! rules explicitly through the traits in this module:
//!
//! - [`Promote`] maps a single operand type to its promoted type (`u8` → `i32`, `f32` → `f32`).
//! - [`Common`] maps a pair of operand types to the type the operation is performed in
//!   (`i16` ⊕ `u8` → `i32`, `i32` ⊕ `u32` → `u32`, `u64` ⊕ `f32` → `f32`).
//! - [`Cast`] is C's `static_cast`, used for element type conversions and for storing the result
//!   of a compound assignment back into the left operand.
//!
//! All of this is resolved during type checking; at runtime only the `as` conversions remain.
//!
//! ```
//! # use linalg::*;
//! let bytes: Vector<u8, 2> = vec2(200, 100);
//! let sum: Vector<i32, 2> = bytes + bytes; // no overflow, the sum is computed in `i32`
//! assert_eq!(sum, vec2(400, 200));
//! ```
//!
//! [`Vector`]: crate::Vector
//! [`Matrix`]: crate::Matrix

/// Integer promotion of a single operand.
///
/// Integer types narrower than `i32` promote to `i32`. Everything else (including `bool`, which
/// this library never promotes) maps to itself.
pub trait Promote: Copy {
    /// The promoted type.
    type Output: Copy;

    fn promote(self) -> Self::Output;
}

/// The usual arithmetic conversions between two *already promoted* operand types.
///
/// This is the second half of [`Common`]; it is only implemented between `i32`, `u32`, `i64`,
/// `u64`, `f32` and `f64` (plus `bool` with itself), since promotion never yields other types.
pub trait Balance<Rhs>: Copy {
    /// The common type both operands are converted to.
    type Output: Copy;

    fn balance(self, rhs: Rhs) -> (Self::Output, Self::Output);
}

/// The common type of a binary arithmetic or bitwise operation between `Self` and `Rhs`.
///
/// Both operands are first [promoted][Promote], then [balanced][Balance].
pub trait Common<Rhs>: Copy {
    /// The type the operation is carried out in, and the element type of its result.
    type Output: Copy;

    /// Converts both operands to the common type.
    fn common(self, rhs: Rhs) -> (Self::Output, Self::Output);
}

impl<A, B> Common<B> for A
where
    A: Promote,
    B: Promote,
    A::Output: Balance<B::Output>,
{
    type Output = <A::Output as Balance<B::Output>>::Output;

    #[inline]
    fn common(self, rhs: B) -> (Self::Output, Self::Output) {
        self.promote().balance(rhs.promote())
    }
}

/// Shorthand for the promoted type of `T`.
pub type Promoted<T> = <T as Promote>::Output;

/// Shorthand for the common type of `A` and `B`.
pub type CommonType<A, B> = <A as Common<B>>::Output;

/// C-style value conversion (`static_cast`) between element types.
///
/// Float to integer conversions truncate towards zero, integer narrowing keeps the low bits.
/// Float to integer conversions that are out of range saturate (Rust `as` semantics), where C
/// would have undefined behavior.
pub trait Cast<T> {
    fn cast(self) -> T;
}

macro_rules! promote {
    ($($from:ty => $to:ty),+ $(,)?) => {
        $(
            impl Promote for $from {
                type Output = $to;

                #[inline]
                fn promote(self) -> $to {
                    self as $to
                }
            }
        )+
    };
}
promote! {
    i8 => i32,
    u8 => i32,
    i16 => i32,
    u16 => i32,
    i32 => i32,
    u32 => u32,
    i64 => i64,
    u64 => u64,
    f32 => f32,
    f64 => f64,
}

impl Promote for bool {
    type Output = bool;

    #[inline]
    fn promote(self) -> bool {
        self
    }
}

macro_rules! balance {
    ($($lhs:ty, $rhs:ty => $out:ty;)+) => {
        $(
            impl Balance<$rhs> for $lhs {
                type Output = $out;

                #[inline]
                fn balance(self, rhs: $rhs) -> ($out, $out) {
                    (self as $out, rhs as $out)
                }
            }
        )+
    };
}

balance! {
    i32, i32 => i32;
    i32, u32 => u32;
    i32, i64 => i64;
    i32, u64 => u64;
    i32, f32 => f32;
    i32, f64 => f64;

    u32, i32 => u32;
    u32, u32 => u32;
    u32, i64 => i64;
    u32, u64 => u64;
    u32, f32 => f32;
    u32, f64 => f64;

    i64, i32 => i64;
    i64, u32 => i64;
    i64, i64 => i64;
    i64, u64 => u64;
    i64, f32 => f32;
    i64, f64 => f64;

    u64, i32 => u64;
    u64, u32 => u64;
    u64, i64 => u64;
    u64, u64 => u64;
    u64, f32 => f32;
    u64, f64 => f64;

    f32, i32 => f32;
    f32, u32 => f32;
    f32, i64 => f32;
    f32, u64 => f32;
    f32, f32 => f32;
    f32, f64 => f64;

    f64, i32 => f64;
    f64, u32 => f64;
    f64, i64 => f64;
    f64, u64 => f64;
    f64, f32 => f64;
    f64, f64 => f64;
}

impl Balance<bool> for bool {
    type Output = bool;

    #[inline]
    fn balance(self, rhs: bool) -> (bool, bool) {
        (self, rhs)
    }
}

macro_rules! cast {
    ($from:ty => $($to:ty),+) => {
        $(
            impl Cast<$to> for $from {
                #[inline]
                fn cast(self) -> $to {
                    self as $to
                }
            }
        )+
    };
}
cast!(i8 => i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);
cast!(u8 => i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);
cast!(i16 => i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);
cast!(u16 => i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);
cast!(i32 => i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);
cast!(u32 => i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);
cast!(i64 => i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);
cast!(u64 => i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);
cast!(f32 => i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);
cast!(f64 => i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);

impl Cast<bool> for bool {
    #[inline]
    fn cast(self) -> bool {
        self
    }
}

/// The type of C's conditional expression `a < b ? a : b`, which `min` and `max` evaluate.
///
/// Unlike arithmetic, a conditional whose operands have the same type keeps that type, so
/// `u8` with `u8` stays `u8`. Mixed operands are converted to their [`Common`] type.
pub trait Select<Rhs>: Copy {
    /// The type of the selected value.
    type Output: Copy;

    fn select(self, rhs: Rhs) -> (Self::Output, Self::Output);
}

/// Shorthand for the type selecting between an `A` and a `B` yields.
pub type SelectType<A, B> = <A as Select<B>>::Output;

macro_rules! select {
    (@same $($T:ty),+) => {
        $(
            impl Select<$T> for $T {
                type Output = $T;

                #[inline]
                fn select(self, rhs: $T) -> ($T, $T) {
                    (self, rhs)
                }
            }
        )+
    };
    (@mixed) => {};
    (@mixed $head:ty $(, $rest:ty)*) => {
        $(
            impl Select<$rest> for $head {
                type Output = CommonType<$head, $rest>;

                #[inline]
                fn select(self, rhs: $rest) -> (Self::Output, Self::Output) {
                    self.common(rhs)
                }
            }

            impl Select<$head> for $rest {
                type Output = CommonType<$rest, $head>;

                #[inline]
                fn select(self, rhs: $head) -> (Self::Output, Self::Output) {
                    self.common(rhs)
                }
            }
        )*
        select!(@mixed $($rest),*);
    };
    ($($T:ty),+) => {
        select!(@same $($T),+);
        select!(@mixed $($T),+);
    };
}
select!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);

/// The floating-point type C's `<cmath>` functions evaluate an argument in.
///
/// Floating-point types keep their type, integers are converted to `f64`.
pub trait ToFloat: Copy {
    /// The floating-point type.
    type Output: Copy;

    fn to_float(self) -> Self::Output;
}

macro_rules! to_float {
    ($($from:ty => $to:ty),+ $(,)?) => {
        $(
            impl ToFloat for $from {
                type Output = $to;

                #[inline]
                fn to_float(self) -> $to {
                    self as $to
                }
            }
        )+
    };
}
to_float! {
    i8 => f64,
    u8 => f64,
    i16 => f64,
    u16 => f64,
    i32 => f64,
    u32 => f64,
    i64 => f64,
    u64 => f64,
    f32 => f32,
    f64 => f64,
}

/// The type a two-argument `<cmath>` function (`fmod`, `pow`, `atan2`) computes in.
///
/// Only `f32` with `f32` stays in `f32`; every other combination is computed in `f64`.
pub trait FloatCommon<Rhs>: Copy {
    /// The floating-point type both arguments are converted to.
    type Output: Copy;

    fn float_common(self, rhs: Rhs) -> (Self::Output, Self::Output);
}

impl<A, B> FloatCommon<B> for A
where
    A: ToFloat,
    B: ToFloat,
    A::Output: Common<B::Output>,
{
    type Output = CommonType<A::Output, B::Output>;

    #[inline]
    fn float_common(self, rhs: B) -> (Self::Output, Self::Output) {
        self.to_float().common(rhs.to_float())
    }
}

/// Shorthand for the type `FloatCommon` converts an `A` and a `B` to.
pub type FloatCommonType<A, B> = <A as FloatCommon<B>>::Output;
