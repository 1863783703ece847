//! Scalar traits the generic vector and matrix code is written against.

use std::ops;

/// Element types that can appear in a [`Vector`][crate::Vector] or [`Matrix`][crate::Matrix]
/// and participate in scalar broadcasting.
///
/// Implemented for `bool`, the 8 to 64 bit integer types, [`f32`] and [`f64`]. Vectors and
/// matrices never implement this trait, which is what lets operators tell "vector op scalar"
/// apart from "vector op vector".
pub trait Scalar: Copy + 'static {}

macro_rules! scalars {
    ($($types:ty),+) => {
        $( impl Scalar for $types {} )+
    };
}
scalars!(bool, i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

macro_rules! zero_one {
    ($zero:literal, $one:literal: $($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = $zero;
            }
            impl One for $types {
                const ONE: Self = $one;
            }
        )+
    };
}
zero_one!(0, 1: i8, u8, i16, u16, i32, u32, i64, u64);
zero_one!(0.0, 1.0: f32, f64);
zero_one!(false, true: bool);

/// Addition, subtraction and multiplication the way C performs them.
///
/// Unsigned types are modular and wrap around on overflow (`0u32 - 1` is `u32::MAX`). Signed and
/// floating-point types use the regular operators.
pub trait Modular: Copy {
    fn modular_add(self, rhs: Self) -> Self;
    fn modular_sub(self, rhs: Self) -> Self;
    fn modular_mul(self, rhs: Self) -> Self;
}

/// A trait for numeric types that support basic arithmetic operations.
///
/// Unlike the element-wise operators on [`Vector`][crate::Vector], the algebra functions written
/// against this trait do not promote: they compute in `Self`.
pub trait Number:
    Zero
    + One
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + Modular
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + Modular
        + PartialEq
        + Copy
{
}

/// A [`Number`] that can be negated.
pub trait Signed: Number + ops::Neg<Output = Self> {}
impl<T> Signed for T where T: Number + ops::Neg<Output = Self> {}

/// Types that support the trigonometric functions.
pub trait Trig {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn atan2(self, other: Self) -> Self;
    fn sinh(self) -> Self;
    fn cosh(self) -> Self;
    fn tanh(self) -> Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Exponentials, logarithms and powers.
pub trait Exp {
    fn exp(self) -> Self;
    /// Natural logarithm.
    fn log(self) -> Self;
    fn log10(self) -> Self;
    fn pow(self, exponent: Self) -> Self;
}

/// Rounding to integral values.
pub trait Round {
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    /// Rounds half-way cases away from zero, like C's `round`.
    fn round(self) -> Self;
}

/// Types that have an absolute value.
pub trait Abs {
    fn abs(self) -> Self;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of the [`f32::min`] and [`f32::max`] functions
/// ([`f64::min`] and [`f64::max`] respectively). Built-in integer types implement it in terms of
/// [`Ord::min`] and [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

/// Arithmetic negation as C performs it after promotion.
///
/// Signed and floating-point types negate normally. Unsigned types wrap around, so `-1u32` is
/// `u32::MAX` just like in C.
pub trait Negate {
    fn negate(self) -> Self;
}

/// Floating-point element types.
///
/// Everything that involves square roots, trigonometry or interpolation requires this.
pub trait Float: Signed + PartialOrd + MinMax + Trig + Sqrt + Exp + Round + Abs {}
impl<T> Float for T where T: Signed + PartialOrd + MinMax + Trig + Sqrt + Exp + Round + Abs {}

macro_rules! ord_min_max {
    ($($types:ty),+) => {
        $(
            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )+
    };
}
ord_min_max!(u8, u16, u32, u64, i8, i16, i32, i64);

macro_rules! signed_int {
    ($($types:ty),+) => {
        $(
            impl Abs for $types {
                fn abs(self) -> Self {
                    self.abs()
                }
            }

            impl Negate for $types {
                fn negate(self) -> Self {
                    -self
                }
            }
        )+
    };
}
signed_int!(i8, i16, i32, i64);

macro_rules! unsigned_int {
    ($($types:ty),+) => {
        $(
            impl Abs for $types {
                fn abs(self) -> Self {
                    self
                }
            }

            impl Negate for $types {
                fn negate(self) -> Self {
                    self.wrapping_neg()
                }
            }
        )+
    };
}
unsigned_int!(u8, u16, u32, u64);

macro_rules! modular {
    (wrapping: $($types:ty),+) => {
        $(
            impl Modular for $types {
                #[inline]
                fn modular_add(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline]
                fn modular_sub(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }

                #[inline]
                fn modular_mul(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }
            }
        )+
    };
    ($($types:ty),+) => {
        $(
            impl Modular for $types {
                #[inline]
                fn modular_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn modular_sub(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline]
                fn modular_mul(self, rhs: Self) -> Self {
                    self * rhs
                }
            }
        )+
    };
}
modular!(wrapping: u8, u16, u32, u64);
modular!(i8, i16, i32, i64, f32, f64);

macro_rules! float {
    ($($types:ty),+) => {
        $(
            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    self.min(other)
                }

                fn max(self, other: Self) -> Self {
                    self.max(other)
                }
            }

            impl Abs for $types {
                fn abs(self) -> Self {
                    self.abs()
                }
            }

            impl Negate for $types {
                fn negate(self) -> Self {
                    -self
                }
            }

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }

            impl Exp for $types {
                fn exp(self) -> Self {
                    self.exp()
                }

                fn log(self) -> Self {
                    self.ln()
                }

                fn log10(self) -> Self {
                    self.log10()
                }

                fn pow(self, exponent: Self) -> Self {
                    self.powf(exponent)
                }
            }

            impl Round for $types {
                fn floor(self) -> Self {
                    self.floor()
                }

                fn ceil(self) -> Self {
                    self.ceil()
                }

                fn round(self) -> Self {
                    self.round()
                }
            }

            impl Trig for $types {
                fn sin(self) -> Self {
                    self.sin()
                }

                fn cos(self) -> Self {
                    self.cos()
                }

                fn tan(self) -> Self {
                    self.tan()
                }

                fn asin(self) -> Self {
                    self.asin()
                }

                fn acos(self) -> Self {
                    self.acos()
                }

                fn atan(self) -> Self {
                    self.atan()
                }

                fn atan2(self, other: Self) -> Self {
                    self.atan2(other)
                }

                fn sinh(self) -> Self {
                    self.sinh()
                }

                fn cosh(self) -> Self {
                    self.cosh()
                }

                fn tanh(self) -> Self {
                    self.tanh()
                }
            }
        )+
    };
}
float!(f32, f64);
