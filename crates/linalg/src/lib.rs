//! A small, generic linear algebra library for fixed-size vectors and matrices.
//!
//! # Overview
//!
//! - [`Vector<T, N>`] and [`Matrix<T, R, C>`] store their elements inline (matrices are
//!   column-major) and are generic over the element type: `bool`, the 8 to 64 bit integers,
//!   [`f32`] and [`f64`].
//! - All operators work element by element. Either operand may also be a plain scalar, which is
//!   combined with every element of the other operand. This includes `*`, which is *not* the
//!   matrix product; use [`mul`] for that.
//! - Mixed element types follow C's promotion rules, so `u8 + u8` is computed (and stored) as
//!   `i32`, and `i32 + f32` as `f32`. See the [`promote`][mod@promote] module.
//! - Quaternions are plain `Vector<T, 4>`s in `(x, y, z, w)` order and are handled by the `q*`
//!   functions ([`qmul`], [`qrot`], ...).
//! - Transformation matrices ([`translation_matrix`], [`perspective_matrix`], ...) use the
//!   right-handed OpenGL convention.
//!
//! ```
//! use linalg::*;
//!
//! let a = vec3(1.0f32, 2.0, 3.0);
//! assert_eq!(a * 2.0f32 + 1.0f32, vec3(3.0, 5.0, 7.0));
//! assert_eq!(cross(Vec3::<f32>::X, Vec3::Y), Vec3::<f32>::Z);
//!
//! let bytes = vec2(200u8, 100);
//! let sum: Vector<i32, 2> = bytes + bytes;
//! assert_eq!(sum, vec2(400, 200));
//!
//! let m = translation_matrix(vec3(1.0f32, 2.0, 3.0));
//! assert_eq!(mul(m, vec4(0.0, 0.0, 0.0, 1.0)), vec4(1.0, 2.0, 3.0, 1.0));
//! ```
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized vectors and matrices. Relying on const generics for the
//!   dimensions keeps the API simple, and dimension mismatches become compile errors.
//! - Support only a single, column-major, unpadded data layout. Vectors and matrices of
//!   [`bytemuck::Pod`] elements are themselves [`bytemuck::Pod`] and can be uploaded to the GPU
//!   as-is.
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types (eg.
//!   "big decimals").
//! - No SIMD-specific code paths; the element-wise loops are left to the optimizer.
//! - Numeric edge cases are not checked: dividing by zero, inverting a singular matrix or
//!   normalizing a zero-length vector produce whatever the element type produces (infinities and
//!   NaN for floats).

pub mod aliases;
pub mod broadcast;
mod functions;
mod matrix;
pub mod promote;
mod quat;
mod traits;
mod transform;
mod vector;

pub use broadcast::{Broadcast, Elementwise};
pub use functions::*;
pub use matrix::*;
pub use promote::{
    Cast, Common, CommonType, FloatCommon, FloatCommonType, Promote, Promoted, Select, SelectType,
    ToFloat,
};
pub use quat::*;
pub use traits::*;
pub use transform::*;
pub use vector::*;
