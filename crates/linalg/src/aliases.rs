//! Short names for the common vector and matrix types.
//!
//! Matrix aliases are named `<Elem>RxC` with `R` rows and `C` columns, so [`Float2x3`] is a
//! `Matrix<f32, 2, 3>`.
//!
//! ```
//! use linalg::{aliases::*, vec3};
//!
//! let v: Float3 = vec3(1.0, 2.0, 3.0);
//! let m = Float3x3::identity();
//! assert_eq!(linalg::mul(m, v), v);
//! ```

use crate::{Matrix, Vector};

macro_rules! vector_aliases {
    ($T:ty: $($name:ident = $N:literal),+ $(,)?) => {
        $(
            #[doc = concat!("A vector of ", stringify!($N), " `", stringify!($T), "` elements.")]
            pub type $name = Vector<$T, $N>;
        )+
    };
}

macro_rules! matrix_aliases {
    ($T:ty: $($name:ident = [$R:literal, $C:literal]),+ $(,)?) => {
        $(
            #[doc = concat!("A ", stringify!($R), "x", stringify!($C), " matrix of `", stringify!($T), "` elements.")]
            pub type $name = Matrix<$T, $R, $C>;
        )+
    };
}

vector_aliases!(bool: Bool2 = 2, Bool3 = 3, Bool4 = 4);
vector_aliases!(u8: Byte2 = 2, Byte3 = 3, Byte4 = 4);
vector_aliases!(i16: Short2 = 2, Short3 = 3, Short4 = 4);
vector_aliases!(u16: UShort2 = 2, UShort3 = 3, UShort4 = 4);
vector_aliases!(i32: Int2 = 2, Int3 = 3, Int4 = 4);
vector_aliases!(u32: UInt2 = 2, UInt3 = 3, UInt4 = 4);
vector_aliases!(f32: Float2 = 2, Float3 = 3, Float4 = 4);
vector_aliases!(f64: Double2 = 2, Double3 = 3, Double4 = 4);

#[rustfmt::skip]
matrix_aliases!(f32:
    Float2x2 = [2, 2], Float2x3 = [2, 3], Float2x4 = [2, 4],
    Float3x2 = [3, 2], Float3x3 = [3, 3], Float3x4 = [3, 4],
    Float4x2 = [4, 2], Float4x3 = [4, 3], Float4x4 = [4, 4],
);
#[rustfmt::skip]
matrix_aliases!(f64:
    Double2x2 = [2, 2], Double2x3 = [2, 3], Double2x4 = [2, 4],
    Double3x2 = [3, 2], Double3x3 = [3, 3], Double3x4 = [3, 4],
    Double4x2 = [4, 2], Double4x3 = [4, 3], Double4x4 = [4, 4],
);
#[rustfmt::skip]
matrix_aliases!(i32:
    Int2x2 = [2, 2], Int2x3 = [2, 3], Int2x4 = [2, 4],
    Int3x2 = [3, 2], Int3x3 = [3, 3], Int3x4 = [3, 4],
    Int4x2 = [4, 2], Int4x3 = [4, 3], Int4x4 = [4, 4],
);
