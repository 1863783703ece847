use std::{
    cmp::Ordering,
    ops::{Index, IndexMut, Neg, Not},
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{
    broadcast::elementwise_ops, vector::negate_promoted, Matrix, Negate, Promote, Promoted,
    Vector, Zero,
};

/// Column access.
impl<T, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
    type Output = Vector<T, R>;

    #[inline]
    fn index(&self, col: usize) -> &Self::Output {
        &self.0[col]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, col: usize) -> &mut Self::Output {
        &mut self.0[col]
    }
}

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[col][row]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[col][row]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.0.iter().zip(&other.0).all(|(a, b)| a == b)
    }

    #[allow(clippy::partialeq_ne_impl)]
    fn ne(&self, other: &Matrix<U, R, C>) -> bool {
        self.0.iter().zip(&other.0).any(|(a, b)| a != b)
    }
}

impl<T, const R: usize, const C: usize> Eq for Matrix<T, R, C> where T: Eq {}

/// Lexicographic comparison, column by column.
impl<T: PartialOrd, const R: usize, const C: usize> PartialOrd for Matrix<T, R, C> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl<T: Ord, const R: usize, const C: usize> Ord for Matrix<T, R, C> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T, const R: usize, const C: usize> AbsDiffEq for Matrix<T, R, C>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        for (a, b) in self.0.iter().zip(&other.0) {
            if !a.abs_diff_eq(b, epsilon) {
                return false;
            }
        }
        true
    }
}

impl<T, const R: usize, const C: usize> RelativeEq for Matrix<T, R, C>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        for (a, b) in self.0.iter().zip(&other.0) {
            if !a.relative_eq(b, epsilon, max_relative) {
                return false;
            }
        }
        true
    }
}

impl<T, const R: usize, const C: usize> UlpsEq for Matrix<T, R, C>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        for (a, b) in self.0.iter().zip(&other.0) {
            if !a.ulps_eq(b, epsilon, max_ulps) {
                return false;
            }
        }
        true
    }
}

/// Element-wise negation of the promoted elements.
impl<T, const R: usize, const C: usize> Neg for Matrix<T, R, C>
where
    T: Promote,
    Promoted<T>: Negate,
{
    type Output = Matrix<Promoted<T>, R, C>;

    fn neg(self) -> Self::Output {
        self.map(negate_promoted)
    }
}

/// Element-wise logical negation: `true` where an element is zero.
impl<T, const R: usize, const C: usize> Not for Matrix<T, R, C>
where
    T: Zero + PartialEq,
{
    type Output = Matrix<bool, R, C>;

    fn not(self) -> Self::Output {
        self.map(|x| x == T::ZERO)
    }
}

elementwise_ops!(Matrix<R, C>);

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::{Mat2, Mat2x3};

    use super::*;

    #[test]
    fn elementwise() {
        let a = Matrix::from_rows([[1i32, 2], [3, 4]]);
        let b = Matrix::from_rows([[5i32, 6], [7, 8]]);
        // `*` is element-wise, not the matrix product.
        assert_eq!(a * b, Matrix::from_rows([[5, 12], [21, 32]]));
        assert_eq!(a + 1i32, Matrix::from_rows([[2, 3], [4, 5]]));
        assert_eq!(10i32 - a, Matrix::from_rows([[9, 8], [7, 6]]));
        assert_eq!(a << 1u8, Matrix::from_rows([[2, 4], [6, 8]]));
        assert_eq!(-a, Matrix::from_rows([[-1, -2], [-3, -4]]));
        assert_eq!(!(a - 1i32), Matrix::from_rows([[true, false], [false, false]]));
    }

    #[test]
    fn promotion() {
        let bytes = Mat2x3::<u8>::splat(200);
        let sum: Mat2x3<i32> = bytes + bytes;
        assert_eq!(sum, Matrix::splat(400));

        let scaled: Mat2<f64> = 0.5f64 * Mat2::<i16>::identity();
        assert_eq!(scaled, Matrix::from_rows([[0.5, 0.0], [0.0, 0.5]]));

        let mut m = Mat2::<u8>::splat(10);
        m *= 30i32;
        assert_eq!(m, Matrix::splat(44)); // 300 wraps around in `u8`
    }

    #[test]
    fn comparison() {
        let a = Matrix::from_rows([[1i32, 2], [3, 4]]);
        let mut b = a;
        assert!(a == b && !(a != b));
        b[(1, 1)] = 5;
        assert!(a != b && !(a == b));
        assert!(a < b);
        // Column 0 is compared first.
        b[(0, 0)] = 0;
        assert!(a > b);
    }

    #[test]
    fn approx() {
        let a = Matrix::from_rows([[0.1f32 + 0.2, 1.0], [2.0, 3.0]]);
        let b = Matrix::from_rows([[0.3f32, 1.0], [2.0, 3.0]]);
        assert_relative_eq!(a, b);
        assert!(a.abs_diff_ne(&(b + 0.01f32), 0.001));
    }
}
