use std::{array, fmt, slice};

use crate::{
    traits::{Number, Signed},
    Cast, Modular, One, Promote, Promoted, Vector, Zero,
};

mod ops;

/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;

/// A matrix with 2 rows and 3 columns.
pub type Mat2x3<T> = Matrix<T, 2, 3>;
/// A matrix with 2 rows and 4 columns.
pub type Mat2x4<T> = Matrix<T, 2, 4>;
/// A matrix with 3 rows and 2 columns.
pub type Mat3x2<T> = Matrix<T, 3, 2>;
/// A matrix with 3 rows and 4 columns.
pub type Mat3x4<T> = Matrix<T, 3, 4>;
/// A matrix with 4 rows and 2 columns.
pub type Mat4x2<T> = Matrix<T, 4, 2>;
/// A matrix with 4 rows and 3 columns.
pub type Mat4x3<T> = Matrix<T, 4, 3>;

/// A column-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// The matrix is stored as `C` column [`Vector`]s of length `R`, without padding.
///
/// # Construction
///
/// There are several ways to create a [`Matrix`]:
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] allow filling a matrix with raw elements,
///   as well as creating them from an array of row or column vectors.
/// - [`Matrix::from_fn`] will create each element by invoking a closure with its row and column.
/// - [`Matrix::splat`] copies a single value into every element.
/// - For square matrices (where `R` equals `C`), [`Matrix::from_diagonal`] can be used to create a
///   matrix with a specified diagonal and zero outside of its diagonal.
/// - [`Matrix::ZERO`] (also the [`Default`]) is a matrix with every element set to 0, and
///   [`Matrix::identity`] has 1 on its diagonal and 0 everywhere else.
///
/// # Element Access
///
/// [`Matrix`] implements the [`Index`] and [`IndexMut`] traits for tuples of `(usize, usize)`. The
/// first element of the tuple is the *row* (Y coordinate), the second is the *column* (X
/// coordinate), matching common mathematical notation. Indices are 0-based.
///
/// Indexing with a single `usize` selects a whole column.
///
/// ```
/// # use linalg::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1],
///     [2, 3],
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(0, 1)], 1);
/// assert_eq!(mat[1], vec2(1, 3));
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. [`Matrix::get`] and
/// [`Matrix::get_mut`] return [`Option`]s instead and can be used for checked indexing:
///
/// ```
/// # use linalg::*;
/// let mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// assert_eq!(mat.get(0, 0), Some(&0));
/// assert_eq!(mat.get(0, 1), Some(&1));
/// assert_eq!(mat.get(0, 2), None);
/// ```
///
/// # Operators
///
/// Like for [`Vector`], all operators work element by element, so `a * b` is *not* the matrix
/// product. Use [`mul`][crate::mul] (or [`MatMul`]) for that.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>(pub(crate) [Vector<T, R>; C]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T: Zero, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([Vector::<T, R>::ZERO; C]);
}

impl<T: Zero + One, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Returns the identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else. Multiplying any vector
    /// with this matrix returns the vector unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg::*;
    /// let id = Mat2::<i32>::identity();
    /// assert_eq!(id, Matrix::from_rows([
    ///     [1, 0],
    ///     [0, 1],
    /// ]));
    /// assert_eq!(mul(id, vec2(7, 8)), vec2(7, 8));
    /// ```
    pub fn identity() -> Self {
        Self::from_fn(|row, col| if row == col { T::ONE } else { T::ZERO })
    }
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self
    where
        T: Copy,
    {
        Matrix::from_columns(rows).transpose()
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self {
        Self(columns.map(Into::into))
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each element.
    ///
    /// This mirrors [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|col| Vector::from_fn(|row| cb(row, col))))
    }

    /// Creates a matrix with every element initialized to `elem`.
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([Vector::splat(elem); C])
    }

    /// Applies a closure to each element, returning a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// let mat = mat.map(|i| i * 2);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  2,  4],
    ///     [ 6,  8, 10],
    /// ]));
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map(&mut f)))
    }

    /// Converts every element to `U`, like a C `static_cast`.
    #[inline]
    pub fn cast<U>(self) -> Matrix<U, R, C>
    where
        T: Cast<U>,
    {
        self.map(Cast::cast)
    }

    /// Applies integer promotion to every element (C's unary `+`).
    #[inline]
    pub fn promote(self) -> Matrix<Promoted<T>, R, C>
    where
        T: Promote,
    {
        self.map(Promote::promote)
    }

    /// Bitwise complement of every (promoted) element (C's unary `~`).
    #[inline]
    pub fn compl(self) -> Matrix<Promoted<T>, R, C>
    where
        T: Promote,
        Promoted<T>: std::ops::Not<Output = Promoted<T>>,
    {
        self.map(|x| !x.promote())
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R>
    where
        T: Copy,
    {
        Matrix::from_fn(|row, col| self[(col, row)])
    }

    /// Returns row `index` as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than `R`.
    pub fn row(&self, index: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        Vector::from_fn(|col| self[(index, col)])
    }

    /// Returns a reference to the columns of this matrix.
    #[inline]
    pub fn columns(&self) -> &[Vector<T, R>; C] {
        &self.0
    }

    /// Returns the columns of this matrix.
    #[inline]
    pub fn into_columns(self) -> [Vector<T, R>; C] {
        self.0
    }

    /// Returns an iterator over the columns, from left to right.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Vector<T, R>> {
        self.0.iter()
    }

    /// Returns an iterator over mutable references to the columns, from left to right.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Vector<T, R>> {
        self.0.iter_mut()
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.get(0, 0), Some(&0));
    /// assert_eq!(mat.get(1, 0), Some(&3));
    /// assert_eq!(mat.get(2, 0), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(col).and_then(|col| col.get(row))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(col).and_then(|col| col.get_mut(row))
    }
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Returns a [`Vector`] holding the diagonal elements of this square matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.diagonal(), [1, 4]);
    /// ```
    pub fn diagonal(&self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self[(i, i)])
    }

    /// Creates a square matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero + Copy,
    {
        let diag = diag.into();
        Self::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag.trace(), 1 + 2 + 3);
    ///
    /// assert_eq!(Mat3::<f32>::identity().trace(), 3.0);
    /// ```
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc.modular_add(self[(i, i)]))
    }
}

/// Square matrices with closed-form determinant, adjugate and inverse.
///
/// Implemented for 2x2, 3x3 and 4x4 matrices.
pub trait SquareMatrix: Sized {
    /// The element type.
    type Elem;

    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    fn determinant(&self) -> Self::Elem;

    /// Returns the [adjugate] (the transposed cofactor matrix).
    ///
    /// For every square matrix `m`, `mul(m, m.adjugate())` is `m.determinant()` times the identity.
    ///
    /// [adjugate]: https://en.wikipedia.org/wiki/Adjugate_matrix
    fn adjugate(&self) -> Self;

    /// Inverts this matrix, computing the adjugate divided by the determinant.
    ///
    /// Singular matrices are not rejected: the division by zero propagates into the result
    /// (non-finite elements for floating-point matrices, a panic for integer matrices).
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalg::*;
    /// let m = Matrix::from_rows([
    ///     [2.0, 0.0],
    ///     [0.0, 4.0],
    /// ]);
    /// assert_eq!(m.inverse(), Matrix::from_rows([
    ///     [0.5, 0.0],
    ///     [0.0, 0.25],
    /// ]));
    /// ```
    fn inverse(&self) -> Self;
}

fn invert<T: Signed, const N: usize>(adjugate: Matrix<T, N, N>, det: T) -> Matrix<T, N, N> {
    if det == T::ZERO {
        log::debug!("inverting a singular {}x{} matrix", N, N);
    }
    adjugate.map(|x| x / det)
}

impl<T: Signed> SquareMatrix for Matrix<T, 2, 2> {
    type Elem = T;

    #[inline]
    fn determinant(&self) -> T {
        self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]
    }

    fn adjugate(&self) -> Self {
        let [[a, c], [b, d]] = self.0.map(Vector::into_array);
        Matrix::from_columns([[d, -c], [-b, a]])
    }

    fn inverse(&self) -> Self {
        invert(self.adjugate(), self.determinant())
    }
}

impl<T: Signed> SquareMatrix for Matrix<T, 3, 3> {
    type Elem = T;

    fn determinant(&self) -> T {
        let [[a, d, g], [b, e, h], [c, f, i]] = self.0.map(Vector::into_array);
        a * e * i + b * f * g + c * d * h - c * e * g - b * d * i - a * f * h
    }

    #[rustfmt::skip]
    fn adjugate(&self) -> Self {
        let a = |row: usize, col: usize| self[(row, col)];
        Matrix::from_rows([
            [
                a(1, 1) * a(2, 2) - a(1, 2) * a(2, 1),
                a(0, 2) * a(2, 1) - a(0, 1) * a(2, 2),
                a(0, 1) * a(1, 2) - a(0, 2) * a(1, 1),
            ],
            [
                a(1, 2) * a(2, 0) - a(1, 0) * a(2, 2),
                a(0, 0) * a(2, 2) - a(0, 2) * a(2, 0),
                a(0, 2) * a(1, 0) - a(0, 0) * a(1, 2),
            ],
            [
                a(1, 0) * a(2, 1) - a(1, 1) * a(2, 0),
                a(0, 1) * a(2, 0) - a(0, 0) * a(2, 1),
                a(0, 0) * a(1, 1) - a(0, 1) * a(1, 0),
            ],
        ])
    }

    fn inverse(&self) -> Self {
        invert(self.adjugate(), self.determinant())
    }
}

/// 2x2 minors of a 4x4 matrix: `s` from the top two rows, `c` from the bottom two.
///
/// Both use the column pairs (0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3), in that order.
struct Minors4<T> {
    s: [T; 6],
    c: [T; 6],
}

impl<T: Signed> Minors4<T> {
    const COLUMN_PAIRS: [(usize, usize); 6] = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

    fn of(m: &Matrix<T, 4, 4>) -> Self {
        let minor = |r0: usize, r1: usize, (c0, c1): (usize, usize)| {
            m[(r0, c0)] * m[(r1, c1)] - m[(r1, c0)] * m[(r0, c1)]
        };
        Self {
            s: Self::COLUMN_PAIRS.map(|cols| minor(0, 1, cols)),
            c: Self::COLUMN_PAIRS.map(|cols| minor(2, 3, cols)),
        }
    }
}

impl<T: Signed> SquareMatrix for Matrix<T, 4, 4> {
    type Elem = T;

    fn determinant(&self) -> T {
        let Minors4 { s, c } = Minors4::of(self);
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }

    #[rustfmt::skip]
    fn adjugate(&self) -> Self {
        let Minors4 { s, c } = Minors4::of(self);
        let a = |row: usize, col: usize| self[(row, col)];
        Matrix::from_rows([
            [
                a(1, 1) * c[5] - a(1, 2) * c[4] + a(1, 3) * c[3],
                -a(0, 1) * c[5] + a(0, 2) * c[4] - a(0, 3) * c[3],
                a(3, 1) * s[5] - a(3, 2) * s[4] + a(3, 3) * s[3],
                -a(2, 1) * s[5] + a(2, 2) * s[4] - a(2, 3) * s[3],
            ],
            [
                -a(1, 0) * c[5] + a(1, 2) * c[2] - a(1, 3) * c[1],
                a(0, 0) * c[5] - a(0, 2) * c[2] + a(0, 3) * c[1],
                -a(3, 0) * s[5] + a(3, 2) * s[2] - a(3, 3) * s[1],
                a(2, 0) * s[5] - a(2, 2) * s[2] + a(2, 3) * s[1],
            ],
            [
                a(1, 0) * c[4] - a(1, 1) * c[2] + a(1, 3) * c[0],
                -a(0, 0) * c[4] + a(0, 1) * c[2] - a(0, 3) * c[0],
                a(3, 0) * s[4] - a(3, 1) * s[2] + a(3, 3) * s[0],
                -a(2, 0) * s[4] + a(2, 1) * s[2] - a(2, 3) * s[0],
            ],
            [
                -a(1, 0) * c[3] + a(1, 1) * c[1] - a(1, 2) * c[0],
                a(0, 0) * c[3] - a(0, 1) * c[1] + a(0, 2) * c[0],
                -a(3, 0) * s[3] + a(3, 1) * s[1] - a(3, 2) * s[0],
                a(2, 0) * s[3] - a(2, 1) * s[1] + a(2, 2) * s[0],
            ],
        ])
    }

    fn inverse(&self) -> Self {
        invert(self.adjugate(), self.determinant())
    }
}

/// The algebraic matrix product.
///
/// Unlike the element-wise `*` operator, this is only defined for operands of compatible
/// dimensions: an `M x N` matrix times an `N x P` matrix, or an `R x C` matrix times a
/// `C`-element column vector. Incompatible dimensions are a compile error.
pub trait MatMul<Rhs> {
    type Output;

    fn mat_mul(self, rhs: Rhs) -> Self::Output;
}

/// Matrix * Column Vector.
impl<T, const R: usize, const C: usize> MatMul<Vector<T, C>> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Vector<T, R>;

    fn mat_mul(self, rhs: Vector<T, C>) -> Self::Output {
        Vector::from_fn(|row| self.row(row).dot(rhs))
    }
}

/// Matrix * Matrix.
impl<T, const M: usize, const N: usize, const P: usize> MatMul<Matrix<T, N, P>> for Matrix<T, M, N>
where
    T: Number,
{
    type Output = Matrix<T, M, P>;

    fn mat_mul(self, rhs: Matrix<T, N, P>) -> Self::Output {
        Matrix::from_fn(|i, j| self.row(i).dot(rhs.0[j]))
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T, const R: usize, const C: usize> From<[[T; R]; C]> for Matrix<T, R, C> {
    /// Creates a matrix from an array of columns.
    #[inline]
    fn from(columns: [[T; R]; C]) -> Self {
        Self::from_columns(columns)
    }
}

impl<T, const R: usize, const C: usize> IntoIterator for Matrix<T, R, C> {
    type Item = Vector<T, R>;
    type IntoIter = array::IntoIter<Vector<T, R>, C>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T, const R: usize, const C: usize> IntoIterator for &'a Matrix<T, R, C> {
    type Item = &'a Vector<T, R>;
    type IntoIter = slice::Iter<'a, Vector<T, R>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const R: usize, const C: usize> IntoIterator for &'a mut Matrix<T, R, C> {
    type Item = &'a mut Vector<T, R>;
    type IntoIter = slice::IterMut<'a, Vector<T, R>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug, const R: usize, const C: usize>(
            &'a Matrix<T, R, C>,
            usize,
        );
        impl<'a, T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for FormatRow<'a, T, R, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for col in 0..C {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    self.0[(self.1, col)].fmt(f)?;
                }
                write!(f, "]")?;
                Ok(())
            }
        }

        let mut list = f.debug_list();
        for row in 0..R {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}

/// Row-wise, in the same layout as the [`Debug`][fmt::Debug] output.
impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for row in 0..R {
            if row != 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for col in 0..C {
                if col != 0 {
                    write!(f, ", ")?;
                }
                self[(row, col)].fmt(f)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use crate::{mul, vec2, vec3};

    use super::*;

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]),
            Mat2x3::from_columns([[1, 4], [2, 5], [3, 6]]),
        );
        assert_eq!(
            Mat2x3::from([[1, 4], [2, 5], [3, 6]]).row(1),
            vec3(4, 5, 6)
        );
    }

    #[test]
    fn diagonal() {
        let mat = Matrix::from_diagonal([1, 2]);

        #[rustfmt::skip]
        assert_eq!(mat, Matrix::from_rows([
            [1, 0],
            [0, 2],
        ]));

        assert_eq!(mat.diagonal(), [1, 2]);
    }

    #[test]
    fn defaults() {
        assert_eq!(Mat3x4::<u8>::default(), Matrix::ZERO);
        assert_eq!(Mat2::<bool>::default(), Matrix::splat(false));
        assert_eq!(Mat4::<f64>::default(), Mat4::ZERO);
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");

        // `#` modifier prints each row in its own line, but not each individual element.
        assert_eq!(
            format!("{:#?}", mat),
            "
[
    [0, 1],
    [2, 3],
]
"
            .trim()
        );

        let mat = Matrix::from_rows([[0.5, 1.0], [2.0, -3.3]]);
        assert_eq!(mat.to_string(), "[[0.5, 1], [2, -3.3]]");
        assert_eq!(format!("{:.2}", mat), "[[0.50, 1.00], [2.00, -3.30]]");
    }

    #[test]
    fn constants() {
        assert_eq!(format!("{:?}", Mat2::<f32>::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
        assert_eq!(
            format!("{:?}", Mat2::<f32>::identity()),
            "[[1.0, 0.0], [0.0, 1.0]]"
        );
        assert_eq!(
            Mat2x3::<i32>::identity(),
            Matrix::from_rows([[1, 0, 0], [0, 1, 0]])
        );
    }

    #[test]
    fn columns() {
        let mut mat = Matrix::from_rows([[1, 2], [3, 4]]);
        assert_eq!(mat[0], vec2(1, 3));
        mat[1] = vec2(20, 40);
        assert_eq!(mat[(0, 1)], 20);
        for column in &mut mat {
            column.y += 100;
        }
        assert_eq!(mat.iter().map(|c| c.sum()).collect::<Vec<_>>(), [104, 160]);
    }

    #[test]
    fn mat_vec_mul() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);
        let vec = vec2(4, 5);
        let out = mat.mat_mul(vec);
        assert_eq!(out, [4 * 0 + 5 * 1, 4 * 2 + 5 * 3]);

        // Unsigned products wrap around.
        let mat = Matrix::from_rows([[u32::MAX, 0], [1, 1]]);
        assert_eq!(mat.mat_mul(vec2(2u32, 3)), [u32::MAX - 1, 5]);
        assert_eq!(Matrix::<u8, 2, 2>::splat(200).trace(), 144);
    }

    #[test]
    fn mat_mat_mul() {
        #[rustfmt::skip]
        let a = Matrix::from_rows([
            [1, 2],
            [3, 4],
            [5, 6],
            [7, 8],
        ]);
        #[rustfmt::skip]
        let b = Matrix::from_rows([
            [9, 10, 11],
            [12, 13, 14],
        ]);
        let c = a.mat_mul(b);
        assert_eq!(c[(0, 1)], a[(0, 0)] * b[(0, 1)] + a[(0, 1)] * b[(1, 1)]);
        assert_eq!(c[(2, 2)], a[(2, 0)] * b[(0, 2)] + a[(2, 1)] * b[(1, 2)]);
    }

    #[test]
    fn determinant() {
        assert_eq!(Mat2::<f32>::ZERO.determinant(), 0.0);
        assert_eq!(Mat3::<f32>::ZERO.determinant(), 0.0);
        assert_eq!(Mat4::<f32>::ZERO.determinant(), 0.0);
        assert_eq!(Mat2::<f32>::identity().determinant(), 1.0);
        assert_eq!(Mat3::<f32>::identity().determinant(), 1.0);
        assert_eq!(Mat4::<f32>::identity().determinant(), 1.0);

        #[rustfmt::skip]
        let testmat = Matrix::from_rows([
            [-2, -1,  2],
            [ 2,  1,  4],
            [-3,  3, -1],
        ]);
        assert_eq!(testmat.determinant(), 54);
        assert_eq!(testmat.transpose().determinant(), 54);

        #[rustfmt::skip]
        let testmat = Matrix::from_rows([
            [1, 0, 2, -1],
            [3, 0, 0,  5],
            [2, 1, 4, -3],
            [1, 0, 5,  0],
        ]);
        assert_eq!(testmat.determinant(), 30);
        assert_eq!(testmat.transpose().determinant(), 30);
    }

    #[test]
    fn adjugate() {
        #[rustfmt::skip]
        let m3 = Matrix::from_rows([
            [1, 2, 3],
            [0, 1, 4],
            [5, 6, 0],
        ]);
        #[rustfmt::skip]
        assert_eq!(m3.adjugate(), Matrix::from_rows([
            [-24,  18,  5],
            [ 20, -15, -4],
            [ -5,   4,  1],
        ]));

        #[rustfmt::skip]
        let m4 = Matrix::from_rows([
            [ 2, -1,  0,  3],
            [ 1,  4, -2,  0],
            [ 0,  3,  1, -1],
            [-2,  0,  5,  1],
        ]);
        let det = m4.determinant();
        assert_eq!(mul(m4, m4.adjugate()), Matrix::from_diagonal([det; 4]));
        assert_eq!(mul(m4.adjugate(), m4), Matrix::from_diagonal([det; 4]));

        let m2 = Matrix::from_rows([[4, 7], [2, 6]]);
        assert_eq!(m2.adjugate(), Matrix::from_rows([[6, -7], [-2, 4]]));
    }

    #[test]
    fn inverse() {
        let m = Matrix::from_rows([[2.0f64, 1.0], [1.0, 1.0]]);
        assert_eq!(m.inverse(), Matrix::from_rows([[1.0, -1.0], [-1.0, 2.0]]));
        assert_eq!(mul(m, m.inverse()), Mat2::identity());

        let singular = Matrix::from_rows([[1.0f32, 2.0], [2.0, 4.0]]);
        assert!(singular.inverse()[(0, 0)].is_infinite());
    }
}
