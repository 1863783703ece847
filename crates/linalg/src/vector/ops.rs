//! Implementations of `std::ops` and the comparison traits.

use std::{
    cmp::Ordering,
    ops::{Index, IndexMut, Neg, Not},
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{broadcast::elementwise_ops, Negate, Promote, Promoted, Zero};

use super::{negate_promoted, Vector};

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// More general impl than what the derive generates. `ne` is its own reduction so that it stays
// "any element differs" for element types where `!=` is not simply `!(a == b)`.
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0.iter().zip(&other.0).all(|(a, b)| a == b)
    }

    #[allow(clippy::partialeq_ne_impl)]
    fn ne(&self, other: &Vector<U, N>) -> bool {
        self.0.iter().zip(&other.0).any(|(a, b)| a != b)
    }
}

impl<T, const N: usize> Eq for Vector<T, N> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for [T; N]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        *self == other.0
    }
}

/// Lexicographic comparison, starting at element 0.
impl<T: PartialOrd, const N: usize> PartialOrd for Vector<T, N> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Lexicographic comparison, starting at element 0.
impl<T: Ord, const N: usize> Ord for Vector<T, N> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T, const N: usize> AbsDiffEq for Vector<T, N>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.iter().zip(other).all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const N: usize> RelativeEq for Vector<T, N>
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
        self.iter()
            .zip(other)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const N: usize> UlpsEq for Vector<T, N>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.iter()
            .zip(other)
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

/// Element-wise negation of the promoted elements.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Promote,
    Promoted<T>: Negate,
{
    type Output = Vector<Promoted<T>, N>;

    fn neg(self) -> Self::Output {
        self.map(negate_promoted)
    }
}

/// Element-wise logical negation: `true` where an element is zero.
impl<T, const N: usize> Not for Vector<T, N>
where
    T: Zero + PartialEq,
{
    type Output = Vector<bool, N>;

    fn not(self) -> Self::Output {
        self.map(|x| x == T::ZERO)
    }
}

elementwise_ops!(Vector<N>);
