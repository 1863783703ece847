//! Quaternion algebra on 4-element vectors.
//!
//! A quaternion is stored as a [`Vec4`] holding the `x`, `y`, and `z` imaginary parts followed by
//! the real part `w`. Unit-length quaternions ("*versors*") represent rotations in 3D space; the
//! functions here follow the Hamilton convention.
//!
//! ```
//! # use linalg::*;
//! # use approx::assert_relative_eq;
//! use std::f32::consts::FRAC_PI_2;
//!
//! // A quarter turn around Z takes X to Y.
//! let q = rotation_quat(Vec3::Z, FRAC_PI_2);
//! assert_relative_eq!(qrot(q, Vec3::X), Vec3::Y);
//! ```

use crate::{Float, Mat3, Matrix, MinMax, Number, One, Signed, Vec3, Vec4, Vector, Zero};

/// A quaternion, stored as `(x, y, z, w)`.
pub type Quat<T> = Vec4<T>;

fn two<T: Number>() -> T {
    T::ONE + T::ONE
}

/// Returns the identity rotation `(0, 0, 0, 1)`.
#[inline]
pub fn quat_identity<T: Zero + One>() -> Quat<T> {
    Vec4::W
}

/// Returns the conjugate `(-x, -y, -z, w)`.
///
/// For unit quaternions this is the inverse rotation.
#[inline]
pub fn qconj<T: Signed>(q: Quat<T>) -> Quat<T> {
    let [x, y, z, w] = q.into_array();
    Vector([-x, -y, -z, w])
}

/// Returns the multiplicative inverse of `q`.
pub fn qinv<T: Signed>(q: Quat<T>) -> Quat<T> {
    let len2 = q.length2();
    qconj(q).map(|c| c / len2)
}

/// The Hamilton product `a * b`.
///
/// As rotations, the result applies `b` first and then `a`.
///
/// # Examples
///
/// ```
/// # use linalg::*;
/// let (i, j, k) = (Vec4::<f64>::X, Vec4::<f64>::Y, Vec4::<f64>::Z);
/// assert_eq!(qmul(i, j), k);
/// assert_eq!(qmul(j, i), -k);
/// assert_eq!(qmul(k, k), -Vec4::<f64>::W);
/// ```
pub fn qmul<T: Number>(a: Quat<T>, b: Quat<T>) -> Quat<T> {
    let [ax, ay, az, aw] = a.into_array();
    let [bx, by, bz, bw] = b.into_array();

    #[rustfmt::skip]
    let product = Vector([
        ax * bw + aw * bx + ay * bz - az * by,
        ay * bw + aw * by + az * bx - ax * bz,
        az * bw + aw * bz + ax * by - ay * bx,
        aw * bw - ax * bx - ay * by - az * bz,
    ]);
    product
}

/// Returns the image of the X axis under the rotation `q`.
pub fn qxdir<T: Number>(q: Quat<T>) -> Vec3<T> {
    let [x, y, z, w] = q.into_array();
    Vector([
        w * w + x * x - y * y - z * z,
        (x * y + z * w) * two(),
        (z * x - y * w) * two(),
    ])
}

/// Returns the image of the Y axis under the rotation `q`.
pub fn qydir<T: Number>(q: Quat<T>) -> Vec3<T> {
    let [x, y, z, w] = q.into_array();
    Vector([
        (x * y - z * w) * two(),
        w * w - x * x + y * y - z * z,
        (y * z + x * w) * two(),
    ])
}

/// Returns the image of the Z axis under the rotation `q`.
pub fn qzdir<T: Number>(q: Quat<T>) -> Vec3<T> {
    let [x, y, z, w] = q.into_array();
    Vector([
        (z * x + y * w) * two(),
        (y * z - x * w) * two(),
        w * w - x * x - y * y + z * z,
    ])
}

/// Returns the 3x3 rotation matrix of `q`, whose columns are [`qxdir`], [`qydir`] and [`qzdir`].
pub fn qmat<T: Number>(q: Quat<T>) -> Mat3<T> {
    Matrix::from_columns([qxdir(q), qydir(q), qzdir(q)])
}

/// Rotates the vector `v` by the unit quaternion `q`.
pub fn qrot<T: Number>(q: Quat<T>, v: Vec3<T>) -> Vec3<T> {
    let (x, y, z) = (qxdir(q), qydir(q), qzdir(q));
    Vector::from_fn(|i| x[i] * v.x + y[i] * v.y + z[i] * v.z)
}

/// Returns the rotation angle of `q`, in radians, in the range `0..=2π`.
///
/// `w` is clamped into `[-1, 1]` first, so slightly denormalized input never produces NaN.
pub fn qangle<T: Float>(q: Quat<T>) -> T {
    two::<T>() * MinMax::clamp(q.w, -T::ONE, T::ONE).acos()
}

/// Returns the normalized rotation axis of `q`.
///
/// The identity rotation has no axis; its vector part is zero and the result is NaN.
pub fn qaxis<T: Float>(q: Quat<T>) -> Vec3<T> {
    let axis = *q.xyz();
    if axis.length2() == T::ZERO {
        log::trace!("rotation axis of an identity quaternion is undefined");
    }
    axis.normalize()
}

/// Moves `b` into the hemisphere of `a`, so interpolating between them takes the short path.
fn shortest<T: Float>(a: Quat<T>, b: Quat<T>) -> Quat<T> {
    if a.dot(b) < T::ZERO {
        b.map(|x| -x)
    } else {
        b
    }
}

/// Normalized linear interpolation between two rotations, along the shorter arc.
pub fn qnlerp<T: Float>(a: Quat<T>, b: Quat<T>, t: T) -> Quat<T> {
    a.nlerp(shortest(a, b), t)
}

/// Spherical linear interpolation between two rotations, along the shorter arc.
///
/// Unlike [`Vector::slerp`], `b` is negated first if it lies in the opposite hemisphere of `a`,
/// since `q` and `-q` describe the same rotation.
pub fn qslerp<T: Float>(a: Quat<T>, b: Quat<T>, t: T) -> Quat<T> {
    a.slerp(shortest(a, b), t)
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use approx::assert_relative_eq;

    use crate::{mul, rotation_quat, vec3, vec4};

    use super::*;

    #[test]
    fn identity() {
        let id = quat_identity::<f32>();
        let v = vec3(1.5f32, -2.0, 3.0);
        assert_eq!(qrot(id, v), v);
        assert_eq!(qmat(id), Mat3::<f32>::identity());
        assert_eq!(qmul(id, vec4(1.0, 2.0, 3.0, 4.0)), vec4(1.0, 2.0, 3.0, 4.0));
        assert_eq!(qangle(id), 0.0);
    }

    #[test]
    fn conjugate_and_inverse() {
        let q = vec4(1.0f64, 2.0, 3.0, 4.0);
        assert_eq!(qconj(q), vec4(-1.0, -2.0, -3.0, 4.0));
        assert_eq!(qinv(vec4(0.0f64, 0.0, 0.0, 2.0)), vec4(0.0, 0.0, 0.0, 0.5));
        assert_relative_eq!(qmul(q, qinv(q)), quat_identity(), epsilon = 1e-12);
        assert_relative_eq!(qmul(qinv(q), q), quat_identity(), epsilon = 1e-12);
    }

    #[test]
    fn hamilton_product() {
        let (i, j, k) = (Vec4::<i32>::X, Vec4::<i32>::Y, Vec4::<i32>::Z);
        assert_eq!(qmul(i, j), k);
        assert_eq!(qmul(j, k), i);
        assert_eq!(qmul(k, i), j);
        assert_eq!(qmul(qmul(i, j), k), vec4(0, 0, 0, -1));
    }

    #[test]
    fn axis_directions() {
        let q = rotation_quat(Vec3::<f32>::Z, FRAC_PI_2);
        assert_relative_eq!(qxdir(q), Vec3::Y, epsilon = 1e-6);
        assert_relative_eq!(qydir(q), -Vec3::<f32>::X, epsilon = 1e-6);
        assert_relative_eq!(qzdir(q), Vec3::Z, epsilon = 1e-6);

        let v = vec3(1.0f32, 2.0, 3.0);
        assert_relative_eq!(qrot(q, v), vec3(-2.0, 1.0, 3.0), epsilon = 1e-6);
        assert_relative_eq!(mul(qmat(q), v), qrot(q, v), epsilon = 1e-6);
    }

    #[test]
    fn composition() {
        let a = rotation_quat(vec3(1.0f32, 0.0, 0.0), 0.7);
        let b = rotation_quat(vec3(0.0f32, 0.6, 0.8), -1.3);
        let v = vec3(0.3f32, -4.0, 2.5);
        assert_relative_eq!(qrot(qmul(a, b), v), qrot(a, qrot(b, v)), epsilon = 1e-5);
    }

    #[test]
    fn angle_and_axis() {
        let axis = vec3(0.0f32, 0.6, 0.8);
        let q = rotation_quat(axis, 1.25);
        assert_relative_eq!(qangle(q), 1.25, epsilon = 1e-6);
        assert_relative_eq!(qaxis(q), axis, epsilon = 1e-6);

        assert_relative_eq!(qangle(rotation_quat(axis, PI)), PI);
        // `w` slightly outside of [-1, 1] is clamped.
        assert_eq!(qangle(vec4(0.0f32, 0.0, 0.0, 1.0 + f32::EPSILON)), 0.0);

        let undefined = qaxis(quat_identity::<f32>());
        assert!(undefined.x.is_nan() && undefined.y.is_nan() && undefined.z.is_nan());
    }

    #[test]
    fn interpolation_takes_short_path() {
        let q = rotation_quat(vec3(0.0f32, 0.0, 1.0), 0.5);
        let neg = q.map(|x| -x);
        assert_relative_eq!(qnlerp(q, neg, 0.5), q, epsilon = 1e-6);
        assert_relative_eq!(qslerp(q, neg, 0.5), q, epsilon = 1e-6);

        let a = quat_identity::<f32>();
        let b = rotation_quat(Vec3::Z, FRAC_PI_2);
        let half = rotation_quat(Vec3::Z, FRAC_PI_2 / 2.0);
        assert_relative_eq!(qslerp(a, b, 0.5), half, epsilon = 1e-6);
        assert_relative_eq!(qnlerp(a, b, 0.5), half, epsilon = 1e-6);
        assert_relative_eq!(qslerp(a, b.map(|x| -x), 0.5), half, epsilon = 1e-6);
    }
}
