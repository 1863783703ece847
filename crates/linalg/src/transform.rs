//! Factory functions for rotations and 4x4 transformation matrices.
//!
//! All matrices use a right-handed, OpenGL-style convention: they transform column vectors
//! (`mul(m, v)`), eye space looks down the negative Z axis, and the projection matrices map the
//! near plane to a normalized depth of -1 and the far plane to +1.

use crate::{qxdir, qydir, qzdir, Float, Mat4, Matrix, Number, One, Quat, Vec3, Vec4, Zero};

/// Creates the unit quaternion rotating by `angle` radians around the unit vector `axis`.
///
/// # Examples
///
/// ```
/// # use linalg::*;
/// # use approx::assert_relative_eq;
/// let q = rotation_quat(Vec3::X, std::f64::consts::PI);
/// assert_relative_eq!(qrot(q, vec3(0.0, 1.0, 1.0)), vec3(0.0, -1.0, -1.0), epsilon = 1e-12);
/// ```
pub fn rotation_quat<T: Float>(axis: Vec3<T>, angle: T) -> Quat<T> {
    let half = angle / (T::ONE + T::ONE);
    let sin = half.sin();
    axis.map(|a| a * sin).extend(half.cos())
}

/// Returns a matrix translating points by `t`.
///
/// # Examples
///
/// ```
/// # use linalg::*;
/// let m = translation_matrix(vec3(1, 2, 3));
/// assert_eq!(mul(m, vec4(10, 10, 10, 1)), vec4(11, 12, 13, 1));
/// // Directions (with `w = 0`) are unaffected.
/// assert_eq!(mul(m, vec4(10, 10, 10, 0)), vec4(10, 10, 10, 0));
/// ```
pub fn translation_matrix<T: Zero + One + Copy>(t: Vec3<T>) -> Mat4<T> {
    let mut m = Mat4::identity();
    m[3] = t.extend(T::ONE);
    m
}

/// Returns the matrix rotating by the unit quaternion `q`.
pub fn rotation_matrix<T: Number>(q: Quat<T>) -> Mat4<T> {
    pose_matrix(q, Vec3::ZERO)
}

/// Returns the matrix that rotates by `q`, then translates by `p`.
pub fn pose_matrix<T: Number>(q: Quat<T>, p: Vec3<T>) -> Mat4<T> {
    Matrix::from_columns([
        qxdir(q).extend(T::ZERO),
        qydir(q).extend(T::ZERO),
        qzdir(q).extend(T::ZERO),
        p.extend(T::ONE),
    ])
}

/// Returns a matrix scaling each axis by the corresponding element of `s`.
pub fn scaling_matrix<T: Zero + One + Copy>(s: Vec3<T>) -> Mat4<T> {
    Matrix::from_diagonal(s.extend(T::ONE))
}

/// Returns a perspective projection for the view frustum with the given clipping planes.
///
/// `l`, `r`, `b` and `t` are the left, right, bottom and top edges of the near plane at distance
/// `n` in front of the eye; `f` is the distance of the far plane.
#[rustfmt::skip]
pub fn frustum_matrix<T: Float>(l: T, r: T, b: T, t: T, n: T, f: T) -> Mat4<T> {
    let two = T::ONE + T::ONE;
    let zero = T::ZERO;
    Matrix::from_columns([
        Vec4::from([two * n / (r - l), zero, zero, zero]),
        Vec4::from([zero, two * n / (t - b), zero, zero]),
        Vec4::from([(r + l) / (r - l), (t + b) / (t - b), -(f + n) / (f - n), -T::ONE]),
        Vec4::from([zero, zero, -two * f * n / (f - n), zero]),
    ])
}

/// Returns a symmetric perspective projection.
///
/// `fovy` is the full vertical field of view in radians, and `aspect` the ratio of the viewport
/// width to its height.
///
/// # Examples
///
/// ```
/// # use linalg::*;
/// # use approx::assert_relative_eq;
/// let proj = perspective_matrix(std::f32::consts::FRAC_PI_2, 2.0, 1.0, 100.0);
/// let clip = mul(proj, vec4(2.0, 1.0, -1.0, 1.0));
/// // The top right corner of the near plane.
/// assert_relative_eq!(*clip.xyz() / clip.w, vec3(1.0, 1.0, -1.0), epsilon = 1e-6);
/// ```
pub fn perspective_matrix<T: Float>(fovy: T, aspect: T, n: T, f: T) -> Mat4<T> {
    let y = n * (fovy / (T::ONE + T::ONE)).tan();
    let x = y * aspect;
    frustum_matrix(-x, x, -y, y, n, f)
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use approx::assert_relative_eq;

    use crate::{mul, qrot, rotation_quat, vec3, vec4};

    use super::*;

    #[test]
    fn rotation() {
        let q = rotation_quat(Vec3::<f32>::Y, FRAC_PI_2);
        assert_relative_eq!(q.length(), 1.0);
        // Right-handed: a quarter turn around Y takes Z to X.
        assert_relative_eq!(qrot(q, Vec3::Z), Vec3::X, epsilon = 1e-6);

        let m = rotation_matrix(q);
        let v = vec3(1.0f32, 2.0, 3.0);
        assert_relative_eq!(mul(m, v.extend(0.0)), qrot(q, v).extend(0.0), epsilon = 1e-6);
        assert_eq!(m[3], Vec4::<f32>::W);
        assert_eq!(rotation_matrix(Vec4::<f32>::W), Mat4::<f32>::identity());
    }

    #[test]
    fn pose() {
        let q = rotation_quat(vec3(0.0f32, 0.6, 0.8), 2.0);
        let p = vec3(-1.0f32, 5.0, 0.25);
        let v = vec3(3.0f32, -2.0, 1.0);
        let expected = qrot(q, v).zip(p).map(|(a, b)| a + b).extend(1.0);
        assert_relative_eq!(mul(pose_matrix(q, p), v.extend(1.0)), expected, epsilon = 1e-5);
        assert_eq!(
            pose_matrix(q, p),
            mul(translation_matrix(p), rotation_matrix(q))
        );
    }

    #[test]
    fn translation_and_scaling() {
        let t = translation_matrix(vec3(1.0f32, 2.0, 3.0));
        assert_eq!(t.row(3), vec4(0.0, 0.0, 0.0, 1.0));
        assert_eq!(mul(t, vec4(4.0f32, 5.0, 6.0, 1.0)), vec4(5.0, 7.0, 9.0, 1.0));

        let s = scaling_matrix(vec3(2i32, 3, 4));
        assert_eq!(mul(s, vec4(1i32, 1, 1, 1)), vec4(2, 3, 4, 1));
        assert_eq!(mul(s, t.cast::<i32>()).diagonal(), vec4(2, 3, 4, 1));
    }

    #[test]
    fn frustum_depth_range() {
        let (n, f) = (0.5f64, 50.0f64);
        let proj = frustum_matrix(-1.0, 2.0, -0.5, 1.5, n, f);

        let near = mul(proj, vec4(0.0, 0.0, -n, 1.0));
        assert_relative_eq!(near.w, n);
        assert_relative_eq!(near.z / near.w, -1.0);

        let far = mul(proj, vec4(0.0, 0.0, -f, 1.0));
        assert_relative_eq!(far.w, f);
        assert_relative_eq!(far.z / far.w, 1.0);

        // The edges of the near plane land on the edges of the clip volume.
        let corner = mul(proj, vec4(2.0, 1.5, -n, 1.0));
        assert_relative_eq!(corner.x / corner.w, 1.0);
        assert_relative_eq!(corner.y / corner.w, 1.0);
        let corner = mul(proj, vec4(-1.0, -0.5, -n, 1.0));
        assert_relative_eq!(corner.x / corner.w, -1.0);
        assert_relative_eq!(corner.y / corner.w, -1.0);
    }

    #[test]
    fn perspective_is_symmetric_frustum() {
        let proj = perspective_matrix(FRAC_PI_2, 1.0f32, 1.0, 10.0);
        assert_relative_eq!(proj, frustum_matrix(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0), epsilon = 1e-6);
        assert_relative_eq!(proj[(0, 0)], 1.0, epsilon = 1e-6);
        assert_eq!(proj[(3, 2)], -1.0);
        assert_eq!(proj[(3, 3)], 0.0);
    }
}
