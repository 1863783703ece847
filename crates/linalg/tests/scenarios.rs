use approx::assert_relative_eq;
use linalg::{aliases::*, *};

#[test]
fn default_is_zero() {
    assert_eq!(UInt2::default(), [0, 0]);
    assert_eq!(Int3x4::default(), Int3x4::splat(0));
    assert_eq!(UShort4::default(), UShort4::ZERO);
    assert_eq!(Float4x2::default(), Float4x2::splat(0.0));
    assert_eq!(Double2x3::default(), Double2x3::ZERO);
    assert!(!any(Bool3::default()));
}

#[test]
fn equality_and_inequality() {
    let v: Float4 = vec4(1.0, 2.0, 3.0, 4.0);
    assert!(v == vec4(1.0, 2.0, 3.0, 4.0));
    assert!(!(v != vec4(1.0, 2.0, 3.0, 4.0)));

    for i in 0..4 {
        let mut w = v;
        w[i] = 5.0;
        assert!(!(v == w), "{:?} == {:?}", v, w);
        assert!(v != w, "!({:?} != {:?})", v, w);
    }
}

#[test]
fn operators_are_elementwise() {
    let (a, b): (Float2, Float2) = (vec2(2.0, 3.0), vec2(4.0, 12.0));
    assert_eq!(a + b, vec2(6.0, 15.0));
    assert_eq!(a - b, vec2(-2.0, -9.0));
    assert_eq!(a * b, vec2(8.0, 36.0));
    assert_eq!(a / b, vec2(0.5, 0.25));

    let (a, b): (Int2, Int2) = (vec2(27, 31), vec2(5, 8));
    assert_eq!(a % b, vec2(2, 7));
    assert_eq!(a | b, vec2(31, 31));
    assert_eq!(a ^ b, vec2(30, 23));
    assert_eq!(a & b, vec2(1, 8));

    let (a, b): (Int2, Int2) = (vec2(14, 35), vec2(2, 3));
    assert_eq!(a << b, vec2(56, 280));
    assert_eq!(a >> b, vec2(3, 4));
}

macro_rules! promotes {
    ($Small:ty, $Promoted:ty, $one:expr) => {{
        let z = <$Small>::default();
        let one = <$Small>::splat($one);

        let _: $Promoted = promote(z);
        let _: $Promoted = -z;
        let _: $Promoted = z + z;
        let _: $Promoted = z - z;
        let _: $Promoted = z * z;
        let _: $Promoted = z / one;
        let _: $Promoted = z % one;
        let _: $Promoted = z | z;
        let _: $Promoted = z ^ z;
        let _: $Promoted = z & z;
        let _: $Promoted = z << z;
        let _: $Promoted = z >> z;

        assert_eq!(promote(z), <$Promoted>::default());
        assert_eq!(-z, <$Promoted>::default());
        assert_eq!(z + z, <$Promoted>::default());
        assert_eq!(z / one, <$Promoted>::default());
        assert!(all(!z));
    }};
}

#[test]
fn integer_promotion() {
    promotes!(Byte2, Int2, 1);
    promotes!(Byte4, Int4, 1);
    promotes!(Short3, Int3, 1);
    promotes!(UShort4, Int4, 1);
    promotes!(Int2, Int2, 1);
    promotes!(UInt3, UInt3, 1);

    assert_eq!(compl(Byte4::default()), Int4::splat(!0));
    assert_eq!(compl(Short2::default()), Int2::splat(!0));
    assert_eq!(compl(UShort3::default()), Int3::splat(!0));
    assert_eq!(compl(Int4::default()), Int4::splat(!0));
    assert_eq!(compl(UInt2::default()), UInt2::splat(!0));

    let f = Float4::default();
    let _: Float4 = promote(f);
    let _: Float4 = -f;
    let _: Float4 = f + f;
    let _: Float4 = f / Float4::splat(1.0);
    assert!(all(!f));
}

#[test]
fn comparison_functions() {
    let (a, b): (Float3, Float3) = (vec3(1.0, 2.0, 3.0), vec3(4.0, -2.0, 3.0));
    assert_eq!(equal(a, b), vec3(false, false, true));
    assert_eq!(nequal(a, b), vec3(true, true, false));
    assert_eq!(less(a, b), vec3(true, false, false));
    assert_eq!(greater(a, b), vec3(false, true, false));
    assert_eq!(lequal(a, b), vec3(true, false, true));
    assert_eq!(gequal(a, b), vec3(false, true, true));
}

/// Every function resolves to the expected result type.
#[test]
fn result_types() {
    let (f2, f3, f4) = (Float2::default(), Float3::default(), Float4::default());
    let (d2, d3, d4) = (Double2::default(), Double3::default(), Double4::default());
    let (i2, i3, i4) = (Int2::default(), Int3::default(), Int4::default());
    let (s2, s3) = (Short2::default(), Short3::default());
    let u4 = UInt4::default();
    let (x, d, i, s, u) = (0.0f32, 0.0f64, 0i32, 0i16, 0u32);

    // Construction.
    let _: Float2 = Float2::splat(5.0);
    let _: Float2 = Float2::from_slice(&[1.0, 2.0, 3.0, 4.0][..2]);
    let _: Float2 = i2.cast();
    let _: Float3 = f2.extend(4.0);
    let _: Float4 = f3.extend(4.0);
    let _: &Float2 = f3.xy();
    let _: &Float3 = f4.xyz();
    let _: Float4x4 = Float4x4::identity();

    // Iteration.
    for _f in f4 {}
    for _f in &f4 {}
    for _column in Float4x4::default() {}

    // Relational operators.
    let _: bool = i2 == i2;
    let _: bool = s2 != s2;
    let _: bool = f3 < f3;
    let _: bool = d4 >= d4;

    // Unary operators and functions.
    let _: Float3 = promote(f3);
    let _: Float2 = -f2;
    let _: Int4 = compl(i4);
    let _: Bool2 = !s2;
    let _: Float3 = abs(f3);
    let _: Float4 = floor(f4);
    let _: Float3 = ceil(f3);
    let _: Float2 = exp(f2);
    let _: Float4 = log(f4);
    let _: Float2 = log10(f2);
    let _: Float3 = sqrt(f3);
    let _: Double4 = sin(d4);
    let _: Double3 = cos(d3);
    let _: Double4 = tan(d4);
    let _: Double3 = asin(d3);
    let _: Double2 = acos(d2);
    let _: Double4 = atan(d4);
    let _: Double2 = sinh(d2);
    let _: Double3 = cosh(d3);
    let _: Double4 = tanh(d4);
    let _: Double4 = round(d4);

    // Binary operators.
    let _: Float2 = f2 + f2;
    let _: Double2 = d2 / d2;
    let _: Int3 = i3 % Int3::splat(1);
    let _: Int2 = s2 ^ s2;
    let _: Int3 = s3 & s3;
    let _: Int4 = i4 >> i4;
    let _: Float3 = f3 - x;
    let _: Double4 = d4 * d;
    let _: Int4 = i4 | i;
    let _: Int3 = s3 & s;
    let _: UInt4 = u4 >> u;
    let _: Float2 = x + f2;
    let _: Double2 = d / d2;
    let _: Int2 = s ^ s2;
    let _: Int3 = i << i3;
    let _: UInt4 = u >> u4;

    // Compound assignment keeps the left operand's type.
    let (mut f2m, mut i3m) = (f2, i3);
    f2m += f2;
    f2m /= x + 1.0;
    i3m <<= i3;
    i3m |= i;
    let _: Float2 = f2m;
    let _: Int3 = i3m;

    // Binary functions.
    let _: Float2 = min(f2, f2);
    let _: Float3 = max(f3, f3);
    let _: Float2 = fmod(f2, Float2::splat(1.0));
    let _: Float3 = pow(f3, f3);
    let _: Float4 = atan2(f4, f4);
    let _: Float3 = clamp(f3, f3, f3);
    let _: Bool2 = equal(f2, f2);
    let _: Bool4 = less(d4, d4);
    let _: Bool3 = lequal(i3, i3);

    // Reductions and selection.
    let _: bool = any(Bool3::default());
    let _: bool = all(Bool4::default());
    let _: i32 = sum(i2);
    let _: f32 = product(f4);
    let _: usize = argmin(f2);
    let _: usize = argmax(f3);
    let _: f32 = minelem(f4);
    let _: f32 = maxelem(f2);

    // Vector algebra.
    let _: f32 = cross(f2, f2);
    let _: Float3 = cross(f3, f3);
    let _: f32 = dot(f4, f4);
    let _: f32 = length2(f2);
    let _: f32 = distance2(f4, f4);
    let _: Float4 = lerp(f4, f4, x);

    // Quaternion algebra.
    let _: Float4 = qconj(f4);
    let _: Float4 = qmul(f4, f4);
    let _: Float3 = qxdir(f4);
    let _: Float3 = qrot(f4, f3);
    let _: f32 = qangle(f4);
    let _: Float3x3 = qmat(f4);

    // Matrix algebra.
    let _: Float3 = mul(Float3x2::default(), f2);
    let _: Float2 = mul(Float2x4::default(), f4);
    let _: Float3x4 = mul(Float3x2::default(), Float2x4::default());
    let _: Float4x2 = mul(Float4x3::default(), Float3x2::default());
    let _: Float2x2 = adjugate(Float2x2::default());
    let _: Float4x4 = adjugate(Float4x4::default());
    let _: f32 = determinant(Float3x3::default());
    let _: Float3x3 = inverse(Float3x3::identity());
    let _: Float3x4 = transpose(Float4x3::default());
    let _: Float2x3 = transpose(Float3x2::default());

    // Factories.
    let _: Float4 = rotation_quat(f3, x);
    let _: Float4x4 = translation_matrix(f3);
    let _: Float4x4 = rotation_matrix(f4);
    let _: Float4x4 = pose_matrix(f4, f3);
    let _: Float4x4 = scaling_matrix(f3);
    let _: Float4x4 = frustum_matrix(-1.0, 1.0, -1.0, 1.0, 1.0, 2.0);
    let _: Float4x4 = perspective_matrix(1.0, 1.0, 1.0, 2.0);
}

#[test]
fn cross_product() {
    let x: Float3 = vec3(1.0, 0.0, 0.0);
    let y: Float3 = vec3(0.0, 1.0, 0.0);
    assert_eq!(cross(x, y), vec3(0.0, 0.0, 1.0));
}

#[test]
fn argmin_prefers_first() {
    assert_eq!(argmin(vec4(3, 1, 1, 5)), 1);
    assert_eq!(argmax(vec4(3, 5, 1, 5)), 1);
}

fn random_matrix<const R: usize, const C: usize>(rng: &mut fastrand::Rng) -> Matrix<f64, R, C> {
    Matrix::from_fn(|_, _| rng.f64() * 2.0 - 1.0)
}

#[test]
fn matrix_product_is_associative() {
    let mut rng = fastrand::Rng::with_seed(0x9e3779b97f4a7c15);
    for _ in 0..100 {
        let a = random_matrix::<3, 4>(&mut rng);
        let b = random_matrix::<4, 2>(&mut rng);
        let v: Double2 = Vector::from_fn(|_| rng.f64() * 10.0 - 5.0);
        assert_relative_eq!(mul(mul(a, b), v), mul(a, mul(b, v)), epsilon = 1e-12);

        let c = random_matrix::<2, 4>(&mut rng);
        assert_relative_eq!(mul(mul(a, b), c), mul(a, mul(b, c)), epsilon = 1e-12);
    }
}

#[test]
fn inverse_of_random_matrices() {
    let mut rng = fastrand::Rng::with_seed(0x3024b6663d843ca2);
    for _ in 0..100 {
        // Diagonally dominant, so never singular.
        let m2 = random_matrix::<2, 2>(&mut rng) + Double2x2::identity() * 4.0f64;
        let m3 = random_matrix::<3, 3>(&mut rng) + Double3x3::identity() * 4.0f64;
        let m4 = random_matrix::<4, 4>(&mut rng) + Double4x4::identity() * 5.0f64;

        assert_relative_eq!(mul(m2, inverse(m2)), Double2x2::identity(), epsilon = 1e-12);
        assert_relative_eq!(mul(m3, inverse(m3)), Double3x3::identity(), epsilon = 1e-12);
        assert_relative_eq!(mul(m4, inverse(m4)), Double4x4::identity(), epsilon = 1e-12);
        assert_relative_eq!(mul(inverse(m4), m4), Double4x4::identity(), epsilon = 1e-12);
        assert_relative_eq!(
            determinant(m4) * determinant(inverse(m4)),
            1.0,
            epsilon = 1e-12
        );
    }
}

#[test]
fn normalized_vectors_have_unit_length() {
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..100 {
        let v: Double3 = Vector::from_fn(|_| rng.f64() * 200.0 - 100.0);
        if length(v) < 1e-3 {
            continue;
        }
        assert_relative_eq!(length(normalize(v)), 1.0, epsilon = 1e-12);
        assert_relative_eq!(dot(normalize(v), v), length(v), max_relative = 1e-12);
    }
}

#[test]
fn quaternion_rotation() {
    let v: Float3 = vec3(1.0, -2.0, 0.5);
    assert_eq!(qrot(quat_identity(), v), v);

    let mut rng = fastrand::Rng::with_seed(42);
    for _ in 0..100 {
        let axis: Double3 = normalize(Vector::from_fn(|_| rng.f64() * 2.0 - 1.0));
        let q = rotation_quat(axis, rng.f64() * 6.0);
        let v: Double3 = Vector::from_fn(|_| rng.f64() * 2.0 - 1.0);

        // Rotations preserve length and fix their axis.
        assert_relative_eq!(length(qrot(q, v)), length(v), epsilon = 1e-12);
        assert_relative_eq!(qrot(q, axis), axis, epsilon = 1e-12);
        assert_relative_eq!(qrot(qinv(q), qrot(q, v)), v, epsilon = 1e-12);
        assert_relative_eq!(mul(qmat(q), v), qrot(q, v), epsilon = 1e-12);

        // `q` and `-q` are the same rotation; interpolation takes the short path either way.
        let neg = -q;
        assert_relative_eq!(qrot(neg, v), qrot(q, v), epsilon = 1e-12);
        assert_relative_eq!(qslerp(q, neg, 0.5), q, epsilon = 1e-6);
        assert_relative_eq!(qnlerp(q, neg, 0.5), q, epsilon = 1e-12);
    }
}
