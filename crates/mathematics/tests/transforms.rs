use mathematics::*;

fn random_unit_vector(rng: &mut fastrand::Rng) -> Vector3 {
    loop {
        let v = vec3(rng.f64(), rng.f64(), rng.f64()) * 2.0 - vec3(1.0, 1.0, 1.0);
        let len = v.length();
        if len > 0.1 && len <= 1.0 {
            return v / len;
        }
    }
}

fn random_rotation(rng: &mut fastrand::Rng) -> Quaternion {
    let angle = 0.1 + rng.f64() * 2.9;
    Quaternion::from_axis(random_unit_vector(rng), angle)
}

/// A well-conditioned affine transform: scale, then rotate, then translate.
fn random_transform(rng: &mut fastrand::Rng) -> Matrix4 {
    let scale = vec3(
        0.5 + rng.f64() * 1.5,
        0.5 + rng.f64() * 1.5,
        0.5 + rng.f64() * 1.5,
    );
    let translation = vec3(rng.f64(), rng.f64(), rng.f64()) * 20.0 - vec3(10.0, 10.0, 10.0);
    Matrix4::from_scale(scale)
        * random_rotation(rng).matrix()
        * Matrix4::from_translation(translation)
}

fn to_nalgebra(m: &Matrix4) -> nalgebra::Matrix4<f64> {
    nalgebra::Matrix4::from_row_slice(&m.to_vec())
}

#[test]
fn translated_row() {
    let m = Matrix4::from_translation(vec3(5.0, 5.0, 5.0)).translated(vec3(2.0, 3.0, 4.0));
    assert_eq!(m.row(3), vec4(7.0, 8.0, 9.0, 1.0));
    assert_eq!(m.translation(), vec3(7.0, 8.0, 9.0));
}

#[test]
fn vector_angles() {
    assert_approx_eq!(vec2(1.0, 1.0).angle_to(vec2(0.0, 1.0)), 0.785398185);
    assert_approx_eq!(vec3(0.0, 5.0, 5.0).angle_to(vec3(5.0, 5.0, 5.0)), 0.615479767);
}

#[test]
fn project_unproject() {
    let model = Matrix4::from_translation(vec3(0.0, 0.0, -3.0));
    let proj = Matrix4::perspective(PI / 4.0, 1.0, 0.1, 10.0);
    let viewport = vec4(0.0, 0.0, 600.0, 600.0);

    let win = Matrix4::project(Vector3::ZERO, model, proj, viewport).unwrap();
    assert_approx_eq!(win, vec3(300.0, 300.0, 0.976431012));

    let obj = Matrix4::unproject(vec3(300.0, 300.0, 0.0), model, proj, viewport).unwrap();
    assert_approx_eq!(obj, vec3(0.0, 0.0, 2.9));
}

#[test]
fn quaternion_rotation_block() {
    let q = Quaternion::from_axis(Vector3::Y, PI / 2.0);
    #[rustfmt::skip]
    assert_approx_eq!(q.matrix(), Matrix4::from_rows([
        [0.0, 0.0, -1.0, 0.0],
        [0.0, 1.0,  0.0, 0.0],
        [1.0, 0.0,  0.0, 0.0],
        [0.0, 0.0,  0.0, 1.0],
    ]));
}

#[test]
fn inverse_laws() {
    let mut rng = fastrand::Rng::with_seed(0x1d3a);
    for _ in 0..100 {
        let m = random_transform(&mut rng);
        assert_approx_eq!(m.inversed() * m, Matrix4::IDENTITY);
        assert_approx_eq!(m * m.inversed(), Matrix4::IDENTITY);
        assert_approx_eq!(-m, m.inversed());
        assert_eq!(m * Matrix4::IDENTITY, m);
        assert_eq!(Matrix4::IDENTITY * m, m);

        let p = vec3(rng.f64(), rng.f64(), rng.f64());
        assert_approx_eq!(p * m * m.inversed(), p);
    }
}

#[test]
fn matches_nalgebra() {
    let mut rng = fastrand::Rng::with_seed(42);
    for _ in 0..100 {
        let m = Matrix4::from_fn(|_, _| rng.f64() * 2.0 - 1.0);
        assert_approx_eq!(m.determinant(), to_nalgebra(&m).determinant());

        let m3 = Matrix3::from_fn(|_, _| rng.f64() * 2.0 - 1.0);
        let n3 = nalgebra::Matrix3::from_row_slice(&m3.to_vec());
        assert_approx_eq!(m3.determinant(), n3.determinant());

        let m = random_transform(&mut rng);
        let inv = to_nalgebra(&m).try_inverse().unwrap();
        assert_approx_eq!(m.inversed(), Matrix4::from_fn(|row, col| inv[(row, col)]));

        let a = random_transform(&mut rng);
        let product = to_nalgebra(&m) * to_nalgebra(&a);
        assert_approx_eq!(m * a, Matrix4::from_fn(|row, col| product[(row, col)]));
    }
}

#[test]
fn quaternion_laws() {
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..100 {
        let q = random_rotation(&mut rng);
        assert_approx_eq!(q.length(), 1.0);
        assert_eq!(q * Quaternion::IDENTITY, q);

        let back = Quaternion::from_rotation_matrix(&q.matrix());
        assert!(back.approx_eq(&q) || back.approx_eq(&-q), "{q:?} -> {back:?}");
        assert_approx_eq!(Matrix4::from_quaternion(q).rotation().matrix(), q.matrix());

        let v = random_unit_vector(&mut rng) * 3.0;
        assert_approx_eq!(v * q, v * q.matrix());
        assert_approx_eq!(v * q * q.conjugate(), v);

        let axis_angle = q.to_axis_angle();
        assert_approx_eq!(Quaternion::from_axis_angle(axis_angle), q);

        let target = random_unit_vector(&mut rng);
        let between = Quaternion::rotation_between(v, target, None);
        assert_approx_eq!(v.normalized() * between, target);
    }
}

#[test]
fn normalization() {
    let mut rng = fastrand::Rng::with_seed(3);
    for _ in 0..100 {
        let v = vec4(rng.f64(), rng.f64(), rng.f64(), rng.f64()) * 10.0 + Vector4::W;
        let n = v.normalized();
        assert_approx_eq!(n.length(), 1.0);
        assert_approx_eq!(n.normalized(), n);
        assert_approx_eq!(n * v.length(), v);
    }
}

#[test]
fn flat_round_trips() {
    let v2 = vec2(1.0, 2.0);
    let v3 = vec3(1.0, 2.0, 3.0);
    let v4 = vec4(1.0, 2.0, 3.0, 4.0);
    let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let m3 = Matrix3::from_fn(|row, col| (row * 3 + col) as Scalar);
    let m4 = Matrix4::from_fn(|row, col| (row * 4 + col) as Scalar);

    assert_eq!(Vector2::from_slice(&v2.to_vec()), v2);
    assert_eq!(Vector3::from_slice(&v3.to_vec()), v3);
    assert_eq!(Vector4::from_slice(&v4.to_vec()), v4);
    assert_eq!(Quaternion::from_slice(&q.to_vec()), q);
    assert_eq!(Matrix3::from_slice(&m3.to_vec()), m3);
    assert_eq!(Matrix4::from_slice(&m4.to_vec()), m4);
    assert_eq!(m4.to_vec()[4], 4.0);

    let err = Matrix4::try_from(&m3.to_vec()[..]).unwrap_err();
    assert_eq!(
        err,
        Error::LengthMismatch {
            expected: 16,
            actual: 9
        }
    );
    assert_eq!(err.to_string(), "array must contain 16 elements, contained 9");
}
