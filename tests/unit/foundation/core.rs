use super::*;

#[test]
fn hex_roundtrips_through_linear_space() {
    for hex in ["#00ffff", "#00ff88", "#ffaa00", "#6666ff", "#ff6600", "#000000"] {
        let c = Rgb::from_hex(hex).unwrap();
        assert_eq!(c.to_hex(), hex);
    }
}

#[test]
fn hex_accepts_missing_hash_and_rejects_garbage() {
    assert_eq!(Rgb::from_hex("ffffff").unwrap().to_srgb8(), [255, 255, 255]);
    assert!(Rgb::from_hex("#fff").is_err());
    assert!(Rgb::from_hex("#gg0000").is_err());
    assert!(Rgb::from_hex("").is_err());
}

#[test]
fn srgb_mid_grey_is_darker_in_linear() {
    let c = Rgb::from_srgb8(128, 128, 128);
    assert!(c.r > 0.2 && c.r < 0.23);
}

#[test]
fn transform_defaults_to_unit_scale() {
    let t = Transform3::default();
    assert_eq!(t.scale, Vec3::ONE);
    assert_eq!(t.rotation, Vec3::ZERO);

    let t = Transform3::at(Vec3::new(0.0, 1.0, 0.0)).with_uniform_scale(0.5);
    assert_eq!(t.position.y, 1.0);
    assert_eq!(t.scale, Vec3::splat(0.5));
}

#[test]
fn affine_applies_scale_rotation_then_translation() {
    let t = Transform3::default();
    assert_eq!(t.to_affine(), glam::DAffine3::IDENTITY);

    let t = Transform3::at(Vec3::new(1.0, 2.0, 3.0))
        .with_rotation(Vec3::new(0.0, 0.0, std::f64::consts::FRAC_PI_2))
        .with_uniform_scale(2.0);
    let p = t.to_affine().transform_point3(Vec3::new(1.0, 0.0, 0.0));
    assert!((p - Vec3::new(1.0, 4.0, 3.0)).length() < 1e-9);
}
