use super::*;

#[test]
fn lerp_hits_endpoints() {
    assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
    assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
    assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
}

#[test]
fn approach_never_overshoots() {
    assert_eq!(approach(0.0, 1.0, 10.0, 5.0), 1.0);
    assert_eq!(approach(0.0, 1.0, 0.0, 5.0), 0.0);
    let v = approach(0.0, 1.0, 0.1, 4.0);
    assert!((v - 0.4).abs() < 1e-12);
}

#[test]
fn rng_is_seeded_and_bounded() {
    let mut a = Rng64::new(7);
    let mut b = Rng64::new(7);
    for _ in 0..100 {
        let x = a.range(0.0, 2.5);
        assert_eq!(x, b.range(0.0, 2.5));
        assert!((0.0..2.5).contains(&x));
    }
    assert_ne!(Rng64::new(1).next_u64(), Rng64::new(2).next_u64());
}
