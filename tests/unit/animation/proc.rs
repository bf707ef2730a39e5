use super::*;

#[test]
fn sine_and_cosine_start_where_expected() {
    assert_eq!(Oscillator::sin(3.0, 2.0).sample(0.0), 0.0);
    assert_eq!(Oscillator::cos(3.0, 2.0).sample(0.0), 2.0);
    assert_eq!(Oscillator::sin(1.0, 1.0).around(5.0).sample(0.0), 5.0);
}

#[test]
fn samples_stay_inside_declared_range() {
    let osc = Oscillator::sin(12.0, 0.3).around(0.7);
    assert!((osc.min() - 0.4).abs() < 1e-12);
    assert!((osc.max() - 1.0).abs() < 1e-12);
    for i in 0..500 {
        let v = osc.sample(f64::from(i) * 0.013);
        assert!(v >= osc.min() - 1e-12 && v <= osc.max() + 1e-12);
    }
}

#[test]
fn rate_is_angular() {
    let osc = Oscillator::sin(2.0, 1.0);
    let quarter = std::f64::consts::FRAC_PI_4;
    assert!((osc.sample(quarter) - 1.0).abs() < 1e-12);
}
