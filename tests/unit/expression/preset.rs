use super::*;
use crate::animation::ease::Ease;

#[test]
fn every_row_respects_field_domains() {
    for id in ExpressionId::ALL {
        let p = preset_for(id);
        assert!(p.eye_intensity >= 0.0, "{id}");
        assert!(p.mouth_scale > 0.0, "{id}");
        assert!(p.blink_rate > 0.0, "{id}");
        assert!(p.body_sway >= 0.0, "{id}");
        assert!(p.breathing >= 0.0, "{id}");
    }
}

#[test]
fn only_greeting_waves() {
    for id in ExpressionId::ALL {
        assert_eq!(preset_for(id).arm_wave, id == ExpressionId::Greeting);
    }
}

#[test]
fn table_colors_match_their_hex_codes() {
    assert_eq!(preset_for(ExpressionId::Neutral).eye_color.to_hex(), "#00ffff");
    assert_eq!(preset_for(ExpressionId::Thinking).eye_color.to_hex(), "#ffaa00");
    assert_eq!(preset_for(ExpressionId::Sad).eye_color.to_hex(), "#6666ff");
}

#[test]
fn blend_endpoints_match_rows() {
    let a = preset_for(ExpressionId::Neutral);
    let b = preset_for(ExpressionId::Happy);
    assert_eq!(ExpressionPreset::blend(&a, &b, 0.0), a);
    let end = ExpressionPreset::blend(&a, &b, 1.0);
    assert!((end.mouth_scale - 1.4).abs() < 1e-12);
    assert!((end.eye_intensity - 1.4).abs() < 1e-12);
}

#[test]
fn arm_wave_follows_target_not_progress() {
    let a = preset_for(ExpressionId::Greeting);
    let b = preset_for(ExpressionId::Neutral);
    assert!(!ExpressionPreset::blend(&a, &b, 0.0).arm_wave);
    assert!(ExpressionPreset::blend(&b, &a, 0.0).arm_wave);
}

#[test]
fn eased_scalars_stay_within_endpoints() {
    for from in ExpressionId::ALL {
        for to in ExpressionId::ALL {
            let a = preset_for(from);
            let b = preset_for(to);
            for i in 0..=20 {
                let t = Ease::InOutCubic.apply(f64::from(i) / 20.0);
                let m = ExpressionPreset::blend(&a, &b, t);
                for (v, x, y) in [
                    (m.eye_intensity, a.eye_intensity, b.eye_intensity),
                    (m.mouth_scale, a.mouth_scale, b.mouth_scale),
                    (m.head_tilt, a.head_tilt, b.head_tilt),
                    (m.head_yaw, a.head_yaw, b.head_yaw),
                    (m.blink_rate, a.blink_rate, b.blink_rate),
                    (m.body_sway, a.body_sway, b.body_sway),
                    (m.breathing, a.breathing, b.breathing),
                ] {
                    assert!(v >= x.min(y) - 1e-12 && v <= x.max(y) + 1e-12);
                }
            }
        }
    }
}
