use super::*;

#[test]
fn empty_object_yields_defaults() {
    let cfg = ControllerConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, ControllerConfig::default());
    assert_eq!(cfg.blend_speed, 2.5);
    assert_eq!(cfg.max_delta, 0.1);
    assert_eq!(cfg.arm_rest, ArmRest { left: -0.08, right: 0.08 });
    assert_eq!(cfg.blend_ease, Ease::InOutCubic);
}

#[test]
fn partial_object_overrides_fields() {
    let cfg =
        ControllerConfig::from_json_str(r#"{"blend_speed": 5.0, "seed": 7, "blend_ease": "linear"}"#)
            .unwrap();
    assert_eq!(cfg.blend_speed, 5.0);
    assert_eq!(cfg.seed, 7);
    assert_eq!(cfg.blend_ease, Ease::Linear);
    assert_eq!(cfg.blink_speed, 8.0);
}

#[test]
fn rejects_bad_values_and_unknown_fields() {
    assert!(ControllerConfig::from_json_str(r#"{"blend_speed": 0}"#).is_err());
    assert!(ControllerConfig::from_json_str(r#"{"blink_jitter": -1}"#).is_err());
    assert!(ControllerConfig::from_json_str(r#"{"bogus": 1}"#).is_err());
    assert!(ControllerConfig::from_json_str("[").is_err());
}

#[test]
fn from_path_reports_missing_file() {
    let err = ControllerConfig::from_path("definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("here.json"));
}
