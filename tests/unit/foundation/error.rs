use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RobofaceError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(RobofaceError::scene("x").to_string().contains("scene error:"));
    assert!(
        RobofaceError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        RobofaceError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn unknown_expression_names_the_input() {
    let err = RobofaceError::UnknownExpression("angry".to_string());
    assert_eq!(err.to_string(), "unknown expression 'angry'");
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = RobofaceError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde() {
    let err: RobofaceError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, RobofaceError::Serde(_)));
}
