use super::*;

#[test]
fn defaults_match_reference_captcha() {
    let cfg = RenderConfig::default();
    assert_eq!((cfg.width, cfg.height), (200, 70));
    assert_eq!(cfg.background, Rgba8::WHITE);
    assert_eq!(cfg.quality, Quality::Max);
    assert!(cfg.ripple);
    assert!(cfg.blur);
    assert!(!cfg.outline);
    assert!(cfg.rotate);
    assert_eq!(cfg.seed, None);
}

#[test]
fn partial_json_fills_defaults() {
    let cfg =
        RenderConfig::from_json_str(r##"{ "width": 320, "outline": true, "background": "#000" }"##)
            .unwrap();
    assert_eq!(cfg.width, 320);
    assert_eq!(cfg.height, DEFAULT_HEIGHT);
    assert!(cfg.outline);
    assert_eq!(cfg.background, Rgba8::BLACK);
}

#[test]
fn quality_parses_snake_case() {
    let cfg = RenderConfig::from_json_str(r#"{ "quality": "min" }"#).unwrap();
    assert_eq!(cfg.quality, Quality::Min);
    assert_eq!("DEFAULT".parse::<Quality>().unwrap(), Quality::Default);
    assert!("best".parse::<Quality>().is_err());
}

#[test]
fn unknown_fields_are_config_errors() {
    let err = RenderConfig::from_json_str(r#"{ "wobble": true }"#).unwrap_err();
    assert!(matches!(err, CageError::Config(_)));
}

#[test]
fn validate_rejects_degenerate_sizes() {
    assert!(RenderConfig::default().with_size(0, 70).validate().is_err());
    assert!(RenderConfig::default().with_size(200, 0).validate().is_err());
    assert!(
        RenderConfig::default()
            .with_size(70_000, 70)
            .validate()
            .is_err()
    );
    assert!(RenderConfig::default().with_size(1, 1).validate().is_ok());
}

#[test]
fn invalid_json_size_is_invalid_argument() {
    let err = RenderConfig::from_json_str(r#"{ "width": 0 }"#).unwrap_err();
    assert!(matches!(err, CageError::InvalidArgument(_)));
}
