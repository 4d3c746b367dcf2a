use super::*;

#[test]
fn defaults_match_documented_constants() {
    let c = SpotlightConfig::default();
    assert_eq!(c.default_duration, 0.25);
    assert_eq!(c.caption_gap, 12.0);
    assert_eq!(c.ease, Ease::SPOTLIGHT);
    assert!(c.validate().is_ok());
}

#[test]
fn builders_override_single_fields() {
    let c = SpotlightConfig::default()
        .with_default_duration(1.0)
        .with_caption_gap(4.0)
        .with_ease(Ease::Linear)
        .with_dim_rgba([1, 2, 3, 4]);
    assert_eq!(c.default_duration, 1.0);
    assert_eq!(c.caption_gap, 4.0);
    assert_eq!(c.ease, Ease::Linear);
    assert_eq!(c.dim_rgba, [1, 2, 3, 4]);
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let c: SpotlightConfig =
        serde_json::from_value(serde_json::json!({ "default_duration": 0.5 })).unwrap();
    assert_eq!(c.default_duration, 0.5);
    assert_eq!(c.caption_gap, DEFAULT_CAPTION_GAP);
}

#[test]
fn validate_rejects_negative_duration() {
    let c = SpotlightConfig::default().with_default_duration(-1.0);
    assert!(c.validate().is_err());
}
