use super::*;

const ALL: [Ease; 8] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::SPOTLIGHT,
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        assert_eq!(ease.apply(-3.0), 0.0);
        assert_eq!(ease.apply(7.0), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn spotlight_curve_is_a_steep_ease_in_out() {
    let e = Ease::SPOTLIGHT;
    assert!((e.apply(0.5) - 0.511).abs() < 1e-3);
    assert!((e.apply(0.25) - 0.0693).abs() < 1e-3);
    assert!((e.apply(0.75) - 0.9334).abs() < 1e-3);
    assert!((e.apply(0.3) + e.apply(0.7) - 1.0).abs() < 1e-2);
}

#[test]
fn linear_bezier_is_identity() {
    let e = Ease::CubicBezier {
        x1: 0.25,
        y1: 0.25,
        x2: 0.75,
        y2: 0.75,
    };
    for t in [0.1, 0.33, 0.5, 0.9] {
        assert!((e.apply(t) - t).abs() < 1e-6);
    }
}

#[test]
fn validate_rejects_non_monotonic_x() {
    assert!(Ease::SPOTLIGHT.validate().is_ok());
    let bad = Ease::CubicBezier {
        x1: 1.5,
        y1: 0.0,
        x2: 0.5,
        y2: 1.0,
    };
    assert!(bad.validate().is_err());
}
