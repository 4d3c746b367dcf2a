use super::*;
use crate::caption::measure::FixedAdvance;
use crate::foundation::core::Point;
use crate::geometry::shape::Shape;
use crate::view::transition::TransitionPhase;

const TOUR: &str = r#"{
    "width": 375.0,
    "height": 667.0,
    "initial": { "shape": { "kind": "oval", "center": { "x": 349.0, "y": 42.0 }, "diameter": 50.0 } },
    "steps": [
        { "at": 0.0, "op": "appear" },
        { "at": 1.0, "op": "move",
          "target": { "shape": { "kind": "oval", "center": { "x": 300.0, "y": 42.0 }, "diameter": 50.0 },
                      "text": "Move spotlight" } },
        { "at": 2.0, "op": "move", "move_type": "disappear",
          "target": { "shape": { "kind": "rounded_rect", "center": { "x": 187.5, "y": 42.0 },
                                 "size": { "width": 120.0, "height": 40.0 }, "radius": 6.0 },
                      "text": "Support rounded rect." } },
        { "at": 3.0, "op": "disappear", "duration": 0.5, "mode": "hide" }
    ]
}"#;

fn measure() -> Box<dyn TextMeasure> {
    Box::new(FixedAdvance::default())
}

#[test]
fn parses_and_validates() {
    let scene = Scene::from_json_str(TOUR).unwrap();
    assert_eq!(scene.steps.len(), 4);
    assert_eq!(scene.config, SpotlightConfig::default());
    assert!(matches!(
        scene.steps[2].op,
        StepOp::Move {
            move_type: MoveType::Disappear,
            ..
        }
    ));
    scene.validate().unwrap();
}

#[test]
fn replay_matches_step_timing() {
    let scene = Scene::from_json_str(TOUR).unwrap();

    let v = scene.play_until(0.5, measure()).unwrap();
    assert_eq!(v.phase(), TransitionPhase::Idle);
    assert!(
        v.presented_mask()
            .unwrap()
            .is_transparent_at(Point::new(349.0, 42.0))
    );

    let v = scene.play_until(1.0, measure()).unwrap();
    assert_eq!(v.current().shape(), &Shape::oval((300.0, 42.0), 50.0));
    assert_eq!(v.phase(), TransitionPhase::Moving);

    let v = scene.play_until(2.125, measure()).unwrap();
    assert_eq!(v.phase(), TransitionPhase::PendingDisappear);
    assert_eq!(v.current().text(), Some("Move spotlight"));

    let v = scene.play_until(2.375, measure()).unwrap();
    assert_eq!(v.current().text(), Some("Support rounded rect."));
    assert_eq!(v.phase(), TransitionPhase::Appearing);

    let v = scene.play_until(4.0, measure()).unwrap();
    assert!(!v.is_revealed());
    assert!(v.caption().is_none());
    assert_eq!(v.current().text(), Some("Support rounded rect."));
}

#[test]
fn rejects_unsorted_steps() {
    let mut scene = Scene::from_json_str(TOUR).unwrap();
    scene.steps.swap(0, 1);
    assert!(scene.validate().is_err());
}

#[test]
fn rejects_bad_geometry_and_durations() {
    let mut scene = Scene::from_json_str(TOUR).unwrap();
    scene.initial = Spotlight::new(Shape::oval((0.0, 0.0), -5.0));
    assert!(scene.validate().is_err());

    let mut scene = Scene::from_json_str(TOUR).unwrap();
    scene.steps[3].op = StepOp::Disappear {
        duration: Some(f64::NAN),
        mode: DisappearMode::Cosmetic,
    };
    assert!(scene.validate().is_err());

    let mut scene = Scene::from_json_str(TOUR).unwrap();
    scene.width = 0.0;
    assert!(scene.validate().is_err());
}

#[test]
fn invalid_json_is_a_serde_error() {
    let err = Scene::from_json_str("{").unwrap_err();
    assert!(matches!(err, SpotlightError::Serde(_)));
}

#[test]
fn negative_time_is_rejected() {
    let scene = Scene::from_json_str(TOUR).unwrap();
    assert!(scene.play_until(-1.0, measure()).is_err());
}
