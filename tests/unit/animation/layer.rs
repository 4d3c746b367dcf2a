use super::*;
use crate::foundation::core::{Point, Rect};
use crate::geometry::shape::Shape;

fn mask_at(x: f64) -> MaskPath {
    let outline = Shape::oval((x, 50.0), 20.0).outline();
    MaskPath::build(Rect::new(0.0, 0.0, 400.0, 100.0), [&outline])
}

#[test]
fn presents_nothing_until_something_is_scheduled() {
    let layer = MaskLayer::new();
    assert!(layer.presented().is_none());
    assert!(!layer.is_animating());
}

#[test]
fn animation_samples_between_endpoints_and_freezes_at_end() {
    let mut layer = MaskLayer::new();
    let id = layer.add(
        PathAnimation::new(mask_at(300.0), 1.0, Ease::Linear).from_path(mask_at(100.0)),
    );

    assert_eq!(layer.presented().unwrap(), mask_at(100.0));
    layer.settle(0.5);
    let mid = layer.presented().unwrap();
    assert!(mid.is_transparent_at(Point::new(200.0, 50.0)));

    assert_eq!(layer.complete_next(0.9), None);
    assert_eq!(layer.complete_next(2.0), Some(AnimationEvent::Finished(id)));
    assert_eq!(layer.now(), 1.0);
    assert_eq!(layer.model(), Some(&mask_at(300.0)));
    assert_eq!(layer.presented().unwrap(), mask_at(300.0));
}

#[test]
fn missing_from_starts_at_presented_path() {
    let mut layer = MaskLayer::new();
    layer.set_model(mask_at(100.0));
    layer.add(PathAnimation::new(mask_at(300.0), 1.0, Ease::Linear));
    assert_eq!(layer.presented().unwrap(), mask_at(100.0));
}

#[test]
fn new_animation_supersedes_running_one_without_jumping() {
    let mut layer = MaskLayer::new();
    let first = layer.add(
        PathAnimation::new(mask_at(300.0), 1.0, Ease::Linear).from_path(mask_at(100.0)),
    );
    layer.settle(0.5);
    let before = layer.presented().unwrap();

    let second = layer.add(PathAnimation::new(mask_at(50.0), 1.0, Ease::Linear));
    assert_ne!(first, second);
    assert_eq!(layer.presented().unwrap(), before);
    assert_eq!(
        layer.take_superseded(),
        vec![AnimationEvent::Superseded(first)]
    );
    assert!(layer.take_superseded().is_empty());

    assert_eq!(layer.next_deadline(), Some(1.5));
    assert_eq!(layer.complete_next(1.5), Some(AnimationEvent::Finished(second)));
}

#[test]
fn zero_duration_finishes_immediately() {
    let mut layer = MaskLayer::new();
    let id = layer.add(PathAnimation::new(mask_at(10.0), 0.0, Ease::SPOTLIGHT));
    assert_eq!(layer.presented().unwrap(), mask_at(10.0));
    assert_eq!(layer.complete_next(0.0), Some(AnimationEvent::Finished(id)));
}
