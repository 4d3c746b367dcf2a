use crate::animation::layer::{AnimationEvent, AnimationId, MaskLayer, PathAnimation};
use crate::caption::measure::{FixedAdvance, TextMeasure};
use crate::caption::placement::{Caption, place_caption};
use crate::foundation::core::{Point, Rect};
use crate::geometry::mask::MaskPath;
use crate::geometry::outline::Outline;
use crate::geometry::shape::Shape;
use crate::model::config::SpotlightConfig;
use crate::model::spotlight::Spotlight;
use crate::view::transition::{DisappearMode, MoveType, Phase, TransitionPhase};

/// Shape and extent the mask settles on once the running animation ends.
#[derive(Clone, Copy, Debug)]
struct Rest {
    shape: Shape,
    collapsed: bool,
}

/// A tap reported by the host, classified against the current spotlight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tap {
    pub point: Point,
    /// Whether the tap landed inside the current spotlight outline.
    pub inside: bool,
}

/// Darkened overlay with an animated spotlight cut-out.
///
/// Operations schedule animations and return immediately. The host drives time with
/// [`SpotlightView::advance`]; completions (including the second leg of a disappear-based move)
/// are processed there, in end-time order.
pub struct SpotlightView {
    bounds: Rect,
    config: SpotlightConfig,
    spotlight: Spotlight,
    revealed: bool,
    caption: Option<Caption>,
    layer: MaskLayer,
    phase: Phase,
    rest: Option<Rest>,
    measure: Box<dyn TextMeasure>,
}

impl std::fmt::Debug for SpotlightView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpotlightView")
            .field("bounds", &self.bounds)
            .field("spotlight", &self.spotlight)
            .field("revealed", &self.revealed)
            .field("caption", &self.caption)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

impl SpotlightView {
    /// View over `bounds` with default config and font-free caption measurement.
    pub fn new(bounds: Rect) -> Self {
        Self::with_config(bounds, SpotlightConfig::default())
    }

    pub fn with_config(bounds: Rect, config: SpotlightConfig) -> Self {
        Self::with_measure(bounds, config, FixedAdvance::default())
    }

    pub fn with_measure(
        bounds: Rect,
        config: SpotlightConfig,
        measure: impl TextMeasure + 'static,
    ) -> Self {
        Self::with_boxed_measure(bounds, config, Box::new(measure))
    }

    pub fn with_boxed_measure(
        bounds: Rect,
        config: SpotlightConfig,
        measure: Box<dyn TextMeasure>,
    ) -> Self {
        Self {
            bounds,
            config,
            spotlight: Spotlight::default(),
            revealed: false,
            caption: None,
            layer: MaskLayer::new(),
            phase: Phase::Idle,
            rest: None,
            measure,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn config(&self) -> &SpotlightConfig {
        &self.config
    }

    /// The spotlight the view currently considers highlighted.
    pub fn current(&self) -> &Spotlight {
        &self.spotlight
    }

    pub fn caption(&self) -> Option<&Caption> {
        self.caption.as_ref()
    }

    /// False until the first appear, and after a [`DisappearMode::Hide`] disappear.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase.public()
    }

    /// Target of a disappear-based move that has not reached its appear leg yet.
    pub fn pending_target(&self) -> Option<&Spotlight> {
        match &self.phase {
            Phase::PendingDisappear { target, .. } => Some(target),
            _ => None,
        }
    }

    /// View clock in seconds.
    pub fn now(&self) -> f64 {
        self.layer.now()
    }

    pub fn is_animating(&self) -> bool {
        self.layer.is_animating()
    }

    /// Mask as rendered right now; `None` before anything was scheduled.
    pub fn presented_mask(&self) -> Option<MaskPath> {
        self.layer.presented()
    }

    /// Mask the view settles on when animations finish.
    pub fn model_mask(&self) -> Option<&MaskPath> {
        self.layer.model()
    }

    /// Mask over the current bounds with `outline` cut out.
    pub fn mask_for(&self, outline: &Outline) -> MaskPath {
        MaskPath::build(self.bounds, [outline])
    }

    /// Relayout: the resting mask is rebuilt for the new bounds.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        if !self.layer.is_animating() {
            self.sync_model();
        }
    }

    /// Replace the current spotlight without animating or touching the mask.
    pub fn set_spotlight(&mut self, spotlight: Spotlight) {
        self.commit_pending();
        self.spotlight = spotlight;
    }

    /// [`SpotlightView::appear_for`] with the configured default duration.
    pub fn appear(&mut self, spotlight: Option<Spotlight>) {
        self.appear_for(spotlight, self.config.default_duration);
    }

    /// Grow `spotlight` (or the current one) from its collapsed outline.
    ///
    /// The caption, if any, is placed immediately. The target becomes current right away.
    #[tracing::instrument(skip(self, spotlight))]
    pub fn appear_for(&mut self, spotlight: Option<Spotlight>, duration: f64) {
        self.commit_pending();
        let light = spotlight.unwrap_or_else(|| self.spotlight.clone());
        self.place_caption(&light);

        let begin = self.mask_for(&light.collapsed_outline());
        let end = self.mask_for(&light.outline());
        let animation = PathAnimation::new(end, duration, self.config.ease).from_path(begin);
        let id = self.layer.add(animation);

        self.rest = Some(Rest {
            shape: *light.shape(),
            collapsed: false,
        });
        self.spotlight = light;
        self.revealed = true;
        self.enter(Phase::Appearing(id));
    }

    /// [`SpotlightView::disappear_with`] with the default duration and
    /// [`DisappearMode::Cosmetic`].
    pub fn disappear(&mut self) {
        self.disappear_with(self.config.default_duration, DisappearMode::Cosmetic);
    }

    pub fn disappear_for(&mut self, duration: f64) {
        self.disappear_with(duration, DisappearMode::Cosmetic);
    }

    /// Shrink the current spotlight to its collapsed outline.
    ///
    /// The current spotlight is never cleared; `mode` decides whether the caption and revealed
    /// flag follow the animation.
    #[tracing::instrument(skip(self))]
    pub fn disappear_with(&mut self, duration: f64, mode: DisappearMode) {
        self.commit_pending();
        let id = self.schedule_disappear(duration);
        if mode == DisappearMode::Hide {
            self.revealed = false;
            self.caption = None;
        }
        self.enter(Phase::Disappearing(id));
    }

    /// [`SpotlightView::move_to_for`] with the configured default duration.
    pub fn move_to(&mut self, target: Spotlight, move_type: MoveType) {
        self.move_to_for(target, self.config.default_duration, move_type);
    }

    /// Transition to `target`.
    ///
    /// [`MoveType::Direct`] makes `target` current before returning. [`MoveType::Disappear`]
    /// keeps the old spotlight current until the shrink animation finishes.
    #[tracing::instrument(skip(self, target))]
    pub fn move_to_for(&mut self, target: Spotlight, duration: f64, move_type: MoveType) {
        self.commit_pending();
        match move_type {
            MoveType::Direct => {
                let end = self.mask_for(&target.outline());
                let id = self
                    .layer
                    .add(PathAnimation::new(end, duration, self.config.ease));
                self.rest = Some(Rest {
                    shape: *target.shape(),
                    collapsed: false,
                });
                self.place_caption(&target);
                self.spotlight = target;
                self.revealed = true;
                self.enter(Phase::Moving(id));
            }
            MoveType::Disappear => {
                let animation = self.schedule_disappear(duration);
                self.enter(Phase::PendingDisappear {
                    animation,
                    target,
                    duration,
                });
            }
        }
    }

    /// Advance the clock by `dt` seconds.
    pub fn advance(&mut self, dt: f64) -> Vec<AnimationEvent> {
        let t = self.layer.now() + if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.advance_to(t)
    }

    /// Advance the clock to `t`, processing every completion on the way in end-time order.
    ///
    /// A non-finite `t` leaves the clock where it is.
    pub fn advance_to(&mut self, t: f64) -> Vec<AnimationEvent> {
        let t = if t.is_finite() { t } else { self.layer.now() };
        let mut events = self.layer.take_superseded();
        while let Some(event) = self.layer.complete_next(t) {
            events.push(event);
            if let AnimationEvent::Finished(id) = event {
                self.on_finished(id);
            }
            events.extend(self.layer.take_superseded());
        }
        self.layer.settle(t);
        events
    }

    /// Run every scheduled (and chained) animation to completion.
    pub fn finish(&mut self) -> Vec<AnimationEvent> {
        let mut events = Vec::new();
        while let Some(deadline) = self.layer.next_deadline() {
            events.extend(self.advance_to(deadline));
        }
        events.extend(self.layer.take_superseded());
        events
    }

    /// Classify a host tap against the current spotlight.
    pub fn classify_tap(&self, point: Point) -> Tap {
        Tap {
            point,
            inside: self.spotlight.outline().contains(point),
        }
    }

    fn schedule_disappear(&mut self, duration: f64) -> AnimationId {
        let end = self.mask_for(&self.spotlight.collapsed_outline());
        let id = self
            .layer
            .add(PathAnimation::new(end, duration, self.config.ease));
        self.rest = Some(Rest {
            shape: *self.spotlight.shape(),
            collapsed: true,
        });
        id
    }

    fn on_finished(&mut self, id: AnimationId) {
        if self.phase.animation() == Some(id) {
            self.end_phase();
        }
        // Relayouts made while animating are applied once the layer comes to rest.
        if !self.layer.is_animating() {
            self.sync_model();
        }
    }

    fn end_phase(&mut self) {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::PendingDisappear {
                target, duration, ..
            } => {
                tracing::debug!(at = self.layer.now(), "disappear leg finished");
                self.appear_for(Some(target), duration);
            }
            finished => {
                tracing::debug!(
                    at = self.layer.now(),
                    phase = ?finished.public(),
                    "transition finished"
                );
            }
        }
    }

    /// A new request overrides a disappear-based move still in its first leg: its target
    /// becomes current so state converges to the latest request.
    fn commit_pending(&mut self) {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::PendingDisappear { target, .. } => {
                tracing::debug!("pending move overridden; committing its target");
                self.spotlight = target;
            }
            other => self.phase = other,
        }
    }

    fn enter(&mut self, phase: Phase) {
        tracing::debug!(from = ?self.phase.public(), to = ?phase.public(), "spotlight phase");
        self.phase = phase;
    }

    fn place_caption(&mut self, light: &Spotlight) {
        let gap = self.config.caption_gap;
        self.caption = match light.text() {
            Some(text) => {
                let size = self.measure.measure(text);
                Some(Caption {
                    text: text.to_string(),
                    frame: place_caption(light.shape(), size, gap),
                })
            }
            None => None,
        };
    }

    fn sync_model(&mut self) {
        if let Some(rest) = self.rest {
            let outline = if rest.collapsed {
                rest.shape.collapsed_outline()
            } else {
                rest.shape.outline()
            };
            self.layer.set_model(self.mask_for(&outline));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/spotlight_view.rs"]
mod tests;
