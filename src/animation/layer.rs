use crate::animation::ease::Ease;
use crate::geometry::mask::MaskPath;

/// Identifier of a scheduled path animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnimationId(pub u64);

/// Outcome of a scheduled animation, reported once per animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationEvent {
    /// The animation ran to its end value.
    Finished(AnimationId),
    /// A later animation replaced it before it finished.
    Superseded(AnimationId),
}

/// A mask path animation request.
///
/// Without an explicit `from`, the animation starts at whatever the layer presents when it is
/// added. The end value stays applied after completion.
#[derive(Clone, Debug)]
pub struct PathAnimation {
    from: Option<MaskPath>,
    to: MaskPath,
    duration: f64,
    ease: Ease,
}

impl PathAnimation {
    pub fn new(to: MaskPath, duration: f64, ease: Ease) -> Self {
        Self {
            from: None,
            to,
            duration: if duration.is_finite() {
                duration.max(0.0)
            } else {
                0.0
            },
            ease,
        }
    }

    pub fn from_path(mut self, from: MaskPath) -> Self {
        self.from = Some(from);
        self
    }
}

#[derive(Clone, Debug)]
struct Running {
    id: AnimationId,
    from: MaskPath,
    to: MaskPath,
    begin: f64,
    duration: f64,
    ease: Ease,
}

impl Running {
    fn end(&self) -> f64 {
        self.begin + self.duration
    }

    fn sample(&self, now: f64) -> MaskPath {
        if self.duration <= 0.0 {
            return self.to.clone();
        }
        let t = ((now - self.begin) / self.duration).clamp(0.0, 1.0);
        self.from.interpolate(&self.to, self.ease.apply(t))
    }
}

/// Animatable mask path with its own clock.
///
/// At most one animation drives the path at a time: adding one supersedes whatever is in flight
/// and starts from the currently presented path.
#[derive(Debug, Default)]
pub struct MaskLayer {
    model: Option<MaskPath>,
    running: Vec<Running>,
    superseded: Vec<AnimationEvent>,
    now: f64,
    next_id: u64,
}

impl MaskLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current layer time in seconds.
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Resting path, i.e. what is shown once every animation has finished.
    pub fn model(&self) -> Option<&MaskPath> {
        self.model.as_ref()
    }

    /// Replace the resting path without animating.
    pub fn set_model(&mut self, path: MaskPath) {
        self.model = Some(path);
    }

    pub fn is_animating(&self) -> bool {
        !self.running.is_empty()
    }

    /// Path as rendered at the current time.
    pub fn presented(&self) -> Option<MaskPath> {
        match self.running.last() {
            Some(r) => Some(r.sample(self.now)),
            None => self.model.clone(),
        }
    }

    /// Schedule `animation` starting now.
    pub fn add(&mut self, animation: PathAnimation) -> AnimationId {
        let id = AnimationId(self.next_id);
        self.next_id += 1;

        let from = animation
            .from
            .or_else(|| self.presented())
            .unwrap_or_else(|| animation.to.clone());

        for r in self.running.drain(..) {
            tracing::trace!(id = r.id.0, "path animation superseded");
            self.superseded.push(AnimationEvent::Superseded(r.id));
        }

        self.running.push(Running {
            id,
            from,
            to: animation.to,
            begin: self.now,
            duration: animation.duration,
            ease: animation.ease,
        });
        id
    }

    /// Drain animations superseded since the last call.
    pub fn take_superseded(&mut self) -> Vec<AnimationEvent> {
        std::mem::take(&mut self.superseded)
    }

    /// Earliest end time among running animations.
    pub fn next_deadline(&self) -> Option<f64> {
        self.running.iter().map(Running::end).reduce(f64::min)
    }

    /// Finish the earliest animation ending at or before `until`, moving the clock to its end.
    pub fn complete_next(&mut self, until: f64) -> Option<AnimationEvent> {
        let (idx, end) = self
            .running
            .iter()
            .enumerate()
            .map(|(i, r)| (i, r.end()))
            .min_by(|a, b| a.1.total_cmp(&b.1))?;
        if end > until {
            return None;
        }

        let done = self.running.remove(idx);
        self.now = self.now.max(end);
        tracing::trace!(id = done.id.0, at = self.now, "path animation finished");
        self.model = Some(done.to);
        Some(AnimationEvent::Finished(done.id))
    }

    /// Move the clock forward to `t` without completing anything.
    pub fn settle(&mut self, t: f64) {
        self.now = self.now.max(t);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/layer.rs"]
mod tests;
