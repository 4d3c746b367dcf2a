use crate::animation::layer::AnimationId;
use crate::model::spotlight::Spotlight;

/// How [`SpotlightView::move_to`](crate::SpotlightView::move_to) gets to the target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveType {
    /// Morph the cut-out into the target; state updates immediately.
    #[default]
    Direct,
    /// Shrink away, then grow at the target; state updates once the shrink finishes.
    Disappear,
}

/// What [`SpotlightView::disappear_with`](crate::SpotlightView::disappear_with) does besides
/// animating.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisappearMode {
    /// Visual only: current spotlight, caption, and revealed flag are untouched.
    #[default]
    Cosmetic,
    /// Also detach the caption and mark the view as not revealed.
    Hide,
}

/// Observable transition state of a view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    /// No animation in flight.
    Idle,
    /// Growing from collapsed to full outline.
    Appearing,
    /// Shrinking to the collapsed outline.
    Disappearing,
    /// Morphing directly to a new outline.
    Moving,
    /// First leg of a disappear-based move; the target appears when it finishes.
    PendingDisappear,
}

/// Internal state machine: `PendingDisappear -> Appearing -> Idle` for chained moves.
#[derive(Clone, Debug)]
pub(crate) enum Phase {
    Idle,
    Appearing(AnimationId),
    Disappearing(AnimationId),
    Moving(AnimationId),
    PendingDisappear {
        animation: AnimationId,
        target: Spotlight,
        duration: f64,
    },
}

impl Phase {
    pub(crate) fn public(&self) -> TransitionPhase {
        match self {
            Self::Idle => TransitionPhase::Idle,
            Self::Appearing(_) => TransitionPhase::Appearing,
            Self::Disappearing(_) => TransitionPhase::Disappearing,
            Self::Moving(_) => TransitionPhase::Moving,
            Self::PendingDisappear { .. } => TransitionPhase::PendingDisappear,
        }
    }

    pub(crate) fn animation(&self) -> Option<AnimationId> {
        match *self {
            Self::Idle => None,
            Self::Appearing(id) | Self::Disappearing(id) | Self::Moving(id) => Some(id),
            Self::PendingDisappear { animation, .. } => Some(animation),
        }
    }
}
