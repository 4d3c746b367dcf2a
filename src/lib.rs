//! Spotlight is an animated overlay that darkens a view except for a highlighted cut-out.
//!
//! The cut-out is an oval or rounded rectangle ([`Shape`]). A [`SpotlightView`] owns the
//! currently highlighted [`Spotlight`] and animates its mask when asked to appear, disappear, or
//! move somewhere else.
//!
//! # Pipeline overview
//!
//! 1. **Geometry**: `Shape -> Outline` (full and collapsed) with one shared topology, so any two
//!    outlines morph point by point.
//! 2. **Mask**: `bounds + outlines -> MaskPath`, filled with the even-odd rule so every outline is
//!    a transparent hole.
//! 3. **Sequence**: [`SpotlightView`] schedules path animations on its [`MaskLayer`] and decides
//!    between a direct morph and a disappear-then-appear move.
//! 4. **Render** (optional): [`OverlayRenderer`] rasterizes the presented mask and caption with
//!    `vello_cpu`.
//!
//! The host drives time explicitly through [`SpotlightView::advance`]; nothing runs in the
//! background.
#![forbid(unsafe_code)]

mod animation;
mod caption;
mod foundation;
mod geometry;
mod model;
mod render;
mod scene;
mod view;

pub use crate::animation::ease::Ease;
pub use crate::animation::layer::{AnimationEvent, AnimationId, MaskLayer, PathAnimation};
pub use crate::caption::measure::{CaptionBrush, FixedAdvance, ParleyMeasure, TextMeasure};
pub use crate::caption::placement::{Caption, place_caption};
pub use crate::foundation::core::{Affine, BezPath, PathEl, Point, Rect, Size, Vec2};
pub use crate::foundation::error::{SpotlightError, SpotlightResult};
pub use crate::geometry::mask::{FillRule, MaskPath};
pub use crate::geometry::outline::{OUTLINE_ELEMENTS, Outline, interpolate_paths};
pub use crate::geometry::shape::{COLLAPSED_EXTENT, Shape};
pub use crate::model::config::{DEFAULT_ANIMATE_DURATION, DEFAULT_CAPTION_GAP, SpotlightConfig};
pub use crate::model::spotlight::Spotlight;
pub use crate::render::backend::FrameRGBA;
pub use crate::render::cpu::OverlayRenderer;
pub use crate::scene::script::{Scene, Step, StepOp};
pub use crate::view::spotlight_view::{SpotlightView, Tap};
pub use crate::view::transition::{DisappearMode, MoveType, TransitionPhase};
