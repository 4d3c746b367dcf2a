use std::path::Path;

use crate::caption::measure::TextMeasure;
use crate::foundation::core::Rect;
use crate::foundation::error::{SpotlightError, SpotlightResult};
use crate::model::config::SpotlightConfig;
use crate::model::spotlight::Spotlight;
use crate::view::spotlight_view::SpotlightView;
use crate::view::transition::{DisappearMode, MoveType};

/// A scripted sequence of spotlight operations over a fixed-size view.
///
/// Scenes are replayed deterministically: [`Scene::play_until`] applies every step whose time
/// has been reached and advances the view clock in between.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub config: SpotlightConfig,
    /// Spotlight current before the first step.
    pub initial: Spotlight,
    /// Steps sorted by `at`.
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One operation scheduled at `at` seconds.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Step {
    pub at: f64,
    #[serde(flatten)]
    pub op: StepOp,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum StepOp {
    Appear {
        #[serde(default)]
        spotlight: Option<Spotlight>,
        #[serde(default)]
        duration: Option<f64>,
    },
    Disappear {
        #[serde(default)]
        duration: Option<f64>,
        #[serde(default)]
        mode: DisappearMode,
    },
    Move {
        target: Spotlight,
        #[serde(default)]
        duration: Option<f64>,
        #[serde(default)]
        move_type: MoveType,
    },
}

impl Scene {
    pub fn from_json_str(s: &str) -> SpotlightResult<Self> {
        serde_json::from_str(s).map_err(|e| SpotlightError::serde(e.to_string()))
    }

    pub fn from_json_file(path: &Path) -> SpotlightResult<Self> {
        let f = std::fs::File::open(path).map_err(|e| {
            SpotlightError::Other(anyhow::Error::new(e).context(format!(
                "open scene '{}'",
                path.display()
            )))
        })?;
        serde_json::from_reader(std::io::BufReader::new(f))
            .map_err(|e| SpotlightError::serde(e.to_string()))
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    pub fn validate(&self) -> SpotlightResult<()> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(SpotlightError::validation("scene size must be finite"));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(SpotlightError::validation("scene size must be > 0"));
        }
        self.config.validate()?;
        self.initial.shape().validate()?;

        let mut last = 0.0;
        for (i, step) in self.steps.iter().enumerate() {
            if !step.at.is_finite() || step.at < 0.0 {
                return Err(SpotlightError::validation(format!(
                    "step {i}: 'at' must be finite and >= 0"
                )));
            }
            if step.at < last {
                return Err(SpotlightError::validation(format!(
                    "step {i}: steps must be sorted by 'at'"
                )));
            }
            last = step.at;

            let (spotlight, duration) = match &step.op {
                StepOp::Appear {
                    spotlight,
                    duration,
                } => (spotlight.as_ref(), *duration),
                StepOp::Disappear { duration, .. } => (None, *duration),
                StepOp::Move {
                    target, duration, ..
                } => (Some(target), *duration),
            };
            if let Some(s) = spotlight {
                s.shape()
                    .validate()
                    .map_err(|e| SpotlightError::validation(format!("step {i}: {e}")))?;
            }
            if let Some(d) = duration
                && (!d.is_finite() || d < 0.0)
            {
                return Err(SpotlightError::validation(format!(
                    "step {i}: duration must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }

    /// Replay every step up to time `t` into a fresh view.
    #[tracing::instrument(skip(self, measure))]
    pub fn play_until(
        &self,
        t: f64,
        measure: Box<dyn TextMeasure>,
    ) -> SpotlightResult<SpotlightView> {
        self.validate()?;
        if !t.is_finite() || t < 0.0 {
            return Err(SpotlightError::validation("time must be finite and >= 0"));
        }

        let mut view = SpotlightView::with_boxed_measure(self.bounds(), self.config.clone(), measure);
        view.set_spotlight(self.initial.clone());

        for step in self.steps.iter().take_while(|s| s.at <= t) {
            view.advance_to(step.at);
            let default = self.config.default_duration;
            match &step.op {
                StepOp::Appear {
                    spotlight,
                    duration,
                } => view.appear_for(spotlight.clone(), duration.unwrap_or(default)),
                StepOp::Disappear { duration, mode } => {
                    view.disappear_with(duration.unwrap_or(default), *mode)
                }
                StepOp::Move {
                    target,
                    duration,
                    move_type,
                } => view.move_to_for(target.clone(), duration.unwrap_or(default), *move_type),
            }
        }
        view.advance_to(t);
        Ok(view)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/script.rs"]
mod tests;
