use crate::{
    animation::ease::Ease,
    animation::spec::AnimationSpec,
    animation::state::{Property, VisualState},
    foundation::core::Seconds,
    foundation::error::{RevealError, RevealResult},
    viewport::trigger::Amount,
};

/// Motion defaults shared by every section on a page.
///
/// Passed explicitly to [`crate::SectionComposer::plan`] and [`crate::mount`]; there is no
/// ambient or global motion state.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Transition length for every unit.
    pub duration: Seconds,
    /// Easing curve for every unit.
    pub ease: Ease,
    /// Slide distance in pixels for units that move while fading in.
    pub distance: f64,
    /// Default visibility threshold for triggers.
    pub amount: Amount,
    /// Skip animation entirely and render the final state on mount.
    pub reduced_motion: bool,
}

const DEFAULT_DURATION: Seconds = Seconds::from_literal(0.5);

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            ease: Ease::EaseOut,
            distance: 20.0,
            amount: Amount::Some,
            reduced_motion: false,
        }
    }
}

impl MotionConfig {
    /// Check the config is usable.
    pub fn validate(&self) -> RevealResult<()> {
        if !self.distance.is_finite() {
            return Err(RevealError::validation("motion.distance must be finite"));
        }
        self.ease.validate()?;
        self.amount.validate()?;
        Ok(())
    }

    /// Spec from `initial` to `target` with this config's timing and no delay.
    pub fn spec(&self, initial: VisualState, target: VisualState) -> RevealResult<AnimationSpec> {
        AnimationSpec::new(initial, target, self.duration, Seconds::ZERO, self.ease)
    }

    /// Fade in while rising `distance` pixels.
    pub fn fade_up(&self) -> RevealResult<AnimationSpec> {
        self.spec(
            VisualState::new()
                .with(Property::Opacity, 0.0)
                .with(Property::Y, self.distance),
            VisualState::new()
                .with(Property::Opacity, 1.0)
                .with(Property::Y, 0.0),
        )
    }

    /// Fade in while sliding horizontally; `direction` < 0 comes from the left.
    pub fn fade_sideways(&self, direction: f64) -> RevealResult<AnimationSpec> {
        self.spec(
            VisualState::new()
                .with(Property::Opacity, 0.0)
                .with(Property::X, direction.signum() * self.distance),
            VisualState::new()
                .with(Property::Opacity, 1.0)
                .with(Property::X, 0.0),
        )
    }

    /// Fade in while growing from `scale` to 1.
    pub fn fade_scale(&self, scale: f64) -> RevealResult<AnimationSpec> {
        self.spec(
            VisualState::new()
                .with(Property::Opacity, 0.0)
                .with(Property::Scale, scale),
            VisualState::new()
                .with(Property::Opacity, 1.0)
                .with(Property::Scale, 1.0),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/section/config.rs"]
mod tests;
