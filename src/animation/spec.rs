use crate::{
    animation::ease::Ease,
    animation::state::{Lerp, VisualState},
    foundation::core::Seconds,
    foundation::error::{RevealError, RevealResult},
};

/// Declarative description of how one element appears.
///
/// The element shows `initial` until its trigger fires, waits `delay`, then moves to `target`
/// over `duration` along `ease`. Both states always define the same property set; this is
/// checked by [`AnimationSpec::new`] and on deserialization.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "AnimationSpecDef")]
pub struct AnimationSpec {
    initial: VisualState,
    target: VisualState,
    duration: Seconds,
    delay: Seconds,
    ease: Ease,
}

#[derive(serde::Deserialize)]
struct AnimationSpecDef {
    initial: VisualState,
    target: VisualState,
    duration: Seconds,
    #[serde(default)]
    delay: Seconds,
    #[serde(default)]
    ease: Ease,
}

impl TryFrom<AnimationSpecDef> for AnimationSpec {
    type Error = RevealError;

    fn try_from(def: AnimationSpecDef) -> Result<Self, Self::Error> {
        Self::new(def.initial, def.target, def.duration, def.delay, def.ease)
    }
}

impl AnimationSpec {
    /// Build a spec, rejecting mismatched property sets and non-finite values.
    pub fn new(
        initial: VisualState,
        target: VisualState,
        duration: Seconds,
        delay: Seconds,
        ease: Ease,
    ) -> RevealResult<Self> {
        initial.validate("initial")?;
        target.validate("target")?;
        if !initial.same_properties(&target) {
            let only_initial: Vec<_> = initial
                .properties()
                .filter(|p| target.get(*p).is_none())
                .collect();
            let only_target: Vec<_> = target
                .properties()
                .filter(|p| initial.get(*p).is_none())
                .collect();
            return Err(RevealError::animation(format!(
                "initial and target states must animate the same properties \
                 (only in initial: {only_initial:?}, only in target: {only_target:?})"
            )));
        }
        ease.validate()?;
        Ok(Self {
            initial,
            target,
            duration,
            delay,
            ease,
        })
    }

    /// Appearance before the element is revealed.
    pub fn initial(&self) -> &VisualState {
        &self.initial
    }

    /// Appearance once revealed.
    pub fn target(&self) -> &VisualState {
        &self.target
    }

    /// Transition length.
    pub fn duration(&self) -> Seconds {
        self.duration
    }

    /// Wait between the trigger firing and the transition starting.
    pub fn delay(&self) -> Seconds {
        self.delay
    }

    /// Interpolation curve.
    pub fn ease(&self) -> Ease {
        self.ease
    }

    /// Copy of this spec with a different delay; every other field is kept.
    pub fn with_delay(&self, delay: Seconds) -> Self {
        Self {
            delay,
            ..self.clone()
        }
    }

    /// Time after the trigger fires at which the element is fully revealed.
    pub fn end_time(&self) -> Seconds {
        self.delay.offset(self.duration)
    }

    /// Eased progress in `[0, 1]`, `since_fire` seconds after the trigger fired.
    pub fn progress(&self, since_fire: Seconds) -> f64 {
        if since_fire < self.delay {
            return 0.0;
        }
        let elapsed = since_fire.since(self.delay).get();
        let duration = self.duration.get();
        if duration <= 0.0 || elapsed >= duration {
            return 1.0;
        }
        self.ease.apply(elapsed / duration)
    }

    /// Appearance `since_fire` seconds after the trigger fired.
    pub fn sample(&self, since_fire: Seconds) -> VisualState {
        VisualState::lerp(&self.initial, &self.target, self.progress(since_fire))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spec.rs"]
mod tests;
