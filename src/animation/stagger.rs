use crate::{
    animation::spec::AnimationSpec,
    foundation::core::Seconds,
    foundation::error::{RevealError, RevealResult},
};

/// Assigns cumulative delays to an ordered list of children.
///
/// Child `i` receives `base_delay + i * stagger`. Input order is the only thing that decides
/// stagger order; nothing is re-sorted.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevealSequencer {
    /// Added per child position.
    pub stagger: Seconds,
    /// Delay of the first child.
    pub base_delay: Seconds,
}

impl RevealSequencer {
    /// Sequencer with the given interval and base delay.
    pub fn new(stagger: Seconds, base_delay: Seconds) -> Self {
        Self {
            stagger,
            base_delay,
        }
    }

    /// Delay assigned to position `index`.
    pub fn delay_at(&self, index: usize) -> Seconds {
        self.base_delay.offset(self.stagger.times(index))
    }

    /// Apply the stagger to `children`.
    pub fn apply(&self, children: &[AnimationSpec]) -> Vec<AnimationSpec> {
        sequence(children, self.stagger, self.base_delay)
    }
}

/// Return `children` with `delay = base_delay + i * stagger` at position `i`.
///
/// Pure; an empty input yields an empty output and a single child gets `base_delay`.
pub fn sequence(
    children: &[AnimationSpec],
    stagger: Seconds,
    base_delay: Seconds,
) -> Vec<AnimationSpec> {
    children
        .iter()
        .enumerate()
        .map(|(i, spec)| spec.with_delay(base_delay.offset(stagger.times(i))))
        .collect()
}

/// Return `children` with an explicit delay per position, as used by two-panel layouts.
pub fn with_delays(
    children: &[AnimationSpec],
    delays: &[Seconds],
) -> RevealResult<Vec<AnimationSpec>> {
    if children.len() != delays.len() {
        return Err(RevealError::animation(format!(
            "explicit delays must match children ({} delays for {} children)",
            delays.len(),
            children.len()
        )));
    }
    Ok(children
        .iter()
        .zip(delays)
        .map(|(spec, delay)| spec.with_delay(*delay))
        .collect())
}

#[cfg(test)]
#[path = "../../tests/unit/animation/stagger.rs"]
mod tests;
