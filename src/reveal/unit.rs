use crate::{
    animation::spec::AnimationSpec,
    animation::state::VisualState,
    foundation::core::Seconds,
};

/// Reveal state of one visual unit.
///
/// Moves forward only: `Unrevealed -> Animating -> Revealed`. While `Animating` the unit shows
/// its initial state until its animation delay has elapsed since `fired_at`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case", tag = "phase")]
pub enum RevealState {
    /// Trigger has not fired.
    Unrevealed,
    /// Trigger fired at `fired_at`; transition scheduled or running.
    Animating {
        /// Time the trigger fired.
        fired_at: Seconds,
    },
    /// Showing the final state for the rest of the render lifetime.
    Revealed,
}

/// Fieldless view of [`RevealState`] used in logs and reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealPhase {
    /// See [`RevealState::Unrevealed`].
    Unrevealed,
    /// See [`RevealState::Animating`].
    Animating,
    /// See [`RevealState::Revealed`].
    Revealed,
}

impl RevealState {
    /// Phase without timing data.
    pub fn phase(self) -> RevealPhase {
        match self {
            Self::Unrevealed => RevealPhase::Unrevealed,
            Self::Animating { .. } => RevealPhase::Animating,
            Self::Revealed => RevealPhase::Revealed,
        }
    }
}

/// Inputs to the reveal state machine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealEvent {
    /// The unit's trigger fired.
    Entered {
        /// Frame-loop time of the entry.
        at: Seconds,
    },
    /// The frame loop advanced to `now`.
    Tick {
        /// Current frame-loop time.
        now: Seconds,
    },
    /// Animation is unavailable or disabled; jump to the final state.
    Skip,
}

/// Pure transition function of the reveal state machine.
///
/// Entry is accepted only from `Unrevealed`, so a unit animates at most once. `Revealed`
/// absorbs every event.
pub fn transition(state: RevealState, event: RevealEvent, spec: &AnimationSpec) -> RevealState {
    match (state, event) {
        (RevealState::Revealed, _) => RevealState::Revealed,
        (_, RevealEvent::Skip) => RevealState::Revealed,
        (RevealState::Unrevealed, RevealEvent::Entered { at }) => {
            RevealState::Animating { fired_at: at }
        }
        (RevealState::Unrevealed, RevealEvent::Tick { .. }) => RevealState::Unrevealed,
        (RevealState::Animating { .. }, RevealEvent::Entered { .. }) => state,
        (RevealState::Animating { fired_at }, RevealEvent::Tick { now }) => {
            if now >= fired_at.offset(spec.end_time()) {
                RevealState::Revealed
            } else {
                state
            }
        }
    }
}

/// A state change recorded by [`RevealUnit::apply`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PhaseChange {
    /// Phase before the event.
    pub from: RevealPhase,
    /// Phase after the event.
    pub to: RevealPhase,
    /// Time the change was observed.
    pub at: Seconds,
}

/// One animated visual unit: its spec plus current reveal state.
#[derive(Clone, Debug)]
pub struct RevealUnit {
    spec: AnimationSpec,
    state: RevealState,
}

impl RevealUnit {
    /// Unit waiting for its trigger.
    pub fn new(spec: AnimationSpec) -> Self {
        Self {
            spec,
            state: RevealState::Unrevealed,
        }
    }

    /// Unit's animation spec.
    pub fn spec(&self) -> &AnimationSpec {
        &self.spec
    }

    /// Current state.
    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Whether the unit reached its final state.
    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    /// Feed one event; returns the phase change it caused, if any.
    pub fn apply(&mut self, event: RevealEvent, at: Seconds) -> Option<PhaseChange> {
        let before = self.state.phase();
        self.state = transition(self.state, event, &self.spec);
        let after = self.state.phase();
        (before != after).then_some(PhaseChange {
            from: before,
            to: after,
            at,
        })
    }

    /// Appearance at frame-loop time `now`.
    pub fn visual(&self, now: Seconds) -> VisualState {
        match self.state {
            RevealState::Unrevealed => self.spec.initial().clone(),
            RevealState::Animating { fired_at } => self.spec.sample(now.since(fired_at)),
            RevealState::Revealed => self.spec.target().clone(),
        }
    }

    /// Time at which a `Tick` will next change this unit's state, so hosts can schedule a
    /// timer instead of ticking every frame. `None` while waiting on the trigger or once
    /// revealed.
    pub fn next_wakeup(&self) -> Option<Seconds> {
        match self.state {
            RevealState::Animating { fired_at } => Some(fired_at.offset(self.spec.end_time())),
            RevealState::Unrevealed | RevealState::Revealed => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/unit.rs"]
mod tests;
