use std::{cell::Cell, rc::Rc};

use crate::foundation::core::Seconds;

/// Observable state of an [`EnteredSignal`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum SignalState {
    /// Still waiting for the element to enter the viewport.
    Pending,
    /// The element entered the viewport at `at`.
    Entered {
        /// Frame-loop time of the entry.
        at: Seconds,
    },
    /// Observation stopped without an entry (element detached or observer gone).
    Cancelled,
}

#[derive(Debug)]
struct Slot {
    state: Cell<SignalState>,
}

/// Producer half of a one-shot entry signal. Firing consumes it.
#[derive(Debug)]
pub struct EnteredSender {
    slot: Rc<Slot>,
}

/// Consumer half of a one-shot entry signal.
#[derive(Debug)]
pub struct EnteredSignal {
    slot: Rc<Slot>,
}

/// Create a connected sender/signal pair in the `Pending` state.
pub fn entered_channel() -> (EnteredSender, EnteredSignal) {
    let slot = Rc::new(Slot {
        state: Cell::new(SignalState::Pending),
    });
    (
        EnteredSender { slot: slot.clone() },
        EnteredSignal { slot },
    )
}

impl EnteredSender {
    /// Deliver the entry. Since this consumes the sender it can happen at most once.
    pub fn fire(self, at: Seconds) {
        self.slot.state.set(SignalState::Entered { at });
    }

    /// The consumer was dropped; nobody is waiting for this entry any more.
    pub fn is_abandoned(&self) -> bool {
        Rc::strong_count(&self.slot) == 1
    }
}

impl Drop for EnteredSender {
    fn drop(&mut self) {
        if self.slot.state.get() == SignalState::Pending {
            self.slot.state.set(SignalState::Cancelled);
        }
    }
}

impl EnteredSignal {
    /// A signal that is already cancelled, for hosts without viewport capability.
    pub fn cancelled() -> Self {
        Self {
            slot: Rc::new(Slot {
                state: Cell::new(SignalState::Cancelled),
            }),
        }
    }

    /// Current state.
    pub fn state(&self) -> SignalState {
        self.slot.state.get()
    }

    /// Entry time, if the element has entered.
    pub fn entered_at(&self) -> Option<Seconds> {
        match self.state() {
            SignalState::Entered { at } => Some(at),
            SignalState::Pending | SignalState::Cancelled => None,
        }
    }

    /// Whether the element has entered the viewport.
    pub fn has_entered(&self) -> bool {
        self.entered_at().is_some()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/viewport/signal.rs"]
mod tests;
