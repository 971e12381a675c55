use std::rc::Weak;

use crate::{
    foundation::core::Edges,
    foundation::error::{RevealError, RevealResult},
    viewport::element::{Element, ElementHandle, ElementId, Viewport, visible_fraction},
};

/// How much of an element must be visible before its trigger fires.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "AmountDef", into = "AmountDef")]
pub enum Amount {
    /// Any positive fraction.
    #[default]
    Some,
    /// The whole element.
    All,
    /// At least this fraction, in `(0, 1]`.
    Fraction(f64),
}

#[derive(Clone, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum AmountDef {
    Keyword(String),
    Fraction(f64),
}

impl TryFrom<AmountDef> for Amount {
    type Error = RevealError;

    fn try_from(def: AmountDef) -> Result<Self, Self::Error> {
        let amount = match def {
            AmountDef::Keyword(k) if k == "some" => Self::Some,
            AmountDef::Keyword(k) if k == "all" => Self::All,
            AmountDef::Keyword(k) => {
                return Err(RevealError::validation(format!(
                    "amount must be 'some', 'all' or a fraction, got '{k}'"
                )));
            }
            AmountDef::Fraction(f) => Self::Fraction(f),
        };
        amount.validate()?;
        Ok(amount)
    }
}

impl From<Amount> for AmountDef {
    fn from(amount: Amount) -> Self {
        match amount {
            Amount::Some => Self::Keyword("some".to_string()),
            Amount::All => Self::Keyword("all".to_string()),
            Amount::Fraction(f) => Self::Fraction(f),
        }
    }
}

impl Amount {
    /// Reject fractions outside `(0, 1]`.
    pub fn validate(self) -> RevealResult<()> {
        if let Self::Fraction(f) = self {
            if !f.is_finite() || f <= 0.0 || f > 1.0 {
                return Err(RevealError::validation(format!(
                    "amount fraction must lie in (0, 1], got {f}"
                )));
            }
        }
        Ok(())
    }

    /// Whether `fraction` visible satisfies this threshold.
    pub fn is_met(self, fraction: f64) -> bool {
        match self {
            Self::Some => fraction > 0.0,
            Self::All => fraction >= 1.0 - 1e-9,
            Self::Fraction(f) => fraction > 0.0 && fraction >= f,
        }
    }
}

/// Options for observing one element.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ObserveOptions {
    /// Root margin applied to the viewport before testing intersection.
    pub margin: Edges,
    /// Visibility threshold.
    pub amount: Amount,
}

impl ObserveOptions {
    /// Options with only a root margin.
    pub fn with_margin(margin: Edges) -> Self {
        Self {
            margin,
            ..Self::default()
        }
    }
}

/// Lifecycle of a [`ViewportTrigger`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerStatus {
    /// Watching for the first entry.
    Observing,
    /// Entered once; terminal.
    Fired,
    /// Element detached before entering; terminal.
    Cancelled,
}

/// Outcome of feeding one observation into a trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerPoll {
    /// Not visible yet.
    Pending,
    /// First entry; reported exactly once.
    Entered,
    /// The element was found detached; reported exactly once.
    Cancelled,
    /// Already fired or cancelled; the observation was ignored.
    Done,
}

/// Fire-once intersection watcher for one element.
#[derive(Debug)]
pub struct ViewportTrigger {
    element: Weak<Element>,
    element_id: ElementId,
    options: ObserveOptions,
    status: TriggerStatus,
}

impl ViewportTrigger {
    /// Start observing `element`.
    pub fn new(element: &ElementHandle, options: ObserveOptions) -> Self {
        Self {
            element: std::rc::Rc::downgrade(element),
            element_id: element.id(),
            options,
            status: TriggerStatus::Observing,
        }
    }

    /// Observed element id.
    pub fn element_id(&self) -> ElementId {
        self.element_id
    }

    /// Observation options.
    pub fn options(&self) -> ObserveOptions {
        self.options
    }

    /// Current lifecycle status.
    pub fn status(&self) -> TriggerStatus {
        self.status
    }

    /// Whether the trigger fired. Once true this never resets.
    pub fn has_fired(&self) -> bool {
        self.status == TriggerStatus::Fired
    }

    /// Alias of [`ViewportTrigger::has_fired`].
    pub fn has_entered(&self) -> bool {
        self.has_fired()
    }

    /// Whether the observed element is still attached.
    pub fn is_attached(&self) -> bool {
        self.element.strong_count() > 0
    }

    /// Test the element's current bounds against `viewport`.
    pub fn check(&mut self, viewport: &Viewport) -> TriggerPoll {
        if self.status != TriggerStatus::Observing {
            return TriggerPoll::Done;
        }
        let Some(element) = self.element.upgrade() else {
            return self.cancel();
        };
        let root = self.options.margin.expand(viewport.rect());
        let fraction = visible_fraction(element.bounds(), root);
        self.record(self.options.amount.is_met(fraction))
    }

    /// Feed one externally computed intersection result.
    pub fn record(&mut self, intersecting: bool) -> TriggerPoll {
        let status = self.status;
        match status {
            TriggerStatus::Fired | TriggerStatus::Cancelled => TriggerPoll::Done,
            TriggerStatus::Observing if !self.is_attached() => self.cancel(),
            TriggerStatus::Observing if intersecting => {
                self.status = TriggerStatus::Fired;
                tracing::debug!(element = self.element_id.0, "viewport trigger fired");
                TriggerPoll::Entered
            }
            TriggerStatus::Observing => TriggerPoll::Pending,
        }
    }

    /// Stop observing without an entry. No-op once terminal.
    pub fn cancel(&mut self) -> TriggerPoll {
        if self.status != TriggerStatus::Observing {
            return TriggerPoll::Done;
        }
        self.status = TriggerStatus::Cancelled;
        tracing::debug!(element = self.element_id.0, "viewport trigger cancelled");
        TriggerPoll::Cancelled
    }
}

#[cfg(test)]
#[path = "../../tests/unit/viewport/trigger.rs"]
mod tests;
