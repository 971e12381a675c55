use crate::{
    foundation::core::Seconds,
    viewport::element::{ElementHandle, ElementId, Viewport},
    viewport::signal::{EnteredSender, EnteredSignal, entered_channel},
    viewport::trigger::{ObserveOptions, TriggerPoll, ViewportTrigger},
};

/// Capability to detect when elements enter the viewport.
///
/// Each call to [`ViewportObserver::observe`] yields an independent one-shot signal; triggers
/// never coordinate with each other.
pub trait ViewportObserver {
    /// Start watching `element` and return its entry signal.
    fn observe(&mut self, element: &ElementHandle, options: ObserveOptions) -> EnteredSignal;

    /// Whether this host can detect viewport entry at all. When it cannot, sections render
    /// their final state immediately.
    fn is_available(&self) -> bool {
        true
    }
}

#[derive(Debug)]
struct Watch {
    trigger: ViewportTrigger,
    sender: Option<EnteredSender>,
}

impl Watch {
    fn new(element: &ElementHandle, options: ObserveOptions) -> (Self, EnteredSignal) {
        let (sender, signal) = entered_channel();
        let watch = Self {
            trigger: ViewportTrigger::new(element, options),
            sender: Some(sender),
        };
        (watch, signal)
    }

    /// Apply `poll`; returns `true` while the watch should stay registered.
    fn settle(&mut self, poll: TriggerPoll, now: Seconds) -> bool {
        match poll {
            TriggerPoll::Pending => true,
            TriggerPoll::Entered => {
                if let Some(sender) = self.sender.take() {
                    sender.fire(now);
                }
                false
            }
            TriggerPoll::Cancelled | TriggerPoll::Done => {
                self.sender = None;
                false
            }
        }
    }

    fn is_abandoned(&self) -> bool {
        self.sender.as_ref().is_none_or(EnteredSender::is_abandoned)
    }
}

/// Observer that tests element bounds against a [`Viewport`] once per frame.
#[derive(Debug, Default)]
pub struct GeometryObserver {
    watches: Vec<Watch>,
}

impl GeometryObserver {
    /// Observer with nothing registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of triggers still waiting for an entry.
    pub fn observing(&self) -> usize {
        self.watches.len()
    }

    /// Check every pending trigger against `viewport` and fire those that entered.
    ///
    /// Returns the ids that entered during this call. Fired, cancelled and abandoned
    /// triggers are dropped, so they are never checked again.
    pub fn update(&mut self, viewport: &Viewport, now: Seconds) -> Vec<ElementId> {
        let mut entered = Vec::new();
        self.watches.retain_mut(|watch| {
            if watch.is_abandoned() {
                watch.trigger.cancel();
                return false;
            }
            let poll = watch.trigger.check(viewport);
            if poll == TriggerPoll::Entered {
                entered.push(watch.trigger.element_id());
            }
            watch.settle(poll, now)
        });
        tracing::trace!(
            scroll_y = viewport.scroll.y,
            entered = entered.len(),
            pending = self.watches.len(),
            "viewport update"
        );
        entered
    }
}

impl ViewportObserver for GeometryObserver {
    fn observe(&mut self, element: &ElementHandle, options: ObserveOptions) -> EnteredSignal {
        let (watch, signal) = Watch::new(element, options);
        self.watches.push(watch);
        signal
    }
}

/// Observer driven by explicit calls, for hosts that compute intersection themselves and for
/// tests that need synthetic entries.
#[derive(Debug, Default)]
pub struct ManualObserver {
    watches: Vec<Watch>,
}

impl ManualObserver {
    /// Observer with nothing registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids still waiting for an entry, in registration order.
    pub fn pending(&self) -> Vec<ElementId> {
        self.watches
            .iter()
            .map(|w| w.trigger.element_id())
            .collect()
    }

    /// Report that `id` intersects the viewport at `now`.
    ///
    /// Returns whether any trigger fired. Entering again after a fire is ignored.
    pub fn enter(&mut self, id: ElementId, now: Seconds) -> bool {
        self.report(id, true, now)
    }

    /// Report that `id` left the viewport. Never fires anything.
    pub fn leave(&mut self, id: ElementId, now: Seconds) {
        self.report(id, false, now);
    }

    /// Drop triggers whose element detached or whose signal was dropped.
    pub fn prune(&mut self) {
        self.watches.retain_mut(|watch| {
            if watch.is_abandoned() || !watch.trigger.is_attached() {
                watch.trigger.cancel();
                watch.sender = None;
                return false;
            }
            true
        });
    }

    fn report(&mut self, id: ElementId, intersecting: bool, now: Seconds) -> bool {
        self.prune();
        let mut fired = false;
        self.watches.retain_mut(|watch| {
            if watch.trigger.element_id() != id {
                return true;
            }
            let poll = watch.trigger.record(intersecting);
            fired |= poll == TriggerPoll::Entered;
            watch.settle(poll, now)
        });
        fired
    }
}

impl ViewportObserver for ManualObserver {
    fn observe(&mut self, element: &ElementHandle, options: ObserveOptions) -> EnteredSignal {
        let (watch, signal) = Watch::new(element, options);
        self.watches.push(watch);
        signal
    }
}

/// Host without viewport detection. Every signal is cancelled up front and
/// [`ViewportObserver::is_available`] reports `false`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoViewport;

impl ViewportObserver for NoViewport {
    fn observe(&mut self, _element: &ElementHandle, _options: ObserveOptions) -> EnteredSignal {
        EnteredSignal::cancelled()
    }

    fn is_available(&self) -> bool {
        false
    }
}

#[cfg(test)]
#[path = "../../tests/unit/viewport/observer.rs"]
mod tests;
