use crate::{
    foundation::core::Seconds,
    foundation::error::RevealResult,
    page::layout::layout_page,
    page::model::Page,
    reveal::unit::RevealPhase,
    section::code::CodeDisplay,
    section::composer::{
        MountedSection, UnitFrame, UnitTransition, UnmountSummary, mount as mount_section,
    },
    viewport::element::{ElementId, ElementIds, Viewport},
    viewport::observer::GeometryObserver,
};

/// Something observable that happened during a frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A trigger fired for `element`.
    Entered {
        /// Frame time of the entry.
        at: Seconds,
        /// Observed element (a unit, or a group container).
        element: ElementId,
    },
    /// A unit changed phase.
    Transition(UnitTransition),
    /// A section was detached.
    Unmounted {
        /// Frame time of the unmount.
        at: Seconds,
        /// Section name.
        section: String,
        /// What was torn down.
        summary: UnmountSummary,
    },
}

/// Final phase of one unit.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct UnitOutcome {
    /// Unit label.
    pub label: String,
    /// Phase at the end of the session.
    pub phase: RevealPhase,
}

/// Final state of one section.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SectionOutcome {
    /// Section name.
    pub name: String,
    /// Whether the section was still mounted.
    pub mounted: bool,
    /// Units in mount order; empty once unmounted.
    pub units: Vec<UnitOutcome>,
}

/// Result of [`PageSession::run`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SessionReport {
    /// Frames stepped.
    pub frames: u64,
    /// Every event in frame order.
    pub events: Vec<SessionEvent>,
    /// Per-section final state.
    pub sections: Vec<SectionOutcome>,
}

impl SessionReport {
    /// Transitions only.
    pub fn transitions(&self) -> impl Iterator<Item = &UnitTransition> {
        self.events.iter().filter_map(|e| match e {
            SessionEvent::Transition(t) => Some(t),
            _ => None,
        })
    }

    /// Number of entries recorded for `element`.
    pub fn entries_for(&self, element: ElementId) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SessionEvent::Entered { element: id, .. } if *id == element))
            .count()
    }
}

/// Rendered units of one mounted section.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SectionFrame {
    /// Section name.
    pub section: String,
    /// Units as drawn.
    pub units: Vec<UnitFrame>,
}

/// A page mounted under a simulated frame loop with a scripted scroll position.
///
/// Each [`PageSession::step`] advances one frame: scheduled unmounts apply first, then the
/// viewport moves and fires triggers, then every mounted section ticks.
#[derive(Debug)]
pub struct PageSession {
    page: Page,
    page_height: f64,
    observer: GeometryObserver,
    sections: Vec<Option<MountedSection>>,
    names: Vec<String>,
    frame: u64,
    now: Seconds,
    scroll_y: f64,
}

impl PageSession {
    /// Plan, lay out and mount every section of `page`.
    #[tracing::instrument(skip_all, fields(sections = page.sections.len()))]
    pub fn mount(page: Page) -> RevealResult<Self> {
        page.validate()?;
        let plans = page.plans()?;
        let layout = layout_page(&plans, page.viewport.width, &page.layout);

        let mut ids = ElementIds::default();
        let mut observer = GeometryObserver::new();
        let names = plans.iter().map(|p| p.name.clone()).collect();
        let sections = plans
            .into_iter()
            .zip(&layout.sections)
            .map(|(plan, bounds)| {
                mount_section(plan, bounds, &mut ids, &mut observer, &page.motion).map(Some)
            })
            .collect::<RevealResult<Vec<_>>>()?;

        tracing::debug!(
            page_height = layout.height,
            observing = observer.observing(),
            "page mounted"
        );
        Ok(Self {
            page,
            page_height: layout.height,
            observer,
            sections,
            names,
            frame: 0,
            now: Seconds::ZERO,
            scroll_y: 0.0,
        })
    }

    /// Time of the last stepped frame.
    pub fn now(&self) -> Seconds {
        self.now
    }

    /// Scroll offset used by the last stepped frame.
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Laid-out page height.
    pub fn page_height(&self) -> f64 {
        self.page_height
    }

    /// Section `idx`, unless it was unmounted.
    pub fn section(&self, idx: usize) -> Option<&MountedSection> {
        self.sections.get(idx).and_then(Option::as_ref)
    }

    /// Triggers still waiting for an entry.
    pub fn observing(&self) -> usize {
        self.observer.observing()
    }

    /// Advance one frame.
    pub fn step(&mut self) -> Vec<SessionEvent> {
        let now = self.page.fps.frame_time(self.frame);
        self.frame += 1;
        self.now = now;

        let mut events = Vec::new();
        for scheduled in &self.page.unmount {
            if scheduled.at > now {
                continue;
            }
            if let Some(section) = self.sections[scheduled.section].take() {
                let name = section.name().to_string();
                let summary = section.unmount();
                events.push(SessionEvent::Unmounted {
                    at: now,
                    section: name,
                    summary,
                });
            }
        }

        let vp = self.page.viewport;
        let max_scroll = (self.page_height - vp.height).max(0.0);
        self.scroll_y = self.page.scroll.sample(now).clamp(0.0, max_scroll);
        let viewport = Viewport::new(vp.width, vp.height).scrolled_to(self.scroll_y);
        events.extend(
            self.observer
                .update(&viewport, now)
                .into_iter()
                .map(|element| SessionEvent::Entered { at: now, element }),
        );

        for section in self.sections.iter_mut().flatten() {
            events.extend(section.tick(now).into_iter().map(SessionEvent::Transition));
        }
        events
    }

    /// Step through the page's whole duration, first frame and last frame included.
    #[tracing::instrument(skip_all, fields(fps = self.page.fps.as_f64()))]
    pub fn run(mut self) -> SessionReport {
        let last = self.page.fps.frames_covering(self.page.duration);
        let mut events = Vec::new();
        for _ in 0..=last {
            events.extend(self.step());
        }
        tracing::debug!(frames = self.frame, events = events.len(), "session finished");

        let sections = self
            .names
            .iter()
            .zip(&self.sections)
            .map(|(name, section)| SectionOutcome {
                name: name.clone(),
                mounted: section.is_some(),
                units: section
                    .iter()
                    .flat_map(|s| s.states())
                    .map(|(label, state)| UnitOutcome {
                        label,
                        phase: state.phase(),
                    })
                    .collect(),
            })
            .collect();
        SessionReport {
            frames: self.frame,
            events,
            sections,
        }
    }

    /// Draw every mounted section at the current time.
    pub fn snapshot(&self, display: &dyn CodeDisplay) -> Vec<SectionFrame> {
        self.sections
            .iter()
            .flatten()
            .map(|s| SectionFrame {
                section: s.name().to_string(),
                units: s.frame(self.now, display),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/session.rs"]
mod tests;
