use crate::{
    animation::spec::AnimationSpec,
    animation::state::VisualState,
    foundation::core::{Rect, Seconds},
    foundation::error::{RevealError, RevealResult},
    reveal::unit::{RevealEvent, RevealPhase, RevealState, RevealUnit},
    section::code::{CodeDisplay, CodeView},
    section::config::MotionConfig,
    section::content::ContentItem,
    viewport::element::{Element, ElementHandle, ElementId, ElementIds},
    viewport::observer::ViewportObserver,
    viewport::signal::{EnteredSignal, SignalState},
    viewport::trigger::ObserveOptions,
};

/// Which element a reveal group's trigger watches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerScope {
    /// Every unit observes its own element and fires independently.
    #[default]
    PerItem,
    /// One trigger on the group container; all units start counting their delay from it.
    Container,
}

/// A visual unit waiting to be mounted.
#[derive(Clone, Debug, PartialEq)]
pub struct PlannedUnit {
    /// Human readable label used in reports.
    pub label: String,
    /// Static content shown by the unit.
    pub content: Vec<ContentItem>,
    /// Reveal animation, delay already assigned.
    pub spec: AnimationSpec,
    /// Grid columns the unit spans.
    pub col_span: u32,
}

/// Units revealed together under one trigger scope.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealGroup {
    /// Group label used in reports.
    pub label: String,
    /// Trigger placement.
    pub scope: TriggerScope,
    /// Margin and threshold for the group's triggers.
    pub observe: ObserveOptions,
    /// Grid columns used to lay the units out.
    pub columns: u32,
    /// Units in stagger order.
    pub units: Vec<PlannedUnit>,
}

/// Everything a section wants mounted, in order.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionPlan {
    /// Section name.
    pub name: String,
    /// Groups from top to bottom.
    pub groups: Vec<RevealGroup>,
}

/// Delay of one planned unit, as reported by [`SectionPlan::delays`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PlannedDelay {
    /// Group label.
    pub group: String,
    /// Unit label.
    pub unit: String,
    /// Assigned delay.
    pub delay: Seconds,
    /// Assigned duration.
    pub duration: Seconds,
}

impl SectionPlan {
    /// Flattened `(group, unit, delay)` listing in mount order.
    pub fn delays(&self) -> Vec<PlannedDelay> {
        self.groups
            .iter()
            .flat_map(|g| {
                g.units.iter().map(|u| PlannedDelay {
                    group: g.label.clone(),
                    unit: u.label.clone(),
                    delay: u.spec.delay(),
                    duration: u.spec.duration(),
                })
            })
            .collect()
    }

    /// Total number of units.
    pub fn unit_count(&self) -> usize {
        self.groups.iter().map(|g| g.units.len()).sum()
    }
}

/// Role shared by every concrete page section: arrange static content into reveal groups.
pub trait SectionComposer {
    /// Build the section's plan using the shared motion defaults.
    fn plan(&self, motion: &MotionConfig) -> RevealResult<SectionPlan>;
}

/// Page-space bounds for one group, produced by layout.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupBounds {
    /// Container bounds.
    pub container: Rect,
    /// One rect per unit, in unit order.
    pub units: Vec<Rect>,
}

/// Content after passing through the code display.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderedContent {
    /// Plain text.
    Text(String),
    /// Icon drawn at its intrinsic size.
    Icon {
        /// Width in pixels.
        width: f64,
        /// Height in pixels.
        height: f64,
    },
    /// Code element returned by the display.
    Code(CodeView),
}

/// One unit as drawn at a given instant.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct UnitFrame {
    /// Group label.
    pub group: String,
    /// Unit label.
    pub label: String,
    /// Unit element.
    pub element: ElementId,
    /// Page-space bounds.
    pub bounds: Rect,
    /// Reveal phase.
    pub phase: RevealPhase,
    /// Animated visual properties.
    pub visual: VisualState,
    /// Rendered content.
    pub content: Vec<RenderedContent>,
}

/// A phase change of one unit, as returned by [`MountedSection::tick`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct UnitTransition {
    /// Section name.
    pub section: String,
    /// Group label.
    pub group: String,
    /// Unit label.
    pub unit: String,
    /// Unit element.
    pub element: ElementId,
    /// Phase before.
    pub from: RevealPhase,
    /// Phase after.
    pub to: RevealPhase,
    /// When the change happened.
    pub at: Seconds,
}

/// What [`MountedSection::unmount`] tore down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct UnmountSummary {
    /// Triggers that were still waiting.
    pub pending_triggers: usize,
    /// Units interrupted mid-transition.
    pub interrupted: usize,
}

#[derive(Debug)]
struct MountedUnit {
    label: String,
    content: Vec<ContentItem>,
    element: ElementHandle,
    signal: Option<EnteredSignal>,
    reveal: RevealUnit,
}

#[derive(Debug)]
struct MountedGroup {
    label: String,
    scope: TriggerScope,
    container: ElementHandle,
    container_signal: Option<EnteredSignal>,
    units: Vec<MountedUnit>,
}

impl MountedGroup {
    fn signal_for<'a>(&'a self, unit: &'a MountedUnit) -> Option<&'a EnteredSignal> {
        match self.scope {
            TriggerScope::Container => self.container_signal.as_ref(),
            TriggerScope::PerItem => unit.signal.as_ref(),
        }
    }
}

/// A section attached to the render tree.
///
/// Owns its elements, entry signals and reveal state; nothing is shared with other sections.
/// Dropping it (or calling [`MountedSection::unmount`]) detaches every element, which cancels
/// outstanding triggers and in-flight transitions.
#[derive(Debug)]
pub struct MountedSection {
    name: String,
    groups: Vec<MountedGroup>,
}

/// Attach `plan` to the render tree at `bounds` and register its triggers with `observer`.
///
/// When the observer has no viewport capability, or `motion.reduced_motion` is set, every unit
/// starts in its final state and no trigger is registered.
#[tracing::instrument(skip_all, fields(section = %plan.name))]
pub fn mount(
    plan: SectionPlan,
    bounds: &[GroupBounds],
    ids: &mut ElementIds,
    observer: &mut dyn ViewportObserver,
    motion: &MotionConfig,
) -> RevealResult<MountedSection> {
    if plan.groups.len() != bounds.len() {
        return Err(RevealError::validation(format!(
            "section '{}' has {} groups but {} group bounds",
            plan.name,
            plan.groups.len(),
            bounds.len()
        )));
    }

    let animate = observer.is_available() && !motion.reduced_motion;
    if !animate {
        tracing::debug!("animation unavailable; rendering final state");
    }

    let mut groups = Vec::with_capacity(plan.groups.len());
    for (group, group_bounds) in plan.groups.into_iter().zip(bounds) {
        if group.units.len() != group_bounds.units.len() {
            return Err(RevealError::validation(format!(
                "group '{}' has {} units but {} unit bounds",
                group.label,
                group.units.len(),
                group_bounds.units.len()
            )));
        }

        let container = Element::attach(ids.next_id(), group_bounds.container);
        let container_signal = (animate && group.scope == TriggerScope::Container)
            .then(|| observer.observe(&container, group.observe));

        let mut units = Vec::with_capacity(group.units.len());
        for (planned, rect) in group.units.into_iter().zip(&group_bounds.units) {
            let element = Element::attach(ids.next_id(), *rect);
            let signal = (animate && group.scope == TriggerScope::PerItem)
                .then(|| observer.observe(&element, group.observe));
            let mut reveal = RevealUnit::new(planned.spec);
            if !animate {
                reveal.apply(RevealEvent::Skip, Seconds::ZERO);
            }
            units.push(MountedUnit {
                label: planned.label,
                content: planned.content,
                element,
                signal,
                reveal,
            });
        }

        groups.push(MountedGroup {
            label: group.label,
            scope: group.scope,
            container,
            container_signal,
            units,
        });
    }

    tracing::debug!(groups = groups.len(), animate, "section mounted");
    Ok(MountedSection {
        name: plan.name,
        groups,
    })
}

impl MountedSection {
    /// Section name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Drain entry signals and advance every unit to `now`.
    ///
    /// Units only react to their own group's signal; a fired signal never waits for siblings.
    /// A cancelled signal while still mounted means the host lost viewport capability, so the
    /// unit jumps to its final state.
    pub fn tick(&mut self, now: Seconds) -> Vec<UnitTransition> {
        let mut out = Vec::new();
        for group in &mut self.groups {
            let mut units = std::mem::take(&mut group.units);
            for unit in &mut units {
                let signal_state = group.signal_for(unit).map(EnteredSignal::state);
                let entry = match signal_state {
                    Some(SignalState::Entered { at }) => Some((RevealEvent::Entered { at }, at)),
                    Some(SignalState::Cancelled) => Some((RevealEvent::Skip, now)),
                    Some(SignalState::Pending) | None => None,
                };
                let events = entry
                    .into_iter()
                    .chain(std::iter::once((RevealEvent::Tick { now }, now)));
                for (event, at) in events {
                    if let Some(change) = unit.reveal.apply(event, at) {
                        tracing::debug!(
                            section = %self.name,
                            group = %group.label,
                            unit = %unit.label,
                            from = ?change.from,
                            to = ?change.to,
                            at = change.at.get(),
                            "reveal transition"
                        );
                        out.push(UnitTransition {
                            section: self.name.clone(),
                            group: group.label.clone(),
                            unit: unit.label.clone(),
                            element: unit.element.id(),
                            from: change.from,
                            to: change.to,
                            at: change.at,
                        });
                    }
                }
            }
            group.units = units;
        }
        out
    }

    /// Sample every unit at `now` and render its content through `display`.
    pub fn frame(&self, now: Seconds, display: &dyn CodeDisplay) -> Vec<UnitFrame> {
        self.groups
            .iter()
            .flat_map(|group| {
                group.units.iter().map(move |unit| UnitFrame {
                    group: group.label.clone(),
                    label: unit.label.clone(),
                    element: unit.element.id(),
                    bounds: unit.element.bounds(),
                    phase: unit.reveal.state().phase(),
                    visual: unit.reveal.visual(now),
                    content: unit
                        .content
                        .iter()
                        .map(|item| render_content(item, display))
                        .collect(),
                })
            })
            .collect()
    }

    /// `(unit label, state)` for every unit in mount order.
    pub fn states(&self) -> Vec<(String, RevealState)> {
        self.groups
            .iter()
            .flat_map(|g| g.units.iter())
            .map(|u| (u.label.clone(), u.reveal.state()))
            .collect()
    }

    /// Element ids of every unit in mount order.
    pub fn unit_elements(&self) -> Vec<ElementId> {
        self.groups
            .iter()
            .flat_map(|g| g.units.iter())
            .map(|u| u.element.id())
            .collect()
    }

    /// Container element id of each group.
    pub fn container_elements(&self) -> Vec<ElementId> {
        self.groups.iter().map(|g| g.container.id()).collect()
    }

    /// Earliest time a tick will change some unit, if a transition is in flight.
    pub fn next_wakeup(&self) -> Option<Seconds> {
        self.groups
            .iter()
            .flat_map(|g| g.units.iter())
            .filter_map(|u| u.reveal.next_wakeup())
            .min_by(|a, b| a.get().total_cmp(&b.get()))
    }

    /// Every unit reached its final state.
    pub fn is_settled(&self) -> bool {
        self.groups
            .iter()
            .flat_map(|g| g.units.iter())
            .all(|u| u.reveal.is_revealed())
    }

    /// Move elements after a relayout. Bounds must match the mounted shape.
    pub fn relayout(&self, bounds: &[GroupBounds]) -> RevealResult<()> {
        if bounds.len() != self.groups.len()
            || self
                .groups
                .iter()
                .zip(bounds)
                .any(|(g, b)| g.units.len() != b.units.len())
        {
            return Err(RevealError::validation(format!(
                "relayout bounds do not match section '{}'",
                self.name
            )));
        }
        for (group, b) in self.groups.iter().zip(bounds) {
            group.container.set_bounds(b.container);
            for (unit, rect) in group.units.iter().zip(&b.units) {
                unit.element.set_bounds(*rect);
            }
        }
        Ok(())
    }

    /// Detach the section. Outstanding triggers are cancelled and in-flight transitions
    /// dropped; nothing persists.
    pub fn unmount(self) -> UnmountSummary {
        let mut summary = UnmountSummary::default();
        for group in &self.groups {
            if group
                .container_signal
                .as_ref()
                .is_some_and(|s| s.state() == SignalState::Pending)
            {
                summary.pending_triggers += 1;
            }
            for unit in &group.units {
                if unit
                    .signal
                    .as_ref()
                    .is_some_and(|s| s.state() == SignalState::Pending)
                {
                    summary.pending_triggers += 1;
                }
                if unit.reveal.state().phase() == RevealPhase::Animating {
                    summary.interrupted += 1;
                }
            }
        }
        tracing::debug!(
            section = %self.name,
            pending = summary.pending_triggers,
            interrupted = summary.interrupted,
            "section unmounted"
        );
        summary
    }
}

fn render_content(item: &ContentItem, display: &dyn CodeDisplay) -> RenderedContent {
    match item {
        ContentItem::Text(text) => RenderedContent::Text(text.clone()),
        ContentItem::Icon(svg) => RenderedContent::Icon {
            width: svg.size().width,
            height: svg.size().height,
        },
        ContentItem::Code(snippet) => RenderedContent::Code(display.render_snippet(snippet)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/section/composer.rs"]
mod tests;
