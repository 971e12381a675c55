//! Reveal drives viewport-triggered, staggered entrance animations for the sections of a page.
//!
//! A page is a stack of sections (headers, code showcases, feature grids, logo panels). Each
//! section is planned into reveal groups of visual units, laid out, then mounted against a
//! [`ViewportObserver`]. When a unit (or its group container) first enters the viewport it
//! animates once from an initial to a target visual state, after its staggered delay.
//!
//! # Pipeline overview
//!
//! 1. **Plan**: `Section + MotionConfig -> SectionPlan` (groups, units, delays)
//! 2. **Layout**: `[SectionPlan] -> PageLayout` (page-space bounds per unit and container)
//! 3. **Mount**: `SectionPlan + bounds -> MountedSection` (elements, triggers, reveal units)
//! 4. **Tick**: entry signals and frame time drive each unit
//!    `Unrevealed -> Animating -> Revealed`
//!
//! [`PageSession`] runs the whole pipeline under a simulated frame loop with a scripted scroll
//! position.
//!
//! The key constraints:
//!
//! - **Once only**: a unit animates at most once per mount; leaving and re-entering the
//!   viewport never restarts it.
//! - **Independent triggers**: a fired trigger never waits for a sibling.
//! - **Degrade to final state**: without viewport capability, or with reduced motion, every
//!   unit shows its target state on mount.
//! - **No ambient state**: motion defaults are passed explicitly to planning and mounting.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod animation;
mod foundation;
mod page;
mod reveal;
mod section;
mod viewport;

pub use animation::ease::Ease;
pub use animation::spec::AnimationSpec;
pub use animation::stagger::{RevealSequencer, sequence, with_delays};
pub use animation::state::{Lerp, Property, VisualState};
pub use foundation::core::{Edges, Fps, Point, Rect, Seconds, Size, Vec2};
pub use foundation::error::{RevealError, RevealResult};
pub use page::layout::{LayoutConfig, PageLayout, layout_page};
pub use page::model::{Page, ScheduledUnmount, ScrollInterp, ScrollKey, ScrollScript, Section};
pub use page::session::{
    PageSession, SectionFrame, SectionOutcome, SessionEvent, SessionReport, UnitOutcome,
};
pub use reveal::unit::{PhaseChange, RevealEvent, RevealPhase, RevealState, RevealUnit, transition};
pub use section::bento::{FeatureBento, FeatureCard};
pub use section::code::{CodeDisplay, CodeDisplayOptions, CodeView, PlainCodeDisplay};
pub use section::composer::{
    GroupBounds, MountedSection, PlannedDelay, PlannedUnit, RenderedContent, RevealGroup,
    SectionComposer, SectionPlan, TriggerScope, UnitFrame, UnitTransition, UnmountSummary, mount,
};
pub use section::config::MotionConfig;
pub use section::content::{CodeSnippet, ContentItem, SvgMarkup};
pub use section::header::SectionHeader;
pub use section::logo::{DEFAULT_LOGO_SVG, LogoPanel};
pub use section::showcase::{CodeShowcase, ShowcasePanel};
pub use viewport::element::{
    Element, ElementHandle, ElementId, ElementIds, Viewport, visible_fraction,
};
pub use viewport::observer::{GeometryObserver, ManualObserver, NoViewport, ViewportObserver};
pub use viewport::signal::{EnteredSender, EnteredSignal, SignalState, entered_channel};
pub use viewport::trigger::{
    Amount, ObserveOptions, TriggerPoll, TriggerStatus, ViewportTrigger,
};
