use super::*;
use crate::{
    animation::stagger::sequence,
    animation::state::Property,
    section::code::PlainCodeDisplay,
    section::content::CodeSnippet,
    viewport::element::Viewport,
    viewport::observer::{GeometryObserver, ManualObserver, NoViewport},
};

fn secs(v: f64) -> Seconds {
    Seconds::new(v).unwrap()
}

fn grid_plan(scope: TriggerScope, n: usize) -> SectionPlan {
    let motion = MotionConfig::default();
    let base = motion.fade_up().unwrap();
    let specs = sequence(&vec![base; n], secs(0.08), Seconds::ZERO);
    SectionPlan {
        name: "grid".to_string(),
        groups: vec![RevealGroup {
            label: "cards".to_string(),
            scope,
            observe: ObserveOptions::default(),
            columns: 2,
            units: specs
                .into_iter()
                .enumerate()
                .map(|(i, spec)| PlannedUnit {
                    label: format!("card-{i}"),
                    content: vec![
                        ContentItem::Text(format!("Card {i}")),
                        ContentItem::Code(CodeSnippet::new("a\nb", "x.go").line_numbers(false)),
                    ],
                    spec,
                    col_span: 1,
                })
                .collect(),
        }],
    }
}

fn grid_bounds(n: usize) -> Vec<GroupBounds> {
    vec![GroupBounds {
        container: Rect::new(0.0, 0.0, 800.0, 200.0 * n as f64),
        units: (0..n)
            .map(|i| Rect::new(0.0, 200.0 * i as f64, 800.0, 200.0 * (i + 1) as f64))
            .collect(),
    }]
}

#[test]
fn container_scope_staggers_from_one_fire() {
    let mut observer = ManualObserver::new();
    let mut ids = ElementIds::default();
    let mut section = mount(
        grid_plan(TriggerScope::Container, 3),
        &grid_bounds(3),
        &mut ids,
        &mut observer,
        &MotionConfig::default(),
    )
    .unwrap();
    let container = section.container_elements()[0];
    assert_eq!(observer.pending(), vec![container]);

    assert!(section.tick(secs(0.5)).is_empty());
    assert!(observer.enter(container, secs(1.0)));

    let started = section.tick(secs(1.0));
    assert_eq!(started.len(), 3);
    assert!(started.iter().all(|t| t.to == RevealPhase::Animating));

    // 1.0 + 0.08 + 0.5 = 1.58: only the first two are done by 1.6.
    let done = section.tick(secs(1.6));
    let labels: Vec<_> = done.iter().map(|t| t.unit.as_str()).collect();
    assert_eq!(labels, vec!["card-0", "card-1"]);
    assert!(!section.is_settled());
    assert!((section.next_wakeup().unwrap().get() - 1.66).abs() < 1e-9);

    section.tick(secs(1.7));
    assert!(section.is_settled());
}

#[test]
fn per_item_scope_fires_independently() {
    let mut observer = ManualObserver::new();
    let mut ids = ElementIds::default();
    let mut section = mount(
        grid_plan(TriggerScope::PerItem, 2),
        &grid_bounds(2),
        &mut ids,
        &mut observer,
        &MotionConfig::default(),
    )
    .unwrap();
    let units = section.unit_elements();
    observer.enter(units[1], secs(0.0));
    let changes = section.tick(secs(0.0));
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].unit, "card-1");

    let states = section.states();
    assert_eq!(states[0].1, RevealState::Unrevealed);
    assert_eq!(states[1].1, RevealState::Animating { fired_at: secs(0.0) });
}

#[test]
fn frame_samples_visual_and_renders_code() {
    let mut observer = ManualObserver::new();
    let mut ids = ElementIds::default();
    let section = mount(
        grid_plan(TriggerScope::PerItem, 1),
        &grid_bounds(1),
        &mut ids,
        &mut observer,
        &MotionConfig::default(),
    )
    .unwrap();
    let frames = section.frame(secs(0.0), &PlainCodeDisplay);
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].phase, RevealPhase::Unrevealed);
    assert_eq!(frames[0].visual.get(Property::Opacity), Some(0.0));
    assert_eq!(
        frames[0].content[1],
        RenderedContent::Code(CodeView {
            filename: "x.go".to_string(),
            lines: vec!["a".to_string(), "b".to_string()],
        })
    );
}

#[test]
fn no_viewport_renders_final_state_immediately() {
    let mut ids = ElementIds::default();
    let section = mount(
        grid_plan(TriggerScope::Container, 3),
        &grid_bounds(3),
        &mut ids,
        &mut NoViewport,
        &MotionConfig::default(),
    )
    .unwrap();
    assert!(section.is_settled());
    let frames = section.frame(Seconds::ZERO, &PlainCodeDisplay);
    assert!(
        frames
            .iter()
            .all(|f| f.visual.get(Property::Opacity) == Some(1.0))
    );
}

#[test]
fn reduced_motion_skips_triggers() {
    let mut observer = ManualObserver::new();
    let mut ids = ElementIds::default();
    let motion = MotionConfig {
        reduced_motion: true,
        ..MotionConfig::default()
    };
    let section = mount(
        grid_plan(TriggerScope::PerItem, 2),
        &grid_bounds(2),
        &mut ids,
        &mut observer,
        &motion,
    )
    .unwrap();
    assert!(observer.pending().is_empty());
    assert!(section.is_settled());
}

#[test]
fn unmount_cancels_pending_triggers() {
    let mut observer = ManualObserver::new();
    let mut ids = ElementIds::default();
    let mut section = mount(
        grid_plan(TriggerScope::PerItem, 3),
        &grid_bounds(3),
        &mut ids,
        &mut observer,
        &MotionConfig::default(),
    )
    .unwrap();
    let units = section.unit_elements();
    observer.enter(units[0], secs(0.0));
    section.tick(secs(0.1));

    let summary = section.unmount();
    assert_eq!(summary.pending_triggers, 2);
    assert_eq!(summary.interrupted, 1);

    observer.prune();
    assert!(observer.pending().is_empty());
    assert!(!observer.enter(units[1], secs(1.0)));
}

#[test]
fn mismatched_bounds_are_rejected() {
    let mut observer = ManualObserver::new();
    let mut ids = ElementIds::default();
    let err = mount(
        grid_plan(TriggerScope::PerItem, 3),
        &grid_bounds(2),
        &mut ids,
        &mut observer,
        &MotionConfig::default(),
    );
    assert!(err.is_err());
}

#[test]
fn plan_reports_delays() {
    let plan = grid_plan(TriggerScope::Container, 3);
    let delays = plan.delays();
    assert_eq!(plan.unit_count(), 3);
    assert_eq!(delays[2].unit, "card-2");
    assert!((delays[2].delay.get() - 0.16).abs() < 1e-12);
}

#[test]
fn relayout_moves_elements_seen_by_observer() {
    let mut observer = GeometryObserver::new();
    let mut ids = ElementIds::default();
    let section = mount(
        grid_plan(TriggerScope::PerItem, 1),
        &grid_bounds(1),
        &mut ids,
        &mut observer,
        &MotionConfig::default(),
    )
    .unwrap();

    let moved = vec![GroupBounds {
        container: Rect::new(0.0, 2000.0, 800.0, 2200.0),
        units: vec![Rect::new(0.0, 2000.0, 800.0, 2200.0)],
    }];
    section.relayout(&moved).unwrap();

    let viewport = Viewport::new(800.0, 600.0);
    assert!(observer.update(&viewport, secs(0.0)).is_empty());
    assert_eq!(
        observer.update(&viewport.scrolled_to(1800.0), secs(0.1)),
        section.unit_elements()
    );
}

#[test]
fn relayout_rejects_shape_mismatch() {
    let mut observer = ManualObserver::new();
    let mut ids = ElementIds::default();
    let section = mount(
        grid_plan(TriggerScope::PerItem, 2),
        &grid_bounds(2),
        &mut ids,
        &mut observer,
        &MotionConfig::default(),
    )
    .unwrap();
    assert!(section.relayout(&grid_bounds(3)).is_err());
}

#[test]
fn dropped_observer_degrades_to_final_state() {
    let mut observer = ManualObserver::new();
    let mut ids = ElementIds::default();
    let mut section = mount(
        grid_plan(TriggerScope::PerItem, 1),
        &grid_bounds(1),
        &mut ids,
        &mut observer,
        &MotionConfig::default(),
    )
    .unwrap();
    drop(observer);

    let changes: Vec<_> = section
        .tick(secs(0.2))
        .into_iter()
        .map(|t| (t.from, t.to))
        .collect();
    assert_eq!(changes, vec![(RevealPhase::Unrevealed, RevealPhase::Revealed)]);
    assert!(section.is_settled());
}
