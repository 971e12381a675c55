use super::*;
use crate::animation::{
    ease::Ease,
    state::{Property, VisualState},
};

fn secs(v: f64) -> Seconds {
    Seconds::new(v).unwrap()
}

fn spec(delay: f64) -> AnimationSpec {
    AnimationSpec::new(
        VisualState::new().with(Property::Opacity, 0.0),
        VisualState::new().with(Property::Opacity, 1.0),
        secs(0.5),
        secs(delay),
        Ease::Linear,
    )
    .unwrap()
}

#[test]
fn ticks_do_nothing_before_entry() {
    let s = spec(0.0);
    let state = transition(RevealState::Unrevealed, RevealEvent::Tick { now: secs(9.0) }, &s);
    assert_eq!(state, RevealState::Unrevealed);
}

#[test]
fn entry_then_ticks_reach_revealed() {
    let s = spec(0.2);
    let mut state = transition(
        RevealState::Unrevealed,
        RevealEvent::Entered { at: secs(1.0) },
        &s,
    );
    assert_eq!(state, RevealState::Animating { fired_at: secs(1.0) });
    state = transition(state, RevealEvent::Tick { now: secs(1.69) }, &s);
    assert_eq!(state.phase(), RevealPhase::Animating);
    state = transition(state, RevealEvent::Tick { now: secs(1.71) }, &s);
    assert_eq!(state, RevealState::Revealed);
}

#[test]
fn second_entry_while_animating_is_ignored() {
    let s = spec(0.0);
    let state = RevealState::Animating { fired_at: secs(1.0) };
    assert_eq!(
        transition(state, RevealEvent::Entered { at: secs(1.2) }, &s),
        state
    );
}

#[test]
fn revealed_absorbs_every_event() {
    let s = spec(0.0);
    for event in [
        RevealEvent::Entered { at: secs(0.0) },
        RevealEvent::Tick { now: secs(0.0) },
        RevealEvent::Skip,
    ] {
        assert_eq!(
            transition(RevealState::Revealed, event, &s),
            RevealState::Revealed
        );
    }
}

#[test]
fn skip_jumps_to_final_state() {
    let mut unit = RevealUnit::new(spec(0.3));
    let change = unit.apply(RevealEvent::Skip, Seconds::ZERO).unwrap();
    assert_eq!(change.from, RevealPhase::Unrevealed);
    assert_eq!(change.to, RevealPhase::Revealed);
    assert_eq!(unit.visual(Seconds::ZERO), *unit.spec().target());
}

#[test]
fn unit_visual_and_wakeup() {
    let mut unit = RevealUnit::new(spec(0.1));
    assert_eq!(unit.visual(secs(5.0)).get(Property::Opacity), Some(0.0));
    assert_eq!(unit.next_wakeup(), None);

    let change = unit
        .apply(RevealEvent::Entered { at: secs(2.0) }, secs(2.0))
        .unwrap();
    assert_eq!(change.to, RevealPhase::Animating);
    assert!((unit.next_wakeup().unwrap().get() - 2.6).abs() < 1e-9);

    assert_eq!(unit.visual(secs(2.05)).get(Property::Opacity), Some(0.0));
    let mid = unit.visual(secs(2.35)).get(Property::Opacity).unwrap();
    assert!((mid - 0.5).abs() < 1e-9);

    assert!(unit.apply(RevealEvent::Tick { now: secs(2.3) }, secs(2.3)).is_none());
    let done = unit
        .apply(RevealEvent::Tick { now: secs(2.61) }, secs(2.61))
        .unwrap();
    assert_eq!(done.to, RevealPhase::Revealed);
    assert!(unit.is_revealed());
    assert_eq!(unit.next_wakeup(), None);
}

#[test]
fn revealed_is_permanent_under_any_input() {
    let mut unit = RevealUnit::new(spec(0.0));
    unit.apply(RevealEvent::Entered { at: secs(0.0) }, secs(0.0));
    unit.apply(RevealEvent::Tick { now: secs(1.0) }, secs(1.0));
    assert!(unit.is_revealed());
    for i in 0..20 {
        let t = secs(1.0 + f64::from(i));
        assert!(unit.apply(RevealEvent::Entered { at: t }, t).is_none());
        assert!(unit.apply(RevealEvent::Tick { now: t }, t).is_none());
        assert!(unit.is_revealed());
    }
}
