use super::*;
use crate::animation::{
    ease::Ease,
    state::{Property, VisualState},
};

fn secs(v: f64) -> Seconds {
    Seconds::new(v).unwrap()
}

fn spec_with_x(x: f64, own_delay: f64) -> AnimationSpec {
    AnimationSpec::new(
        VisualState::new().with(Property::X, x),
        VisualState::new().with(Property::X, 0.0),
        secs(0.5),
        secs(own_delay),
        Ease::EaseOut,
    )
    .unwrap()
}

#[test]
fn empty_input_yields_empty_output() {
    assert!(sequence(&[], secs(0.08), secs(0.3)).is_empty());
}

#[test]
fn single_child_gets_base_delay() {
    let out = sequence(&[spec_with_x(1.0, 0.9)], secs(0.08), secs(0.3));
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].delay(), secs(0.3));
}

#[test]
fn delay_at_index_is_base_plus_index_times_stagger() {
    for n in 0..12 {
        for (stagger, base) in [(0.0, 0.0), (0.08, 0.0), (0.25, 0.1), (1.0, 2.0)] {
            let children: Vec<_> = (0..n).map(|i| spec_with_x(i as f64, 5.0)).collect();
            let out = sequence(&children, secs(stagger), secs(base));
            assert_eq!(out.len(), n);
            for (i, spec) in out.iter().enumerate() {
                let expected = base + (i as f64) * stagger;
                assert!((spec.delay().get() - expected).abs() < 1e-12);
            }
        }
    }
}

#[test]
fn order_is_preserved_for_any_permutation() {
    let xs = [3.0, -1.0, 7.0, 0.5, 2.0];
    let perms = [[0, 1, 2, 3, 4], [4, 3, 2, 1, 0], [2, 0, 4, 1, 3]];
    for perm in perms {
        let children: Vec<_> = perm.iter().map(|&i| spec_with_x(xs[i], 0.0)).collect();
        let out = sequence(&children, secs(0.1), Seconds::ZERO);
        for (a, b) in children.iter().zip(&out) {
            assert_eq!(a.initial(), b.initial());
            assert_eq!(a.duration(), b.duration());
            assert_eq!(a.ease(), b.ease());
        }
    }
}

#[test]
fn feature_grid_delays() {
    let children: Vec<_> = (0..7).map(|_| spec_with_x(0.0, 0.0)).collect();
    let seq = RevealSequencer::new(secs(0.08), Seconds::ZERO);
    let delays: Vec<f64> = seq.apply(&children).iter().map(|s| s.delay().get()).collect();
    let expected = [0.00, 0.08, 0.16, 0.24, 0.32, 0.40, 0.48];
    for (got, want) in delays.iter().zip(expected) {
        assert!((got - want).abs() < 1e-9, "{got} != {want}");
    }
    assert!((seq.delay_at(6).get() - 0.48).abs() < 1e-9);
}

#[test]
fn explicit_delays_must_match_length() {
    let children = [spec_with_x(-20.0, 0.0), spec_with_x(20.0, 0.0)];
    let out = with_delays(&children, &[secs(0.1), secs(0.2)]).unwrap();
    assert_eq!(out[0].delay(), secs(0.1));
    assert_eq!(out[1].delay(), secs(0.2));
    assert!(with_delays(&children, &[secs(0.1)]).is_err());
}
