use super::*;

const ALL: [Ease; 10] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::EaseIn,
    Ease::EaseOut,
    Ease::EaseInOut,
];

#[test]
fn endpoints_are_fixed() {
    for ease in ALL {
        assert!(ease.apply(0.0).abs() < 1e-9, "{ease:?} at 0");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-9, "{ease:?} at 1");
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::Linear.apply(-3.0), 0.0);
    assert_eq!(Ease::EaseOut.apply(7.0), 1.0);
}

#[test]
fn ease_out_leads_linear() {
    for t in [0.1, 0.3, 0.5, 0.7, 0.9] {
        assert!(Ease::EaseOut.apply(t) > t);
        assert!(Ease::EaseIn.apply(t) < t);
    }
}

#[test]
fn curves_are_monotonic() {
    for ease in ALL {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease.apply(f64::from(i) / 100.0);
            assert!(v + 1e-9 >= prev, "{ease:?} decreased at step {i}");
            prev = v;
        }
    }
}

#[test]
fn linear_bezier_matches_identity() {
    let ease = Ease::CubicBezier([0.25, 0.25, 0.75, 0.75]);
    for t in [0.1, 0.33, 0.5, 0.9] {
        assert!((ease.apply(t) - t).abs() < 1e-5);
    }
}

#[test]
fn parse_accepts_kebab_and_camel_case() {
    assert_eq!(Ease::parse("easeOut").unwrap(), Ease::EaseOut);
    assert_eq!(Ease::parse("ease-in-out").unwrap(), Ease::EaseInOut);
    assert_eq!("in-out-cubic".parse::<Ease>().unwrap(), Ease::InOutCubic);
    assert!(Ease::parse("wobble").is_err());
}

#[test]
fn bezier_validation() {
    assert!(Ease::CubicBezier([0.0, 0.0, 0.58, 1.0]).validate().is_ok());
    assert!(Ease::CubicBezier([1.5, 0.0, 0.58, 1.0]).validate().is_err());
    assert!(Ease::CubicBezier([0.2, f64::NAN, 0.58, 1.0]).validate().is_err());
}

#[test]
fn serde_names_are_kebab_case() {
    assert_eq!(serde_json::to_string(&Ease::EaseOut).unwrap(), "\"ease-out\"");
    let e: Ease = serde_json::from_str(r#"{"cubic-bezier":[0.1,0.2,0.3,0.4]}"#).unwrap();
    assert_eq!(e, Ease::CubicBezier([0.1, 0.2, 0.3, 0.4]));
}

#[test]
fn deserializes_every_name_parse_accepts() {
    for (json, expected) in [
        (r#""easeOut""#, Ease::EaseOut),
        (r#""ease-in-out""#, Ease::EaseInOut),
        (r#""inOutCubic""#, Ease::InOutCubic),
        (r#""linear""#, Ease::Linear),
    ] {
        assert_eq!(serde_json::from_str::<Ease>(json).unwrap(), expected, "{json}");
    }
    assert!(serde_json::from_str::<Ease>(r#""bouncy""#).is_err());
    assert!(serde_json::from_str::<Ease>(r#"{"cubic-bezier":[1.5,0.0,0.5,1.0]}"#).is_err());
}
