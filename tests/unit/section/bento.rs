use super::*;
use crate::animation::state::Property;

fn cards(n: usize) -> Vec<FeatureCard> {
    (0..n)
        .map(|i| {
            FeatureCard::new(format!("Feature {i}"), "does things")
                .snippet(CodeSnippet::new("x := 1", "x.go"))
        })
        .collect()
}

#[test]
fn seven_cards_get_stagger_delays() {
    let plan = FeatureBento::new(cards(7))
        .plan(&MotionConfig::default())
        .unwrap();
    assert_eq!(plan.groups.len(), 1);
    let group = &plan.groups[0];
    assert_eq!(group.scope, TriggerScope::Container);
    assert_eq!(group.observe.margin, Edges::uniform(-50.0));

    let expected = [0.00, 0.08, 0.16, 0.24, 0.32, 0.40, 0.48];
    for (unit, want) in group.units.iter().zip(expected) {
        assert!((unit.spec.delay().get() - want).abs() < 1e-9);
        assert_eq!(unit.spec.duration().get(), 0.5);
        assert_eq!(unit.spec.initial().get(Property::Y), Some(20.0));
    }
}

#[test]
fn card_snippets_drop_line_numbers() {
    let plan = FeatureBento::new(cards(1))
        .plan(&MotionConfig::default())
        .unwrap();
    let content = &plan.groups[0].units[0].content;
    match content.last() {
        Some(ContentItem::Code(snippet)) => assert!(!snippet.show_line_numbers),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn header_group_comes_first() {
    let mut bento = FeatureBento::new(cards(2));
    bento.header = Some(SectionHeader::new("Everything you need").badge("Features"));
    let plan = bento.plan(&MotionConfig::default()).unwrap();
    assert_eq!(plan.name, "Everything you need");
    assert_eq!(plan.groups[0].label, "header");
    assert_eq!(plan.groups[1].units.len(), 2);
}

#[test]
fn col_span_is_validated() {
    let mut bento = FeatureBento::new(cards(2));
    bento.features[1].col_span = 3;
    assert!(bento.plan(&MotionConfig::default()).is_err());
    bento.features[1].col_span = 2;
    assert!(bento.plan(&MotionConfig::default()).is_ok());
}

#[test]
fn empty_grid_plans_no_units() {
    let plan = FeatureBento::new(Vec::new())
        .plan(&MotionConfig::default())
        .unwrap();
    assert_eq!(plan.unit_count(), 0);
}

#[test]
fn json_defaults() {
    let bento: FeatureBento =
        serde_json::from_str(r#"{"features":[{"title":"a","description":"b"}]}"#).unwrap();
    assert_eq!(bento.stagger.get(), 0.08);
    assert_eq!(bento.columns, 2);
    assert_eq!(bento.scope, TriggerScope::Container);
    assert_eq!(bento.features[0].col_span, 1);
}
