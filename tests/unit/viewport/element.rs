use super::*;

#[test]
fn ids_are_unique_and_increasing() {
    let mut ids = ElementIds::default();
    let a = ids.next_id();
    let b = ids.next_id();
    assert!(a < b);
}

#[test]
fn dropping_the_handle_detaches() {
    let el = Element::attach(ElementId(1), Rect::new(0.0, 0.0, 10.0, 10.0));
    let weak = Rc::downgrade(&el);
    assert!(weak.upgrade().is_some());
    drop(el);
    assert!(weak.upgrade().is_none());
}

#[test]
fn viewport_rect_follows_scroll() {
    let vp = Viewport::new(800.0, 600.0).scrolled_to(1000.0);
    assert_eq!(vp.rect(), Rect::new(0.0, 1000.0, 800.0, 1600.0));
}

#[test]
fn visible_fraction_partial_overlap() {
    let root = Rect::new(0.0, 0.0, 100.0, 100.0);
    let el = Rect::new(0.0, 50.0, 100.0, 150.0);
    assert!((visible_fraction(el, root) - 0.5).abs() < 1e-12);
    assert_eq!(visible_fraction(Rect::new(0.0, 200.0, 10.0, 210.0), root), 0.0);
    assert_eq!(visible_fraction(Rect::new(10.0, 10.0, 20.0, 20.0), root), 1.0);
}

#[test]
fn touching_edges_is_not_visible() {
    let root = Rect::new(0.0, 0.0, 100.0, 100.0);
    let el = Rect::new(0.0, 100.0, 100.0, 200.0);
    assert_eq!(visible_fraction(el, root), 0.0);
}

#[test]
fn zero_area_element_uses_origin() {
    let root = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert_eq!(visible_fraction(Rect::new(5.0, 5.0, 5.0, 5.0), root), 1.0);
    assert_eq!(visible_fraction(Rect::new(5.0, 500.0, 5.0, 500.0), root), 0.0);
}
