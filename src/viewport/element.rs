use std::{cell::Cell, rc::Rc};

use crate::foundation::core::{Rect, Size, Vec2};

/// Stable identity of a rendered element within one page.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ElementId(pub u64);

/// A node of the render tree with page-space bounds.
///
/// The render tree owns elements through [`ElementHandle`]; observers only keep a `Weak`
/// reference, so dropping the last handle detaches the element.
#[derive(Debug)]
pub struct Element {
    id: ElementId,
    bounds: Cell<Rect>,
}

/// Owning reference to an attached [`Element`].
pub type ElementHandle = Rc<Element>;

impl Element {
    /// Attach a new element with the given bounds.
    pub fn attach(id: ElementId, bounds: Rect) -> ElementHandle {
        Rc::new(Self {
            id,
            bounds: Cell::new(bounds),
        })
    }

    /// Element id.
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Current page-space bounds.
    pub fn bounds(&self) -> Rect {
        self.bounds.get()
    }

    /// Move or resize the element.
    pub fn set_bounds(&self, bounds: Rect) {
        self.bounds.set(bounds);
    }
}

/// Hands out increasing [`ElementId`]s.
#[derive(Debug, Default)]
pub struct ElementIds {
    next: u64,
}

impl ElementIds {
    /// Next unused id.
    pub fn next_id(&mut self) -> ElementId {
        let id = ElementId(self.next);
        self.next += 1;
        id
    }
}

/// The visible window onto the page.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Visible size in pixels.
    pub size: Size,
    /// Page offset of the top-left visible pixel.
    #[serde(default)]
    pub scroll: Vec2,
}

impl Viewport {
    /// Unscrolled viewport of `width` x `height`.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            scroll: Vec2::ZERO,
        }
    }

    /// Same viewport scrolled vertically to `y`.
    pub fn scrolled_to(self, y: f64) -> Self {
        Self {
            scroll: Vec2::new(self.scroll.x, y),
            ..self
        }
    }

    /// Visible area in page space.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.scroll.to_point(), self.size)
    }
}

/// Fraction of `element` that lies inside `root`, in `[0, 1]`.
///
/// Zero-area elements count as fully visible when their origin lies inside `root`.
pub fn visible_fraction(element: Rect, root: Rect) -> f64 {
    let area = element.area();
    if area <= 0.0 {
        let inside = element.x0 >= root.x0
            && element.x0 <= root.x1
            && element.y0 >= root.y0
            && element.y0 <= root.y1;
        return if inside { 1.0 } else { 0.0 };
    }
    let overlap = element.intersect(root);
    (overlap.area() / area).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/viewport/element.rs"]
mod tests;
