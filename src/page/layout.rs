use crate::{
    foundation::core::Rect,
    foundation::error::{RevealError, RevealResult},
    section::composer::{GroupBounds, PlannedUnit, RevealGroup, SectionPlan},
    section::content::ContentItem,
};

/// Metrics used to estimate element bounds.
///
/// Only needs to be good enough for viewport intersection; nothing is drawn from it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Vertical padding above and below each section.
    pub section_padding: f64,
    /// Horizontal padding inside the page.
    pub side_padding: f64,
    /// Space between grid cells and between groups.
    pub gap: f64,
    /// Space between a header and the group below it.
    pub header_gap: f64,
    /// Padding inside each unit.
    pub unit_padding: f64,
    /// Height of one text line.
    pub text_line_height: f64,
    /// Average glyph advance used to wrap text.
    pub char_width: f64,
    /// Height of one code line.
    pub code_line_height: f64,
    /// Title bar and padding around a code block.
    pub code_chrome: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            section_padding: 96.0,
            side_padding: 24.0,
            gap: 16.0,
            header_gap: 56.0,
            unit_padding: 24.0,
            text_line_height: 22.0,
            char_width: 8.0,
            code_line_height: 18.0,
            code_chrome: 48.0,
        }
    }
}

impl LayoutConfig {
    /// Every metric must be finite and non-negative; glyph and line sizes positive.
    pub fn validate(&self) -> RevealResult<()> {
        for (name, value) in [
            ("section_padding", self.section_padding),
            ("side_padding", self.side_padding),
            ("gap", self.gap),
            ("header_gap", self.header_gap),
            ("unit_padding", self.unit_padding),
            ("text_line_height", self.text_line_height),
            ("char_width", self.char_width),
            ("code_line_height", self.code_line_height),
            ("code_chrome", self.code_chrome),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(RevealError::validation(format!(
                    "layout.{name} must be finite and >= 0"
                )));
            }
        }
        if self.char_width <= 0.0 {
            return Err(RevealError::validation("layout.char_width must be > 0"));
        }
        Ok(())
    }
}

/// Bounds of every section on a page.
#[derive(Clone, Debug, PartialEq)]
pub struct PageLayout {
    /// Per section, per group bounds.
    pub sections: Vec<Vec<GroupBounds>>,
    /// Total page height.
    pub height: f64,
}

/// Stack `plans` vertically on a page `width` pixels wide.
pub fn layout_page(plans: &[SectionPlan], width: f64, cfg: &LayoutConfig) -> PageLayout {
    let mut y = 0.0;
    let mut sections = Vec::with_capacity(plans.len());
    for plan in plans {
        y += cfg.section_padding;
        let mut groups = Vec::with_capacity(plan.groups.len());
        for (idx, group) in plan.groups.iter().enumerate() {
            if idx > 0 {
                y += cfg.header_gap;
            }
            let bounds = layout_group(group, y, width, cfg);
            y = bounds.container.y1;
            groups.push(bounds);
        }
        y += cfg.section_padding;
        sections.push(groups);
    }
    PageLayout {
        sections,
        height: y,
    }
}

fn layout_group(group: &RevealGroup, top: f64, width: f64, cfg: &LayoutConfig) -> GroupBounds {
    let columns = group.columns.max(1);
    let x0 = cfg.side_padding;
    let inner = (width - 2.0 * cfg.side_padding).max(0.0);
    let col_w = ((inner - cfg.gap * f64::from(columns - 1)) / f64::from(columns)).max(0.0);

    let mut units = Vec::with_capacity(group.units.len());
    let mut col = 0u32;
    let mut row_top = top;
    let mut row_height = 0.0f64;
    for unit in &group.units {
        let span = unit.col_span.clamp(1, columns);
        if span > columns - col {
            row_top += row_height + cfg.gap;
            row_height = 0.0;
            col = 0;
        }
        let w = col_w * f64::from(span) + cfg.gap * f64::from(span - 1);
        let h = unit_height(unit, w, cfg);
        let x = x0 + f64::from(col) * (col_w + cfg.gap);
        units.push(Rect::new(x, row_top, x + w, row_top + h));
        row_height = row_height.max(h);
        col += span;
    }

    let container = units
        .iter()
        .copied()
        .reduce(|a, b| a.union(b))
        .unwrap_or_else(|| Rect::new(x0, top, x0 + inner, top));
    GroupBounds { container, units }
}

fn unit_height(unit: &PlannedUnit, width: f64, cfg: &LayoutConfig) -> f64 {
    let text_w = (width - 2.0 * cfg.unit_padding).max(cfg.char_width);
    let chars_per_line = (text_w / cfg.char_width).floor().max(1.0);
    let content: f64 = unit
        .content
        .iter()
        .map(|item| match item {
            ContentItem::Text(text) => {
                let lines = (text.chars().count() as f64 / chars_per_line).ceil().max(1.0);
                lines * cfg.text_line_height
            }
            ContentItem::Icon(svg) => svg.size().height + cfg.gap,
            ContentItem::Code(snippet) => {
                cfg.code_chrome + snippet.line_count() as f64 * cfg.code_line_height
            }
        })
        .sum();
    content + 2.0 * cfg.unit_padding
}

#[cfg(test)]
#[path = "../../tests/unit/page/layout.rs"]
mod tests;
