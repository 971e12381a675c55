use std::sync::Arc;

use crate::{
    foundation::core::Size,
    foundation::error::{RevealError, RevealResult},
};

/// Parsed SVG markup for an icon or logo mark.
///
/// Markup is parsed once at construction so malformed SVG is rejected before mounting; the
/// parsed tree provides the intrinsic size used for layout.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SvgMarkup {
    markup: Arc<str>,
    size: Size,
}

impl SvgMarkup {
    /// Parse `markup` with `usvg`.
    pub fn parse(markup: impl Into<String>) -> RevealResult<Self> {
        let markup: String = markup.into();
        let opts = usvg::Options::default();
        let tree = usvg::Tree::from_str(&markup, &opts)
            .map_err(|e| RevealError::content(format!("parse svg markup: {e}")))?;
        let size = Size::new(
            f64::from(tree.size().width()),
            f64::from(tree.size().height()),
        );
        Ok(Self {
            markup: markup.into(),
            size,
        })
    }

    /// Raw markup as supplied.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Intrinsic size from the SVG's viewport.
    pub fn size(&self) -> Size {
        self.size
    }
}

impl PartialEq for SvgMarkup {
    fn eq(&self, other: &Self) -> bool {
        self.markup == other.markup
    }
}

impl TryFrom<String> for SvgMarkup {
    type Error = RevealError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<SvgMarkup> for String {
    fn from(value: SvgMarkup) -> Self {
        value.markup.to_string()
    }
}

/// Embedded code shown through the external code display.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CodeSnippet {
    /// Source text, shown verbatim.
    pub code: String,
    /// Display name shown above the code.
    pub filename: String,
    /// Whether the display should number lines.
    #[serde(default = "default_show_line_numbers")]
    pub show_line_numbers: bool,
}

fn default_show_line_numbers() -> bool {
    true
}

impl CodeSnippet {
    /// Snippet with line numbers enabled.
    pub fn new(code: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            filename: filename.into(),
            show_line_numbers: true,
        }
    }

    /// Builder-style toggle for line numbers.
    pub fn line_numbers(mut self, show: bool) -> Self {
        self.show_line_numbers = show;
        self
    }

    /// Number of lines the display will show.
    pub fn line_count(&self) -> usize {
        self.code.lines().count().max(1)
    }
}

/// One piece of static content inside a visual unit. Opaque to the reveal system.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentItem {
    /// Plain text.
    Text(String),
    /// Icon or logo markup.
    Icon(SvgMarkup),
    /// Embedded code.
    Code(CodeSnippet),
}

#[cfg(test)]
#[path = "../../tests/unit/section/content.rs"]
mod tests;
