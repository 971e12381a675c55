use crate::{
    animation::stagger::RevealSequencer,
    foundation::core::{Edges, Seconds},
    foundation::error::{RevealError, RevealResult},
    section::composer::{PlannedUnit, RevealGroup, SectionComposer, SectionPlan, TriggerScope},
    section::config::MotionConfig,
    section::content::{CodeSnippet, ContentItem, SvgMarkup},
    section::header::SectionHeader,
    viewport::trigger::ObserveOptions,
};

/// One card of a [`FeatureBento`] grid.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FeatureCard {
    /// Card heading.
    pub title: String,
    /// Short description under the heading.
    pub description: String,
    /// Optional icon.
    #[serde(default)]
    pub icon: Option<SvgMarkup>,
    /// Optional code sample. Grid cards never show line numbers.
    #[serde(default)]
    pub snippet: Option<CodeSnippet>,
    /// Columns this card spans.
    #[serde(default = "default_col_span")]
    pub col_span: u32,
}

fn default_col_span() -> u32 {
    1
}

impl FeatureCard {
    /// Card with a title and description only.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            icon: None,
            snippet: None,
            col_span: 1,
        }
    }

    /// Builder-style icon.
    pub fn icon(mut self, icon: SvgMarkup) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Builder-style code sample.
    pub fn snippet(mut self, snippet: CodeSnippet) -> Self {
        self.snippet = Some(snippet);
        self
    }

    /// Builder-style column span.
    pub fn col_span(mut self, span: u32) -> Self {
        self.col_span = span;
        self
    }

    fn content(&self) -> Vec<ContentItem> {
        let mut content = Vec::with_capacity(4);
        if let Some(icon) = &self.icon {
            content.push(ContentItem::Icon(icon.clone()));
        }
        content.push(ContentItem::Text(self.title.clone()));
        content.push(ContentItem::Text(self.description.clone()));
        if let Some(snippet) = &self.snippet {
            content.push(ContentItem::Code(snippet.clone().line_numbers(false)));
        }
        content
    }
}

/// Grid of feature cards revealed one after another.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FeatureBento {
    /// Optional header above the grid.
    #[serde(default)]
    pub header: Option<SectionHeader>,
    /// Cards in reveal order.
    pub features: Vec<FeatureCard>,
    /// Interval between successive cards.
    #[serde(default = "default_stagger")]
    pub stagger: Seconds,
    /// Delay of the first card.
    #[serde(default)]
    pub base_delay: Seconds,
    /// Root margin for the grid trigger.
    #[serde(default = "default_margin")]
    pub margin: Edges,
    /// Trigger placement; the whole grid by default.
    #[serde(default = "default_scope")]
    pub scope: TriggerScope,
    /// Grid columns.
    #[serde(default = "default_columns")]
    pub columns: u32,
}

const DEFAULT_STAGGER: Seconds = Seconds::from_literal(0.08);

fn default_stagger() -> Seconds {
    DEFAULT_STAGGER
}

fn default_margin() -> Edges {
    Edges::uniform(-50.0)
}

fn default_scope() -> TriggerScope {
    TriggerScope::Container
}

fn default_columns() -> u32 {
    2
}

impl FeatureBento {
    /// Grid with default stagger, margin and two columns.
    pub fn new(features: Vec<FeatureCard>) -> Self {
        Self {
            header: None,
            features,
            stagger: default_stagger(),
            base_delay: Seconds::ZERO,
            margin: default_margin(),
            scope: default_scope(),
            columns: default_columns(),
        }
    }

    fn validate(&self) -> RevealResult<()> {
        self.margin.validate()?;
        if self.columns == 0 {
            return Err(RevealError::validation("bento columns must be > 0"));
        }
        for card in &self.features {
            if card.col_span == 0 || card.col_span > self.columns {
                return Err(RevealError::validation(format!(
                    "card '{}' col_span {} must lie in 1..={}",
                    card.title, card.col_span, self.columns
                )));
            }
        }
        Ok(())
    }
}

impl SectionComposer for FeatureBento {
    #[tracing::instrument(skip_all, fields(cards = self.features.len()))]
    fn plan(&self, motion: &MotionConfig) -> RevealResult<SectionPlan> {
        self.validate()?;

        let base = motion.fade_up()?;
        let specs = RevealSequencer::new(self.stagger, self.base_delay)
            .apply(&vec![base; self.features.len()]);
        let units = self
            .features
            .iter()
            .zip(specs)
            .map(|(card, spec)| PlannedUnit {
                label: card.title.clone(),
                content: card.content(),
                spec,
                col_span: card.col_span,
            })
            .collect();

        let mut groups = Vec::new();
        if let Some(header) = &self.header {
            groups.push(header.group(motion)?);
        }
        groups.push(RevealGroup {
            label: "features".to_string(),
            scope: self.scope,
            observe: ObserveOptions {
                margin: self.margin,
                amount: motion.amount,
            },
            columns: self.columns,
            units,
        });

        Ok(SectionPlan {
            name: self
                .header
                .as_ref()
                .map_or_else(|| "feature-bento".to_string(), |h| h.title.clone()),
            groups,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/section/bento.rs"]
mod tests;
