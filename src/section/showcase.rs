use crate::{
    animation::stagger::with_delays,
    foundation::core::{Edges, Seconds},
    foundation::error::{RevealError, RevealResult},
    section::composer::{PlannedUnit, RevealGroup, SectionComposer, SectionPlan, TriggerScope},
    section::config::MotionConfig,
    section::content::{CodeSnippet, ContentItem},
    section::header::SectionHeader,
    viewport::trigger::ObserveOptions,
};

/// One side of a [`CodeShowcase`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShowcasePanel {
    /// Caption above the code.
    pub label: String,
    /// Code shown in the panel.
    pub snippet: CodeSnippet,
}

/// Two code panels side by side; the left slides in from the left, the right from the right.
///
/// Each panel has its own trigger and an explicit delay, so when both enter together the left
/// one moves first, and when they enter separately each animates on its own.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CodeShowcase {
    /// Optional header above the panels.
    #[serde(default)]
    pub header: Option<SectionHeader>,
    /// Left panel.
    pub left: ShowcasePanel,
    /// Right panel.
    pub right: ShowcasePanel,
    /// Explicit delays for `[left, right]`.
    #[serde(default = "default_panel_delays")]
    pub delays: [Seconds; 2],
    /// Root margin for the panel triggers.
    #[serde(default)]
    pub margin: Edges,
}

const DEFAULT_PANEL_DELAYS: [Seconds; 2] =
    [Seconds::from_literal(0.1), Seconds::from_literal(0.2)];

fn default_panel_delays() -> [Seconds; 2] {
    DEFAULT_PANEL_DELAYS
}

impl CodeShowcase {
    /// Showcase with default delays and no header.
    pub fn new(left: ShowcasePanel, right: ShowcasePanel) -> Self {
        Self {
            header: None,
            left,
            right,
            delays: default_panel_delays(),
            margin: Edges::default(),
        }
    }
}

impl SectionComposer for CodeShowcase {
    #[tracing::instrument(skip_all, fields(left = %self.left.label, right = %self.right.label))]
    fn plan(&self, motion: &MotionConfig) -> RevealResult<SectionPlan> {
        self.margin.validate()?;
        for panel in [&self.left, &self.right] {
            if panel.snippet.filename.trim().is_empty() {
                return Err(RevealError::validation(format!(
                    "showcase panel '{}' needs a filename",
                    panel.label
                )));
            }
        }

        let specs = with_delays(
            &[motion.fade_sideways(-1.0)?, motion.fade_sideways(1.0)?],
            &self.delays,
        )?;
        let units = [&self.left, &self.right]
            .into_iter()
            .zip(specs)
            .map(|(panel, spec)| PlannedUnit {
                label: panel.label.clone(),
                content: vec![
                    ContentItem::Text(panel.label.clone()),
                    ContentItem::Code(panel.snippet.clone()),
                ],
                spec,
                col_span: 1,
            })
            .collect();

        let mut groups = Vec::new();
        if let Some(header) = &self.header {
            groups.push(header.group(motion)?);
        }
        groups.push(RevealGroup {
            label: "panels".to_string(),
            scope: TriggerScope::PerItem,
            observe: ObserveOptions {
                margin: self.margin,
                amount: motion.amount,
            },
            columns: 2,
            units,
        });

        Ok(SectionPlan {
            name: self
                .header
                .as_ref()
                .map_or_else(|| "code-showcase".to_string(), |h| h.title.clone()),
            groups,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/section/showcase.rs"]
mod tests;
