use crate::{
    foundation::error::{RevealError, RevealResult},
    section::composer::{PlannedUnit, RevealGroup, SectionComposer, SectionPlan, TriggerScope},
    section::config::MotionConfig,
    section::content::ContentItem,
    viewport::trigger::ObserveOptions,
};

/// Badge, title and description shown above a section's body.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectionHeader {
    /// Short label above the title.
    #[serde(default)]
    pub badge: Option<String>,
    /// Heading text.
    pub title: String,
    /// Supporting paragraph.
    #[serde(default)]
    pub description: Option<String>,
}

impl SectionHeader {
    /// Header with just a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            badge: None,
            title: title.into(),
            description: None,
        }
    }

    /// Builder-style badge.
    pub fn badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    /// Builder-style description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Single-unit group that fades the header up on its own trigger.
    pub(crate) fn group(&self, motion: &MotionConfig) -> RevealResult<RevealGroup> {
        if self.title.trim().is_empty() {
            return Err(RevealError::validation("section header title must be non-empty"));
        }
        let content = self
            .badge
            .iter()
            .chain(std::iter::once(&self.title))
            .chain(self.description.iter())
            .map(|text| ContentItem::Text(text.clone()))
            .collect();
        Ok(RevealGroup {
            label: "header".to_string(),
            scope: TriggerScope::PerItem,
            observe: ObserveOptions {
                amount: motion.amount,
                ..ObserveOptions::default()
            },
            columns: 1,
            units: vec![PlannedUnit {
                label: self.title.clone(),
                content,
                spec: motion.fade_up()?,
                col_span: 1,
            }],
        })
    }
}

impl SectionComposer for SectionHeader {
    fn plan(&self, motion: &MotionConfig) -> RevealResult<SectionPlan> {
        Ok(SectionPlan {
            name: self.title.clone(),
            groups: vec![self.group(motion)?],
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/section/header.rs"]
mod tests;
