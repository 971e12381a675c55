use crate::{
    foundation::error::{RevealError, RevealResult},
    section::composer::{PlannedUnit, RevealGroup, SectionComposer, SectionPlan, TriggerScope},
    section::config::MotionConfig,
    section::content::{ContentItem, SvgMarkup},
    viewport::trigger::ObserveOptions,
};

/// Default logo mark: rounded square with a hub and four satellite nodes.
pub const DEFAULT_LOGO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="32" height="32" viewBox="0 0 32 32" fill="none">
<rect x="2" y="2" width="28" height="28" rx="6" fill="#8b5cf6"/>
<circle cx="16" cy="16" r="3" fill="#ffffff"/>
<circle cx="9" cy="10" r="2" fill="#ffffff" fill-opacity="0.8"/>
<circle cx="23" cy="10" r="2" fill="#ffffff" fill-opacity="0.8"/>
<circle cx="9" cy="22" r="2" fill="#ffffff" fill-opacity="0.8"/>
<circle cx="23" cy="22" r="2" fill="#ffffff" fill-opacity="0.8"/>
<path d="M12 12 L14 14 M20 12 L18 14 M12 20 L14 18 M20 20 L18 18" stroke="#ffffff" stroke-width="1.2" stroke-opacity="0.6"/>
</svg>"##;

/// Static logo mark that fades and scales in.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LogoPanel {
    /// Logo markup; [`DEFAULT_LOGO_SVG`] when absent.
    #[serde(default)]
    pub mark: Option<SvgMarkup>,
    /// Optional wordmark next to the logo.
    #[serde(default)]
    pub label: Option<String>,
    /// Starting scale of the reveal.
    #[serde(default = "default_scale_from")]
    pub scale_from: f64,
}

fn default_scale_from() -> f64 {
    0.9
}

impl LogoPanel {
    /// Panel around `mark`.
    pub fn new(mark: SvgMarkup) -> Self {
        Self {
            mark: Some(mark),
            ..Self::default()
        }
    }

    /// Markup that will be shown.
    pub fn resolved_mark(&self) -> RevealResult<SvgMarkup> {
        match &self.mark {
            Some(mark) => Ok(mark.clone()),
            None => SvgMarkup::parse(DEFAULT_LOGO_SVG),
        }
    }
}

impl Default for LogoPanel {
    fn default() -> Self {
        Self {
            mark: None,
            label: None,
            scale_from: default_scale_from(),
        }
    }
}

impl SectionComposer for LogoPanel {
    fn plan(&self, motion: &MotionConfig) -> RevealResult<SectionPlan> {
        if !self.scale_from.is_finite() || self.scale_from < 0.0 {
            return Err(RevealError::validation(
                "logo scale_from must be finite and >= 0",
            ));
        }
        let mut content = vec![ContentItem::Icon(self.resolved_mark()?)];
        if let Some(label) = &self.label {
            content.push(ContentItem::Text(label.clone()));
        }
        Ok(SectionPlan {
            name: "logo".to_string(),
            groups: vec![RevealGroup {
                label: "logo".to_string(),
                scope: TriggerScope::PerItem,
                observe: ObserveOptions {
                    amount: motion.amount,
                    ..ObserveOptions::default()
                },
                columns: 1,
                units: vec![PlannedUnit {
                    label: self.label.clone().unwrap_or_else(|| "logo".to_string()),
                    content,
                    spec: motion.fade_scale(self.scale_from)?,
                    col_span: 1,
                }],
            }],
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/section/logo.rs"]
mod tests;
